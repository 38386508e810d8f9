/// Format a byte count as megabytes with two decimals, matching the
/// upload view's size display.
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_file_size_megabytes() {
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(1536 * 1024), "1.50 MB");
    }

    #[test]
    fn format_file_size_small_files() {
        assert_eq!(format_file_size(0), "0.00 MB");
        assert_eq!(format_file_size(10 * 1024), "0.01 MB");
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
