//! Filename helpers: extension splitting and alt-text derivation.
//!
//! Uploaded files keep only their extension; the stem is replaced with a
//! generated UUID. Alt text defaults to a cleaned-up version of the stem.

/// Fallback alt text when the filename yields an empty stem (e.g. ".png").
pub const DEFAULT_ALT_TEXT: &str = "Media file";

/// Split a filename into (stem, extension).
///
/// The stem is everything before the first dot; the extension is everything
/// after the last dot. A filename without a dot has an empty extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let stem = filename.split('.').next().unwrap_or("");
    let extension = match filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    };
    (stem, extension)
}

/// Derive display alt text from a filename: strip the extension, replace
/// underscores and hyphens with spaces, fall back to [`DEFAULT_ALT_TEXT`]
/// when the result is empty.
pub fn derive_alt_text(filename: &str) -> String {
    let (stem, _) = split_extension(filename);
    let alt: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    if alt.is_empty() {
        DEFAULT_ALT_TEXT.to_string()
    } else {
        alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_extension_simple() {
        assert_eq!(split_extension("photo.png"), ("photo", "png"));
        assert_eq!(split_extension("clip.MKV"), ("clip", "MKV"));
    }

    #[test]
    fn split_extension_multiple_dots() {
        // Stem stops at the first dot, extension starts at the last.
        assert_eq!(split_extension("archive.tar.gz"), ("archive", "gz"));
    }

    #[test]
    fn split_extension_edge_cases() {
        assert_eq!(split_extension(".png"), ("", "png"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn derive_alt_text_replaces_separators() {
        assert_eq!(derive_alt_text("my_cool-photo.png"), "my cool photo");
    }

    #[test]
    fn derive_alt_text_empty_stem_falls_back() {
        assert_eq!(derive_alt_text(".png"), DEFAULT_ALT_TEXT);
        assert_eq!(derive_alt_text(""), DEFAULT_ALT_TEXT);
    }

    #[test]
    fn derive_alt_text_plain_name() {
        assert_eq!(derive_alt_text("sunset.jpg"), "sunset");
    }
}
