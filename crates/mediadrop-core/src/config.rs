//! Configuration module
//!
//! Env-driven configuration for the API server. Binaries call
//! `dotenvy::dotenv().ok()` before `Config::from_env()` so a local `.env`
//! file can supply values during development.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
// 100 MB covers phone videos; larger uploads are rejected at the body-limit layer.
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 100 * 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Directory uploaded files are written to and served from.
    pub upload_dir: String,
    /// Public origin of the deployment, e.g. "http://localhost:3000".
    /// Used for share links and for building file URLs.
    pub public_base_url: String,
    pub cors_origins: Vec<String>,
    pub session_ttl_hours: i64,
    pub max_upload_size_bytes: usize,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let server_port = parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?;
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", server_port))
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            server_port,
            database_url,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            db_timeout_seconds: parse_env("DB_TIMEOUT_SECONDS", DEFAULT_CONNECTION_TIMEOUT_SECS)?,
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".to_string()),
            public_base_url,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            session_ttl_hours: parse_env("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?,
            max_upload_size_bytes: parse_env(
                "MAX_UPLOAD_SIZE_BYTES",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            )?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// URL prefix files are served under, e.g. "http://host/uploads".
    pub fn uploads_base_url(&self) -> String {
        format!("{}/uploads", self.public_base_url)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: 3000,
            database_url: "postgres://localhost/mediadrop".to_string(),
            db_max_connections: 5,
            db_timeout_seconds: 30,
            upload_dir: "public/uploads".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
            cors_origins: vec![],
            session_ttl_hours: 24,
            max_upload_size_bytes: 1024,
            environment: "development".to_string(),
        }
    }

    #[test]
    fn test_is_production() {
        let mut config = test_config();
        assert!(!config.is_production());
        config.environment = "production".to_string();
        assert!(config.is_production());
        config.environment = "PROD".to_string();
        assert!(config.is_production());
    }

    #[test]
    fn test_uploads_base_url() {
        let config = test_config();
        assert_eq!(config.uploads_base_url(), "http://localhost:3000/uploads");
    }
}
