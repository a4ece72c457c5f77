use std::path::PathBuf;

use folio_core::upload::DEFAULT_ALLOWED_EXTENSIONS;

/// Secret used when `SECRET_KEY` is not set. Only suitable for local use.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Default maximum request body size: 16 MiB.
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Application secret (default: [`DEV_SECRET_KEY`]).
    pub secret_key: String,
    /// SQLite connection string (default: `sqlite://folio.db`).
    pub database_url: String,
    /// Public static root served under `/static`.
    pub static_dir: PathBuf,
    /// Directory uploaded images are written to.
    pub upload_dir: PathBuf,
    /// Maximum accepted request body, in bytes.
    pub max_content_length: usize,
    /// Lower-cased image extensions accepted for upload.
    pub allowed_extensions: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `3000`                                |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `SECRET_KEY`           | `dev-secret-key-change-in-production` |
    /// | `DATABASE_URL`         | `sqlite://folio.db`                   |
    /// | `STATIC_DIR`           | `static`                              |
    /// | `UPLOAD_DIR`           | `static/uploads`                      |
    /// | `MAX_CONTENT_LENGTH`   | `16777216`                            |
    /// | `ALLOWED_EXTENSIONS`   | `png,jpg,jpeg,gif,webp`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let secret_key = std::env::var("SECRET_KEY").unwrap_or_else(|_| DEV_SECRET_KEY.into());

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://folio.db".into());

        let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("uploads"));

        let max_content_length: usize = std::env::var("MAX_CONTENT_LENGTH")
            .map(|v| v.parse().expect("MAX_CONTENT_LENGTH must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_CONTENT_LENGTH);

        let allowed_extensions = std::env::var("ALLOWED_EXTENSIONS")
            .map(|v| split_list(&v.to_lowercase()))
            .unwrap_or_else(|_| {
                DEFAULT_ALLOWED_EXTENSIONS
                    .iter()
                    .map(|e| e.to_string())
                    .collect()
            });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            secret_key,
            database_url,
            static_dir,
            upload_dir,
            max_content_length,
            allowed_extensions,
        }
    }

    /// Whether the built-in development secret is in use.
    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

/// Split a comma-separated list, trimming entries and dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
