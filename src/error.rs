//! Error types for the tululu-downloader application.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Catalog errors
    #[error("HTTP {status} in {operation}()")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },

    #[error("Failed to parse catalog page: {0}")]
    Parse(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Giving up on {url} after {attempts} attempts")]
    RetriesExhausted { url: String, attempts: u32 },

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the per-book retry loop may attempt this failure again.
    ///
    /// Transport failures and bad status codes are transient; a page whose
    /// markup does not parse will not change between attempts, so parse
    /// faults are permanent.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Status { .. } | Error::Download(_) | Error::Io(_) | Error::Http(_)
        )
    }
}

/// Exit codes for the abort paths of the crawler.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const HTTP_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_download_errors_are_retryable() {
        let status = Error::Status {
            operation: "download_txt",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(status.is_retryable());
        assert!(Error::Download("stream error".into()).is_retryable());
    }

    #[test]
    fn parse_and_config_errors_are_permanent() {
        assert!(!Error::Parse("unexpected heading shape".into()).is_retryable());
        assert!(!Error::ConfigValidation {
            field: "start_page".into(),
            message: "bad".into(),
        }
        .is_retryable());
        assert!(!Error::InvalidFilename("\0".into()).is_retryable());
    }
}
