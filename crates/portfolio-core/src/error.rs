//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio core operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Transport-level HTTP failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The record store answered with a non-success status
    #[error("Store returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, if any
        message: String,
    },

    /// A stored document could not be decoded into a record
    #[error("Decode error: {0}")]
    Decode(String),

    /// Requested record does not exist
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Configuration file or override is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Capability probe failed to read an environment signal
    #[error("Probe error: {0}")]
    Probe(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::NotFound("proof-42".to_string());
        assert_eq!(format!("{}", err), "Record not found: proof-42");

        let err = PortfolioError::Status {
            status: 403,
            message: "permission denied".to_string(),
        };
        assert_eq!(format!("{}", err), "Store returned 403: permission denied");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
