//! Error types for callsight.

use thiserror::Error;

/// Result type alias using callsight's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for callsight operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No transcript stored for the given media code
    #[error("Transcript not found for media code: {0}")]
    TranscriptNotFound(String),

    /// Stage outside the recognized set; configuration error, never retried
    #[error("Invalid stage: {0}; stage must be 'transcript' or 'analysis'")]
    InvalidStage(String),

    /// Remote completion service failed (network, timeout, rate limit, bad payload)
    #[error("Completion error: {0}")]
    Completion(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transcript_not_found() {
        let err = Error::TranscriptNotFound("a434b6db".to_string());
        assert_eq!(
            err.to_string(),
            "Transcript not found for media code: a434b6db"
        );
    }

    #[test]
    fn test_error_display_invalid_stage() {
        let err = Error::InvalidStage("upload".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid stage: upload; stage must be 'transcript' or 'analysis'"
        );
    }

    #[test]
    fn test_error_display_completion() {
        let err = Error::Completion("rate limited".to_string());
        assert_eq!(err.to_string(), "Completion error: rate limited");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }
}
