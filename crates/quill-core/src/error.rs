//! Unified error types for Quill

use thiserror::Error;

/// Unified error type for all Quill operations
#[derive(Error, Debug)]
pub enum QuillError {
    // Upstream LLM errors
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error: {0}")]
    Api(String),

    // Credential/token errors
    #[error("Authentication error: {0}")]
    Auth(String),

    // Publish errors
    #[error("Identity resolution failed: {0}")]
    Identity(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

impl QuillError {
    /// Whether this error signals upstream rate-limit exhaustion
    /// (as opposed to any other executor-side failure).
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, QuillError::RateLimited(_))
    }
}

/// Result type alias using QuillError
pub type Result<T> = std::result::Result<T, QuillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_classification() {
        assert!(QuillError::RateLimited("quota".to_string()).is_rate_limit());
        assert!(!QuillError::Api("boom".to_string()).is_rate_limit());
        assert!(!QuillError::Other("429 mentioned in text".to_string()).is_rate_limit());
    }

    #[test]
    fn test_http_status_display() {
        let err = QuillError::HttpStatus {
            status: 422,
            body: "bad payload".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 422: bad payload");
    }
}
