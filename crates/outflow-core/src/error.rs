//! Publish error types.

use thiserror::Error;

/// Errors produced while publishing release outputs.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The release result could not be deserialized.
    #[error("invalid release result: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error while writing to the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = PublishError::from(err);
        assert!(err.to_string().starts_with("invalid release result"));
    }

    #[test]
    fn test_io_error_display() {
        let err = PublishError::from(std::io::Error::other("sink closed"));
        assert_eq!(err.to_string(), "IO error: sink closed");
    }
}
