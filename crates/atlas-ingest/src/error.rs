//! Error types for fetching raw country records.

use thiserror::Error;

/// Errors that can occur while obtaining raw country records.
///
/// None of these reach the normalization pipeline: [`crate::fetch_or_empty`]
/// turns every failure into an empty record sequence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// Failed to parse JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The body parsed but was not a JSON array.
    #[error("expected a JSON array of countries, found {0}")]
    UnexpectedShape(&'static str),

    /// I/O error while reading a local source.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = IngestError::Status { status: 500 };
        assert_eq!(err.to_string(), "unexpected HTTP status 500");
        let err = IngestError::UnexpectedShape("string");
        assert!(err.to_string().contains("found string"));
    }
}
