//! Error types for engine API calls.

use thiserror::Error;

/// Result alias used across the client.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for VertexBPMN client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid bearer token: {reason}")]
    InvalidToken { reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Engine rejected the request: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Failed to read model file '{path}': {source}")]
    ModelFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode engine response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid bearer token error.
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken { reason: reason.into() }
    }

    /// Create an API rejection error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error for a resource kind and identifier.
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create a model file read error.
    pub fn model_file(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ModelFile {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a 404/not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Api { status: 404, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_creation() {
        let err = ClientError::invalid_base_url("ftp://nope", "unsupported scheme");
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));

        let err = ClientError::api(500, "boom");
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
        assert!(!err.is_not_found());

        let err = ClientError::not_found("process instance", "1c9a7b3d");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "process instance not found: 1c9a7b3d");
    }

    #[test]
    fn test_invalid_token_error_creation() {
        let err = ClientError::invalid_token("header value contains newline");
        assert!(matches!(err, ClientError::InvalidToken { .. }));
        assert!(err.to_string().starts_with("Invalid bearer token"));
    }

    #[test]
    fn test_api_404_counts_as_not_found() {
        let err = ClientError::api(404, "");
        assert!(err.is_not_found());
    }
}
