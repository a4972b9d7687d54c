//! Error types for the Sourcify client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Sourcify client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Endpoint Validation Errors
    // ============================================================================
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Missing value for path parameter: {name}")]
    MissingPathParameter { name: String },

    #[error("Encountered a parameter of invalid type for '{key}': {type_name}")]
    UnsupportedParamType { key: String, type_name: String },

    #[error("Invalid parameter kind: {kind}")]
    InvalidParamKind { kind: String },

    #[error("Invalid match type: {match_type}")]
    InvalidMatchType { match_type: String },

    #[error("Match type '{match_type}' is not supported by {operation}")]
    UnsupportedMatchType {
        match_type: String,
        operation: String,
    },

    #[error("Invalid repository file path: {path}")]
    InvalidFilePath { path: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Server error {status} ({code}): {message}")]
    ServerError {
        status: u16,
        code: String,
        message: String,
        error_id: String,
    },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing parameter error
    pub fn missing_param(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create a missing path parameter error
    pub fn missing_path_param(name: impl Into<String>) -> Self {
        Self::MissingPathParameter { name: name.into() }
    }

    /// Create an unsupported parameter type error
    pub fn unsupported_param(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedParamType {
            key: key.into(),
            type_name: type_name.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } | Error::ServerError { status, .. } => {
                Some(*status)
            }
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Transport { .. })
    }

    /// Check if the dispatcher retries this error
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Transport { .. } | Error::UnexpectedStatus { .. }
        )
    }

    /// Check if this error was raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter { .. }
                | Error::MissingPathParameter { .. }
                | Error::UnsupportedParamType { .. }
                | Error::InvalidParamKind { .. }
                | Error::InvalidMatchType { .. }
                | Error::UnsupportedMatchType { .. }
                | Error::InvalidFilePath { .. }
        )
    }
}

/// Result type alias for the Sourcify client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_param(":chain");
        assert_eq!(err.to_string(), "Missing required parameter: :chain");

        let err = Error::unexpected_status(404, "Not found");
        assert_eq!(err.to_string(), "Unexpected response status: 404");

        let err = Error::ServerError {
            status: 404,
            code: "not_found".to_string(),
            message: "Contract not found".to_string(),
            error_id: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server error 404 (not_found): Contract not found"
        );
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::unexpected_status(500, "").status(), Some(500));
        assert_eq!(Error::transport("refused").status(), None);
        assert_eq!(Error::missing_param("x").status(), None);
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::transport("connection reset").is_retryable());
        assert!(Error::unexpected_status(503, "").is_retryable());

        assert!(!Error::missing_param("addresses").is_retryable());
        assert!(!Error::decode("bad json").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_path_param(":address").is_validation());
        assert!(Error::unsupported_param(":chain", "string list").is_validation());
        assert!(!Error::transport("timeout").is_validation());
    }
}
