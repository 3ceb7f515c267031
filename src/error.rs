// SPDX-License-Identifier: MIT

//! Typed error handling for kinetic-branch
//!
//! Condition evaluation itself is total and never produces an error. These
//! types cover the fallible shell around it: reading documents, loading
//! configuration and running the HTTP server.

use thiserror::Error;

/// Top-level error type for kinetic-branch
#[derive(Debug, Error)]
pub enum BranchError {
    /// Configuration errors (invalid file contents, bad env overrides)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A condition, block or variable document could not be understood
    #[error("Invalid {kind} document: {message}")]
    Document { kind: String, message: String },

    /// Server start-up or runtime failure
    #[error("Server error: {0}")]
    Server(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl BranchError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a document error
    pub fn document(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Document {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = BranchError::config("threshold out of range");
        assert_eq!(
            err.to_string(),
            "Configuration error: threshold out of range"
        );
    }

    #[test]
    fn test_document_error_display() {
        let err = BranchError::document("condition", "missing comparisons");
        assert_eq!(
            err.to_string(),
            "Invalid condition document: missing comparisons"
        );
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let expected = json_err.to_string();
        let err: BranchError = json_err.into();
        assert!(matches!(err, BranchError::Json(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_yaml_error_is_transparent() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{ not: a list }").unwrap_err();
        let expected = yaml_err.to_string();
        let err: BranchError = yaml_err.into();
        assert_eq!(err.to_string(), expected);
    }
}
