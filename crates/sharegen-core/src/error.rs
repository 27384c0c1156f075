//! Error types for the Sharegen session layer.

use thiserror::Error;

/// A shared error type for the whole session-orchestration stack.
///
/// Variants map to the failure taxonomy of the layer: gateway call
/// failures, wire-format problems, malformed app schemas, and
/// configuration mistakes.
#[derive(Error, Debug, Clone)]
pub enum SharegenError {
    /// Remote Gateway call failed (transport error or non-success status).
    #[error("Gateway error: {message}")]
    Gateway {
        /// HTTP status code when the server answered, `None` on transport failure.
        status: Option<u16>,
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "query", etc.
        message: String,
    },

    /// The server-provided app schema violates a precondition
    /// (e.g. a missing or malformed `user_input_form`).
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SharegenError {
    /// Creates a Gateway error without a status code (transport failure).
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Gateway error carrying the server's status code.
    pub fn gateway_status(status: u16, message: impl Into<String>) -> Self {
        Self::Gateway {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a Schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Gateway error
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway { .. })
    }

    /// Check if this is a Schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

impl From<serde_json::Error> for SharegenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SharegenError>`.
pub type Result<T> = std::result::Result<T, SharegenError>;
