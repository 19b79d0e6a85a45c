//! Error types and handling for the server.
//!
//! A unified error type wrapping the domain and transport errors, so the
//! binary can propagate anything with `?`.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
