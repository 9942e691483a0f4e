//! Error types for jasmim.

use thiserror::Error;

/// Result type alias using jasmim's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jasmim operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inference/model call failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// The model reply could not be parsed into the expected schema
    #[error("Invalid model reply: {0}")]
    InvalidReply(String),
}
