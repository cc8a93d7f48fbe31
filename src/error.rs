use std::io;
use thiserror::Error;

/// Custom result type alias for the application
pub type Result<T> = std::result::Result<T, SenseiError>;

/// Errors that can occur while building, sending, or decoding an analysis
#[derive(Debug, Error)]
pub enum SenseiError {
    /// I/O errors
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing/serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network connectivity errors
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Input validation errors
    #[error("Input error: {0}")]
    Input(String),

    /// Remote model errors (bad status, empty candidates)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Reply extraction errors
    #[error("Parsing error: {0}")]
    Parse(String),

    /// General message errors
    #[error("{0}")]
    Message(String),
}

impl SenseiError {
    /// Creates a new error with the specified message
    pub fn new(message: &str) -> Self {
        Self::Message(message.to_string())
    }

    /// Checks if this error is transient and worth retrying later
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Http(_) | Self::IO(_) | Self::Llm(_)
        )
    }
}
