//! Error types for promptdeck

use thiserror::Error;

/// The main error type for promptdeck operations
#[derive(Debug, Error)]
pub enum DeckError {
    /// No API credential available. Raised before any network attempt.
    #[error("No API key configured. Add keys with `promptdeck keys set` or set PROMPTDECK_API_KEY")]
    NotConfigured,

    /// Every credential in the pool was rejected within a single call cycle.
    #[error("All API keys exhausted their quota. Wait and retry, or add more keys")]
    PoolExhausted,

    /// An API-level failure: a non-success HTTP status with its response
    /// body, or a transport failure with no status at all.
    #[error("API request failed: {message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// An image-generation response carried no inline image payload.
    #[error("No image data returned by the model")]
    NoImageData,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for promptdeck operations
pub type Result<T> = std::result::Result<T, DeckError>;
