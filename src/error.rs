use crate::method::Method;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid rail count: {0}. Must be at least 1")]
    InvalidRailCount(usize),

    #[error("Key required for {0}")]
    MissingKey(Method),

    #[error("Empty key for {0}. Key must contain at least one character")]
    EmptyKey(Method),

    #[error("Invalid key for {method}: {reason}")]
    InvalidKey { method: Method, reason: String },

    #[error("Invalid key length: {0}. Must be between 1 and 256")]
    InvalidLength(usize),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
