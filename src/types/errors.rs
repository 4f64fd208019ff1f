//! Application error types.
//!
//! Validators return [`ValidationError`], a closed set of sentinel kinds that
//! callers branch on. [`Error`] is the crate-wide error for everything around
//! the validators (config loading, I/O, serialization).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Classified validation failure.
///
/// Each variant carries a fixed message and no detail about the offending
/// input. Match on the variant, not on the message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    #[error("One or more required environment variables are missing")]
    MissingRequiredEnv,

    #[error("Invalid base URL")]
    InvalidBaseUrl,

    #[error("Unsupported protocol")]
    UnsupportedProtocol,

    #[error("Invalid path in URL")]
    InvalidPathInUrl,

    #[error("Unexpected inputs")]
    UnexpectedInputs,

    #[error("Invalid string formatted input")]
    InvalidInput,

    #[error("Invalid input for username or password")]
    InvalidAccountInput,

    #[error("Invalid PEM format input")]
    InvalidPemInput,
}

impl ValidationError {
    /// Stable machine-readable kind, identical to the serde representation.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredEnv => "MISSING_REQUIRED_ENV",
            ValidationError::InvalidBaseUrl => "INVALID_BASE_URL",
            ValidationError::UnsupportedProtocol => "UNSUPPORTED_PROTOCOL",
            ValidationError::InvalidPathInUrl => "INVALID_PATH_IN_URL",
            ValidationError::UnexpectedInputs => "UNEXPECTED_INPUTS",
            ValidationError::InvalidInput => "INVALID_INPUT",
            ValidationError::InvalidAccountInput => "INVALID_ACCOUNT_INPUT",
            ValidationError::InvalidPemInput => "INVALID_PEM_INPUT",
        }
    }
}

/// Main error enum for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected by one of the validators.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The sentinel kind, when this error came from a validator.
    pub fn validation_kind(&self) -> Option<ValidationError> {
        match self {
            Error::Validation(kind) => Some(*kind),
            _ => None,
        }
    }
}

// Convenience constructors
impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
