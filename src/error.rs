//! Error types for the hand pointer library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Filter constructed with a window, alpha or gamma outside its domain
    #[error("Invalid filter parameter: {0}")]
    InvalidFilterParameter(String),

    /// Filter name or index that does not map to any filter kind
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),

    /// Recorded frame stream could not be read
    #[error("Replay error: {0}")]
    ReplayError(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Intent sink rejected an intent
    #[error("Intent sink error: {0}")]
    Sink(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
