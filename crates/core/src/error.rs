//! Error types for blockcut.

use thiserror::Error;

/// Result type alias for blockcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building inputs or packing pieces.
#[derive(Debug, Error)]
pub enum Error {
    /// A piece or block was given a non-positive (or non-finite) extent.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A placement was rejected by the bounds, height or collision checks.
    ///
    /// This is the expected outcome of a failed try and never aborts a run.
    #[error("Cannot place: {0}")]
    CannotPlace(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true for rejections that only mean "try somewhere else".
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::CannotPlace(_))
    }
}
