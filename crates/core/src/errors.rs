//! Core error types for the marketdeck application.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! failures (filesystem, JSON encoding) are converted to these types by
//! the storage layer.

use thiserror::Error;

use crate::portfolios::PortfolioError;
use marketdeck_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Ledger error: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// Uses `String` payloads so the storage layer can convert its concrete
/// errors into this format without leaking types.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("Storage I/O failed: {0}")]
    Io(String),

    /// A persisted document could not be encoded or decoded.
    #[error("Document serialization failed: {0}")]
    Serialization(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(StorageError::Io(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
