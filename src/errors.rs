//! Unified error type for the resident directory store.

use sea_orm::DbErr;
use thiserror::Error;

/// Every failure the store can report. A single error aborts the whole
/// provisioning transaction.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the failure
        message: String,
    },

    /// Caller supplied a value the store refuses to persist
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of the rejected value
        message: String,
    },

    /// No resident with the given id exists
    #[error("Resident not found: {id}")]
    ResidentNotFound {
        /// Primary key that was looked up
        id: i64,
    },

    /// Storage engine error, including constraint violations
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Audit snapshot could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
