//! Error types for the Paid Throne engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur around the calculation engine.
//! The arithmetic itself is total; errors come from configuration, boundary
//! validation and the persistence collaborator.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Paid Throne engine.
///
/// # Example
///
/// ```
/// use throne_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tax table is in effect on the given date.
    #[error("No tax table in effect on {date}")]
    TaxTableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// A profile failed boundary validation and was rejected.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The result store failed to read or write.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
