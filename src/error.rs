//! Error types for the Leave Forecast Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during balance forecasting.

use thiserror::Error;

/// The main error type for the Leave Forecast Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::MalformedDate {
///     input: "2024-13-01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed date string: 2024-13-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string could not be decomposed into a plausible calendar date.
    #[error("Malformed date string: {input}")]
    MalformedDate {
        /// The string that failed to parse.
        input: String,
    },

    /// A schedule variant or RDO pattern was not recognized.
    #[error("Invalid work schedule '{value}': {message}")]
    InvalidSchedule {
        /// The unrecognized schedule or pattern value.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// An hours or balance value fell outside the sane numeric range.
    ///
    /// Primary validation lives upstream in the persistence layer; this
    /// variant is a defensive backstop so a corrupted numeric input cannot
    /// silently propagate through a projection.
    #[error("Numeric input '{field}' out of range: {message}")]
    NegativeOrUnboundedInput {
        /// The field that was out of range.
        field: String,
        /// A description of the violated bound.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
