//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report: rejected salary inputs,
//! deduction tables that break their invariants, and configuration files
//! that cannot be read.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "benefits".to_string(),
///     message: "must not be negative (got -1)".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'benefits': must not be negative (got -1)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A salary component passed to the calculator was rejected.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The name of the rejected input.
        field: String,
        /// A description of why the input was rejected.
        message: String,
    },

    /// A deduction or policy table violates its invariants.
    #[error("Invalid schedule table '{table}': {message}")]
    InvalidSchedule {
        /// The table that failed validation (e.g., "tax_brackets").
        table: String,
        /// A description of the violated invariant.
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
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_schedule(table: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidSchedule {
            table: table.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
