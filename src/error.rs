//! Error types for the Statutory Deduction Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during deduction calculation.

use thiserror::Error;

/// The main error type for the Statutory Deduction Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Missing rate configuration is deliberately *not* an error: calculators
/// degrade to a zero result so one misconfigured table cannot block a
/// whole payroll run. Errors are reserved for broken configuration files,
/// structurally invalid rate tables, and invalid caller input.
///
/// # Example
///
/// ```
/// use statutory_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A loaded rate table violates a structural invariant.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// A caller-supplied input was invalid (e.g. a negative salary).
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },
}

impl EngineError {
    /// Creates an `InvalidInput` error for a negative monetary amount.
    pub fn negative_amount(field: &str) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: "amount must not be negative".to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
