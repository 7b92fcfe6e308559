//! Error handling types for bufcalc.
//!
//! Every failure here is recovered inside the command layer; the worst
//! user-visible outcome is an unchanged buffer.

use thiserror::Error;

/// Error type for plugin operations
#[derive(Debug, Error)]
pub enum CalcError {
    /// A host capability call failed
    #[error("Host call failed: {message}")]
    Host { message: String },

    /// The selection degenerated to a line no range can span
    #[error("Could not determine selected range at line {line}")]
    RangeResolution { line: usize },

    /// The resolved range contained no text
    #[error("Selection is empty")]
    EmptySelection,

    /// Float format specification could not be parsed
    #[error("Invalid float format: {spec}")]
    InvalidFormat { spec: String },

    /// Log level name is not a member of the closed level set
    #[error("Invalid log level: {name}")]
    InvalidLogLevel { name: String },
}

/// Result type for plugin operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Helper functions for common error patterns
impl CalcError {
    /// Create a host error
    pub fn host(message: impl Into<String>) -> Self {
        CalcError::Host {
            message: message.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(spec: impl Into<String>) -> Self {
        CalcError::InvalidFormat { spec: spec.into() }
    }

    /// Create an invalid log level error
    pub fn invalid_log_level(name: impl Into<String>) -> Self {
        CalcError::InvalidLogLevel { name: name.into() }
    }
}
