//! Structured errors shown to the launcher user
//!
//! A `MeasureError` is a value, not a crash: the binary turns recoverable
//! errors into a single guidance item and only aborts on fatal ones.

use crate::{ConfigError, NumberError};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const CONFIG: &str = "CONFIG";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported to the user as a result item, then the process fails
    Error,
    /// Nothing can be shown; abort before producing results
    Fatal,
}

/// Structured, user-facing error
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable message (rendered as the item title)
    pub message: String,

    /// Hint for fixing the query (rendered as the item subtitle)
    pub suggestion: Option<String>,

    pub severity: Severity,
}

impl MeasureError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    // ========== Common Error Constructors ==========

    /// No leading decimal number in the query
    pub fn invalid_input() -> Self {
        Self::new(codes::INVALID_INPUT, "Input a Value and Unit")
            .with_suggestion("Example: 42 km")
    }

    /// The unit text after the number matches nothing in the catalog
    pub fn invalid_unit() -> Self {
        Self::new(codes::INVALID_UNIT, "Input a Valid Unit")
            .with_suggestion("Examples: km, kilometers")
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG, format!("Configuration error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasureError {}

impl From<ConfigError> for MeasureError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<NumberError> for MeasureError {
    fn from(err: NumberError) -> Self {
        match err {
            // Only reachable when the captured numeral is not a valid decimal
            NumberError::ParseError(_) => Self::invalid_input(),
            NumberError::DivisionByZero => Self::internal("division by zero"),
        }
    }
}
