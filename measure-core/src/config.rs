//! Number formatting configuration
//!
//! The launcher passes workflow settings as environment variables. Reading
//! goes through a lookup closure so tests never touch the real environment.

use thiserror::Error;

/// Environment variable holding the maximum number of fraction digits
pub const DECIMAL_PLACES_VAR: &str = "decimal_places";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(String),

    #[error("{var} must be a non-negative integer, got {value:?}")]
    Invalid { var: String, value: String },
}

/// How converted values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Maximum fraction digits; the minimum is always zero
    pub max_fraction_digits: u32,
}

impl FormatConfig {
    pub fn new(max_fraction_digits: u32) -> Self {
        Self { max_fraction_digits }
    }

    /// Read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(DECIMAL_PLACES_VAR)
            .ok_or_else(|| ConfigError::Missing(DECIMAL_PLACES_VAR.to_string()))?;

        let max_fraction_digits = raw.trim().parse::<u32>()
            .map_err(|_| ConfigError::Invalid {
                var: DECIMAL_PLACES_VAR.to_string(),
                value: raw.clone(),
            })?;

        Ok(Self { max_fraction_digits })
    }
}
