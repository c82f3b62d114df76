//! Measure Core - Fundamental types
//!
//! This crate provides the core types used throughout measure:
//! - `Number`: Arbitrary precision decimal numbers
//! - `MeasureError`: Structured errors turned into launcher guidance
//! - `FormatConfig`: How many fraction digits results may show

mod number;
mod error;
mod config;

pub use number::{Number, NumberError};
pub use error::{MeasureError, Severity, codes};
pub use config::{FormatConfig, ConfigError, DECIMAL_PLACES_VAR};

