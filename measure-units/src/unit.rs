//! Unit representation with conversion coefficients

use std::fmt;
use measure_core::{Number, NumberError};
use thiserror::Error;
use crate::Dimension;

/// How a value in some unit maps onto its dimension's base unit
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// base = value * factor + offset (offset is only non-zero for temperature)
    Linear { factor: Number, offset: Number },
    /// base = coefficient / value (miles per gallon against litres per 100 km)
    Reciprocal { coefficient: Number },
}

/// A unit from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Lowercase names; the first one is canonical
    pub names: Vec<String>,
    /// Display symbol, case-sensitive (e.g. "km", "imperial gal")
    pub symbol: String,
    pub dimension: Dimension,
    pub conversion: Conversion,
}

impl Unit {
    /// Create a unit with proportional conversion (no offset)
    pub fn linear(names: &[&str], symbol: &str, dimension: Dimension, factor: Number) -> Self {
        Self::affine(names, symbol, dimension, factor, Number::zero())
    }

    /// Create a unit with offset (for temperature conversions)
    pub fn affine(names: &[&str], symbol: &str, dimension: Dimension, factor: Number, offset: Number) -> Self {
        Unit {
            names: names.iter().map(|n| n.to_string()).collect(),
            symbol: symbol.to_string(),
            dimension,
            conversion: Conversion::Linear { factor, offset },
        }
    }

    pub fn reciprocal(names: &[&str], symbol: &str, dimension: Dimension, coefficient: Number) -> Self {
        Unit {
            names: names.iter().map(|n| n.to_string()).collect(),
            symbol: symbol.to_string(),
            dimension,
            conversion: Conversion::Reciprocal { coefficient },
        }
    }

    /// First name, used for display
    pub fn canonical_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(&self.symbol)
    }

    /// Canonical name with every word capitalized ("Kilometers Per Hour")
    pub fn display_name(&self) -> String {
        self.canonical_name()
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Convert a value from this unit to the dimension's base unit
    pub fn to_base(&self, value: &Number) -> Result<Number, NumberError> {
        match &self.conversion {
            Conversion::Linear { factor, offset } => Ok(value.mul(factor).add(offset)),
            Conversion::Reciprocal { coefficient } => coefficient.checked_div(value),
        }
    }

    /// Convert a value from the dimension's base unit to this unit
    pub fn from_base(&self, base: &Number) -> Result<Number, NumberError> {
        match &self.conversion {
            // value = (base - offset) / factor
            Conversion::Linear { factor, offset } => base.sub(offset).checked_div(factor),
            Conversion::Reciprocal { coefficient } => coefficient.checked_div(base),
        }
    }

    /// Convert a value from this unit to another unit of the same dimension
    pub fn convert_to(&self, value: &Number, target: &Unit) -> Result<Number, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension,
                to_dim: target.dimension,
            });
        }

        // A zero value against a reciprocal unit is unbounded; a reciprocal
        // target maps the unbounded base back to zero
        let base = match self.to_base(value) {
            Ok(base) => base,
            Err(NumberError::DivisionByZero) if target.is_reciprocal() => return Ok(Number::zero()),
            Err(NumberError::DivisionByZero) => return Err(self.unbounded(target)),
            Err(e) => return Err(e.into()),
        };

        target.from_base(&base).map_err(|e| match e {
            NumberError::DivisionByZero => self.unbounded(target),
            other => other.into(),
        })
    }

    pub fn is_reciprocal(&self) -> bool {
        matches!(self.conversion, Conversion::Reciprocal { .. })
    }

    fn unbounded(&self, target: &Unit) -> ConversionError {
        ConversionError::Unbounded {
            from: self.symbol.clone(),
            to: target.symbol.clone(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Only reachable when a caller skips the dimension filter
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// The result is infinite (zero against a reciprocal unit)
    #[error("{from} to {to} has no finite value")]
    Unbounded { from: String, to: String },

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}
