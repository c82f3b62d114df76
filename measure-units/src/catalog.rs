//! The unit catalog - an ordered, immutable list of units

use std::collections::HashSet;
use measure_core::{Number, NumberError};
use thiserror::Error;
use crate::units::{Coefficients, UnitSpec, STANDARD_UNITS};
use crate::{Dimension, Unit};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("unit {symbol}: invalid coefficient {value:?}: {source}")]
    InvalidCoefficient {
        symbol: String,
        value: String,
        source: NumberError,
    },

    #[error("duplicate unit symbol: {0}")]
    DuplicateSymbol(String),

    #[error("unit {0} has no names")]
    Unnamed(String),
}

/// Registry of all known units, in table order
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    /// Build the standard catalog from the built-in table
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_table(STANDARD_UNITS)
    }

    pub fn from_table(table: &[(Dimension, &[UnitSpec])]) -> Result<Self, CatalogError> {
        let mut units = Vec::new();
        for (dimension, specs) in table {
            for spec in specs.iter() {
                units.push(build_unit(*dimension, spec)?);
            }
        }
        Self::from_units(units)
    }

    /// Wrap an explicit list of units, checking names and symbol uniqueness
    pub fn from_units(units: Vec<Unit>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for unit in &units {
            if unit.names.is_empty() {
                return Err(CatalogError::Unnamed(unit.symbol.clone()));
            }
            if !seen.insert(unit.symbol.as_str()) {
                return Err(CatalogError::DuplicateSymbol(unit.symbol.clone()));
            }
        }
        Ok(Catalog { units })
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Borrowed view of every unit, the shape the resolver works on
    pub fn all(&self) -> Vec<&Unit> {
        self.units.iter().collect()
    }

    /// Get a unit by its display symbol
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.dimension == dimension)
            .collect()
    }

    /// Units a value in `source` can be converted to: same dimension, minus itself
    pub fn conversion_targets(&self, source: &Unit) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.is_compatible(source) && u.symbol != source.symbol)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

fn build_unit(dimension: Dimension, spec: &UnitSpec) -> Result<Unit, CatalogError> {
    let symbol = if spec.imperial {
        format!("imperial {}", spec.symbol)
    } else {
        spec.symbol.to_string()
    };

    let coefficient = |value: &str| {
        Number::from_str(value).map_err(|source| CatalogError::InvalidCoefficient {
            symbol: symbol.clone(),
            value: value.to_string(),
            source,
        })
    };

    let unit = match spec.coefficients {
        Coefficients::Linear(factor) => {
            Unit::linear(spec.names, &symbol, dimension, coefficient(factor)?)
        }
        Coefficients::Affine { factor, offset } => {
            Unit::affine(spec.names, &symbol, dimension, coefficient(factor)?, coefficient(offset)?)
        }
        Coefficients::Reciprocal(value) => {
            Unit::reciprocal(spec.names, &symbol, dimension, coefficient(value)?)
        }
    };

    Ok(unit)
}
