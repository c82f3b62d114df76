//! Quantity type - a value with an associated unit

use std::fmt;
use measure_core::Number;
use crate::unit::ConversionError;
use crate::Unit;

/// A physical quantity: a numeric value in a catalog unit
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<'a> {
    pub value: Number,
    pub unit: &'a Unit,
}

impl<'a> Quantity<'a> {
    pub fn new(value: Number, unit: &'a Unit) -> Self {
        Quantity { value, unit }
    }

    /// Convert to another unit of the same dimension
    pub fn convert_to(&self, target: &'a Unit) -> Result<Quantity<'a>, ConversionError> {
        let value = self.unit.convert_to(&self.value, target)?;
        Ok(Quantity::new(value, target))
    }

    /// Convert to every target, in order, keeping each result separate
    ///
    /// A zero value against a reciprocal unit yields `ConversionError::Unbounded`
    /// for that target only
    pub fn convert_each(&self, targets: &[&'a Unit]) -> Vec<Result<Quantity<'a>, ConversionError>> {
        targets.iter().map(|&target| self.convert_to(target)).collect()
    }
}

impl fmt::Display for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Dimension};

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    #[test]
    fn test_convert_length() {
        let catalog = Catalog::standard().unwrap();
        let km = catalog.get("km").unwrap();
        let mi = catalog.get("mi").unwrap();

        let q = Quantity::new(Number::from_i64(42), km);
        let converted = q.convert_to(mi).unwrap();
        assert_eq!(converted.unit.symbol, "mi");
        assert_eq!(converted.value.to_fixed(4), "26.0976");
    }

    #[test]
    fn test_convert_each_keeps_order() {
        let catalog = Catalog::standard().unwrap();
        let km = catalog.get("km").unwrap();
        let targets = catalog.conversion_targets(km);

        let q = Quantity::new(Number::from_i64(1), km);
        let results = q.convert_each(&targets);
        assert_eq!(results.len(), targets.len());

        let meters = results.iter()
            .filter_map(|r| r.as_ref().ok())
            .find(|c| c.unit.symbol == "m")
            .unwrap();
        assert_eq!(meters.value, Number::from_i64(1000));
    }

    #[test]
    fn test_temperature_scenarios() {
        let catalog = Catalog::standard().unwrap();
        let c = catalog.get("°C").unwrap();
        let f = catalog.get("°F").unwrap();
        let k = catalog.get("K").unwrap();

        let boiling = Quantity::new(Number::from_i64(100), c);
        assert_eq!(boiling.convert_to(f).unwrap().value.to_fixed(2), "212");
        assert_eq!(boiling.convert_to(k).unwrap().value.to_fixed(2), "373.15");

        let body = Quantity::new(num("98.6"), f);
        assert_eq!(body.convert_to(c).unwrap().value.to_fixed(1), "37");
    }

    #[test]
    fn test_round_trip_every_pair() {
        let catalog = Catalog::standard().unwrap();
        let value = num("42.5");

        for dimension in Dimension::ALL {
            let units = catalog.by_dimension(dimension);
            for &a in &units {
                for &b in &units {
                    let there = Quantity::new(value.clone(), a).convert_to(b).unwrap();
                    let back = there.convert_to(a).unwrap();
                    assert_eq!(back.value.to_fixed(6), "42.5", "{} -> {} -> {}", a.symbol, b.symbol, a.symbol);
                }
            }
        }
    }

    #[test]
    fn test_zero_against_reciprocal_unit() {
        let catalog = Catalog::standard().unwrap();
        let per_100km = catalog.get("L/100km").unwrap();
        let mpg = catalog.get("mpg").unwrap();

        let err = Quantity::new(Number::zero(), per_100km).convert_to(mpg).unwrap_err();
        assert!(matches!(err, ConversionError::Unbounded { .. }));

        let imperial = catalog.get("imperial mpg").unwrap();
        let converted = Quantity::new(Number::zero(), mpg).convert_to(imperial).unwrap();
        assert!(converted.value.is_zero());
    }

    #[test]
    fn test_cross_dimension_is_rejected() {
        let catalog = Catalog::standard().unwrap();
        let km = catalog.get("km").unwrap();
        let kg = catalog.get("kg").unwrap();

        let err = Quantity::new(Number::from_i64(1), km).convert_to(kg).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleDimensions { .. }));
    }

    #[test]
    fn test_display() {
        let catalog = Catalog::standard().unwrap();
        let q = Quantity::new(num("2.5"), catalog.get("kg").unwrap());
        assert_eq!(q.to_string(), "2.5 kg");
    }
}
