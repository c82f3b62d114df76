//! Measure Units - Unit catalog, fuzzy matching and conversion
//!
//! Provides the fixed catalog of units and the pieces that turn typed text
//! into units:
//! - `Unit::matches`: prefix match of a fragment against one unit
//! - `resolve`: longest-leading-words resolution against a set of units
//! - `Quantity`: conversion of a value into same-dimension targets
//!
//! Dimensions:
//! - Angle, Area, Concentration of mass, Duration
//! - Electric charge, current, potential difference, resistance
//! - Energy, Frequency, Fuel efficiency, Information storage
//! - Length, Mass, Power, Pressure, Speed, Temperature, Volume

mod dimension;
mod unit;
mod units;
mod catalog;
mod matcher;
mod resolve;
mod quantity;

pub use dimension::Dimension;
pub use unit::{Unit, Conversion, ConversionError};
pub use units::{UnitSpec, Coefficients, STANDARD_UNITS};
pub use catalog::{Catalog, CatalogError};
pub use matcher::MatchType;
pub use resolve::{resolve, ResolvedMatch};
pub use quantity::Quantity;
