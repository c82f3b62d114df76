//! Measurement dimensions
//!
//! Units are only ever converted within one dimension, so a dimension is a
//! plain tag naming the quantity and its base unit rather than an exponent
//! vector.

use std::fmt;

/// The physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Angle,
    Area,
    ConcentrationMass,
    Duration,
    ElectricCharge,
    ElectricCurrent,
    ElectricPotentialDifference,
    ElectricResistance,
    Energy,
    Frequency,
    FuelEfficiency,
    InformationStorage,
    Length,
    Mass,
    Power,
    Pressure,
    Speed,
    Temperature,
    Volume,
}

impl Dimension {
    /// Every dimension, in catalog order
    pub const ALL: [Dimension; 19] = [
        Dimension::Angle,
        Dimension::Area,
        Dimension::ConcentrationMass,
        Dimension::Duration,
        Dimension::ElectricCharge,
        Dimension::ElectricCurrent,
        Dimension::ElectricPotentialDifference,
        Dimension::ElectricResistance,
        Dimension::Energy,
        Dimension::Frequency,
        Dimension::FuelEfficiency,
        Dimension::InformationStorage,
        Dimension::Length,
        Dimension::Mass,
        Dimension::Power,
        Dimension::Pressure,
        Dimension::Speed,
        Dimension::Temperature,
        Dimension::Volume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Angle => "angle",
            Dimension::Area => "area",
            Dimension::ConcentrationMass => "concentration of mass",
            Dimension::Duration => "duration",
            Dimension::ElectricCharge => "electric charge",
            Dimension::ElectricCurrent => "electric current",
            Dimension::ElectricPotentialDifference => "electric potential difference",
            Dimension::ElectricResistance => "electric resistance",
            Dimension::Energy => "energy",
            Dimension::Frequency => "frequency",
            Dimension::FuelEfficiency => "fuel efficiency",
            Dimension::InformationStorage => "information storage",
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Power => "power",
            Dimension::Pressure => "pressure",
            Dimension::Speed => "speed",
            Dimension::Temperature => "temperature",
            Dimension::Volume => "volume",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
