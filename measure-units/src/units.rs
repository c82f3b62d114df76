//! Unit definitions - the static conversion table
//!
//! Each dimension lists its units in display order. Coefficients are decimal
//! strings (or `a/b` rationals) relative to the dimension's base unit and are
//! parsed once when the catalog is built.

use crate::Dimension;

/// How a table row converts to the base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficients {
    Linear(&'static str),
    Affine { factor: &'static str, offset: &'static str },
    Reciprocal(&'static str),
}

/// One row of the unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    pub names: &'static [&'static str],
    pub symbol: &'static str,
    pub coefficients: Coefficients,
    /// Shown as "imperial <symbol>" so it can't be confused with the US unit
    pub imperial: bool,
}

impl UnitSpec {
    pub const fn linear(names: &'static [&'static str], symbol: &'static str, factor: &'static str) -> Self {
        UnitSpec { names, symbol, coefficients: Coefficients::Linear(factor), imperial: false }
    }

    pub const fn affine(
        names: &'static [&'static str],
        symbol: &'static str,
        factor: &'static str,
        offset: &'static str,
    ) -> Self {
        UnitSpec { names, symbol, coefficients: Coefficients::Affine { factor, offset }, imperial: false }
    }

    pub const fn reciprocal(names: &'static [&'static str], symbol: &'static str, coefficient: &'static str) -> Self {
        UnitSpec { names, symbol, coefficients: Coefficients::Reciprocal(coefficient), imperial: false }
    }

    pub const fn imperial(self) -> Self {
        UnitSpec { imperial: true, ..self }
    }
}

use UnitSpec as U;

// Not included: acceleration (its "g" symbol clashes with grams), dispersion
// and illuminance (one unit each, nothing to convert to).

const ANGLE: &[UnitSpec] = &[
    U::linear(&["degrees"], "°", "1"),
    U::linear(&["arc minutes"], "ʹ", "1/60"),
    U::linear(&["arc seconds"], "ʺ", "1/3600"),
    U::linear(&["radians"], "rad", "57.295779513082320876798154814105170332405472466564"),
    U::linear(&["gradians"], "grad", "0.9"),
    U::linear(&["revolutions"], "rev", "360"),
];

const AREA: &[UnitSpec] = &[
    U::linear(&["square megameters"], "Mm²", "1e12"),
    U::linear(&["square kilometers"], "km²", "1e6"),
    U::linear(&["square meters"], "m²", "1"),
    U::linear(&["square centimeters"], "cm²", "1e-4"),
    U::linear(&["square millimeters"], "mm²", "1e-6"),
    U::linear(&["square micrometers"], "µm²", "1e-12"),
    U::linear(&["square nanometers"], "nm²", "1e-18"),
    U::linear(&["square inches"], "in²", "0.00064516"),
    U::linear(&["square feet"], "ft²", "0.09290304"),
    U::linear(&["square yards"], "yd²", "0.83612736"),
    U::linear(&["square miles"], "mi²", "2589988.110336"),
    U::linear(&["acres"], "ac", "4046.8564224"),
    U::linear(&["ares"], "a", "100"),
    U::linear(&["hectares"], "ha", "10000"),
];

const CONCENTRATION_MASS: &[UnitSpec] = &[
    U::linear(&["grams per liter"], "g/L", "1"),
    U::linear(&["milligrams per deciliter"], "mg/dL", "0.01"),
];

const DURATION: &[UnitSpec] = &[
    U::linear(&["seconds"], "s", "1"),
    U::linear(&["minutes"], "min", "60"),
    U::linear(&["hours"], "hr", "3600"),
];

const ELECTRIC_CHARGE: &[UnitSpec] = &[
    U::linear(&["coulombs"], "C", "1"),
    U::linear(&["megaampere hours"], "MAh", "36e8"),
    U::linear(&["kiloampere hours"], "kAh", "36e5"),
    U::linear(&["ampere hours"], "Ah", "3600"),
    U::linear(&["milliampere hours"], "mAh", "3.6"),
    U::linear(&["microampere hours"], "µAh", "0.0036"),
];

const ELECTRIC_CURRENT: &[UnitSpec] = &[
    U::linear(&["megaamperes"], "MA", "1e6"),
    U::linear(&["kiloamperes"], "kA", "1e3"),
    U::linear(&["amperes"], "A", "1"),
    U::linear(&["milliamperes"], "mA", "1e-3"),
    U::linear(&["microamperes"], "µA", "1e-6"),
];

const ELECTRIC_POTENTIAL_DIFFERENCE: &[UnitSpec] = &[
    U::linear(&["megavolts"], "MV", "1e6"),
    U::linear(&["kilovolts"], "kV", "1e3"),
    U::linear(&["volts"], "V", "1"),
    U::linear(&["millivolts"], "mV", "1e-3"),
    U::linear(&["microvolts"], "µV", "1e-6"),
];

const ELECTRIC_RESISTANCE: &[UnitSpec] = &[
    U::linear(&["megaohms"], "MΩ", "1e6"),
    U::linear(&["kiloohms"], "kΩ", "1e3"),
    U::linear(&["ohms"], "Ω", "1"),
    U::linear(&["milliohms"], "mΩ", "1e-3"),
    U::linear(&["microohms"], "µΩ", "1e-6"),
];

const ENERGY: &[UnitSpec] = &[
    U::linear(&["kilojoules"], "kJ", "1000"),
    U::linear(&["joules"], "J", "1"),
    U::linear(&["kilocalories"], "kCal", "4184"),
    U::linear(&["calories"], "cal", "4.184"),
    U::linear(&["kilowatt hours"], "kWh", "36e5"),
];

const FREQUENCY: &[UnitSpec] = &[
    U::linear(&["terahertz"], "THz", "1e12"),
    U::linear(&["gigahertz"], "GHz", "1e9"),
    U::linear(&["megahertz"], "MHz", "1e6"),
    U::linear(&["kilohertz"], "kHz", "1e3"),
    U::linear(&["hertz"], "Hz", "1"),
    U::linear(&["millihertz"], "mHz", "1e-3"),
    U::linear(&["microhertz"], "µHz", "1e-6"),
    U::linear(&["nanohertz"], "nHz", "1e-9"),
];

const FUEL_EFFICIENCY: &[UnitSpec] = &[
    U::linear(&["liters per 100 kilometers"], "L/100km", "1"),
    U::reciprocal(&["miles per gallon"], "mpg", "235.214583"),
    U::reciprocal(&["miles per imperial gallon"], "mpg", "282.480936").imperial(),
];

const INFORMATION_STORAGE: &[UnitSpec] = &[
    U::linear(&["nibbles"], "nibble", "0.5"),
    U::linear(&["bits"], "bit", "0.125"),
    U::linear(&["bytes"], "B", "1"),

    U::linear(&["kilobits"], "kb", "125"),
    U::linear(&["megabits"], "Mb", "125e3"),
    U::linear(&["gigabits"], "Gb", "125e6"),
    U::linear(&["terabits"], "Tb", "125e9"),
    U::linear(&["petabits"], "Pb", "125e12"),
    U::linear(&["exabits"], "Eb", "125e15"),
    U::linear(&["zettabits"], "Zb", "125e18"),
    U::linear(&["yottabits"], "Yb", "125e21"),

    U::linear(&["kibibits"], "Kib", "128"),
    U::linear(&["mebibits"], "Mib", "131072"),
    U::linear(&["gibibits"], "Gib", "134217728"),
    U::linear(&["tebibits"], "Tib", "137438953472"),
    U::linear(&["pebibits"], "Pib", "140737488355328"),
    U::linear(&["exbibits"], "Eib", "144115188075855872"),
    U::linear(&["zebibits"], "Zib", "147573952589676412928"),
    U::linear(&["yobibits"], "Yib", "151115727451828646838272"),

    U::linear(&["kilobytes"], "kB", "1e3"),
    U::linear(&["megabytes"], "MB", "1e6"),
    U::linear(&["gigabytes"], "GB", "1e9"),
    U::linear(&["terabytes"], "TB", "1e12"),
    U::linear(&["petabytes"], "PB", "1e15"),
    U::linear(&["exabytes"], "EB", "1e18"),
    U::linear(&["zettabytes"], "ZB", "1e21"),
    U::linear(&["yottabytes"], "YB", "1e24"),

    U::linear(&["kibibytes"], "KiB", "1024"),
    U::linear(&["mebibytes"], "MiB", "1048576"),
    U::linear(&["gibibytes"], "GiB", "1073741824"),
    U::linear(&["tebibytes"], "TiB", "1099511627776"),
    U::linear(&["pebibytes"], "PiB", "1125899906842624"),
    U::linear(&["exbibytes"], "EiB", "1152921504606846976"),
    U::linear(&["zebibytes"], "ZiB", "1180591620717411303424"),
    U::linear(&["yobibytes"], "YiB", "1208925819614629174706176"),
];

const LENGTH: &[UnitSpec] = &[
    U::linear(&["megameters"], "Mm", "1e6"),
    U::linear(&["kilometers"], "km", "1000"),
    U::linear(&["hectometers"], "hm", "100"),
    U::linear(&["decameters"], "dam", "10"),
    U::linear(&["meters"], "m", "1"),
    U::linear(&["decimeters"], "dm", "0.1"),
    U::linear(&["centimeters"], "cm", "0.01"),
    U::linear(&["millimeters"], "mm", "0.001"),
    U::linear(&["micrometers"], "µm", "1e-6"),
    U::linear(&["nanometers"], "nm", "1e-9"),
    U::linear(&["picometers"], "pm", "1e-12"),
    U::linear(&["inches"], "in", "0.0254"),
    U::linear(&["feet"], "ft", "0.3048"),
    U::linear(&["yards"], "yd", "0.9144"),
    U::linear(&["miles"], "mi", "1609.344"),
    U::linear(&["scandinavian miles"], "smi", "10000"),
    U::linear(&["light years"], "ly", "9460730472580800"),
    U::linear(&["nautical miles"], "NM", "1852"),
    U::linear(&["fathoms"], "ftm", "1.8288"),
    U::linear(&["furlongs"], "fur", "201.168"),
    U::linear(&["astronomical units"], "ua", "149597870700"),
    U::linear(&["parsecs"], "pc", "30856775814913673"),
];

const MASS: &[UnitSpec] = &[
    U::linear(&["kilograms"], "kg", "1"),
    U::linear(&["grams"], "g", "1e-3"),
    U::linear(&["decigrams"], "dg", "1e-4"),
    U::linear(&["centigrams"], "cg", "1e-5"),
    U::linear(&["milligrams"], "mg", "1e-6"),
    U::linear(&["micrograms"], "µg", "1e-9"),
    U::linear(&["nanograms"], "ng", "1e-12"),
    U::linear(&["picograms"], "pg", "1e-15"),
    U::linear(&["ounces"], "oz", "0.028349523125"),
    U::linear(&["pounds"], "lb", "0.45359237"),
    U::linear(&["stones"], "st", "6.35029318"),
    U::linear(&["metric tons"], "t", "1000"),
    U::linear(&["short tons"], "ton", "907.18474"),
    U::linear(&["carats"], "ct", "0.0002"),
    U::linear(&["ounces troy"], "oz t", "0.0311034768"),
    U::linear(&["slugs"], "slug", "14.593903"),
];

const POWER: &[UnitSpec] = &[
    U::linear(&["terawatts"], "TW", "1e12"),
    U::linear(&["gigawatts"], "GW", "1e9"),
    U::linear(&["megawatts"], "MW", "1e6"),
    U::linear(&["kilowatts"], "kW", "1e3"),
    U::linear(&["watts"], "W", "1"),
    U::linear(&["milliwatts"], "mW", "1e-3"),
    U::linear(&["microwatts"], "µW", "1e-6"),
    U::linear(&["nanowatts"], "nW", "1e-9"),
    U::linear(&["picowatts"], "pW", "1e-12"),
    U::linear(&["femtowatts"], "fW", "1e-15"),
    U::linear(&["horsepower"], "hp", "745.69987158227022"),
];

const PRESSURE: &[UnitSpec] = &[
    U::linear(&["pascals"], "N/m²", "1"),
    U::linear(&["gigapascals"], "GPa", "1e9"),
    U::linear(&["megapascals"], "MPa", "1e6"),
    U::linear(&["kilopascals"], "kPa", "1e3"),
    U::linear(&["hectopascals"], "hPa", "100"),
    U::linear(&["inches of mercury"], "inHg", "3386.389"),
    U::linear(&["bars"], "bar", "1e5"),
    U::linear(&["millibars"], "mbar", "100"),
    U::linear(&["millimeters of mercury"], "mmHg", "133.322387415"),
    U::linear(&["standard atmospheres", "atmospheres"], "atm", "101325"),
    U::linear(&["pounds per square inch", "pound per square inch"], "psi", "6894.757293168"),
];

const SPEED: &[UnitSpec] = &[
    U::linear(&["meters per second"], "m/s", "1"),
    U::linear(&["kilometers per hour"], "km/h", "5/18"),
    U::linear(&["miles per hour"], "mph", "0.44704"),
    U::linear(&["knots"], "kn", "463/900"),
];

const TEMPERATURE: &[UnitSpec] = &[
    U::linear(&["kelvin", "k"], "K", "1"),
    U::affine(&["degrees celsius", "celsius", "centigrade", "c"], "°C", "1", "273.15"),
    U::affine(&["degrees fahrenheit", "fahrenheit", "f"], "°F", "5/9", "45967/180"),
];

const VOLUME: &[UnitSpec] = &[
    U::linear(&["megaliters"], "ML", "1e6"),
    U::linear(&["kiloliters"], "kL", "1000"),
    U::linear(&["liters"], "L", "1"),
    U::linear(&["deciliters"], "dL", "0.1"),
    U::linear(&["centiliters"], "cL", "0.01"),
    U::linear(&["milliliters"], "mL", "0.001"),
    U::linear(&["cubic kilometers"], "km³", "1e12"),
    U::linear(&["cubic meters"], "m³", "1000"),
    U::linear(&["cubic decimeters"], "dm³", "1"),
    U::linear(&["cubic centimeters"], "cm³", "0.001"),
    U::linear(&["cubic millimeters"], "mm³", "1e-6"),
    U::linear(&["cubic inches"], "in³", "0.016387064"),
    U::linear(&["cubic feet"], "ft³", "28.316846592"),
    U::linear(&["cubic yards"], "yd³", "764.554857984"),
    U::linear(&["cubic miles"], "mi³", "4168181825440.579584"),
    U::linear(&["acre feet"], "af", "1233481.83754752"),
    U::linear(&["bushels"], "bsh", "35.23907016688"),
    U::linear(&["teaspoons"], "tsp", "0.00492892159375"),
    U::linear(&["tablespoons"], "tbsp", "0.01478676478125"),
    U::linear(&["fluid ounces"], "fl oz", "0.0295735295625"),
    U::linear(&["cups"], "cup", "0.24"),
    U::linear(&["pints"], "pt", "0.473176473"),
    U::linear(&["quarts"], "qt", "0.946352946"),
    U::linear(&["gallons"], "gal", "3.785411784"),
    U::linear(&["imperial teaspoons"], "tsp", "0.0284130625/4.8").imperial(),
    U::linear(&["imperial tablespoons"], "tbsp", "0.0177581640625").imperial(),
    U::linear(&["imperial fluid ounces"], "fl oz", "0.0284130625").imperial(),
    U::linear(&["imperial pints"], "pt", "0.56826125").imperial(),
    U::linear(&["imperial quarts"], "qt", "1.1365225").imperial(),
    U::linear(&["imperial gallons"], "gal", "4.54609").imperial(),
    U::linear(&["metric cups"], "metric cup", "0.25"),
];

/// The full table, in catalog order
pub const STANDARD_UNITS: &[(Dimension, &[UnitSpec])] = &[
    (Dimension::Angle, ANGLE),
    (Dimension::Area, AREA),
    (Dimension::ConcentrationMass, CONCENTRATION_MASS),
    (Dimension::Duration, DURATION),
    (Dimension::ElectricCharge, ELECTRIC_CHARGE),
    (Dimension::ElectricCurrent, ELECTRIC_CURRENT),
    (Dimension::ElectricPotentialDifference, ELECTRIC_POTENTIAL_DIFFERENCE),
    (Dimension::ElectricResistance, ELECTRIC_RESISTANCE),
    (Dimension::Energy, ENERGY),
    (Dimension::Frequency, FREQUENCY),
    (Dimension::FuelEfficiency, FUEL_EFFICIENCY),
    (Dimension::InformationStorage, INFORMATION_STORAGE),
    (Dimension::Length, LENGTH),
    (Dimension::Mass, MASS),
    (Dimension::Power, POWER),
    (Dimension::Pressure, PRESSURE),
    (Dimension::Speed, SPEED),
    (Dimension::Temperature, TEMPERATURE),
    (Dimension::Volume, VOLUME),
];
