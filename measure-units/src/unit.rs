//! Unit representation with conversion coefficients

use std::fmt;
use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};
use crate::{UnitType, MeasureError, UNITS};

/// A named unit of measure
///
/// Coefficients live in a static table indexed by the variant, so a `Unit`
/// is just an identifier and copies freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Unit {
    Inch,
    Feet,
    Yard,
    Millimeter,
    Mile,
    Centimeter,
    Meter,
    Kilometer,
    Celsius,
    Fahrenheit,
    Kelvin,
    Litre,
    Millilitre,
    Gallon,
}

/// Affine transform of a unit relative to the base unit of its type
struct UnitSpec {
    name: &'static str,
    unit_type: UnitType,
    /// base = value * multiplicand + addend
    multiplicand: f64,
    /// Nonzero only for offset scales (temperature)
    addend: f64,
}

const fn spec(name: &'static str, unit_type: UnitType, multiplicand: f64, addend: f64) -> UnitSpec {
    UnitSpec { name, unit_type, multiplicand, addend }
}

// Same order as the enum. Base units: INCH, CELSIUS, LITRE.
static UNIT_SPECS: [UnitSpec; 14] = [
    spec("INCH", UnitType::Length, 1.0, 0.0),
    spec("FEET", UnitType::Length, 12.0, 0.0),
    spec("YARD", UnitType::Length, 36.0, 0.0),
    spec("MILLIMETER", UnitType::Length, 1.0 / 25.4, 0.0),
    spec("MILE", UnitType::Length, 63360.0, 0.0),
    spec("CENTIMETER", UnitType::Length, 1.0 / 2.54, 0.0),
    spec("METER", UnitType::Length, 100.0 / 2.54, 0.0),
    spec("KILOMETER", UnitType::Length, 100000.0 / 2.54, 0.0),
    spec("CELSIUS", UnitType::Temperature, 1.0, 0.0),
    // C = (F - 32) * 5/9
    spec("FAHRENHEIT", UnitType::Temperature, 5.0 / 9.0, -160.0 / 9.0),
    spec("KELVIN", UnitType::Temperature, 1.0, -273.15),
    spec("LITRE", UnitType::Volume, 1.0, 0.0),
    spec("MILLILITRE", UnitType::Volume, 0.001, 0.0),
    spec("GALLON", UnitType::Volume, 3.78541, 0.0),
];

impl Unit {
    /// Every unit, in declaration order
    pub const ALL: [Unit; 14] = [
        Unit::Inch,
        Unit::Feet,
        Unit::Yard,
        Unit::Millimeter,
        Unit::Mile,
        Unit::Centimeter,
        Unit::Meter,
        Unit::Kilometer,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
        Unit::Litre,
        Unit::Millilitre,
        Unit::Gallon,
    ];

    fn spec(&self) -> &'static UnitSpec {
        &UNIT_SPECS[*self as usize]
    }

    /// Canonical identifier (e.g. "INCH")
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// The type this unit measures
    pub fn unit_type(&self) -> UnitType {
        self.spec().unit_type
    }

    pub fn multiplicand(&self) -> f64 {
        self.spec().multiplicand
    }

    pub fn addend(&self) -> f64 {
        self.spec().addend
    }

    /// Check if this is the base unit of its type
    pub fn is_base(&self) -> bool {
        self.multiplicand() == 1.0 && self.addend() == 0.0
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.unit_type() == other.unit_type()
    }

    /// Convert a value in this unit to the base value of its type
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.multiplicand() + self.addend()
    }

    /// Convert a base value of this unit's type into this unit
    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.addend()) / self.multiplicand()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Unit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNITS.parse_unit(s)
    }
}
