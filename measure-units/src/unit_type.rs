//! Unit types (dimension classes)
//!
//! A unit type decides which units are mutually convertible. The set is
//! closed: every type is declared here together with its base unit.

use std::fmt;
use std::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};
use crate::{Unit, MeasureError, UNITS};

/// The class of quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum UnitType {
    Length,
    Temperature,
    Volume,
}

impl UnitType {
    /// Every unit type, in declaration order
    pub const ALL: [UnitType; 3] = [UnitType::Length, UnitType::Temperature, UnitType::Volume];

    /// Canonical identifier
    pub fn name(&self) -> &'static str {
        match self {
            UnitType::Length => "LENGTH",
            UnitType::Temperature => "TEMPERATURE",
            UnitType::Volume => "VOLUME",
        }
    }

    /// The unit whose values are the base values of this type
    pub fn base_unit(&self) -> Unit {
        match self {
            UnitType::Length => Unit::Inch,
            UnitType::Temperature => Unit::Celsius,
            UnitType::Volume => Unit::Litre,
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnitType {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNITS.parse_unit_type(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_unit_belongs_to_type() {
        for t in UnitType::ALL {
            let base = t.base_unit();
            assert_eq!(base.unit_type(), t);
            assert!(base.is_base());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", UnitType::Length), "LENGTH");
        assert_eq!(UnitType::Temperature.to_string(), "TEMPERATURE");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("volume".parse::<UnitType>(), Ok(UnitType::Volume));
        assert!("Volume_".parse::<UnitType>().is_err());
    }
}
