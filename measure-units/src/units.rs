//! Unit registry - lookup, parsing and enumeration of the declared units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Unit, UnitType, MeasureError};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units and unit types
///
/// Keys are stored upper-cased; inputs are normalized the same way before
/// lookup, so callers never compare raw strings themselves.
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, Unit>,
    unit_types: HashMap<String, UnitType>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
            unit_types: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Every unit type with at least one unit, in declaration order
    pub fn all_unit_types(&self) -> Vec<UnitType> {
        let mut types: Vec<UnitType> = Vec::new();
        for unit in Unit::ALL {
            let t = unit.unit_type();
            if !types.contains(&t) {
                types.push(t);
            }
        }
        types
    }

    /// All units of the given type, in declaration order
    pub fn valid_units_of(&self, unit_type: UnitType) -> Vec<Unit> {
        Unit::ALL.iter()
            .copied()
            .filter(|u| u.unit_type() == unit_type)
            .collect()
    }

    /// Get a unit by identifier or alias (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Unit> {
        let key = normalize(name);
        self.units.get(&key)
            .or_else(|| self.aliases.get(&key))
            .copied()
    }

    /// Parse a unit identifier, failing with `UnknownUnit`
    pub fn parse_unit(&self, raw: &str) -> Result<Unit, MeasureError> {
        self.get(raw).ok_or_else(|| {
            tracing::debug!(input = raw, "unknown unit");
            MeasureError::UnknownUnit(raw.to_string())
        })
    }

    /// Parse a unit type identifier, failing with `UnknownUnitType`
    pub fn parse_unit_type(&self, raw: &str) -> Result<UnitType, MeasureError> {
        self.unit_types.get(&normalize(raw)).copied().ok_or_else(|| {
            tracing::debug!(input = raw, "unknown unit type");
            MeasureError::UnknownUnitType(raw.to_string())
        })
    }

    /// Canonical identifiers of all units, in declaration order
    pub fn unit_names(&self) -> Vec<&'static str> {
        Unit::ALL.iter().map(|u| u.name()).collect()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.name().to_string(), unit);
    }

    fn alias(&mut self, alias: &str, unit: Unit) {
        self.aliases.insert(normalize(alias), unit);
    }

    fn register_all_units(&mut self) {
        for unit in Unit::ALL {
            self.register(unit);
        }
        for t in UnitType::ALL {
            self.unit_types.insert(t.name().to_string(), t);
        }
        self.register_length_aliases();
        self.register_temperature_aliases();
        self.register_volume_aliases();
    }

    fn register_length_aliases(&mut self) {
        self.alias("inches", Unit::Inch);
        self.alias("foot", Unit::Feet);
        self.alias("yards", Unit::Yard);
        self.alias("millimeters", Unit::Millimeter);
        self.alias("millimetre", Unit::Millimeter);
        self.alias("miles", Unit::Mile);
        self.alias("centimeters", Unit::Centimeter);
        self.alias("centimetre", Unit::Centimeter);
        self.alias("meters", Unit::Meter);
        self.alias("metre", Unit::Meter);
        self.alias("kilometers", Unit::Kilometer);
        self.alias("kilometre", Unit::Kilometer);
    }

    fn register_temperature_aliases(&mut self) {
        self.alias("centigrade", Unit::Celsius);
    }

    fn register_volume_aliases(&mut self) {
        self.alias("liter", Unit::Litre);
        self.alias("litres", Unit::Litre);
        self.alias("liters", Unit::Litre);
        self.alias("milliliter", Unit::Millilitre);
        self.alias("millilitres", Unit::Millilitre);
        self.alias("milliliters", Unit::Millilitre);
        self.alias("gallons", Unit::Gallon);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_registry() {
        let reg = UnitRegistry::new();

        assert_eq!(reg.get("INCH"), Some(Unit::Inch));
        assert_eq!(reg.get("celsius"), Some(Unit::Celsius));

        // Alias lookup
        assert_eq!(reg.get("foot"), Some(Unit::Feet));
        assert_eq!(reg.get("Liter"), Some(Unit::Litre));

        assert!(reg.get("unknown_xyz").is_none());
    }

    #[test]
    fn test_parse_unit_case_insensitive() {
        let reg = UnitRegistry::new();
        let lower = reg.parse_unit("inch").unwrap();
        let upper = reg.parse_unit("INCH").unwrap();
        let mixed = reg.parse_unit("Inch").unwrap();
        assert_eq!(lower, Unit::Inch);
        assert_eq!(lower, upper);
        assert_eq!(upper, mixed);
        assert_eq!(reg.parse_unit(" millimeter ").unwrap(), Unit::Millimeter);
    }

    #[test]
    fn test_parse_unit_unknown() {
        let reg = UnitRegistry::new();
        assert_eq!(
            reg.parse_unit("MILLIMETER_"),
            Err(MeasureError::UnknownUnit("MILLIMETER_".to_string()))
        );
        assert!(reg.parse_unit("").is_err());
    }

    #[test]
    fn test_parse_unit_type() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.parse_unit_type("LENGTH").unwrap(), UnitType::Length);
        assert_eq!(reg.parse_unit_type("length").unwrap(), UnitType::Length);
        assert_eq!(reg.parse_unit_type("Volume").unwrap(), UnitType::Volume);
        assert_eq!(
            reg.parse_unit_type("Volume_"),
            Err(MeasureError::UnknownUnitType("Volume_".to_string()))
        );
        // Unit names are not type names
        assert!(reg.parse_unit_type("INCH").is_err());
    }

    #[test]
    fn test_all_unit_types() {
        let reg = UnitRegistry::new();
        let types = reg.all_unit_types();
        assert_eq!(types, vec![UnitType::Length, UnitType::Temperature, UnitType::Volume]);
        // Stable across calls
        assert_eq!(types, reg.all_unit_types());
    }

    #[test]
    fn test_valid_units_of_length() {
        let reg = UnitRegistry::new();
        assert_eq!(
            reg.valid_units_of(UnitType::Length),
            vec![
                Unit::Inch,
                Unit::Feet,
                Unit::Yard,
                Unit::Millimeter,
                Unit::Mile,
                Unit::Centimeter,
                Unit::Meter,
                Unit::Kilometer,
            ]
        );
    }

    #[test]
    fn test_valid_units_partition_all_units() {
        let reg = UnitRegistry::new();
        let mut seen = Vec::new();
        for t in reg.all_unit_types() {
            for unit in reg.valid_units_of(t) {
                assert_eq!(unit.unit_type(), t);
                assert!(!seen.contains(&unit));
                seen.push(unit);
            }
        }
        assert_eq!(seen.len(), Unit::ALL.len());
    }

    #[test]
    fn test_one_base_unit_per_type() {
        let reg = UnitRegistry::new();
        for t in reg.all_unit_types() {
            let bases: Vec<Unit> = reg.valid_units_of(t).into_iter().filter(|u| u.is_base()).collect();
            assert_eq!(bases, vec![t.base_unit()]);
        }
    }

    #[test]
    fn test_aliases_resolve_to_declared_units() {
        let reg = UnitRegistry::new();
        for (alias, unit) in &reg.aliases {
            assert_eq!(reg.get(alias), Some(*unit));
            // An alias never shadows a canonical identifier
            assert!(!reg.units.contains_key(alias));
        }
    }

    #[test]
    fn test_unit_names() {
        let names = UNITS.unit_names();
        assert_eq!(names.len(), Unit::ALL.len());
        assert_eq!(names[0], "INCH");
        assert!(names.contains(&"GALLON"));
    }
}
