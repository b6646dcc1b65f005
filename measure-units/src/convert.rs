//! Conversion engine and the operations exposed to adapters
//!
//! `convert` works on already-resolved units. The `list_*` and
//! `convert_value` functions take raw identifiers, resolve them through the
//! registry and then delegate, so an adapter only ever hands over strings.

use crate::{Quantity, Unit, UnitType, MeasureError, UNITS};

/// Convert a quantity into the target unit
///
/// The value goes through the base value of its type:
/// `base = value * from.multiplicand + from.addend`, then
/// `result = (base - to.addend) / to.multiplicand`.
/// No rounding is applied.
pub fn convert(quantity: &Quantity, target: Unit) -> Result<Quantity, MeasureError> {
    let from = quantity.unit;
    if !from.is_compatible(&target) {
        return Err(MeasureError::IncompatibleUnits { from, to: target });
    }

    let value = target.from_base(quantity.base_value());
    tracing::trace!(%from, to = %target, input = quantity.value, output = value, "converted");
    Ok(Quantity::new(value, target))
}

/// Every unit type, in declaration order
pub fn list_unit_types() -> Vec<UnitType> {
    UNITS.all_unit_types()
}

/// Units of the named type, in declaration order
pub fn list_units_for_type(unit_type: &str) -> Result<Vec<Unit>, MeasureError> {
    let unit_type = UNITS.parse_unit_type(unit_type)?;
    Ok(UNITS.valid_units_of(unit_type))
}

/// Convert a raw value between two named units
pub fn convert_value(value: f64, from: &str, to: &str) -> Result<Quantity, MeasureError> {
    let from = UNITS.parse_unit(from)?;
    let to = UNITS.parse_unit(to)?;
    convert(&Quantity::new(value, from), to)
}
