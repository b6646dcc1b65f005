//! Measure Units - Unit Registry and Conversion Engine
//!
//! Converts a value expressed in one unit into the equivalent value in another
//! unit of the same type. Every unit carries an affine transform to the base
//! unit of its type:
//!
//! `base = value * multiplicand + addend`
//!
//! Conversion goes through the base value, so any two units of the same type
//! are mutually convertible. Converting across types is rejected.
//!
//! Types:
//! - Length (INCH, FEET, YARD, MILLIMETER, MILE, CENTIMETER, METER, KILOMETER)
//! - Temperature (CELSIUS, FAHRENHEIT, KELVIN)
//! - Volume (LITRE, MILLILITRE, GALLON)
//!
//! The registry is immutable after initialization and every operation is a
//! pure function, so a single registry can be shared across threads freely.

mod unit_type;
mod unit;
mod quantity;
mod convert;
mod error;
mod units;

pub use unit_type::UnitType;
pub use unit::Unit;
pub use quantity::Quantity;
pub use error::{MeasureError, codes};
pub use units::{UnitRegistry, UNITS};
pub use convert::{convert, convert_value, list_unit_types, list_units_for_type};

/// Parse a unit identifier, case-insensitively
pub fn parse_unit(raw: &str) -> Result<Unit, MeasureError> {
    UNITS.parse_unit(raw)
}

/// Parse a unit type identifier, case-insensitively
pub fn parse_unit_type(raw: &str) -> Result<UnitType, MeasureError> {
    UNITS.parse_unit_type(raw)
}
