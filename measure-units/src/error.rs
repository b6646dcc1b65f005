//! Conversion errors
//!
//! Every failure is a client-input error: an identifier that does not resolve,
//! or a pair of units that belong to different types. Nothing here is
//! transient, so callers should report rather than retry.

use thiserror::Error;
use crate::Unit;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT_TYPE: &str = "UNKNOWN_UNIT_TYPE";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
}

/// Errors that can occur during lookup or conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// Input does not name any unit type
    #[error("unknown unit type: {0}")]
    UnknownUnitType(String),

    /// Input does not name any unit
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Source and target units belong to different types
    #[error("can not convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },
}

impl MeasureError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            MeasureError::UnknownUnitType(_) => codes::UNKNOWN_UNIT_TYPE,
            MeasureError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            MeasureError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
        }
    }
}
