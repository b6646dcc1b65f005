//! Quantity type - a value with an associated unit

use std::fmt;
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};
use crate::{Unit, UnitType, MeasureError};

/// A numeric value with its unit of measure
///
/// Quantities are immutable: conversion produces a new quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    /// The numeric value
    pub value: f64,
    /// The unit of measurement
    pub unit: Unit,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Get the type of this quantity
    pub fn unit_type(&self) -> UnitType {
        self.unit.unit_type()
    }

    /// Value expressed in the base unit of its type
    pub fn base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Convert to another unit
    pub fn convert_to(&self, target: Unit) -> Result<Quantity, MeasureError> {
        crate::convert::convert(self, target)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
