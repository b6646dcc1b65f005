//! Property-based tests using QuickCheck

use measure_units::{convert, list_unit_types, list_units_for_type, MeasureError, Quantity, Unit};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};

#[derive(Debug, Clone, Copy)]
struct AnyUnit(Unit);

impl Arbitrary for AnyUnit {
    fn arbitrary(g: &mut Gen) -> Self {
        AnyUnit(*g.choose(&Unit::ALL).unwrap())
    }
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

/// Keep values in a range where relative error stays meaningful
fn usable(v: f64) -> bool {
    v.is_finite() && v.abs() < 1e12
}

quickcheck! {
    fn prop_identity_conversion(v: f64, unit: AnyUnit) -> TestResult {
        if !usable(v) {
            return TestResult::discard();
        }
        let q = convert(&Quantity::new(v, unit.0), unit.0).unwrap();
        TestResult::from_bool(q.unit == unit.0 && close(q.value, v))
    }

    fn prop_round_trip(v: f64, a: AnyUnit, b: AnyUnit) -> TestResult {
        if !usable(v) || a.0.unit_type() != b.0.unit_type() {
            return TestResult::discard();
        }
        let there = convert(&Quantity::new(v, a.0), b.0).unwrap();
        let back = convert(&there, a.0).unwrap();
        // Tolerance scales with the base value the round trip passes through
        let scale = v.abs().max(there.value.abs()).max(1.0);
        TestResult::from_bool((back.value - v).abs() <= 1e-9 * scale)
    }

    fn prop_cross_type_rejected(v: f64, a: AnyUnit, b: AnyUnit) -> TestResult {
        if a.0.unit_type() == b.0.unit_type() {
            return TestResult::discard();
        }
        let result = convert(&Quantity::new(v, a.0), b.0);
        TestResult::from_bool(result == Err(MeasureError::IncompatibleUnits { from: a.0, to: b.0 }))
    }

    fn prop_parse_ignores_case(unit: AnyUnit) -> bool {
        let name = unit.0.name();
        let lower = name.to_lowercase();
        let mut title = lower.clone();
        title[..1].make_ascii_uppercase();
        [name.to_string(), lower, title]
            .iter()
            .all(|s| measure_units::parse_unit(s) == Ok(unit.0))
    }
}

#[test]
fn prop_unit_types_distinct_and_stable() {
    let first = list_unit_types();
    for _ in 0..3 {
        assert_eq!(list_unit_types(), first);
    }
    for (i, t) in first.iter().enumerate() {
        assert!(!first[i + 1..].contains(t), "duplicate unit type {t}");
    }
}

#[test]
fn prop_units_by_type_partition() {
    let mut all: Vec<Unit> = Vec::new();
    for t in list_unit_types() {
        let units = list_units_for_type(t.name()).unwrap();
        assert!(units.iter().all(|u| u.unit_type() == t));
        all.extend(units);
    }
    all.sort();
    let mut expected = Unit::ALL.to_vec();
    expected.sort();
    assert_eq!(all, expected);
}
