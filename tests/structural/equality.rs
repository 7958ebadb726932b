//! Integration tests for deep equality
//!
//! Tests nested scenarios, cycles, options, and comparators.

use trove_foundation::{ErrorKind, Kind, Record, Seq, Value, ValueMap};
use trove_structural::{EqualOptions, equal, equal_with};

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn nested_record_scenario() {
    let make = |b: i64| {
        Value::record([(
            "a",
            Value::seq([Value::Int(1), Value::record([("b", Value::Int(b))])]),
        )])
    };
    assert!(equal(&make(2), &make(2)).unwrap());
    assert!(!equal(&make(2), &make(3)).unwrap());
}

#[test]
fn maps_with_container_values() {
    let a: ValueMap = [(Value::from("k"), Value::seq([1, 2]))].into_iter().collect();
    let b: ValueMap = [(Value::from("k"), Value::seq([1, 2]))].into_iter().collect();
    assert!(equal(&Value::Map(a), &Value::Map(b)).unwrap());
}

#[test]
fn map_keys_are_matched_by_identity() {
    let key = Value::seq([1]);
    let a = Value::map([(key.clone(), 1)]);
    let b = Value::map([(Value::seq([1]), 1)]);
    assert!(!equal(&a, &b).unwrap());
    assert!(equal(&a, &Value::map([(key, 1)])).unwrap());
}

#[test]
fn record_classes_do_not_affect_equality() {
    let a = Record::with_class("Point");
    a.set("x", Value::Int(1));
    let b = Value::record([("x", 1)]);
    assert!(equal(&Value::Record(a), &b).unwrap());
}

// =============================================================================
// Cycles
// =============================================================================

#[test]
fn cyclic_structures_compare_equal_to_themselves() {
    let seq = Seq::new();
    seq.push(Value::Seq(seq.clone()));
    let value = Value::Seq(seq);
    assert!(equal(&value, &value).unwrap());
}

#[test]
fn cycles_of_different_shape_are_unequal() {
    let a = Record::new();
    a.set("next", Value::Record(a.clone()));
    a.set("n", Value::Int(1));

    let b = Record::new();
    b.set("next", Value::Record(b.clone()));
    b.set("n", Value::Int(2));

    assert!(!equal(&Value::Record(a), &Value::Record(b)).unwrap());
}

#[test]
fn two_step_cycles_match() {
    let build = || {
        let x = Record::new();
        let y = Record::new();
        x.set("other", Value::Record(y.clone()));
        y.set("other", Value::Record(x.clone()));
        Value::Record(x)
    };
    assert!(equal(&build(), &build()).unwrap());
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn depth_limit_reports_path() {
    let deep = |leaf: i64| {
        let mut v = Value::Int(leaf);
        for _ in 0..3 {
            v = Value::seq([v]);
        }
        Value::record([("root", v)])
    };
    let options = EqualOptions::default().with_max_depth(2);
    let err = equal_with(&deep(1), &deep(1), &options).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DepthExceeded { limit: 2 }));
    assert_eq!(err.path(), ".root[0][0]");
}

#[test]
fn loose_mode_treats_nullish_alike_inside_containers() {
    let a = Value::record([("v", Value::Null)]);
    let b = Value::record([("v", Value::Undefined)]);
    assert!(!equal(&a, &b).unwrap());
    assert!(equal_with(&a, &b, &EqualOptions::loose()).unwrap());
}

#[test]
fn comparator_for_sequences() {
    let options = EqualOptions::default().with_comparator(Kind::Seq, |a, b| {
        a.as_seq().map(Seq::len) == b.as_seq().map(Seq::len)
    });
    assert!(equal_with(&Value::seq([1, 2]), &Value::seq([3, 4]), &options).unwrap());
    assert!(!equal_with(&Value::seq([1]), &Value::seq([3, 4]), &options).unwrap());
}
