//! Integration tests for Value
//!
//! Tests kinds, truthiness, same-value-zero comparison, and debug output.

use std::sync::Arc;

use trove_foundation::{Func, Interner, Kind, Pattern, Record, TypeOf, Value};

// =============================================================================
// Kinds
// =============================================================================

#[test]
fn numbers_share_one_kind() {
    assert_eq!(Value::Int(1).kind(), Kind::Number);
    assert_eq!(Value::Float(1.5).kind(), Kind::Number);
    assert_eq!(Value::Int(1).type_of(), TypeOf::Number);
}

#[test]
fn containers_are_objects() {
    for v in [
        Value::seq([1]),
        Value::set([1]),
        Value::map([(1, 2)]),
        Value::record([("a", 1)]),
        Value::Null,
    ] {
        assert_eq!(v.type_of(), TypeOf::Object, "{v:?}");
    }
    assert_eq!(Value::Fn(Func::new("f", |_| Ok(Value::Null))).type_of(), TypeOf::Function);
    assert_eq!(Value::Undefined.type_of(), TypeOf::Undefined);
}

#[test]
fn record_kind_carries_class() {
    let point = Value::Record(Record::with_class("Point"));
    assert_eq!(point.kind(), Kind::class("Point"));
    assert_eq!(point.kind().to_string(), "record<Point>");
    assert_eq!(point.kind().tag(), Value::record([("a", 1)]).kind().tag());
}

// =============================================================================
// Truthiness
// =============================================================================

#[test]
fn falsy_values() {
    for v in [
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::Float(f64::NAN),
        Value::from(""),
    ] {
        assert!(!v.is_truthy(), "{v:?} should be falsy");
    }
}

#[test]
fn empty_containers_are_truthy() {
    assert!(Value::seq(Vec::<Value>::new()).is_truthy());
    assert!(Value::Record(Record::new()).is_truthy());
}

// =============================================================================
// Same-value-zero
// =============================================================================

#[test]
fn same_value_zero_numbers() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_eq!(Value::Float(0.0), Value::Float(-0.0));
    assert_eq!(Value::Int(2), Value::Float(2.0));
    assert_ne!(Value::Int(2), Value::from("2"));
}

#[test]
fn containers_compare_by_identity() {
    let a = Value::seq([1, 2]);
    let b = Value::seq([1, 2]);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn symbols_compare_by_id() {
    let mut symbols = Interner::new();
    let a = symbols.intern("tag");
    let b = symbols.intern("tag");
    let c = symbols.unique("tag");
    assert_eq!(Value::Symbol(a), Value::Symbol(b));
    assert_ne!(Value::Symbol(a), Value::Symbol(c));
}

#[test]
fn patterns_compare_by_source_and_flags() {
    let a = Value::Pattern(Pattern::new("x+", "gi").unwrap());
    let b = Value::Pattern(Pattern::new("x+", "ig").unwrap());
    assert_eq!(a, b);
}

// =============================================================================
// Conversions and Display
// =============================================================================

#[test]
fn option_converts_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Int(3));
}

#[test]
fn string_accessors() {
    let v = Value::String(Arc::from("hello"));
    assert_eq!(v.as_str(), Some("hello"));
    assert_eq!(v.to_string(), "hello");
    assert_eq!(format!("{v:?}"), "\"hello\"");
}

#[test]
fn debug_output_is_bounded_for_cycles() {
    let r = Record::new();
    r.set("me", Value::Record(r.clone()));
    let text = format!("{:?}", Value::Record(r));
    assert!(text.contains('…'));
}
