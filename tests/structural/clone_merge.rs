//! Integration tests for clone and merge
//!
//! Tests aliasing behavior and the documented merge examples.

use trove_foundation::{ErrorKind, Record, Value};
use trove_structural::{
    ArrayMerge, CloneOptions, CombineOptions, clone_value, clone_with, deep_merge, deep_merge_with,
    equal, soft_merge,
};

fn nested_field(value: &Value, key: &str) -> Value {
    value.as_record().and_then(|r| r.get(key)).unwrap_or_default()
}

// =============================================================================
// Clone
// =============================================================================

#[test]
fn deep_clone_detaches_nested_records() {
    let original = Value::record([("inner", Value::record([("n", 1)]))]);
    let copy = clone_value(&original);

    assert!(equal(&nested_field(&copy, "inner"), &nested_field(&original, "inner")).unwrap());
    nested_field(&copy, "inner").as_record().unwrap().set("n", Value::Int(2));
    assert_eq!(
        nested_field(&original, "inner").as_record().unwrap().get("n"),
        Some(Value::Int(1))
    );
}

#[test]
fn shallow_clone_shares_nested_records() {
    let original = Value::record([("inner", Value::record([("n", 1)]))]);
    let copy = clone_with(&original, CloneOptions::shallow());

    nested_field(&copy, "inner").as_record().unwrap().set("n", Value::Int(2));
    assert_eq!(
        nested_field(&original, "inner").as_record().unwrap().get("n"),
        Some(Value::Int(2))
    );
}

// =============================================================================
// Merge
// =============================================================================

#[test]
fn soft_merge_example() {
    let base: Record = [("a", Value::Int(1)), ("b", Value::Int(2))].into_iter().collect();
    let overrides: Record = [("b", Value::Int(3)), ("c", Value::Int(4))].into_iter().collect();
    let merged = soft_merge(&base, &overrides);
    assert!(equal(&Value::Record(merged), &Value::record([("a", 1), ("b", 3)])).unwrap());
}

#[test]
fn deep_merge_examples() {
    let nested = deep_merge(&[
        Value::record([("a", Value::record([("x", 1)]))]),
        Value::record([("a", Value::record([("y", 2)]))]),
    ])
    .unwrap();
    assert!(equal(&nested, &Value::record([("a", Value::record([("x", 1), ("y", 2)]))])).unwrap());

    let arrays = deep_merge(&[
        Value::record([("a", Value::seq([1]))]),
        Value::record([("a", Value::seq([2]))]),
    ])
    .unwrap();
    assert!(equal(&arrays, &Value::record([("a", Value::seq([1, 2]))])).unwrap());
}

#[test]
fn deep_merge_arity() {
    assert!(matches!(deep_merge(&[]).unwrap_err().kind, ErrorKind::ArityMismatch { actual: 0, .. }));
    assert!(matches!(
        deep_merge(&[Value::record([("a", 1)])]).unwrap_err().kind,
        ErrorKind::ArityMismatch { actual: 1, .. }
    ));
}

#[test]
fn deep_merge_leaves_first_input_alone() {
    let first = Value::record([("a", Value::record([("x", 1)]))]);
    let _ = deep_merge(&[first.clone(), Value::record([("a", Value::record([("y", 2)]))])]).unwrap();
    assert!(equal(&first, &Value::record([("a", Value::record([("x", 1)]))])).unwrap());
}

#[test]
fn deep_merge_union_policy() {
    let merged = deep_merge_with(
        &[
            Value::record([("tags", Value::seq(["a", "b"]))]),
            Value::record([("tags", Value::seq(["b", "c"]))]),
        ],
        CombineOptions::default().with_arrays(ArrayMerge::Union),
    )
    .unwrap();
    assert!(equal(&merged, &Value::record([("tags", Value::seq(["a", "b", "c"]))])).unwrap());
}
