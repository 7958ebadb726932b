//! Property tests for structural operations
//!
//! Values are generated as plain `Shape` trees and materialized twice, so
//! every comparison runs between distinct but structurally identical handles.

use proptest::prelude::*;
use trove_foundation::{Property, Record, Seq, Value};
use trove_structural::{CloneOptions, EqualOptions, clone_value, clone_with, diff, equal, equal_with};

/// Integers past this lose precision as f64.
const EXACT_LIMIT: i64 = 1 << 53;

#[derive(Clone, Debug)]
enum Shape {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Shape>),
    Bag(Vec<i64>),
    Object(Vec<(String, Shape)>),
    /// Visible fields followed by non-enumerable ones.
    Hidden(Vec<(String, Shape)>, Vec<(String, Shape)>),
    Tagged(Vec<(String, Shape)>),
}

fn number() -> impl Strategy<Value = Shape> {
    prop_oneof![
        any::<i64>().prop_map(Shape::Int),
        (-3i64..=3).prop_map(|d| Shape::Int(EXACT_LIMIT + d)),
        (-3i64..=3).prop_map(|d| Shape::Int(-EXACT_LIMIT + d)),
        Just(Shape::Float(0.0)),
        Just(Shape::Float(-0.0)),
        Just(Shape::Int(0)),
        Just(Shape::Float(9_007_199_254_740_992.0)),
    ]
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        Just(Shape::Null),
        any::<bool>().prop_map(Shape::Bool),
        number(),
        any::<f64>().prop_map(Shape::Float),
        "[a-z]{0,6}".prop_map(Shape::Text),
        prop::collection::vec(-5i64..5, 0..5).prop_map(Shape::Bag),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::List),
            prop::collection::vec(("[a-d]", inner.clone()), 0..4).prop_map(Shape::Object),
            (
                prop::collection::vec(("[a-c]", inner.clone()), 0..3),
                prop::collection::vec(("[a-c]", inner.clone()), 1..3),
            )
                .prop_map(|(visible, hidden)| Shape::Hidden(visible, hidden)),
            prop::collection::vec(("[a-c]", inner), 0..3).prop_map(Shape::Tagged),
        ]
    })
}

fn build(shape: &Shape) -> Value {
    match shape {
        Shape::Null => Value::Null,
        Shape::Bool(b) => Value::Bool(*b),
        Shape::Int(n) => Value::Int(*n),
        Shape::Float(n) => Value::Float(*n),
        Shape::Text(s) => Value::from(s.as_str()),
        Shape::List(items) => Value::Seq(items.iter().map(build).collect::<Seq>()),
        Shape::Bag(items) => Value::set(items.iter().copied()),
        Shape::Object(fields) => Value::Record(fill(Record::new(), fields)),
        Shape::Hidden(visible, hidden) => {
            let record = fill(Record::new(), visible);
            for (key, field) in hidden {
                record.define(key.as_str(), Property::data(build(field)).with_enumerable(false));
            }
            Value::Record(record)
        }
        Shape::Tagged(fields) => Value::Record(fill(Record::with_class("Tagged"), fields)),
    }
}

fn fill(record: Record, fields: &[(String, Shape)]) -> Record {
    for (key, field) in fields {
        record.set(key.as_str(), build(field));
    }
    record
}

proptest! {
    #[test]
    fn equality_is_reflexive(s in shape()) {
        let v = build(&s);
        prop_assert!(equal(&v, &v).unwrap());
        prop_assert!(equal(&v, &build(&s)).unwrap());
    }

    #[test]
    fn equality_is_symmetric(a in shape(), b in shape()) {
        let (x, y) = (build(&a), build(&b));
        prop_assert_eq!(equal(&x, &y).unwrap(), equal(&y, &x).unwrap());
    }

    #[test]
    fn fast_path_agrees_with_structural(a in shape(), b in shape()) {
        let fast = EqualOptions::default().with_fast_path(true);
        let (x, y) = (build(&a), build(&b));
        prop_assert_eq!(equal_with(&x, &y, &fast).unwrap(), equal(&x, &y).unwrap());
    }

    #[test]
    fn fast_path_agrees_on_flat_numbers(l in number(), r in number()) {
        let fast = EqualOptions::default().with_fast_path(true);
        let x = Value::record([("n", build(&l))]);
        let y = Value::record([("n", build(&r))]);
        prop_assert_eq!(equal_with(&x, &y, &fast).unwrap(), equal(&x, &y).unwrap());
    }

    #[test]
    fn clones_are_equal(s in shape()) {
        let v = build(&s);
        prop_assert!(equal(&v, &clone_value(&v)).unwrap());
        prop_assert!(equal(&v, &clone_with(&v, CloneOptions::shallow())).unwrap());
    }

    #[test]
    fn diff_is_empty_exactly_when_equal(a in shape(), b in shape()) {
        let (x, y) = (build(&a), build(&b));
        prop_assert_eq!(diff(&x, &y).unwrap().is_empty(), equal(&x, &y).unwrap());
    }

    #[test]
    fn set_order_is_irrelevant(items in prop::collection::vec(-20i64..20, 0..10)) {
        let forward = Value::set(items.iter().copied());
        let backward = Value::set(items.iter().rev().copied());
        prop_assert!(equal(&forward, &backward).unwrap());
    }
}
