//! Integration tests for shared containers and records
//!
//! Tests aliasing, snapshots, property descriptors, and accessors.

use trove_foundation::{Buffer, BufferKind, Func, Property, Record, Seq, Value, ValueMap, ValueSet};

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn handles_alias_the_same_sequence() {
    let seq = Seq::new();
    let alias = seq.clone();
    alias.push(Value::Int(1));
    assert_eq!(seq.len(), 1);
    assert!(seq.ptr_eq(&alias));
}

#[test]
fn snapshots_are_stable() {
    let seq: Seq = [1, 2, 3].into_iter().map(Value::from).collect();
    let before = seq.snapshot();
    seq.push(Value::Int(4));
    assert_eq!(before.len(), 3);
    assert_eq!(seq.len(), 4);
}

#[test]
fn sequence_editing() {
    let seq = Seq::new();
    seq.extend([Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert!(seq.set(0, Value::Int(9)));
    assert!(!seq.set(10, Value::Int(9)));
    assert_eq!(seq.remove(1), Some(Value::Int(2)));
    assert_eq!(seq.pop(), Some(Value::Int(3)));
    assert_eq!(seq.to_vec(), vec![Value::Int(9)]);
}

// =============================================================================
// Sets and Maps
// =============================================================================

#[test]
fn sets_deduplicate_by_same_value_zero() {
    let set = ValueSet::new();
    assert!(set.insert(Value::Float(f64::NAN)));
    assert!(!set.insert(Value::Float(f64::NAN)));
    assert!(set.insert(Value::Int(1)));
    assert!(!set.insert(Value::Float(1.0)));
    assert_eq!(set.len(), 2);
    assert!(set.remove(&Value::Int(1)));
}

#[test]
fn maps_accept_any_key() {
    let key = Value::seq([1]);
    let map = ValueMap::new();
    assert_eq!(map.insert(key.clone(), Value::from("a")), None);
    assert_eq!(map.insert(key.clone(), Value::from("b")), Some(Value::from("a")));
    assert_eq!(map.get(&key), Some(Value::from("b")));
    assert_eq!(map.get(&Value::seq([1])), None);
    assert_eq!(map.keys(), vec![key]);
}

// =============================================================================
// Buffers
// =============================================================================

#[test]
fn buffers_check_alignment() {
    assert!(Buffer::new(BufferKind::U32, vec![0; 8]).is_some());
    assert!(Buffer::new(BufferKind::U32, vec![0; 6]).is_none());
    let b = Buffer::zeroed(BufferKind::F64, 3);
    assert_eq!(b.byte_len(), 24);
    assert_eq!(b.len(), 3);
    assert!(!b.write(20, &[1; 8]));
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn record_descriptors() {
    let r = Record::new();
    r.set("visible", Value::Int(1));
    r.define("hidden", Property::data(Value::Int(2)).with_enumerable(false));
    r.define("locked", Property::data(Value::Int(3)).with_configurable(false));

    assert_eq!(r.keys().len(), 2);
    assert_eq!(r.own_keys().len(), 3);
    assert!(r.remove("locked").is_none());
    assert!(r.remove("hidden").is_some());
}

#[test]
fn accessors_see_the_record() {
    let r = Record::new();
    r.set("celsius", Value::Int(100));
    let get = Func::new("fahrenheit", |args| {
        let c = args[0]
            .as_record()
            .and_then(|r| r.get("celsius"))
            .and_then(|v| v.as_int())
            .unwrap_or(0);
        Ok(Value::Int(c * 9 / 5 + 32))
    });
    r.define("fahrenheit", Property::accessor(Some(get), None));

    assert_eq!(r.get("fahrenheit"), Some(Value::Int(212)));
    assert!(!r.set("fahrenheit", Value::Int(0)));
}
