//! Kind-preserving clone.
//!
//! Containers are rebuilt as fresh handles of the same kind. Dates, patterns,
//! functions, and primitives are immutable and returned as is.
//!
//! There is no cycle detection: a deep clone of a self-referencing container
//! recurses without bound. Callers holding cyclic data should clone shallowly.

use trove_foundation::{Property, Record, Slot, Value, ValueMap};

/// Configuration for [`clone_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloneOptions {
    /// Clone nested containers too. When false only the outermost container
    /// is copied and nested containers are shared.
    pub deep: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self { deep: true }
    }
}

impl CloneOptions {
    /// Copies the outermost container only.
    #[must_use]
    pub const fn shallow() -> Self {
        Self { deep: false }
    }
}

/// Deep-clones a value.
#[must_use]
pub fn clone_value(value: &Value) -> Value {
    clone_with(value, CloneOptions::default())
}

/// Clones a value according to `options`.
#[must_use]
pub fn clone_with(value: &Value, options: CloneOptions) -> Value {
    let element = |v: &Value| {
        if options.deep {
            clone_with(v, options)
        } else {
            v.clone()
        }
    };

    match value {
        Value::Seq(seq) => Value::Seq(seq.snapshot().iter().map(element).collect()),
        Value::Set(set) => Value::Set(set.snapshot().iter().map(element).collect()),
        Value::Map(map) => Value::Map(
            map.snapshot()
                .iter()
                .map(|(k, v)| (k.clone(), element(v)))
                .collect::<ValueMap>(),
        ),
        Value::Buffer(buffer) => Value::Buffer(buffer.duplicate()),
        Value::Record(record) => Value::Record(clone_record(record, &element)),
        other => other.clone(),
    }
}

/// Copies a record's own properties, sharing their values.
pub(crate) fn shallow_record(record: &Record) -> Record {
    clone_record(record, &Value::clone)
}

/// Copies every own property with its descriptor.
fn clone_record(record: &Record, element: &impl Fn(&Value) -> Value) -> Record {
    let copy = Record::with_optional_class(record.class());
    for (key, property) in &record.properties() {
        let slot = match &property.slot {
            Slot::Data { value, writable } => Slot::Data {
                value: element(value),
                writable: *writable,
            },
            accessor @ Slot::Accessor { .. } => accessor.clone(),
        };
        copy.define(
            key.clone(),
            Property {
                slot,
                ..property.clone()
            },
        );
    }
    copy
}
