//! Canonical serialization for the equality fast path.
//!
//! Only plain data serializes: finite numbers, strings, booleans, null,
//! sequences, and plain records with data properties. Record keys are
//! emitted sorted and every number as f64, so two structurally equal plain
//! values produce identical bytes. Integers beyond 2^53 have no exact f64
//! form and are rejected, and `-0.0` is written as `0.0`. Anything else is a
//! serialization error and the caller falls back to the structural walk.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};
use trove_foundation::{PropertyKey, Value};

/// Largest magnitude an `i64` can have and still round-trip through `f64`.
const MAX_EXACT_INT: i64 = 1 << 53;

struct Canonical<'a> {
    value: &'a Value,
    depth: usize,
    max_depth: usize,
}

impl Canonical<'_> {
    fn child<'b>(&self, value: &'b Value) -> Canonical<'b> {
        Canonical {
            value,
            depth: self.depth + 1,
            max_depth: self.max_depth,
        }
    }
}

impl Serialize for Canonical<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.depth > self.max_depth {
            return Err(S::Error::custom("depth limit"));
        }
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) if n.unsigned_abs() <= MAX_EXACT_INT.unsigned_abs() => {
                serializer.serialize_f64(*n as f64)
            }
            Value::Int(_) => Err(S::Error::custom("integer outside exact f64 range")),
            Value::Float(n) if n.is_finite() => {
                serializer.serialize_f64(if *n == 0.0 { 0.0 } else { *n })
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Seq(seq) => {
                let items = seq.snapshot();
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in &items {
                    out.serialize_element(&self.child(item))?;
                }
                out.end()
            }
            Value::Record(record) if record.is_plain() => {
                let mut fields = Vec::new();
                for (key, property) in &record.properties() {
                    if !property.enumerable {
                        continue;
                    }
                    let PropertyKey::String(name) = key else {
                        return Err(S::Error::custom("symbol key"));
                    };
                    let Some(value) = property.value() else {
                        return Err(S::Error::custom("accessor property"));
                    };
                    fields.push((name.clone(), value.clone()));
                }
                fields.sort_by(|a, b| a.0.cmp(&b.0));

                let mut out = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in &fields {
                    out.serialize_entry(&**name, &self.child(value))?;
                }
                out.end()
            }
            other => Err(S::Error::custom(format!("{} is not plain data", other.kind()))),
        }
    }
}

/// Serializes `value` canonically, or `None` if it is not plain data.
pub(crate) fn canonical_bytes(value: &Value, max_depth: usize) -> Option<Vec<u8>> {
    rmp_serde::to_vec(&Canonical {
        value,
        depth: 0,
        max_depth,
    })
    .ok()
}
