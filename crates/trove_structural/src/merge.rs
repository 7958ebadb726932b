//! Soft merge and deep merge of records.
//!
//! Both operations build new records and leave their inputs untouched.

use tracing::debug;
use trove_foundation::{Error, ErrorContext, Property, Record, Result, Seq, Value};

use crate::clone::{CloneOptions, clone_with, shallow_record};

/// Configuration for [`soft_merge_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoftMergeOptions {
    /// Recurse when both sides hold records.
    pub deep: bool,
}

impl Default for SoftMergeOptions {
    fn default() -> Self {
        Self { deep: true }
    }
}

impl SoftMergeOptions {
    /// Replaces nested records wholesale instead of merging them.
    #[must_use]
    pub const fn shallow() -> Self {
        Self { deep: false }
    }
}

/// How [`deep_merge_with`] combines two sequences under the same key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayMerge {
    /// Left items followed by right items.
    #[default]
    Concat,
    /// Right items only.
    Replace,
    /// Left then right, keeping the first occurrence of each value.
    Union,
}

/// Configuration for [`deep_merge_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombineOptions {
    /// Sequence combination policy.
    pub arrays: ArrayMerge,
}

impl CombineOptions {
    /// Builder method to set the sequence policy.
    #[must_use]
    pub const fn with_arrays(mut self, arrays: ArrayMerge) -> Self {
        self.arrays = arrays;
        self
    }
}

// =============================================================================
// Soft merge
// =============================================================================

/// Overlays `overrides` onto `base` without introducing new keys.
#[must_use]
pub fn soft_merge(base: &Record, overrides: &Record) -> Record {
    soft_merge_with(base, overrides, SoftMergeOptions::default())
}

/// Overlays `overrides` onto `base`.
///
/// Only the enumerable string keys of `base` appear in the result. A key
/// takes the override's value when `overrides` has it, otherwise the base's.
/// With `deep`, keys holding records on both sides are soft-merged
/// recursively, whatever their class.
#[must_use]
pub fn soft_merge_with(base: &Record, overrides: &Record, options: SoftMergeOptions) -> Record {
    let merged = Record::new();
    for key in base.keys() {
        let base_value = base.get(&key).unwrap_or_default();
        let value = match overrides.get(&key) {
            Some(override_value) => match (options.deep, &base_value, &override_value) {
                (true, Value::Record(b), Value::Record(o)) => {
                    Value::Record(soft_merge_with(b, o, options))
                }
                _ => override_value,
            },
            None => base_value,
        };
        merged.set(key, value);
    }
    merged
}

// =============================================================================
// Deep merge
// =============================================================================

/// Folds `values` left to right into a fresh value.
///
/// # Errors
///
/// Returns [`ErrorKind::ArityMismatch`](trove_foundation::ErrorKind::ArityMismatch)
/// when fewer than two values are given.
pub fn deep_merge(values: &[Value]) -> Result<Value> {
    deep_merge_with(values, CombineOptions::default())
}

/// Folds `values` left to right into a fresh value.
///
/// For each key of an incoming record: two sequences are combined according
/// to `options.arrays`, two records are merged recursively, anything else is
/// overwritten by the incoming value. Top-level pairs follow the same rule.
///
/// # Errors
///
/// Returns [`ErrorKind::ArityMismatch`](trove_foundation::ErrorKind::ArityMismatch)
/// when fewer than two values are given.
pub fn deep_merge_with(values: &[Value], options: CombineOptions) -> Result<Value> {
    let [first, rest @ ..] = values else {
        return Err(arity_error(0));
    };
    if rest.is_empty() {
        return Err(arity_error(1));
    }

    debug!(inputs = values.len(), arrays = ?options.arrays, "deep merge");

    let mut accumulator = clone_with(first, CloneOptions::shallow());
    for incoming in rest {
        if let (Value::Record(target), Value::Record(right)) = (&accumulator, incoming) {
            merge_into(target, right, options);
            continue;
        }
        accumulator = combine(&accumulator, incoming, options);
        if accumulator.same_value(incoming) {
            accumulator = clone_with(incoming, CloneOptions::shallow());
        }
    }
    Ok(accumulator)
}

fn arity_error(actual: usize) -> Error {
    Error::arity_mismatch("at least 2".into(), actual)
        .with_context(ErrorContext::new().with_source("deep_merge"))
}

/// Combines two values without writing to either. Records are merged into a
/// shallow copy of `current`.
fn combine(current: &Value, incoming: &Value, options: CombineOptions) -> Value {
    match (current, incoming) {
        (Value::Seq(left), Value::Seq(right)) => {
            Value::Seq(combine_seqs(left, right, options.arrays))
        }
        (Value::Record(left), Value::Record(right)) => {
            let target = shallow_record(left);
            merge_into(&target, right, options);
            Value::Record(target)
        }
        _ => incoming.clone(),
    }
}

/// `target` is always a copy owned by the merge, so merged keys are defined
/// as plain data even where the copy inherited a read-only or accessor slot.
fn merge_into(target: &Record, incoming: &Record, options: CombineOptions) {
    for key in incoming.keys() {
        let next = incoming.get(&key).unwrap_or_default();
        let value = match target.get(&key) {
            Some(existing) => combine(&existing, &next, options),
            None => next,
        };
        target.define(key, Property::data(value));
    }
}

fn combine_seqs(left: &Seq, right: &Seq, policy: ArrayMerge) -> Seq {
    match policy {
        ArrayMerge::Concat => left.snapshot().into_iter().chain(right.snapshot()).collect(),
        ArrayMerge::Replace => right.snapshot().into_iter().collect(),
        ArrayMerge::Union => {
            let merged = Seq::new();
            for item in left.snapshot().into_iter().chain(right.snapshot()) {
                if !merged.snapshot().iter().any(|seen| seen.same_value(&item)) {
                    merged.push(item);
                }
            }
            merged
        }
    }
}
