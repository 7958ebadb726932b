//! Deep structural equality.
//!
//! Comparison walks both values in lockstep, dispatching on [`Kind`]:
//!
//! 1. same-value-zero identical → equal
//! 2. null/undefined handling (`strict` keeps them apart)
//! 3. differing primitive category → unequal; primitives stop here
//! 4. a registered [`Comparator`] for the left kind decides
//! 5. differing structural tag → unequal
//! 6. optional canonical fast path for plain records
//! 7. cycle guard, then depth ceiling, then a kind-specific walk
//!
//! Reference cycles are tolerated: a pair of containers that is already being
//! compared further up the stack is assumed equal.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, trace};
use trove_foundation::{Error, Identity, Kind, Result, TypeOf, Value};

use crate::canonical::canonical_bytes;

/// Custom comparison for one kind.
pub type Comparator = Rc<dyn Fn(&Value, &Value) -> bool>;

/// Comparators keyed by concrete kind.
#[derive(Clone, Default)]
pub struct Comparators(HashMap<Kind, Comparator>);

impl Comparators {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a comparator, replacing any previous one for `kind`.
    pub fn insert(&mut self, kind: Kind, comparator: impl Fn(&Value, &Value) -> bool + 'static) {
        self.0.insert(kind, Rc::new(comparator));
    }

    /// Returns the comparator for `kind`.
    #[must_use]
    pub fn get(&self, kind: &Kind) -> Option<&Comparator> {
        self.0.get(kind)
    }

    /// Returns the number of registered comparators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no comparator is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Comparators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Configuration for [`equal_with`].
#[derive(Clone, Debug)]
pub struct EqualOptions {
    /// Keep null and undefined distinct.
    pub strict: bool,
    /// Try canonical serialization before walking plain records.
    pub fast_path: bool,
    /// Container nesting past this depth is an error.
    pub max_depth: usize,
    /// Per-kind overrides.
    pub comparators: Comparators,
}

impl Default for EqualOptions {
    fn default() -> Self {
        Self {
            strict: true,
            fast_path: false,
            max_depth: 100,
            comparators: Comparators::new(),
        }
    }
}

impl EqualOptions {
    /// Non-strict comparison: null and undefined are interchangeable.
    #[must_use]
    pub fn loose() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Builder method to set strictness.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to enable the canonical fast path.
    #[must_use]
    pub fn with_fast_path(mut self, fast_path: bool) -> Self {
        self.fast_path = fast_path;
        self
    }

    /// Builder method to set the depth ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method to register a comparator.
    #[must_use]
    pub fn with_comparator(
        mut self,
        kind: Kind,
        comparator: impl Fn(&Value, &Value) -> bool + 'static,
    ) -> Self {
        self.comparators.insert(kind, comparator);
        self
    }
}

/// Compares two values structurally with default options.
///
/// # Errors
///
/// Returns [`ErrorKind::DepthExceeded`](trove_foundation::ErrorKind::DepthExceeded)
/// if containers nest deeper than 100 levels.
pub fn equal(a: &Value, b: &Value) -> Result<bool> {
    equal_with(a, b, &EqualOptions::default())
}

/// Compares two values structurally.
///
/// # Errors
///
/// Returns [`ErrorKind::DepthExceeded`](trove_foundation::ErrorKind::DepthExceeded)
/// if containers nest deeper than `options.max_depth`. The error context
/// holds the path to the offending container.
pub fn equal_with(a: &Value, b: &Value, options: &EqualOptions) -> Result<bool> {
    Walk::new(options).compare(a, b, 0)
}

/// Traversal state for one top-level comparison.
struct Walk<'o> {
    options: &'o EqualOptions,
    /// Container pairs currently on the comparison stack.
    in_progress: HashMap<Identity, HashSet<Identity>>,
}

impl<'o> Walk<'o> {
    fn new(options: &'o EqualOptions) -> Self {
        Self {
            options,
            in_progress: HashMap::new(),
        }
    }

    fn is_in_progress(&self, a: Identity, b: Identity) -> bool {
        let paired = |x: Identity, y: Identity| {
            self.in_progress
                .get(&x)
                .is_some_and(|partners| partners.contains(&y))
        };
        paired(a, b) || paired(b, a)
    }

    fn enter(&mut self, a: Identity, b: Identity) {
        self.in_progress.entry(a).or_default().insert(b);
    }

    fn exit(&mut self, a: Identity, b: Identity) {
        if let Some(partners) = self.in_progress.get_mut(&a) {
            partners.remove(&b);
            if partners.is_empty() {
                self.in_progress.remove(&a);
            }
        }
    }

    fn compare(&mut self, a: &Value, b: &Value, depth: usize) -> Result<bool> {
        if a.same_value(b) {
            return Ok(true);
        }

        if a.is_nullish() || b.is_nullish() {
            return Ok(!self.options.strict && a.is_nullish() && b.is_nullish());
        }

        // Primitives and functions that are not same-value are unequal.
        if a.type_of() != b.type_of() || a.type_of() != TypeOf::Object {
            return Ok(false);
        }

        let kind = a.kind();
        if let Some(comparator) = self.options.comparators.get(&kind) {
            return Ok(comparator(a, b));
        }

        if kind.tag() != b.kind().tag() {
            return Ok(false);
        }

        if self.options.fast_path {
            if let Some(equal) = self.fast_path(a, b, depth) {
                return Ok(equal);
            }
        }

        let pair = a.identity().zip(b.identity());
        if let Some((ia, ib)) = pair {
            if self.is_in_progress(ia, ib) {
                return Ok(true);
            }
        }

        if depth > self.options.max_depth {
            debug!(limit = self.options.max_depth, "equality depth limit exceeded");
            return Err(Error::depth_exceeded(self.options.max_depth));
        }

        if let Some((ia, ib)) = pair {
            self.enter(ia, ib);
        }
        let result = self.compare_contents(a, b, depth);
        if let Some((ia, ib)) = pair {
            self.exit(ia, ib);
        }
        result
    }

    /// Compares plain records by canonical bytes; `None` if either side
    /// does not serialize.
    fn fast_path(&self, a: &Value, b: &Value, depth: usize) -> Option<bool> {
        let (Value::Record(x), Value::Record(y)) = (a, b) else {
            return None;
        };
        if !x.is_plain() || !y.is_plain() {
            return None;
        }
        let remaining = self.options.max_depth.saturating_sub(depth);
        match (canonical_bytes(a, remaining), canonical_bytes(b, remaining)) {
            (Some(left), Some(right)) => Some(left == right),
            _ => {
                trace!("fast path unavailable, comparing structurally");
                None
            }
        }
    }

    fn compare_contents(&mut self, a: &Value, b: &Value, depth: usize) -> Result<bool> {
        let next = depth + 1;
        match (a, b) {
            (Value::Seq(x), Value::Seq(y)) => {
                let (xs, ys) = (x.snapshot(), y.snapshot());
                if xs.len() != ys.len() {
                    return Ok(false);
                }
                for (i, (l, r)) in xs.iter().zip(ys.iter()).enumerate() {
                    if !self
                        .compare(l, r, next)
                        .map_err(|e| e.with_frame(format!("[{i}]")))?
                    {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Value::Map(x), Value::Map(y)) => {
                if x.len() != y.len() {
                    return Ok(false);
                }
                for (key, l) in &x.snapshot() {
                    let Some(r) = y.get(key) else {
                        return Ok(false);
                    };
                    if !self
                        .compare(l, &r, next)
                        .map_err(|e| e.with_frame(format!("[{key:?}]")))?
                    {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Value::Set(x), Value::Set(y)) => {
                let (xs, ys) = (x.snapshot(), y.snapshot());
                if xs.len() != ys.len() {
                    return Ok(false);
                }
                for l in &xs {
                    let mut found = false;
                    for r in &ys {
                        if self
                            .compare(l, r, next)
                            .map_err(|e| e.with_frame(format!("{{{l:?}}}")))?
                        {
                            found = true;
                            break;
                        }
                    }
                    if !found {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Value::Buffer(x), Value::Buffer(y)) => Ok(x.kind() == y.kind()
                && x.byte_len() == y.byte_len()
                && x.with_bytes(|xb| y.with_bytes(|yb| xb == yb))),
            (Value::Date(x), Value::Date(y)) => Ok(x.timestamp_millis() == y.timestamp_millis()),
            (Value::Pattern(x), Value::Pattern(y)) => {
                Ok(x.source() == y.source() && x.flags() == y.flags())
            }
            (Value::Record(x), Value::Record(y)) => {
                let keys = x.keys();
                let other_keys: HashSet<Arc<str>> = y.keys().into_iter().collect();
                if keys.len() != other_keys.len() {
                    return Ok(false);
                }
                for key in &keys {
                    if !other_keys.contains(key) {
                        return Ok(false);
                    }
                    let l = x.get(key).unwrap_or_default();
                    let r = y.get(key).unwrap_or_default();
                    if !self
                        .compare(&l, &r, next)
                        .map_err(|e| e.with_frame(format!(".{key}")))?
                    {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
