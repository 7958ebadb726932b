//! Structural diff.
//!
//! Walks records by enumerable key and sequences by index, reporting leaf
//! changes with their path from the root.

use std::fmt;
use std::sync::Arc;

use tracing::trace;
use trove_foundation::{Error, Result, Value};

use crate::equal::{EqualOptions, equal_with};

// =============================================================================
// Paths
// =============================================================================

/// One step from a container into a child.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Record property.
    Key(Arc<str>),
    /// Sequence index.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, ".{key}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Location of a change, outermost segment first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The empty path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended by `segment`.
    #[must_use]
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "$");
        }
        for segment in &self.0 {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Diff Types
// =============================================================================

/// A change at one path.
#[derive(Clone, Debug)]
pub struct Change {
    /// Where the change happened.
    pub path: Path,
    /// The old value (None if newly added).
    pub old: Option<Value>,
    /// The new value (None if removed).
    pub new: Option<Value>,
}

impl Change {
    /// Creates a new change.
    #[must_use]
    pub fn new(path: Path, old: Option<Value>, new: Option<Value>) -> Self {
        Self { path, old, new }
    }

    /// Returns true if this is an addition.
    #[must_use]
    pub fn is_added(&self) -> bool {
        self.old.is_none() && self.new.is_some()
    }

    /// Returns true if this is a removal.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.old.is_some() && self.new.is_none()
    }

    /// Returns true if this is a modification.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.old.is_some() && self.new.is_some()
    }
}

/// Every change between two values, in traversal order.
#[derive(Clone, Debug, Default)]
pub struct ValueDiff {
    /// The changes.
    pub changes: Vec<Change>,
}

impl ValueDiff {
    /// Returns true if the values are structurally equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns the number of changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns the change at `path`, if any.
    #[must_use]
    pub fn at(&self, path: &str) -> Option<&Change> {
        self.changes.iter().find(|c| c.path.to_string() == path)
    }

    /// Generates a one-line-per-category summary.
    #[must_use]
    pub fn summary(&self) -> String {
        use std::fmt::Write;

        if self.is_empty() {
            return "No differences".to_string();
        }

        let count = |pred: fn(&Change) -> bool| self.changes.iter().filter(|c| pred(c)).count();
        let mut summary = String::new();
        for (label, n) in [
            ("Added", count(Change::is_added)),
            ("Removed", count(Change::is_removed)),
            ("Modified", count(Change::is_modified)),
        ] {
            if n > 0 {
                let _ = writeln!(summary, "{label}: {n}");
            }
        }
        summary.trim_end().to_string()
    }
}

// =============================================================================
// Diff Functions
// =============================================================================

/// Diffs two values with default equality options.
///
/// # Errors
///
/// Returns [`ErrorKind::DepthExceeded`](trove_foundation::ErrorKind::DepthExceeded)
/// if either value nests deeper than 100 levels.
pub fn diff(left: &Value, right: &Value) -> Result<ValueDiff> {
    diff_with(left, right, &EqualOptions::default())
}

/// Diffs two values. Leaves are compared with [`equal_with`] under `options`.
///
/// # Errors
///
/// Returns [`ErrorKind::DepthExceeded`](trove_foundation::ErrorKind::DepthExceeded)
/// if the walk goes deeper than `options.max_depth`.
pub fn diff_with(left: &Value, right: &Value, options: &EqualOptions) -> Result<ValueDiff> {
    let mut diff = ValueDiff::default();
    walk(left, right, &Path::root(), 0, options, &mut diff.changes)?;
    trace!(changes = diff.len(), "diff computed");
    Ok(diff)
}

fn walk(
    left: &Value,
    right: &Value,
    path: &Path,
    depth: usize,
    options: &EqualOptions,
    changes: &mut Vec<Change>,
) -> Result<()> {
    if left.same_value(right) {
        return Ok(());
    }
    if depth > options.max_depth {
        return Err(Error::depth_exceeded(options.max_depth).with_frame(path.to_string()));
    }

    match (left, right) {
        (Value::Record(l), Value::Record(r)) if l.class() == r.class() => {
            let right_keys = r.keys();
            for key in l.keys() {
                let child = path.child(Segment::Key(key.clone()));
                let old = l.get(&key).unwrap_or_default();
                if right_keys.contains(&key) {
                    let new = r.get(&key).unwrap_or_default();
                    walk(&old, &new, &child, depth + 1, options, changes)?;
                } else {
                    changes.push(Change::new(child, Some(old), None));
                }
            }
            let left_keys = l.keys();
            for key in right_keys {
                if !left_keys.contains(&key) {
                    let new = r.get(&key).unwrap_or_default();
                    changes.push(Change::new(path.child(Segment::Key(key)), None, Some(new)));
                }
            }
        }
        (Value::Seq(l), Value::Seq(r)) => {
            let (ls, rs) = (l.snapshot(), r.snapshot());
            for (i, old) in ls.iter().enumerate() {
                let child = path.child(Segment::Index(i));
                match rs.get(i) {
                    Some(new) => walk(old, new, &child, depth + 1, options, changes)?,
                    None => changes.push(Change::new(child, Some(old.clone()), None)),
                }
            }
            for (i, new) in rs.iter().enumerate().skip(ls.len()) {
                changes.push(Change::new(path.child(Segment::Index(i)), None, Some(new.clone())));
            }
        }
        _ => {
            if !equal_with(left, right, options).map_err(|e| e.with_frame(path.to_string()))? {
                changes.push(Change::new(path.clone(), Some(left.clone()), Some(right.clone())));
            }
        }
    }
    Ok(())
}

/// Formats a detailed diff report, listing at most `max_changes` entries.
#[must_use]
pub fn format_diff(diff: &ValueDiff, max_changes: usize) -> String {
    use std::fmt::Write;

    if diff.is_empty() {
        return "No differences".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "~~~ Changes ({}) ~~~", diff.len());
    for change in diff.changes.iter().take(max_changes) {
        match (&change.old, &change.new) {
            (None, Some(new)) => {
                let _ = writeln!(output, "  + {}: {new:?}", change.path);
            }
            (Some(old), None) => {
                let _ = writeln!(output, "  - {}: {old:?}", change.path);
            }
            (Some(old), Some(new)) => {
                let _ = writeln!(output, "  ~ {}: {old:?} -> {new:?}", change.path);
            }
            (None, None) => {}
        }
    }
    if diff.len() > max_changes {
        let _ = writeln!(output, "  ... and {} more", diff.len() - max_changes);
    }

    output.trim_end().to_string()
}
