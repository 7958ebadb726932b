//! Structural operations over Trove values.
//!
//! This crate provides:
//! - [`equal`] / [`equal_with`] - Deep equality with cycle tolerance and
//!   per-kind comparators
//! - [`clone_value`] / [`clone_with`] - Kind-preserving clone
//! - [`soft_merge`] / [`deep_merge`] - Record merging without mutating inputs
//! - [`diff`] - Path-addressed structural diff

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod canonical;
pub mod clone;
pub mod diff;
pub mod equal;
pub mod merge;

pub use clone::{CloneOptions, clone_value, clone_with};
pub use diff::{Change, Path, Segment, ValueDiff, diff, diff_with, format_diff};
pub use equal::{Comparator, Comparators, EqualOptions, equal, equal_with};
pub use merge::{
    ArrayMerge, CombineOptions, SoftMergeOptions, deep_merge, deep_merge_with, soft_merge,
    soft_merge_with,
};
