//! Integration tests for Layer 1: Structural
//!
//! Tests deep equality, clone, merge, and diff across value kinds.

mod clone_merge;
mod diff;
mod equality;
mod properties;
