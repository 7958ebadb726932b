//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, shared containers, records, and Error.

mod containers;
mod errors;
mod values;
