//! Integration tests for Layer 2: Async combinators
//!
//! Tests retry, timeout, and batch composed together on a paused clock.

mod combinators;
