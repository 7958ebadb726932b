//! Future combinators for Trove.
//!
//! This crate provides:
//! - [`delay`] / [`timeout`] - Timer helpers on the tokio clock
//! - [`retry`] / [`retry_if`] - Exponential backoff configured by [`RetryConfig`]
//! - [`batch`] / [`try_batch`] - Bounded concurrency with results in input order
//!
//! Everything runs on the caller's task; nothing is spawned.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod retry;
pub mod timer;

pub use batch::{batch, try_batch};
pub use retry::{RetryConfig, retry, retry_if};
pub use timer::{delay, timeout};
