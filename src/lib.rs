//! Trove - structural utilities over a dynamic value model
//!
//! This crate re-exports all layers of Trove for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: trove_util        - Strings, arrays, periods, validation, JSON
//!          trove_async       - Delay, timeout, retry, bounded batch
//! Layer 1: trove_structural  - Deep equality, clone, merge, diff
//! Layer 0: trove_foundation  - Core types (Value, Record, Kind, Error)
//! ```

pub use trove_async as async_ops;
pub use trove_foundation as foundation;
pub use trove_structural as structural;
pub use trove_util as util;
