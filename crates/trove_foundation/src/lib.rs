//! Core value model, shared containers, and error types for Trove.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value every structural utility operates on
//! - Shared containers with identity ([`Seq`], [`ValueSet`], [`ValueMap`],
//!   [`Buffer`], [`Record`])
//! - [`Kind`] - Runtime kind descriptors used for dispatch
//! - [`Interner`] - Symbol issuing
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod intern;
pub mod kind;
pub mod pattern;
pub mod record;
pub mod value;

pub use collections::{Buffer, Identity, Seq, ValueMap, ValueSet};
pub use error::{Error, ErrorContext, ErrorKind};
pub use intern::{Interner, SymbolId};
pub use kind::{BufferKind, Kind, TypeOf};
pub use pattern::{Pattern, PatternFlags};
pub use record::{Property, PropertyKey, Record, Slot};
pub use value::{Func, NativeFn, Value};

/// Result type for Trove operations.
pub type Result<T> = std::result::Result<T, Error>;
