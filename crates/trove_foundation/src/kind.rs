//! Runtime kind descriptors.
//!
//! Every [`Value`](crate::Value) has a concrete [`Kind`]. Kinds are what the
//! structural algorithms branch on, and what custom comparators are keyed by.

use std::fmt;
use std::sync::Arc;

/// Concrete runtime kind of a value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The undefined value.
    Undefined,
    /// The null value.
    Null,
    /// Boolean.
    Bool,
    /// Number (integer or float).
    Number,
    /// String.
    String,
    /// Interned symbol.
    Symbol,
    /// Ordered sequence.
    Seq,
    /// Set of unique elements.
    Set,
    /// Keyed mapping.
    Map,
    /// Byte buffer of the given element layout.
    Buffer(BufferKind),
    /// Date/time instant.
    Date,
    /// Regular expression.
    Pattern,
    /// Record, optionally tagged with a class name.
    Record(Option<Arc<str>>),
    /// Callable.
    Fn,
}

/// Coarse primitive category, the first thing equality compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOf {
    /// `undefined`
    Undefined,
    /// `object` (null and every container)
    Object,
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `string`
    String,
    /// `symbol`
    Symbol,
    /// `function`
    Function,
}

/// Element layout of a byte buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Untyped bytes.
    Raw,
    /// Unsigned 8-bit elements.
    U8,
    /// Signed 8-bit elements.
    I8,
    /// Unsigned 16-bit elements.
    U16,
    /// Signed 16-bit elements.
    I16,
    /// Unsigned 32-bit elements.
    U32,
    /// Signed 32-bit elements.
    I32,
    /// 32-bit float elements.
    F32,
    /// 64-bit float elements.
    F64,
    /// Signed 64-bit elements.
    I64,
    /// Unsigned 64-bit elements.
    U64,
}

impl BufferKind {
    /// Width of one element in bytes.
    #[must_use]
    pub const fn element_width(self) -> usize {
        match self {
            Self::Raw | Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::F64 | Self::I64 | Self::U64 => 8,
        }
    }

    /// Structural tag for this layout.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Raw => "ArrayBuffer",
            Self::U8 => "Uint8Array",
            Self::I8 => "Int8Array",
            Self::U16 => "Uint16Array",
            Self::I16 => "Int16Array",
            Self::U32 => "Uint32Array",
            Self::I32 => "Int32Array",
            Self::F32 => "Float32Array",
            Self::F64 => "Float64Array",
            Self::I64 => "BigInt64Array",
            Self::U64 => "BigUint64Array",
        }
    }
}

impl Kind {
    /// Creates a record kind with the given class name.
    #[must_use]
    pub fn class(name: impl Into<Arc<str>>) -> Self {
        Self::Record(Some(name.into()))
    }

    /// Creates the kind of a plain (unclassed) record.
    #[must_use]
    pub const fn plain_record() -> Self {
        Self::Record(None)
    }

    /// Returns the coarse primitive category.
    #[must_use]
    pub const fn type_of(&self) -> TypeOf {
        match self {
            Self::Undefined => TypeOf::Undefined,
            Self::Bool => TypeOf::Boolean,
            Self::Number => TypeOf::Number,
            Self::String => TypeOf::String,
            Self::Symbol => TypeOf::Symbol,
            Self::Fn => TypeOf::Function,
            Self::Null
            | Self::Seq
            | Self::Set
            | Self::Map
            | Self::Buffer(_)
            | Self::Date
            | Self::Pattern
            | Self::Record(_) => TypeOf::Object,
        }
    }

    /// Returns the structural tag.
    ///
    /// Records share the `Object` tag regardless of class.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Bool => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Symbol => "Symbol",
            Self::Seq => "Array",
            Self::Set => "Set",
            Self::Map => "Map",
            Self::Buffer(kind) => kind.tag(),
            Self::Date => "Date",
            Self::Pattern => "RegExp",
            Self::Record(_) => "Object",
            Self::Fn => "Function",
        }
    }

    /// Returns true for null and undefined.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns true for kinds whose values are shared, mutable containers.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Seq | Self::Set | Self::Map | Self::Buffer(_) | Self::Record(_)
        )
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Symbol => write!(f, "symbol"),
            Self::Seq => write!(f, "seq"),
            Self::Set => write!(f, "set"),
            Self::Map => write!(f, "map"),
            Self::Buffer(kind) => write!(f, "buffer<{kind:?}>"),
            Self::Date => write!(f, "date"),
            Self::Pattern => write!(f, "pattern"),
            Self::Record(None) => write!(f, "record"),
            Self::Record(Some(class)) => write!(f, "record<{class}>"),
            Self::Fn => write!(f, "fn"),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
