//! Core value type for all Trove data.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::collections::{Buffer, Identity, Seq, ValueMap, ValueSet};
use crate::intern::SymbolId;
use crate::kind::{Kind, TypeOf};
use crate::pattern::Pattern;
use crate::record::{PropertyKey, Record};

/// Nesting depth past which `Debug` output elides containers.
const DEBUG_DEPTH: usize = 6;

/// Core value type.
///
/// Scalars are immutable. Containers ([`Seq`], [`ValueSet`], [`ValueMap`],
/// [`Buffer`], [`Record`]) are shared handles: cloning a `Value` shares the
/// container, it does not copy it. Use the structural clone for that.
#[derive(Clone, Default)]
pub enum Value {
    /// The undefined value (absent).
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Symbol.
    Symbol(SymbolId),
    /// Ordered sequence.
    Seq(Seq),
    /// Set of unique elements.
    Set(ValueSet),
    /// Keyed mapping.
    Map(ValueMap),
    /// Byte buffer.
    Buffer(Buffer),
    /// Date/time instant.
    Date(DateTime<Utc>),
    /// Regular expression.
    Pattern(Pattern),
    /// Record with properties.
    Record(Record),
    /// Function reference.
    Fn(Func),
}

/// Signature of a native callable.
pub type NativeFn = dyn Fn(&[Value]) -> crate::Result<Value>;

/// Opaque callable value. Compared by identity only.
#[derive(Clone)]
pub struct Func {
    name: Arc<str>,
    call: Rc<NativeFn>,
}

impl Func {
    /// Wraps a closure.
    pub fn new(
        name: impl Into<Arc<str>>,
        call: impl Fn(&[Value]) -> crate::Result<Value> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            call: Rc::new(call),
        }
    }

    /// Returns the function name for debugging.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function.
    ///
    /// # Errors
    ///
    /// Propagates whatever the wrapped closure returns.
    pub fn call(&self, args: &[Value]) -> crate::Result<Value> {
        (self.call)(args)
    }

    /// Returns the identity of this function.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.call)
    }

    /// Returns true if both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name)
    }
}

impl Value {
    /// Builds a sequence value.
    pub fn seq<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set value. Duplicates (same-value-zero) are dropped.
    pub fn set<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map value.
    pub fn map<K: Into<Value>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a plain record value from data properties.
    pub fn record<K: Into<PropertyKey>, V: Into<Value>>(
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Record(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    /// Returns the concrete kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) | Self::Float(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Symbol(_) => Kind::Symbol,
            Self::Seq(_) => Kind::Seq,
            Self::Set(_) => Kind::Set,
            Self::Map(_) => Kind::Map,
            Self::Buffer(b) => Kind::Buffer(b.kind()),
            Self::Date(_) => Kind::Date,
            Self::Pattern(_) => Kind::Pattern,
            Self::Record(r) => r.kind(),
            Self::Fn(_) => Kind::Fn,
        }
    }

    /// Returns the coarse primitive category.
    #[must_use]
    pub fn type_of(&self) -> TypeOf {
        match self {
            Self::Undefined => TypeOf::Undefined,
            Self::Bool(_) => TypeOf::Boolean,
            Self::Int(_) | Self::Float(_) => TypeOf::Number,
            Self::String(_) => TypeOf::String,
            Self::Symbol(_) => TypeOf::Symbol,
            Self::Fn(_) => TypeOf::Function,
            _ => TypeOf::Object,
        }
    }

    /// Returns the identity of a shared container or function.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::Seq(s) => Some(s.identity()),
            Self::Set(s) => Some(s.identity()),
            Self::Map(m) => Some(m.identity()),
            Self::Buffer(b) => Some(b.identity()),
            Self::Record(r) => Some(r.identity()),
            Self::Fn(f) => Some(f.identity()),
            _ => None,
        }
    }

    /// Same-value-zero comparison.
    ///
    /// Numbers compare numerically (NaN equals NaN, `0` equals `-0`), strings
    /// and symbols by content, dates by instant, patterns by source and flags,
    /// containers and functions by identity.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            // Cross-type numbers compare through f64
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => *a as f64 == *b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a.ptr_eq(b),
            (Self::Set(a), Self::Set(b)) => a.ptr_eq(b),
            (Self::Map(a), Self::Map(b)) => a.ptr_eq(b),
            (Self::Buffer(a), Self::Buffer(b)) => a.ptr_eq(b),
            (Self::Record(a), Self::Record(b)) => a.ptr_eq(b),
            (Self::Fn(a), Self::Fn(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Returns true for undefined.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true for null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for null or undefined.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns true if this value is truthy.
    ///
    /// Falsy values are undefined, null, `false`, zero, NaN, and `""`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a symbol ID.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<SymbolId> {
        match self {
            Self::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract a sequence handle.
    #[must_use]
    pub const fn as_seq(&self) -> Option<&Seq> {
        match self {
            Self::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a set handle.
    #[must_use]
    pub const fn as_set(&self) -> Option<&ValueSet> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a map handle.
    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a buffer handle.
    #[must_use]
    pub const fn as_buffer(&self) -> Option<&Buffer> {
        match self {
            Self::Buffer(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to extract a date.
    #[must_use]
    pub const fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to extract a pattern.
    #[must_use]
    pub const fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Self::Pattern(p) => Some(p),
            _ => None,
        }
    }

    /// Attempts to extract a record handle.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Attempts to extract a function.
    #[must_use]
    pub const fn as_fn(&self) -> Option<&Func> {
        match self {
            Self::Fn(f) => Some(f),
            _ => None,
        }
    }
}

// `==` is same-value-zero; deep comparison lives in the structural layer.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(other)
    }
}

/// Depth-limited `Debug` view; cyclic containers print finitely.
struct Bounded<'a> {
    value: &'a Value,
    depth: usize,
}

impl Bounded<'_> {
    fn child<'b>(&self, value: &'b Value) -> Bounded<'b> {
        Bounded {
            value,
            depth: self.depth + 1,
        }
    }
}

impl fmt::Debug for Bounded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth > DEBUG_DEPTH && self.value.kind().is_container() {
            return write!(f, "…");
        }
        match self.value {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(id) => write!(f, "{id:?}"),
            Value::Seq(s) => {
                let items = s.snapshot();
                f.debug_list()
                    .entries(items.iter().map(|v| self.child(v)))
                    .finish()
            }
            Value::Set(s) => {
                let items = s.snapshot();
                write!(f, "#")?;
                f.debug_set()
                    .entries(items.iter().map(|v| self.child(v)))
                    .finish()
            }
            Value::Map(m) => {
                let entries = m.snapshot();
                write!(f, "Map")?;
                f.debug_map()
                    .entries(entries.iter().map(|(k, v)| (self.child(k), self.child(v))))
                    .finish()
            }
            Value::Buffer(b) => {
                write!(f, "{}", b.kind().tag())?;
                b.with_bytes(|bytes| f.debug_list().entries(bytes).finish())
            }
            Value::Date(d) => write!(f, "Date({})", d.to_rfc3339()),
            Value::Pattern(p) => write!(f, "{p:?}"),
            Value::Record(r) => {
                if let Some(class) = r.class() {
                    write!(f, "{class} ")?;
                }
                let properties = r.properties();
                let mut map = f.debug_map();
                for (key, property) in &properties {
                    match property.value() {
                        Some(v) => map.entry(&format_args!("{key}"), &self.child(v)),
                        None => map.entry(&format_args!("{key}"), &format_args!("<accessor>")),
                    };
                }
                map.finish()
            }
            Value::Fn(func) => write!(f, "{func:?}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(
            &Bounded {
                value: self,
                depth: 0,
            },
            f,
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Float(n) => write!(f, "{n}"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<SymbolId> for Value {
    fn from(id: SymbolId) -> Self {
        Self::Symbol(id)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<Seq> for Value {
    fn from(s: Seq) -> Self {
        Self::Seq(s)
    }
}

impl From<ValueSet> for Value {
    fn from(s: ValueSet) -> Self {
        Self::Set(s)
    }
}

impl From<ValueMap> for Value {
    fn from(m: ValueMap) -> Self {
        Self::Map(m)
    }
}

impl From<Buffer> for Value {
    fn from(b: Buffer) -> Self {
        Self::Buffer(b)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Self::Pattern(p)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl From<Func> for Value {
    fn from(f: Func) -> Self {
        Self::Fn(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::seq(v)
    }
}
