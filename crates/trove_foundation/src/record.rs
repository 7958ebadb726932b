//! Records: ordered own properties with descriptors.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use im::Vector;

use crate::collections::Identity;
use crate::intern::SymbolId;
use crate::kind::Kind;
use crate::value::{Func, Value};

/// Property key: a string or a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String key.
    String(Arc<str>),
    /// Symbol key.
    Symbol(SymbolId),
}

impl PropertyKey {
    /// Returns the string form of a string key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Symbol(_) => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Symbol(id) => write!(f, "[{id:?}]"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for PropertyKey {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<&Arc<str>> for PropertyKey {
    fn from(s: &Arc<str>) -> Self {
        Self::String(s.clone())
    }
}

impl From<SymbolId> for PropertyKey {
    fn from(id: SymbolId) -> Self {
        Self::Symbol(id)
    }
}

/// Where a property's value comes from.
#[derive(Clone)]
pub enum Slot {
    /// Stored value.
    Data {
        /// The stored value.
        value: Value,
        /// Whether assignment may replace it.
        writable: bool,
    },
    /// Computed through accessor functions.
    Accessor {
        /// Called with `[this]`.
        get: Option<Func>,
        /// Called with `[this, value]`.
        set: Option<Func>,
    },
}

/// An own property together with its descriptor.
#[derive(Clone)]
pub struct Property {
    /// Value or accessor pair.
    pub slot: Slot,
    /// Whether the property shows up in key enumeration.
    pub enumerable: bool,
    /// Whether the property may be removed or redefined.
    pub configurable: bool,
}

impl Property {
    /// A writable, enumerable, configurable data property.
    #[must_use]
    pub fn data(value: Value) -> Self {
        Self {
            slot: Slot::Data {
                value,
                writable: true,
            },
            enumerable: true,
            configurable: true,
        }
    }

    /// An enumerable, configurable accessor property.
    #[must_use]
    pub fn accessor(get: Option<Func>, set: Option<Func>) -> Self {
        Self {
            slot: Slot::Accessor { get, set },
            enumerable: true,
            configurable: true,
        }
    }

    /// Builder method to set enumerability.
    #[must_use]
    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    /// Builder method to set configurability.
    #[must_use]
    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    /// Builder method to set writability. No effect on accessors.
    #[must_use]
    pub fn with_writable(mut self, writable: bool) -> Self {
        if let Slot::Data { writable: w, .. } = &mut self.slot {
            *w = writable;
        }
        self
    }

    /// Returns the stored value of a data property.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Data { value, .. } => Some(value),
            Slot::Accessor { .. } => None,
        }
    }

    /// Returns true for accessor properties.
    #[must_use]
    pub const fn is_accessor(&self) -> bool {
        matches!(self.slot, Slot::Accessor { .. })
    }

    /// Returns true for writable data properties.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(self.slot, Slot::Data { writable: true, .. })
    }
}

#[derive(Clone, Default)]
struct RecordData {
    class: Option<Arc<str>>,
    properties: Vector<(PropertyKey, Property)>,
}

impl RecordData {
    fn position(&self, key: &PropertyKey) -> Option<usize> {
        self.properties.iter().position(|(k, _)| k == key)
    }
}

/// Shared record with ordered own properties and an optional class tag.
#[derive(Clone, Default)]
pub struct Record(Rc<RefCell<RecordData>>);

impl Record {
    /// Creates an empty plain record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record tagged with a class name.
    #[must_use]
    pub fn with_class(class: impl Into<Arc<str>>) -> Self {
        Self::with_optional_class(Some(class.into()))
    }

    /// Creates an empty record with the given (possibly absent) class tag.
    #[must_use]
    pub fn with_optional_class(class: Option<Arc<str>>) -> Self {
        Self(Rc::new(RefCell::new(RecordData {
            class,
            properties: Vector::new(),
        })))
    }

    /// Returns the class tag.
    #[must_use]
    pub fn class(&self) -> Option<Arc<str>> {
        self.0.borrow().class.clone()
    }

    /// Returns true if this record has no class tag.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.0.borrow().class.is_none()
    }

    /// Returns the concrete kind of this record.
    #[must_use]
    pub fn kind(&self) -> Kind {
        Kind::Record(self.class())
    }

    /// Returns the number of own properties, enumerable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().properties.len()
    }

    /// Returns true if the record has no own properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().properties.is_empty()
    }

    /// Returns the enumerable string keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<Arc<str>> {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|(_, p)| p.enumerable)
            .filter_map(|(k, _)| match k {
                PropertyKey::String(s) => Some(s.clone()),
                PropertyKey::Symbol(_) => None,
            })
            .collect()
    }

    /// Returns every own key, including non-enumerable and symbol keys.
    #[must_use]
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.0
            .borrow()
            .properties
            .iter()
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Returns an O(1) snapshot of every own property.
    #[must_use]
    pub fn properties(&self) -> Vector<(PropertyKey, Property)> {
        self.0.borrow().properties.clone()
    }

    /// Returns the descriptor of an own property.
    #[must_use]
    pub fn property(&self, key: impl Into<PropertyKey>) -> Option<Property> {
        let key = key.into();
        let data = self.0.borrow();
        data.position(&key).map(|i| data.properties[i].1.clone())
    }

    /// Returns true if the record has the own property.
    #[must_use]
    pub fn contains_key(&self, key: impl Into<PropertyKey>) -> bool {
        let key = key.into();
        self.0.borrow().position(&key).is_some()
    }

    /// Reads a property.
    ///
    /// Accessors are invoked with `[this]`; a failing or missing getter
    /// reads as undefined.
    #[must_use]
    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        let property = self.property(key)?;
        match property.slot {
            Slot::Data { value, .. } => Some(value),
            Slot::Accessor { get: Some(getter), .. } => Some(
                getter
                    .call(&[Value::Record(self.clone())])
                    .unwrap_or(Value::Undefined),
            ),
            Slot::Accessor { get: None, .. } => Some(Value::Undefined),
        }
    }

    /// Assigns a property.
    ///
    /// Creates a plain data property when the key is absent. Returns false
    /// when the property is read-only, has no setter, or the setter fails.
    pub fn set(&self, key: impl Into<PropertyKey>, value: Value) -> bool {
        let key = key.into();
        let existing = {
            let data = self.0.borrow();
            data.position(&key).map(|i| (i, data.properties[i].1.clone()))
        };

        match existing {
            None => {
                self.0
                    .borrow_mut()
                    .properties
                    .push_back((key, Property::data(value)));
                true
            }
            Some((index, mut property)) => match &mut property.slot {
                Slot::Data {
                    value: stored,
                    writable: true,
                } => {
                    *stored = value;
                    self.0.borrow_mut().properties.set(index, (key, property));
                    true
                }
                Slot::Data { writable: false, .. } | Slot::Accessor { set: None, .. } => false,
                Slot::Accessor {
                    set: Some(setter), ..
                } => setter.call(&[Value::Record(self.clone()), value]).is_ok(),
            },
        }
    }

    /// Defines (or redefines) an own property with an explicit descriptor.
    ///
    /// An existing key keeps its position.
    pub fn define(&self, key: impl Into<PropertyKey>, property: Property) {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        match data.position(&key) {
            Some(index) => {
                data.properties.set(index, (key, property));
            }
            None => data.properties.push_back((key, property)),
        }
    }

    /// Removes a configurable own property, returning its descriptor.
    pub fn remove(&self, key: impl Into<PropertyKey>) -> Option<Property> {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        let index = data.position(&key)?;
        if !data.properties[index].1.configurable {
            return None;
        }
        Some(data.properties.remove(index).1)
    }

    /// Returns the identity of this record.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    /// Returns true if both handles refer to the same record.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<K: Into<PropertyKey>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let record = Self::new();
        for (key, value) in iter {
            record.define(key, Property::data(value));
        }
        record
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Record(self.clone()), f)
    }
}
