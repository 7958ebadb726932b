//! Shared containers with identity.
//!
//! Every container is a cheap handle to interior-mutable storage: cloning a
//! handle shares the container, and two handles are the *same* container
//! exactly when their [`Identity`] matches. Contents live in `im` persistent
//! structures so readers take an O(1) snapshot and never hold a borrow while
//! recursing into nested values.

use std::cell::RefCell;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use im::Vector;

use crate::kind::BufferKind;
use crate::value::Value;

/// Address-based identity of a shared container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(usize);

impl Identity {
    pub(crate) fn of<T: ?Sized>(rc: &Rc<T>) -> Self {
        Self(Rc::as_ptr(rc).cast::<()>() as usize)
    }
}

// =============================================================================
// Seq
// =============================================================================

/// Ordered sequence.
#[derive(Clone, Default)]
pub struct Seq(Rc<RefCell<Vector<Value>>>);

impl Seq {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Appends an element.
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push_back(value);
    }

    /// Removes and returns the last element.
    pub fn pop(&self) -> Option<Value> {
        self.0.borrow_mut().pop_back()
    }

    /// Replaces the element at `index`.
    ///
    /// Returns false if `index` is out of bounds.
    pub fn set(&self, index: usize, value: Value) -> bool {
        let mut items = self.0.borrow_mut();
        if index >= items.len() {
            return false;
        }
        items.set(index, value);
        true
    }

    /// Removes the element at `index`, shifting later elements down.
    pub fn remove(&self, index: usize) -> Option<Value> {
        let mut items = self.0.borrow_mut();
        if index >= items.len() {
            return None;
        }
        Some(items.remove(index))
    }

    /// Appends every element of `values`.
    pub fn extend(&self, values: impl IntoIterator<Item = Value>) {
        self.0.borrow_mut().extend(values);
    }

    /// Returns an O(1) snapshot of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Value> {
        self.0.borrow().clone()
    }

    /// Returns the contents as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().iter().cloned().collect()
    }

    /// Returns the identity of this sequence.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    /// Returns true if both handles refer to the same sequence.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<Value> for Seq {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(Rc::new(RefCell::new(Vector::from_iter(iter))))
    }
}

impl From<Vector<Value>> for Seq {
    fn from(items: Vector<Value>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }
}

// =============================================================================
// ValueSet
// =============================================================================

/// Insertion-ordered set; uniqueness is same-value-zero.
#[derive(Clone, Default)]
pub struct ValueSet(Rc<RefCell<Vector<Value>>>);

impl ValueSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns true if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.borrow().iter().any(|v| v.same_value(value))
    }

    /// Inserts a value. Returns false if it was already present.
    pub fn insert(&self, value: Value) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.0.borrow_mut().push_back(value);
        true
    }

    /// Removes a value. Returns false if it was absent.
    pub fn remove(&self, value: &Value) -> bool {
        let mut items = self.0.borrow_mut();
        match items.iter().position(|v| v.same_value(value)) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns an O(1) snapshot of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Value> {
        self.0.borrow().clone()
    }

    /// Returns the identity of this set.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    /// Returns true if both handles refer to the same set.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

// =============================================================================
// ValueMap
// =============================================================================

/// Insertion-ordered keyed mapping; keys are matched by same-value-zero.
#[derive(Clone, Default)]
pub struct ValueMap(Rc<RefCell<Vector<(Value, Value)>>>);

impl ValueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.0.borrow().iter().position(|(k, _)| k.same_value(key))
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| k.same_value(key))
            .map(|(_, v)| v.clone())
    }

    /// Returns true if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Inserts an entry, returning the previous value for the key.
    ///
    /// An existing key keeps its position.
    pub fn insert(&self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(index) => {
                let (_, old) = self.0.borrow_mut().set(index, (key, value));
                Some(old)
            }
            None => {
                self.0.borrow_mut().push_back((key, value));
                None
            }
        }
    }

    /// Removes a key, returning its value.
    pub fn remove(&self, key: &Value) -> Option<Value> {
        let index = self.position(key)?;
        let (_, value) = self.0.borrow_mut().remove(index);
        Some(value)
    }

    /// Returns the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<Value> {
        self.0.borrow().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns an O(1) snapshot of the current entries.
    #[must_use]
    pub fn snapshot(&self) -> Vector<(Value, Value)> {
        self.0.borrow().clone()
    }

    /// Returns the identity of this map.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    /// Returns true if both handles refer to the same map.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// =============================================================================
// Buffer
// =============================================================================

/// Mutable byte buffer with an element layout.
#[derive(Clone)]
pub struct Buffer {
    kind: BufferKind,
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl Buffer {
    /// Creates a buffer over `bytes`.
    ///
    /// Returns `None` if the byte length is not a multiple of the element width.
    #[must_use]
    pub fn new(kind: BufferKind, bytes: Vec<u8>) -> Option<Self> {
        if bytes.len() % kind.element_width() != 0 {
            return None;
        }
        Some(Self {
            kind,
            bytes: Rc::new(RefCell::new(bytes)),
        })
    }

    /// Creates a zero-filled buffer holding `len` elements.
    #[must_use]
    pub fn zeroed(kind: BufferKind, len: usize) -> Self {
        Self {
            kind,
            bytes: Rc::new(RefCell::new(vec![0; len * kind.element_width()])),
        }
    }

    /// Creates an `F64` buffer from floats (little-endian).
    #[must_use]
    pub fn from_f64s(values: &[f64]) -> Self {
        let bytes = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self {
            kind: BufferKind::F64,
            bytes: Rc::new(RefCell::new(bytes)),
        }
    }

    /// Creates a `U32` buffer from integers (little-endian).
    #[must_use]
    pub fn from_u32s(values: &[u32]) -> Self {
        let bytes = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self {
            kind: BufferKind::U32,
            bytes: Rc::new(RefCell::new(bytes)),
        }
    }

    /// Returns the element layout.
    #[must_use]
    pub const fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.borrow().len()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.byte_len() / self.kind.element_width()
    }

    /// Returns true if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }

    /// Returns a new buffer with the same layout over a copy of the bytes.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            kind: self.kind,
            bytes: Rc::new(RefCell::new(self.to_bytes())),
        }
    }

    /// Returns a copy of the bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    /// Runs `f` over the bytes without copying them.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes.borrow())
    }

    /// Overwrites bytes starting at `offset`.
    ///
    /// Returns false (and writes nothing) if the write would run past the end.
    pub fn write(&self, offset: usize, data: &[u8]) -> bool {
        let mut bytes = self.bytes.borrow_mut();
        let Some(end) = offset.checked_add(data.len()) else {
            return false;
        };
        if end > bytes.len() {
            return false;
        }
        bytes[offset..end].copy_from_slice(data);
        true
    }

    /// Returns the identity of this buffer.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::of(&self.bytes)
    }

    /// Returns true if both handles refer to the same buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.bytes, &other.bytes)
    }
}

macro_rules! debug_via_value {
    ($($ty:ident => $variant:ident),*) => {
        $(
            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(&Value::$variant(self.clone()), f)
                }
            }
        )*
    };
}

debug_via_value!(Seq => Seq, ValueSet => Set, ValueMap => Map, Buffer => Buffer);
