//! Symbol interning.
//!
//! Symbols are opaque identities with an optional description. Registered
//! symbols are deduplicated by description; unique symbols never are.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Interned symbol identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub(crate) u32);

impl SymbolId {
    /// Returns the raw index of this symbol.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// Issues symbols and remembers their descriptions.
///
/// Not thread-safe; use external synchronization if needed.
#[derive(Clone, Debug, Default)]
pub struct Interner {
    /// Description of every issued symbol, indexed by id.
    descriptions: Vec<Arc<str>>,
    /// Registered symbols by description.
    registry: HashMap<Arc<str>, SymbolId>,
}

impl Interner {
    /// Creates an empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, description: Arc<str>) -> SymbolId {
        let idx = u32::try_from(self.descriptions.len()).expect("too many symbols");
        self.descriptions.push(description);
        SymbolId(idx)
    }

    /// Returns the registered symbol for `description`, issuing it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the number of symbols exceeds `u32::MAX`.
    pub fn intern(&mut self, description: &str) -> SymbolId {
        if let Some(&id) = self.registry.get(description) {
            return id;
        }

        let arc: Arc<str> = description.into();
        let id = self.issue(arc.clone());
        self.registry.insert(arc, id);
        id
    }

    /// Issues a fresh symbol that is never equal to any other.
    ///
    /// # Panics
    ///
    /// Panics if the number of symbols exceeds `u32::MAX`.
    pub fn unique(&mut self, description: &str) -> SymbolId {
        self.issue(description.into())
    }

    /// Gets the description of a symbol.
    #[must_use]
    pub fn description(&self, id: SymbolId) -> Option<&str> {
        self.descriptions.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Returns true if `id` was issued through [`Interner::intern`].
    #[must_use]
    pub fn is_registered(&self, id: SymbolId) -> bool {
        self.description(id)
            .and_then(|d| self.registry.get(d))
            .is_some_and(|&registered| registered == id)
    }

    /// Returns the number of issued symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Returns true if no symbol has been issued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
