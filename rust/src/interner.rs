//! String interning for fast hash lookups.
//!
//! Person and duty names are interned once per run so usage counters and
//! conflict ledgers hash small integers instead of strings.

use rustc_hash::FxHashMap;

/// Interned name (u32 for compact storage and fast hashing).
pub type NameId = u32;

/// String interner that maps names to integers in first-seen order.
#[derive(Debug, Clone)]
pub struct NameInterner {
    to_int: FxHashMap<String, NameId>,
    from_int: Vec<String>,
}

impl NameInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its integer ID.
    /// If already interned, returns the existing ID.
    pub fn intern(&mut self, s: &str) -> NameId {
        if let Some(&id) = self.to_int.get(s) {
            return id;
        }
        let id = self.from_int.len() as NameId;
        self.from_int.push(s.to_string());
        self.to_int.insert(s.to_string(), id);
        id
    }

    /// Get the integer ID for a string, if it exists.
    #[inline]
    pub fn get(&self, s: &str) -> Option<NameId> {
        self.to_int.get(s).copied()
    }

    /// Get the string for an integer ID.
    #[inline]
    pub fn resolve(&self, id: NameId) -> Option<&str> {
        self.from_int.get(id as usize).map(|s| s.as_str())
    }

    /// Iterate `(id, name)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (NameId, &str)> {
        self.from_int
            .iter()
            .enumerate()
            .map(|(i, s)| (i as NameId, s.as_str()))
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }
}

impl Default for NameInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
