//! Name-keyed arena of cookbook entries.

use std::collections::HashMap;

use super::types::{CookbookError, Entry, EntryListing, EntryPayload};

/// In-memory store of validated entries.
///
/// Entries live in insertion order; a name index points into that list. Entries are never
/// updated or removed once admitted.
#[derive(Debug, Default)]
pub struct EntryRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl EntryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a validated entry, rejecting names that are already taken.
    pub fn insert(&mut self, entry: Entry) -> Result<(), CookbookError> {
        let name = entry.name();
        if self.index.contains_key(name) {
            return Err(CookbookError::DuplicateName(name.to_string()));
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Validate a wire payload and admit it.
    ///
    /// Checks run in a fixed order and the first failure wins: declared type, name uniqueness,
    /// then the payload's own shape (blank name, cook time, required items).
    pub fn admit(&mut self, payload: EntryPayload) -> Result<EntryListing, CookbookError> {
        let entry_type = payload.declared_type()?;
        if self.index.contains_key(&payload.name) {
            return Err(CookbookError::DuplicateName(payload.name));
        }
        let entry = payload.into_entry()?;
        let listing = EntryListing {
            name: entry.name().to_string(),
            entry_type,
        };
        self.insert(entry)?;
        Ok(listing)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Name and type of every entry, in insertion order.
    pub fn listings(&self) -> Vec<EntryListing> {
        self.iter()
            .map(|entry| EntryListing {
                name: entry.name().to_string(),
                entry_type: entry.type_label(),
            })
            .collect()
    }
}
