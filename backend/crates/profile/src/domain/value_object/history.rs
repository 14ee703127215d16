//! History Value Object
//!
//! Ordered, owned list of experience or education entries. Each entry
//! carries a stable generated id; new entries go to the front, removal is
//! by id and leaves the order of the rest untouched.

use serde::{Deserialize, Serialize};

/// An entry that can live in a [`History`]
pub trait HistoryEntry {
    type Id: Copy + Eq;

    fn entry_id(&self) -> Self::Id;
}

/// Newest-first list of entries keyed by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History<T> {
    entries: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: HistoryEntry> History<T> {
    /// Insert as the most recent entry
    pub fn push_latest(&mut self, entry: T) {
        self.entries.insert(0, entry);
    }

    /// Remove the entry with `id`; unknown ids leave the list unchanged
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.entries.iter().position(|e| e.entry_id() == id)?;
        Some(self.entries.remove(index))
    }
}

impl<T> History<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<T> From<Vec<T>> for History<T> {
    /// Wrap entries already in newest-first order
    fn from(entries: Vec<T>) -> Self {
        Self { entries }
    }
}
