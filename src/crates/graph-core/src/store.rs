//! In-process memory store
//!
//! [`MemoryStore`] keeps an ordered, append-only list of texts produced
//! during a process run. It is never persisted. A store is an explicit
//! component: construct one at startup and hand clones to whatever needs
//! it. Clones share the same underlying list, and separately constructed
//! stores are fully independent.
//!
//! The list lives behind a `parking_lot::RwLock`, so [`MemoryStore::record`]
//! performs its duplicate check and append as one atomic step even when
//! several pipeline runs share a store.
//!
//! ```rust
//! use graph_core::store::{MemoryStore, RecordOutcome};
//!
//! let store = MemoryStore::new();
//! assert_eq!(store.record("knock knock"), RecordOutcome::Appended);
//! assert_eq!(store.record("knock knock"), RecordOutcome::Duplicate);
//! assert_eq!(store.snapshot(), vec!["knock knock".to_string()]);
//! ```

use parking_lot::RwLock;
use std::sync::Arc;

/// Result of [`MemoryStore::record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The text was new and has been appended
    Appended,
    /// An identical text was already stored; nothing was added
    Duplicate,
}

/// Shared, ordered, append-only text memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`, in order, duplicates skipped
    pub fn with_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let store = Self::new();
        for entry in entries {
            store.record(entry);
        }
        store
    }

    /// Append `text` unless an exact match is already stored.
    pub fn record(&self, text: impl Into<String>) -> RecordOutcome {
        let text = text.into();
        let mut entries = self.entries.write();
        if entries.iter().any(|existing| *existing == text) {
            return RecordOutcome::Duplicate;
        }
        entries.push(text);
        tracing::debug!(entries = entries.len(), "Recorded new memory entry");
        RecordOutcome::Appended
    }

    /// Exact-match lookup
    pub fn contains(&self, text: &str) -> bool {
        self.entries.read().iter().any(|existing| existing == text)
    }

    /// Owned copy of all entries in insertion order.
    ///
    /// Mutating the returned vector never affects the store.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
