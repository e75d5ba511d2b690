//! In-memory ledger entry store.

use finreport_shared::types::LedgerEntryId;

use super::entry::LedgerEntry;
use super::error::LedgerError;

/// Ordered collection of ledger entries owned by the caller.
///
/// Insertion order is statement line-item order. The reporting engine only
/// ever borrows [`LedgerStore::entries`].
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    entries: Vec<LedgerEntry>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry and returns its ID.
    pub fn push(&mut self, entry: LedgerEntry) -> LedgerEntryId {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes an entry, preserving the order of the rest.
    pub fn remove(&mut self, id: LedgerEntryId) -> Result<LedgerEntry, LedgerError> {
        let index = self.position(id)?;
        Ok(self.entries.remove(index))
    }

    /// Replaces an entry in place. The stored entry keeps `id` and its position.
    pub fn replace(&mut self, id: LedgerEntryId, mut entry: LedgerEntry) -> Result<(), LedgerError> {
        let index = self.position(id)?;
        entry.id = id;
        self.entries[index] = entry;
        Ok(())
    }

    /// Looks up an entry by ID.
    #[must_use]
    pub fn get(&self, id: LedgerEntryId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: LedgerEntryId) -> Result<usize, LedgerError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::EntryNotFound(id))
    }
}

impl FromIterator<LedgerEntry> for LedgerStore {
    fn from_iter<I: IntoIterator<Item = LedgerEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
