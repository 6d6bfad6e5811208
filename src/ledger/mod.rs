//! The ledger: an ordered, positionally addressed collection of entries.

use std::io::Read;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Entry, EntryDraft};
use crate::errors::LedgerError;
use crate::table::{self, ImportSummary};

/// An ordered collection of entries. Positions (zero-based insertion order)
/// are the caller-facing addresses; they shift on delete, while each entry's
/// id stays stable across edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a normalized entry built from `draft` and returns its id.
    pub fn add(&mut self, draft: EntryDraft) -> Uuid {
        let entry = Entry::from_draft(draft);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Replaces the editable fields of the entry at `position`, keeping its
    /// id and position. Returns the updated entry.
    pub fn update(&mut self, position: usize, draft: EntryDraft) -> Result<&Entry, LedgerError> {
        let entry = self
            .entries
            .get_mut(position)
            .ok_or(LedgerError::PositionNotFound(position))?;
        entry.apply_draft(draft);
        Ok(&self.entries[position])
    }

    /// Removes and returns the entry at `position`. Later entries shift
    /// down by one.
    pub fn delete(&mut self, position: usize) -> Result<Entry, LedgerError> {
        if position >= self.entries.len() {
            return Err(LedgerError::PositionNotFound(position));
        }
        Ok(self.entries.remove(position))
    }

    /// Discards every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Flips the selection flag on the entry at `position`.
    pub fn set_selected(&mut self, position: usize, selected: bool) -> Result<(), LedgerError> {
        let entry = self
            .entries
            .get_mut(position)
            .ok_or(LedgerError::PositionNotFound(position))?;
        entry.selected = selected;
        Ok(())
    }

    /// Replaces the whole ledger with rows decoded from `reader`. The swap
    /// only happens once every row has been accepted: on any error the
    /// current entries are left untouched.
    pub fn import_rows<R: Read>(&mut self, reader: R) -> Result<ImportSummary, LedgerError> {
        let (entries, summary) = table::read_entries(reader)?;
        self.entries = entries;
        Ok(summary)
    }

    /// Renders the full ledger, header row included, in the interchange
    /// format accepted by [`Ledger::import_rows`].
    pub fn export(&self) -> Result<String, LedgerError> {
        table::write_entries(&self.entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn entry_by_id(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Positions of every currently selected entry, in ledger order.
    pub fn selected_positions(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.selected)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
