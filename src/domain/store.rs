//! In-memory journal store
//!
//! The store owns the canonical, newest-first collection of [`MoodEntry`]
//! values for the lifetime of a session. Nothing is read from or written to
//! disk. Lookups that miss never fail: `update_entry` reports `false`,
//! `delete_entry` returns `None`, and the collection is left unchanged.

use crate::domain::{Clock, EntryDraft, EntryId, EntryUpdate, MoodEntry, SystemClock};
use chrono::NaiveDate;

/// Newest-first collection of mood entries
#[derive(Debug, Clone)]
pub struct JournalStore<C: Clock = SystemClock> {
    entries: Vec<MoodEntry>,
    clock: C,
}

impl Default for JournalStore<SystemClock> {
    fn default() -> Self {
        JournalStore::new(SystemClock)
    }
}

impl<C: Clock> JournalStore<C> {
    /// Create an empty store reading time from `clock`
    pub fn new(clock: C) -> Self {
        JournalStore {
            entries: Vec::new(),
            clock,
        }
    }

    /// Create a store holding `entries` as-is (first element is newest)
    pub fn with_entries(clock: C, entries: Vec<MoodEntry>) -> Self {
        JournalStore { entries, clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Assign an id and timestamp to `draft` and put it at the front
    pub fn add_entry(&mut self, draft: EntryDraft) -> &MoodEntry {
        let mut id = EntryId::generate();
        while self.get(&id).is_some() {
            id = EntryId::generate();
        }

        let entry = MoodEntry {
            id,
            date: draft.date,
            mood: draft.mood,
            journal_entry: draft.journal_entry,
            timestamp: self.clock.now_millis(),
        };
        tracing::debug!(id = %entry.id, date = %entry.date, mood = entry.mood.label(), "adding entry");

        self.entries.insert(0, entry);
        &self.entries[0]
    }

    /// Merge `update` into the entry with `id`, keeping its position.
    ///
    /// Returns `false` and changes nothing when no entry has that id.
    pub fn update_entry(&mut self, id: &EntryId, update: EntryUpdate) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.id == id) {
            Some(entry) => {
                tracing::debug!(id = %id, ?update, "updating entry");
                update.apply_to(entry);
                true
            }
            None => {
                tracing::debug!(id = %id, "update skipped, no such entry");
                false
            }
        }
    }

    /// Remove the entry with `id`, returning it if it was present
    pub fn delete_entry(&mut self, id: &EntryId) -> Option<MoodEntry> {
        let position = self.entries.iter().position(|entry| &entry.id == id);
        match position {
            Some(index) => {
                tracing::debug!(id = %id, "deleting entry");
                Some(self.entries.remove(index))
            }
            None => {
                tracing::debug!(id = %id, "delete skipped, no such entry");
                None
            }
        }
    }

    /// Entries dated within `[start, end]`, in collection order
    pub fn entries_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&MoodEntry> {
        tracing::trace!(%start, %end, "filtering entries by date range");
        self.entries
            .iter()
            .filter(|entry| entry.date >= start && entry.date <= end)
            .collect()
    }

    /// First entry in collection order dated today
    pub fn todays_entry(&self) -> Option<&MoodEntry> {
        let today = self.clock.today();
        self.entries.iter().find(|entry| entry.date == today)
    }
}
