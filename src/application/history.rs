//! Browse, edit and delete past entries

use crate::domain::{Clock, EntryId, EntryUpdate, JournalStore, MoodEntry};
use crate::error::{MoodlogError, Result};
use chrono::NaiveDate;

/// Entries newest first, optionally limited to `[from, to]`.
///
/// A missing bound is open on that side.
pub fn list_entries<C: Clock>(
    store: &JournalStore<C>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&MoodEntry> {
    match (from, to) {
        (None, None) => store.entries().iter().collect(),
        (from, to) => store.entries_by_date_range(
            from.unwrap_or(NaiveDate::MIN),
            to.unwrap_or(NaiveDate::MAX),
        ),
    }
}

/// Look up an entry, reporting a miss as `EntryNotFound`
pub fn find_entry<'a, C: Clock>(store: &'a JournalStore<C>, id: &str) -> Result<&'a MoodEntry> {
    store
        .get(&EntryId::from(id))
        .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))
}

/// Apply `update` to the entry with `id`
pub fn edit_entry<C: Clock>(store: &mut JournalStore<C>, id: &str, update: EntryUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(MoodlogError::InvalidCommand(
            "Nothing to change: pass --mood, --date, --clear or new text".to_string(),
        ));
    }
    if store.update_entry(&EntryId::from(id), update) {
        Ok(())
    } else {
        Err(MoodlogError::EntryNotFound(id.to_string()))
    }
}

/// Remove the entry with `id`
pub fn delete_entry<C: Clock>(store: &mut JournalStore<C>, id: &str) -> Result<MoodEntry> {
    store
        .delete_entry(&EntryId::from(id))
        .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))
}
