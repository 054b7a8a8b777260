//! Save-journal use case

use crate::domain::{Clock, EntryDraft, EntryId, EntryUpdate, JournalStore, Mood};
use crate::error::{MoodlogError, Result};

/// What a save did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(EntryId),
    Updated(EntryId),
}

impl SaveOutcome {
    pub fn id(&self) -> &EntryId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// Service for recording today's mood and reflection
pub struct JournalService<'a, C: Clock> {
    store: &'a mut JournalStore<C>,
}

impl<'a, C: Clock> JournalService<'a, C> {
    /// Create a new journal service over `store`
    pub fn new(store: &'a mut JournalStore<C>) -> Self {
        JournalService { store }
    }

    /// Save a written reflection for today.
    ///
    /// Empty (or whitespace-only) text and unknown moods are rejected before
    /// the store is touched. An existing entry for today is updated in place;
    /// otherwise a new one is created.
    pub fn save_journal(&mut self, mood_ref: &str, text: &str) -> Result<SaveOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MoodlogError::EmptyJournal);
        }
        let mood = resolve_mood(mood_ref)?;
        let today = self.store.clock().today();

        let outcome = self.upsert_today(
            EntryUpdate::new().mood(mood).journal(text),
            EntryDraft::new(today, mood).with_journal(text),
        );
        tracing::info!(?outcome, mood = mood.label(), "journal saved");
        Ok(outcome)
    }

    /// Record today's mood without touching any written text
    pub fn check_in(&mut self, mood_ref: &str) -> Result<SaveOutcome> {
        let mood = resolve_mood(mood_ref)?;
        let today = self.store.clock().today();

        let outcome = self.upsert_today(
            EntryUpdate::new().mood(mood),
            EntryDraft::new(today, mood),
        );
        tracing::info!(?outcome, mood = mood.label(), "mood checked in");
        Ok(outcome)
    }

    fn upsert_today(&mut self, update: EntryUpdate, draft: EntryDraft) -> SaveOutcome {
        match self.store.todays_entry().map(|entry| entry.id.clone()) {
            Some(id) => {
                self.store.update_entry(&id, update);
                SaveOutcome::Updated(id)
            }
            None => SaveOutcome::Created(self.store.add_entry(draft).id.clone()),
        }
    }
}

/// Resolve a mood reference or fail with `UnknownMood`
pub fn resolve_mood(mood_ref: &str) -> Result<Mood> {
    Mood::resolve(mood_ref).ok_or_else(|| MoodlogError::UnknownMood(mood_ref.to_string()))
}
