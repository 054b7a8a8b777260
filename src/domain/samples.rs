//! Demonstration entries a fresh session can start with

use crate::domain::{Clock, EntryId, JournalStore, Mood, MoodEntry};
use chrono::Duration;

const DAY_MILLIS: i64 = 86_400_000;

/// Three entries for the three days before `clock`'s today, newest first
pub fn sample_entries<C: Clock>(clock: &C) -> Vec<MoodEntry> {
    let today = clock.today();
    let now = clock.now_millis();

    let fixtures = [
        (
            "sample-1",
            1,
            Mood::Happy,
            "Had a wonderful day at work! Everything went smoothly and I felt really productive.",
        ),
        (
            "sample-2",
            2,
            Mood::Calm,
            "Spent the evening reading and relaxing. Feeling very peaceful.",
        ),
        (
            "sample-3",
            3,
            Mood::Stressed,
            "Deadlines are piling up. Need to take some time to organize my priorities.",
        ),
    ];

    fixtures
        .into_iter()
        .map(|(id, days_back, mood, text)| MoodEntry {
            id: EntryId::from(id),
            date: today - Duration::days(days_back),
            mood,
            journal_entry: Some(text.to_string()),
            timestamp: now - days_back * DAY_MILLIS,
        })
        .collect()
}

impl<C: Clock> JournalStore<C> {
    /// Store pre-filled with [`sample_entries`]
    pub fn with_sample_entries(clock: C) -> Self {
        let entries = sample_entries(&clock);
        JournalStore::with_entries(clock, entries)
    }
}
