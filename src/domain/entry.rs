//! Mood journal entry model

use crate::domain::Mood;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifier of a stored entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One mood check-in, optionally with a written reflection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: EntryId,
    /// Calendar day the entry belongs to
    pub date: NaiveDate,
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_entry: Option<String>,
    /// Creation instant, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl MoodEntry {
    /// True when the entry carries written text
    pub fn has_journal(&self) -> bool {
        self.journal_entry.is_some()
    }
}

/// Entry fields supplied by the caller; the store fills in id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub mood: Mood,
    pub journal_entry: Option<String>,
}

impl EntryDraft {
    pub fn new(date: NaiveDate, mood: Mood) -> Self {
        EntryDraft {
            date,
            mood,
            journal_entry: None,
        }
    }

    pub fn with_journal(mut self, text: impl Into<String>) -> Self {
        self.journal_entry = Some(text.into());
        self
    }
}

/// Sparse set of fields to overwrite on an existing entry
///
/// `journal_entry` is doubly optional: `Some(None)` clears the text,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub date: Option<NaiveDate>,
    pub mood: Option<Mood>,
    pub journal_entry: Option<Option<String>>,
}

impl EntryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn journal(mut self, text: impl Into<String>) -> Self {
        self.journal_entry = Some(Some(text.into()));
        self
    }

    pub fn clear_journal(mut self) -> Self {
        self.journal_entry = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.mood.is_none() && self.journal_entry.is_none()
    }

    /// Merge the present fields into `entry`
    pub(crate) fn apply_to(self, entry: &mut MoodEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
        if let Some(journal_entry) = self.journal_entry {
            entry.journal_entry = journal_entry;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MoodEntry {
        MoodEntry {
            id: EntryId::from("e1"),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            mood: Mood::Happy,
            journal_entry: Some("A".to_string()),
            timestamp: 1_705_320_000_000,
        }
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(EntryId::generate(), EntryId::generate());
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let mut entry = sample();
        EntryUpdate::new().journal("B").apply_to(&mut entry);
        assert_eq!(entry.journal_entry.as_deref(), Some("B"));
        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(entry.id, EntryId::from("e1"));
    }

    #[test]
    fn test_update_clear_journal() {
        let mut entry = sample();
        EntryUpdate::new().clear_journal().apply_to(&mut entry);
        assert!(!entry.has_journal());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut entry = sample();
        let update = EntryUpdate::new();
        assert!(update.is_empty());
        update.apply_to(&mut entry);
        assert_eq!(entry, sample());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "e1");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["journalEntry"], "A");
        assert_eq!(json["mood"]["label"], "Happy");
    }

    #[test]
    fn test_serialize_omits_missing_journal() {
        let mut entry = sample();
        entry.journal_entry = None;
        let json = serde_json::to_value(entry).unwrap();
        assert!(json.get("journalEntry").is_none());
    }
}
