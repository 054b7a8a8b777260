//! Error types for moodlog

use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Journal entry is empty")]
    EmptyJournal,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::EntryNotFound(_) => 4,
            MoodlogError::UnknownMood(_)
            | MoodlogError::InvalidDate(_)
            | MoodlogError::EmptyJournal
            | MoodlogError::InvalidTheme(_) => 3,
            MoodlogError::Config(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::UnknownMood(input) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Suggestions:\n\
                    • Use a mood label (happy, calm, tired, stressed, sad, angry, confused, excited)\n\
                    • Or its number, 1 to 8\n\
                    • Run 'moodlog moods' to see every mood",
                    input
                )
            }
            MoodlogError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • 3d (three days ago)\n\
                    • monday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-15)",
                    input
                )
            }
            MoodlogError::EmptyJournal => "Journal entry is empty\n\n\
                Please write something about your feelings before saving.\n\
                Example: moodlog journal calm Spent the evening reading"
                .to_string(),
            MoodlogError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Run 'moodlog history' to see entry ids\n\
                    • Entries only live for the current session",
                    id
                )
            }
            MoodlogError::InvalidTheme(input) => {
                format!(
                    "Invalid theme: '{}'\n\n\
                    Valid themes: light, dark, system\n\
                    Example: moodlog theme dark",
                    input
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
