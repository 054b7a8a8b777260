//! moodlog - Mood check-ins and journal entries in the terminal
//!
//! Pick one of eight moods, optionally write about it, and browse, edit or
//! delete past entries. Entries live in an in-memory store for the length of
//! one run; nothing is written to disk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
