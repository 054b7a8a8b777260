//! Domain layer - Business logic and domain models

pub mod clock;
pub mod date_ref;
pub mod display;
pub mod entry;
pub mod mood;
pub mod samples;
pub mod store;
pub mod theme;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_ref::{parse_date, DateReference};
pub use entry::{EntryDraft, EntryId, EntryUpdate, MoodEntry};
pub use mood::Mood;
pub use samples::sample_entries;
pub use store::JournalStore;
pub use theme::{ColorScheme, Palette, ThemePreference, ThemeStore};
