//! Application layer - Use cases and orchestration

pub mod history;
pub mod insights;
pub mod journal;
pub mod session;
pub mod settings;

pub use insights::{checkin_count, current_streak, mood_distribution, MoodShare};
pub use journal::{JournalService, SaveOutcome};
pub use session::Session;
pub use settings::{ThemeService, ThemeSummary};
