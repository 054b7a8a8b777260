//! Command dispatch against a session

use crate::application::history::{delete_entry, edit_entry, find_entry, list_entries};
use crate::application::journal::resolve_mood;
use crate::application::{
    checkin_count, current_streak, mood_distribution, JournalService, Session, ThemeService,
};
use crate::cli::output;
use crate::cli::Commands;
use crate::domain::{parse_date, Clock, EntryUpdate};
use crate::error::{MoodlogError, Result};

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Output(String),
    /// The user asked to leave
    Quit,
}

/// Run `command` against `session`
pub fn execute<C: Clock>(session: &mut Session<C>, command: Commands) -> Result<Outcome> {
    let today = session.journal().clock().today();
    let now = session.journal().clock().now_millis();

    let text = match command {
        Commands::Moods => output::format_mood_list(),
        Commands::Checkin { mood } => {
            let outcome = JournalService::new(session.journal_mut()).check_in(&mood)?;
            output::format_save_outcome(&outcome, resolve_mood(&mood)?)
        }
        Commands::Journal { mood, text } => {
            let outcome =
                JournalService::new(session.journal_mut()).save_journal(&mood, &text.join(" "))?;
            output::format_save_outcome(&outcome, resolve_mood(&mood)?)
        }
        Commands::Today => output::format_today(session.journal().todays_entry(), today, now),
        Commands::History { from, to, json } => {
            let from = from.map(|d| parse_date(&d, today)).transpose()?;
            let to = to.map(|d| parse_date(&d, today)).transpose()?;
            let entries = list_entries(session.journal(), from, to);
            if json {
                output::format_entries_json(&entries)?
            } else {
                output::format_entry_list(&entries, today, now)
            }
        }
        Commands::Show { id } => {
            output::format_entry_detail(find_entry(session.journal(), &id)?, today, now)
        }
        Commands::Edit {
            id,
            mood,
            date,
            clear,
            text,
        } => {
            let mut update = EntryUpdate::new();
            if let Some(mood) = mood {
                update = update.mood(resolve_mood(&mood)?);
            }
            if let Some(date) = date {
                update = update.date(parse_date(&date, today)?);
            }
            if clear {
                update = update.clear_journal();
            } else if !text.is_empty() {
                let joined = text.join(" ");
                let trimmed = joined.trim();
                if trimmed.is_empty() {
                    return Err(MoodlogError::EmptyJournal);
                }
                update = update.journal(trimmed);
            }
            edit_entry(session.journal_mut(), &id, update)?;
            output::format_entry_detail(find_entry(session.journal(), &id)?, today, now)
        }
        Commands::Delete { id } => {
            let removed = delete_entry(session.journal_mut(), &id)?;
            format!(
                "Deleted {} entry from {} [{}]",
                removed.mood.label(),
                removed.date.format("%Y-%m-%d"),
                removed.id
            )
        }
        Commands::Insights { days } => {
            let store = session.journal();
            format!(
                "{}\n{}",
                output::format_distribution(&mood_distribution(store, days), days).trim_end(),
                output::format_stats(current_streak(store), checkin_count(store, days), days)
            )
        }
        Commands::Theme { preference } => {
            let mut service = ThemeService::new(session.theme_mut());
            let summary = match preference {
                Some(value) => service.set(&value)?,
                None => service.summary(),
            };
            output::format_theme(&summary)
        }
        Commands::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Output(text))
}
