//! Output formatting utilities

use crate::application::{MoodShare, SaveOutcome, ThemeSummary};
use crate::domain::display::{
    character_count, entry_count_label, format_entry_date, time_ago, word_count,
};
use crate::domain::{Mood, MoodEntry};
use crate::error::Result;
use chrono::NaiveDate;

const PREVIEW_CHARS: usize = 60;

/// Format the mood catalog
pub fn format_mood_list() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!(
            "{}  {} {:<9} {}\n",
            mood.id(),
            mood.emoji(),
            mood.label(),
            mood.description()
        ));
    }
    output
}

/// Format entries as a history list, newest first
pub fn format_entry_list(entries: &[&MoodEntry], today: NaiveDate, now: i64) -> String {
    if entries.is_empty() {
        return "No entries yet".to_string();
    }

    let mut output = format!("{}\n", entry_count_label(entries.len()));
    for entry in entries {
        output.push_str(&format!(
            "\n{} {:<9} {} ({})  [{}]\n",
            entry.mood.emoji(),
            entry.mood.label(),
            format_entry_date(entry.date, today),
            time_ago(entry.timestamp, now),
            entry.id
        ));
        if let Some(text) = &entry.journal_entry {
            output.push_str(&format!("    {}\n", preview(text)));
        }
    }
    output
}

/// Format one entry with its full text and statistics
pub fn format_entry_detail(entry: &MoodEntry, today: NaiveDate, now: i64) -> String {
    let mut output = format!(
        "{} Feeling {}\nDate: {} ({})\nSaved: {}\nId: {}\n",
        entry.mood.emoji(),
        entry.mood.label(),
        format_entry_date(entry.date, today),
        entry.date.format("%Y-%m-%d"),
        time_ago(entry.timestamp, now),
        entry.id
    );
    match &entry.journal_entry {
        Some(text) => output.push_str(&format!(
            "\n{}\n\n{} characters • {} words\n",
            text,
            character_count(text),
            word_count(text)
        )),
        None => output.push_str("\nNo written reflection\n"),
    }
    output
}

/// Format the answer to "what did I log today?"
pub fn format_today(entry: Option<&MoodEntry>, today: NaiveDate, now: i64) -> String {
    match entry {
        Some(entry) => format_entry_detail(entry, today, now),
        None => "No entry for today".to_string(),
    }
}

/// Confirmation after a save or check-in
pub fn format_save_outcome(outcome: &SaveOutcome, mood: Mood) -> String {
    match outcome {
        SaveOutcome::Created(id) => format!("✨ Entry saved: feeling {} [{}]", mood, id),
        SaveOutcome::Updated(id) => format!("✨ Today's entry updated: feeling {} [{}]", mood, id),
    }
}

/// Format a mood distribution as a bar chart
pub fn format_distribution(rows: &[MoodShare], days: u32) -> String {
    let window = if days == 1 {
        "today".to_string()
    } else {
        format!("last {} days", days)
    };

    if rows.is_empty() {
        return if days == 1 {
            "No entries today".to_string()
        } else {
            format!("No entries in the {}", window)
        };
    }

    let mut output = format!("Mood distribution ({})\n", window);
    for row in rows {
        let bar = "█".repeat((row.percentage as usize).div_ceil(5));
        output.push_str(&format!(
            "{} {:<9} {:>3}% {} ({})\n",
            row.mood.emoji(),
            row.mood.label(),
            row.percentage,
            bar,
            row.count
        ));
    }
    output
}

/// Format the streak and check-in totals shown under the distribution
pub fn format_stats(streak: u32, checkins: usize, days: u32) -> String {
    format!(
        "🔥 Day streak: {}\n💗 Check-ins: {} (last {} day{})\n",
        streak,
        checkins,
        days,
        if days == 1 { "" } else { "s" }
    )
}

/// Format theme settings and the active palette
pub fn format_theme(summary: &ThemeSummary) -> String {
    let mut output = format!(
        "Theme: {} (active: {})\n",
        summary.preference, summary.active
    );
    for (name, value) in summary.colors.swatches() {
        output.push_str(&format!("  {:<15} {}\n", name, value));
    }
    output
}

/// Serialize entries as a pretty JSON array
pub fn format_entries_json(entries: &[&MoodEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn preview(text: &str) -> String {
    let body = text.trim();
    let line = body.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or_default();
    if line.chars().count() > PREVIEW_CHARS || line.len() < body.len() {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut.trim_end())
    } else {
        line.to_string()
    }
}
