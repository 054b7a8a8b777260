//! Human-readable dates, relative times and text statistics

use chrono::{Duration, NaiveDate};

const MINUTE_MILLIS: i64 = 60 * 1000;
const HOUR_MILLIS: i64 = 60 * MINUTE_MILLIS;
const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

/// "Today", "Yesterday", or a long form such as "Monday, January 15"
pub fn format_entry_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if date == today - Duration::days(1) {
        return "Yesterday".to_string();
    }
    date.format("%A, %B %-d").to_string()
}

/// Coarse relative time between two epoch-millisecond instants
pub fn time_ago(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;
    let days = diff / DAY_MILLIS;
    let hours = diff / HOUR_MILLIS;
    let minutes = diff / MINUTE_MILLIS;

    if days > 0 {
        format!("{} day{} ago", days, plural(days))
    } else if hours > 0 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if minutes > 0 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else {
        "Just now".to_string()
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Salutation for the given local hour
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

pub fn entry_count_label(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}
