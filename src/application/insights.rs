//! Mood distribution, check-in totals and streaks over recent days

use crate::domain::{Clock, JournalStore, Mood};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

/// One row of a mood distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    /// Rounded share of the window's entries, 0-100
    pub percentage: u32,
}

/// Count entries per mood over the last `days` days, today included.
///
/// Rows are sorted by count (highest first), ties in catalog order. Moods
/// with no entries are left out.
pub fn mood_distribution<C: Clock>(store: &JournalStore<C>, days: u32) -> Vec<MoodShare> {
    let today = store.clock().today();
    let Some(start) = window_start(today, days) else {
        return Vec::new();
    };
    let window = store.entries_by_date_range(start, today);
    let total = window.len();

    let mut shares: Vec<MoodShare> = Mood::ALL
        .into_iter()
        .map(|mood| {
            let count = window.iter().filter(|entry| entry.mood == mood).count();
            MoodShare {
                mood,
                count,
                percentage: percentage(count, total),
            }
        })
        .filter(|share| share.count > 0)
        .collect();

    // Stable sort keeps catalog order among equal counts
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Number of entries dated within the last `days` days, today included
pub fn checkin_count<C: Clock>(store: &JournalStore<C>, days: u32) -> usize {
    let today = store.clock().today();
    window_start(today, days).map_or(0, |start| store.entries_by_date_range(start, today).len())
}

/// Consecutive calendar days with at least one entry.
///
/// The run may end today or yesterday, so a streak survives until the end
/// of a day without a check-in.
pub fn current_streak<C: Clock>(store: &JournalStore<C>) -> u32 {
    let days: HashSet<NaiveDate> = store.entries().iter().map(|entry| entry.date).collect();
    let today = store.clock().today();

    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt().filter(|yesterday| days.contains(yesterday))
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|day| days.contains(day)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

fn window_start(today: NaiveDate, days: u32) -> Option<NaiveDate> {
    if days == 0 {
        return None;
    }
    Some(
        today
            .checked_sub_signed(Duration::days(i64::from(days) - 1))
            .unwrap_or(NaiveDate::MIN),
    )
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
