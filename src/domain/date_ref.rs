//! Date argument parsing and resolution

use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied date, possibly relative to today
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// A number of days before today ("3d")
    DaysAgo(u32),
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    /// Calendar date given as YYYY-MM-DD
    Exact(NaiveDate),
}

impl DateReference {
    /// Parse a date argument
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" => return Ok(DateReference::Today),
            "yesterday" => return Ok(DateReference::Yesterday),
            _ => {}
        }

        if let Some(days) = normalized.strip_suffix('d') {
            if let Ok(days) = days.parse::<u32>() {
                return Ok(DateReference::DaysAgo(days));
            }
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day.trim())
                .map(DateReference::LastWeekday)
                .ok_or_else(|| MoodlogError::InvalidDate(input.to_string()));
        }

        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DateReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(DateReference::Exact)
            .map_err(|_| MoodlogError::InvalidDate(input.to_string()))
    }

    /// Resolve to a calendar date relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::DaysAgo(days) => today
                .checked_sub_signed(Duration::days(i64::from(*days)))
                .unwrap_or(NaiveDate::MIN),
            DateReference::Weekday(target) => today - Duration::days(days_since(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_since(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::Exact(date) => *date,
        }
    }
}

/// Parse and resolve in one step
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    DateReference::parse(input).map(|reference| reference.resolve(today))
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days back from `today` to the latest `target` weekday (0 when today matches)
fn days_since(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    i64::from((current + 7 - target.num_days_from_monday()) % 7)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Friday
    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    #[test]
    fn test_parse_simple_refs() {
        assert_eq!(DateReference::parse("today").unwrap(), DateReference::Today);
        assert_eq!(DateReference::parse("Yesterday").unwrap(), DateReference::Yesterday);
        assert_eq!(DateReference::parse("3d").unwrap(), DateReference::DaysAgo(3));
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            DateReference::parse("monday").unwrap(),
            DateReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            DateReference::parse("last fri").unwrap(),
            DateReference::LastWeekday(Weekday::Fri)
        );
    }

    #[test]
    fn test_parse_exact_date() {
        assert_eq!(
            DateReference::parse("2024-01-15").unwrap(),
            DateReference::Exact(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateReference::parse("someday").is_err());
        assert!(DateReference::parse("2024-13-01").is_err());
        assert!(DateReference::parse("15-01-2024").is_err());
        assert!(DateReference::parse("last week").is_err());
        assert!(DateReference::parse("d").is_err());
        match DateReference::parse("nope").unwrap_err() {
            MoodlogError::InvalidDate(input) => assert_eq!(input, "nope"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_relative_days() {
        assert_eq!(DateReference::Today.resolve(base()), base());
        assert_eq!(
            DateReference::Yesterday.resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
        );
        assert_eq!(
            DateReference::DaysAgo(17).resolve(base()),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_resolve_weekday_includes_today() {
        assert_eq!(DateReference::Weekday(Weekday::Fri).resolve(base()), base());
        assert_eq!(
            DateReference::Weekday(Weekday::Mon).resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
        );
    }

    #[test]
    fn test_resolve_last_weekday_excludes_today() {
        assert_eq!(
            DateReference::LastWeekday(Weekday::Fri).resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
        assert_eq!(
            DateReference::LastWeekday(Weekday::Sat).resolve(base()),
            NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()
        );
    }

    #[test]
    fn test_parse_date_helper() {
        assert_eq!(
            parse_date("yesterday", base()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
        );
    }
}
