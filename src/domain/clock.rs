//! Clock abstraction for "now" and "today"

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Source of the current instant
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Current local calendar date
    fn today(&self) -> NaiveDate;

    /// Current local hour of day (0-23)
    fn hour(&self) -> u32;
}

/// Clock backed by the host's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock pinned to a single date and time; its instant is read as UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        FixedClock { now }
    }

    /// Fixed clock at noon on the given date
    pub fn at_noon(date: NaiveDate) -> Self {
        FixedClock {
            now: date.and_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now.and_utc().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn hour(&self) -> u32 {
        self.now.hour()
    }
}
