//! Clock capability
//!
//! The dashboards depend on "today" and "now". Handlers read both through
//! this trait so tests can pin the simulated day and time.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Source of the current local date and time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Weekday label as stored in the timetable, e.g. "Tuesday"
    fn weekday_label(&self) -> &'static str {
        weekday_label(self.now().weekday())
    }

    /// Today's date as "YYYY-MM-DD"
    fn today(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }

    /// Current time of day as zero-padded "HH:MM"
    fn time_of_day(&self) -> String {
        self.now().format("%H:%M").to_string()
    }
}

/// Wall clock in the server's local timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Returns None for an invalid date or time
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self(date.and_time(time)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
