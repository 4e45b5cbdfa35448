//! Elapsed-time decomposition and the two uptime renderings.
//!
//! Unit sizes are fixed: a year is 365 days and a decade is ten such years.
//! Every field except `decades` is taken modulo the next coarser unit, so the
//! breakdown is an approximation of the calendar, not a calendar.

use crate::system_info::LoadAverage;

pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;
pub const WEEK: u64 = 7 * DAY;
pub const YEAR: u64 = 365 * DAY;
pub const DECADE: u64 = 10 * YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Decade,
    Year,
    Week,
    Day,
    Hour,
    Minute,
}

impl Unit {
    pub fn singular(self) -> &'static str {
        match self {
            Unit::Decade => "decade",
            Unit::Year => "year",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Unit::Decade => "decades",
            Unit::Year => "years",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
        }
    }

    pub fn seconds(self) -> u64 {
        match self {
            Unit::Decade => DECADE,
            Unit::Year => YEAR,
            Unit::Week => WEEK,
            Unit::Day => DAY,
            Unit::Hour => HOUR,
            Unit::Minute => MINUTE,
        }
    }

    /// Label used by the pretty form: plural when `count > 1`.
    pub fn label(self, count: u64) -> &'static str {
        if count > 1 { self.plural() } else { self.singular() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationBreakdown {
    pub decades: u64,
    pub years: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl DurationBreakdown {
    pub fn from_seconds(elapsed_seconds: f64) -> Self {
        Self::from_whole_seconds(truncate_seconds(elapsed_seconds))
    }

    pub fn from_whole_seconds(secs: u64) -> Self {
        Self {
            decades: secs / DECADE,
            years: (secs / YEAR) % 10,
            weeks: (secs / WEEK) % 52,
            days: (secs / DAY) % 7,
            hours: (secs / HOUR) % 24,
            minutes: (secs / MINUTE) % 60,
        }
    }

    /// Units in descending order of size.
    pub fn units(&self) -> [(u64, Unit); 6] {
        [
            (self.decades, Unit::Decade),
            (self.years, Unit::Year),
            (self.weeks, Unit::Week),
            (self.days, Unit::Day),
            (self.hours, Unit::Hour),
            (self.minutes, Unit::Minute),
        ]
    }

    /// Seconds covered by the breakdown, saturating at `u64::MAX`.
    pub fn to_seconds(&self) -> u64 {
        self.units()
            .iter()
            .map(|(count, unit)| count.saturating_mul(unit.seconds()))
            .fold(0u64, u64::saturating_add)
    }
}

/// Negative and NaN inputs saturate to zero.
fn truncate_seconds(elapsed_seconds: f64) -> u64 {
    elapsed_seconds as u64
}

/// `"up 1 day, 1 hour, 1 minute"`. Zero units are skipped; all-zero input
/// yields `"up "`.
pub fn pretty_uptime(elapsed_seconds: f64) -> String {
    let breakdown = DurationBreakdown::from_seconds(elapsed_seconds);
    let parts: Vec<String> = breakdown
        .units()
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| format!("{} {}", count, unit.label(*count)))
        .collect();

    format!("up {}", parts.join(", "))
}

/// The part of the long form that depends on uptime: total days (uncapped),
/// then either `H:MM` or a minute count.
pub fn long_uptime(elapsed_seconds: f64) -> String {
    let secs = truncate_seconds(elapsed_seconds);
    let days = secs / DAY;
    let hours = (secs / HOUR) % 24;
    let minutes = (secs / MINUTE) % 60;

    let mut out = format!("up {} {}, ", days, if days != 1 { "days" } else { "day" });
    if hours != 0 {
        out.push_str(&format!("{:2}:{:02}, ", hours, minutes));
    } else {
        out.push_str(&format!("{} min, ", minutes));
    }
    out
}

pub fn users_and_load(users: usize, load: &LoadAverage) -> String {
    format!(
        "{:2} user{}, load average: {:.2}, {:.2}, {:.2}",
        users,
        if users == 1 { "" } else { "s" },
        load.one,
        load.five,
        load.fifteen
    )
}
