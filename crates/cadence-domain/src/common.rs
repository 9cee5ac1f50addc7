//! Shared traits, calendar intervals, and enums for profiling primitives.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of a sequence of [`Amounted`] values.
pub fn total_amount<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// First day of the calendar week used for week-aligned windows.
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Days elapsed between the start of the containing week and `date`.
    pub fn days_into_week(self, date: NaiveDate) -> u64 {
        let offset = match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        };
        u64::from(offset)
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeekStart::Sunday => "sunday",
            WeekStart::Monday => "monday",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Returned when a week start label is not recognised.
pub struct ParseWeekStartError(pub String);

impl fmt::Display for ParseWeekStartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown week start `{}` (expected sunday or monday)", self.0)
    }
}

impl std::error::Error for ParseWeekStartError {}

impl FromStr for WeekStart {
    type Err = ParseWeekStartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(ParseWeekStartError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates time units used by `TimeInterval`.
pub enum TimeUnit {
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Represents a time unit and multiplier for calendar stepping.
pub struct TimeInterval {
    pub every: u32,
    pub unit: TimeUnit,
}

impl TimeInterval {
    pub const fn new(every: u32, unit: TimeUnit) -> Self {
        Self { every, unit }
    }

    /// Calculates the date one interval after `from`, or `None` past [`NaiveDate::MAX`].
    ///
    /// Months advance by calendar month (clamping the day to the target month's length).
    pub fn next_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            TimeUnit::Week => from.checked_add_days(Days::new(u64::from(self.every) * 7)),
            TimeUnit::Month => from.checked_add_months(Months::new(self.every)),
        }
    }

    /// Floors `date` to the start of its week or month, or `None` before [`NaiveDate::MIN`].
    pub fn normalize_anchor(&self, date: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
        let offset = match self.unit {
            TimeUnit::Week => week_start.days_into_week(date),
            TimeUnit::Month => u64::from(date.day0()),
        };
        date.checked_sub_days(Days::new(offset))
    }

    /// Exclusive end of the week or month containing `date`. The multiplier does not widen
    /// the ceiling. `None` when that end is not representable.
    pub fn ceiling(&self, date: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
        let unit = TimeInterval::new(1, self.unit);
        unit.normalize_anchor(date, week_start)
            .and_then(|start| unit.next_date(start))
    }
}
