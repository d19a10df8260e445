//! Calendar dates as they appear in the dataset.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A calendar day read from the dataset.
///
/// Dates that don't parse are kept as `Invalid` with their raw text, so a
/// single malformed entry degrades its own display instead of failing the
/// whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CalendarDate {
    Valid(NaiveDate),
    Invalid(String),
}

impl CalendarDate {
    /// Parse a date string.
    /// - `YYYY-MM-DD`
    /// - RFC 3339 timestamps, reduced to the local calendar day
    /// - `YYYY-MM-DDTHH:MM:SS` without offset
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CalendarDate::Valid(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return CalendarDate::Valid(dt.with_timezone(&Local).date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return CalendarDate::Valid(dt.date());
        }

        CalendarDate::Invalid(s.to_string())
    }

    pub fn naive(&self) -> Option<NaiveDate> {
        match self {
            CalendarDate::Valid(date) => Some(*date),
            CalendarDate::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CalendarDate::Valid(_))
    }

    /// Chronological ordering with invalid dates after every valid one.
    /// Two invalid dates compare equal so a stable sort keeps their order.
    pub fn chronological(&self, other: &Self) -> Ordering {
        match (self.naive(), other.naive()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate::Valid(date)
    }
}

impl From<String> for CalendarDate {
    fn from(s: String) -> Self {
        CalendarDate::parse(&s)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarDate::Valid(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CalendarDate::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

/// Parse a YYYY-MM-DD argument, e.g. an evaluation day given on the command line.
pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
