//! Human-readable absolute and relative dates.

use chrono::NaiveDate;

use crate::date::CalendarDate;

/// Deadlines fewer than this many days away are urgent.
pub const URGENT_WINDOW_DAYS: i64 = 7;

const INVALID_DATE: &str = "Invalid Date";

/// Long form, e.g. "June 5, 2025".
pub fn format_date(date: &CalendarDate) -> String {
    match date {
        CalendarDate::Valid(d) => d.format("%B %-d, %Y").to_string(),
        CalendarDate::Invalid(_) => INVALID_DATE.to_string(),
    }
}

/// Whole calendar days from `today` to `date`; negative for past dates.
pub fn days_until(date: &CalendarDate, today: NaiveDate) -> Option<i64> {
    date.naive().map(|d| (d - today).num_days())
}

/// "3 days ago" for past dates, "3 days" for today and later.
pub fn relative_time(date: &CalendarDate, today: NaiveDate) -> String {
    let Some(days) = days_until(date, today) else {
        return INVALID_DATE.to_string();
    };

    if days < 0 {
        format!("{} ago", distance_in_words(-days))
    } else {
        distance_in_words(days)
    }
}

/// True when the date is between today (inclusive) and a week out (exclusive).
pub fn is_urgent(date: &CalendarDate, today: NaiveDate) -> bool {
    days_until(date, today).is_some_and(|days| (0..URGENT_WINDOW_DAYS).contains(&days))
}

/// Approximate distance for a non-negative number of days.
fn distance_in_words(days: i64) -> String {
    match days {
        0 => "less than a day".to_string(),
        1..=29 => format!("{} {}", days, pluralize("day", days)),
        30..=59 => {
            let months = (days + 15) / 30;
            format!("about {} {}", months, pluralize("month", months))
        }
        60..=364 => format!("{} months", (days + 15) / 30),
        _ => {
            let months = days * 12 / 365;
            let years = months / 12;
            match months % 12 {
                0..=2 => format!("about {} {}", years, pluralize("year", years)),
                3..=8 => format!("over {} {}", years, pluralize("year", years)),
                _ => format!("almost {} years", years + 1),
            }
        }
    }
}

fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
