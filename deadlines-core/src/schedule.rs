//! Picking the deadline that matters next for a conference.

use chrono::NaiveDate;

use crate::model::{Conference, Deadline};

/// The earliest deadline dated `today` or later.
///
/// Deadlines on the same day resolve to the one listed first. Invalid dates
/// never qualify.
pub fn next_deadline(conference: &Conference, today: NaiveDate) -> Option<&Deadline> {
    conference
        .deadlines
        .iter()
        .filter_map(|deadline| {
            let date = deadline.date.naive()?;
            (date >= today).then_some((date, deadline))
        })
        .min_by_key(|(date, _)| *date)
        .map(|(_, deadline)| deadline)
}
