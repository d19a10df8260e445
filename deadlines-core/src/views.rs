//! The two page views: upcoming deadlines and full conference details.
//!
//! Each view is built in two steps. First the dataset is turned into
//! display records (plain serializable structs), then the records are handed
//! to a [`ViewTemplates`] implementation which produces the markup.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::DeadlinesResult;
use crate::model::{Conference, Deadline, Person};
use crate::schedule::next_deadline;
use crate::template::ViewTemplates;
use crate::time_format::{format_date, is_urgent, relative_time};

/// Rendered into the deadlines container when nothing is upcoming.
pub const EMPTY_DEADLINES: &str = "<p>No upcoming deadlines</p>";

/// One row of the deadlines view.
#[derive(Debug, Clone, Serialize)]
pub struct DeadlineItem<'a> {
    pub conference: &'a Conference,
    pub acronym: &'a str,
    pub deadline: DeadlineEntry<'a>,
    pub relative_time: String,
    pub is_urgent: bool,
    /// One entry per interested name, `None` where the name is unknown.
    pub interested_people: Vec<Option<&'a Person>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeadlineEntry<'a> {
    pub title: &'a str,
    pub date: &'a CalendarDate,
    pub formatted_date: String,
}

impl<'a> DeadlineEntry<'a> {
    fn new(deadline: &'a Deadline) -> Self {
        DeadlineEntry {
            title: &deadline.title,
            date: &deadline.date,
            formatted_date: format_date(&deadline.date),
        }
    }
}

/// One conference in the details view.
#[derive(Debug, Clone, Serialize)]
pub struct ConferenceDetails<'a> {
    pub name: &'a str,
    pub acronym: &'a str,
    pub date_range: String,
    pub location: String,
    pub url: &'a str,
    pub deadlines: Vec<DeadlineEntry<'a>>,
}

/// Conferences with an upcoming deadline, soonest first.
pub fn deadline_items<'a>(
    conferences: &'a [Conference],
    humans: &'a [Person],
    today: NaiveDate,
) -> Vec<DeadlineItem<'a>> {
    // Later entries overwrite earlier ones on duplicate names
    let people: HashMap<&str, &Person> = humans.iter().map(|p| (p.name.as_str(), p)).collect();

    let mut upcoming: Vec<(&Conference, &Deadline)> = conferences
        .iter()
        .filter_map(|conf| next_deadline(conf, today).map(|d| (conf, d)))
        .collect();

    // Stable, so conferences sharing a date keep dataset order
    upcoming.sort_by(|a, b| a.1.date.chronological(&b.1.date));

    upcoming
        .into_iter()
        .map(|(conference, deadline)| DeadlineItem {
            conference,
            acronym: &conference.acronym,
            deadline: DeadlineEntry::new(deadline),
            relative_time: relative_time(&deadline.date, today),
            is_urgent: is_urgent(&deadline.date, today),
            interested_people: conference
                .interested
                .iter()
                .map(|name| people.get(name.as_str()).copied())
                .collect(),
        })
        .collect()
}

/// Every conference in dataset order, deadlines sorted chronologically.
pub fn conference_details(conferences: &[Conference]) -> Vec<ConferenceDetails<'_>> {
    conferences
        .iter()
        .map(|conf| {
            let mut deadlines: Vec<&Deadline> = conf.deadlines.iter().collect();
            deadlines.sort_by(|a, b| a.date.chronological(&b.date));

            ConferenceDetails {
                name: &conf.name,
                acronym: &conf.acronym,
                date_range: date_range(&conf.dates.0, &conf.dates.1),
                location: conf.location.join(", "),
                url: &conf.url,
                deadlines: deadlines.into_iter().map(DeadlineEntry::new).collect(),
            }
        })
        .collect()
}

/// "June 5, 2025" for single-day events, "June 5, 2025 – June 7, 2025" otherwise.
pub fn date_range(start: &CalendarDate, end: &CalendarDate) -> String {
    if start == end {
        format_date(start)
    } else {
        format!("{} – {}", format_date(start), format_date(end))
    }
}

/// Markup for the deadlines container.
pub fn render_deadlines_view(
    conferences: &[Conference],
    humans: &[Person],
    today: NaiveDate,
    templates: &dyn ViewTemplates,
) -> DeadlinesResult<String> {
    let items = deadline_items(conferences, humans, today);
    debug!(count = items.len(), %today, "Upcoming deadlines");

    if items.is_empty() {
        return Ok(EMPTY_DEADLINES.to_string());
    }

    templates.render_deadlines(&items)
}

/// Markup for the details container.
pub fn render_details_view(
    conferences: &[Conference],
    templates: &dyn ViewTemplates,
) -> DeadlinesResult<String> {
    let details = conference_details(conferences);
    debug!(count = details.len(), "Conference details");

    templates.render_details(&details)
}
