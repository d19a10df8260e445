//! Assembling both views into one page.

use chrono::NaiveDate;

use crate::error::DeadlinesResult;
use crate::model::Dataset;
use crate::template::{DEADLINES_CONTAINER, DETAILS_CONTAINER, PageContext, ViewTemplates};
use crate::time_format::format_date;
use crate::views::{render_deadlines_view, render_details_view};

/// The rendered fragments and the page containing them.
#[derive(Debug, Clone)]
pub struct Page {
    pub deadlines_view: String,
    pub details_view: String,
    pub html: String,
}

pub fn build_page(
    dataset: &Dataset,
    title: &str,
    today: NaiveDate,
    templates: &dyn ViewTemplates,
) -> DeadlinesResult<Page> {
    let deadlines_view = render_deadlines_view(&dataset.conferences, &dataset.humans, today, templates)?;
    let details_view = render_details_view(&dataset.conferences, templates)?;

    let html = templates.render_page(&PageContext {
        title,
        generated_on: format_date(&today.into()),
        deadlines_container: DEADLINES_CONTAINER,
        details_container: DETAILS_CONTAINER,
        deadlines_view: &deadlines_view,
        details_view: &details_view,
    })?;

    Ok(Page {
        deadlines_view,
        details_view,
        html,
    })
}
