//! Markup templates for the views and the page around them.
//!
//! [`ViewTemplates`] is the seam between display records and markup. The
//! bundled implementation, [`TeraTemplates`], uses Tera with built-in
//! templates that can be overridden file by file from a directory.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::error::{DeadlinesError, DeadlinesResult, describe_tera_error};
use crate::views::{ConferenceDetails, DeadlineItem};

/// Element id of the container holding the deadlines view.
pub const DEADLINES_CONTAINER: &str = "deadlines-view";
/// Element id of the container holding the details view.
pub const DETAILS_CONTAINER: &str = "details-view";

/// The templates a page is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Deadlines,
    Details,
    Page,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Deadlines, TemplateId::Details, TemplateId::Page];

    /// Identifier used in logs and error messages.
    pub fn element_id(&self) -> &'static str {
        match self {
            TemplateId::Deadlines => "deadlines-template",
            TemplateId::Details => "details-template",
            TemplateId::Page => "page-template",
        }
    }

    /// File name looked up in a template directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::Deadlines => "deadlines.html",
            TemplateId::Details => "details.html",
            TemplateId::Page => "page.html",
        }
    }

    fn builtin(&self) -> &'static str {
        match self {
            TemplateId::Deadlines => include_str!("../templates/deadlines.html"),
            TemplateId::Details => include_str!("../templates/details.html"),
            TemplateId::Page => include_str!("../templates/page.html"),
        }
    }
}

/// Everything the page shell needs. Fragments are already rendered markup.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub generated_on: String,
    pub deadlines_container: &'static str,
    pub details_container: &'static str,
    pub deadlines_view: &'a str,
    pub details_view: &'a str,
}

/// Turns display records into markup.
pub trait ViewTemplates {
    fn render_deadlines(&self, items: &[DeadlineItem<'_>]) -> DeadlinesResult<String>;
    fn render_details(&self, conferences: &[ConferenceDetails<'_>]) -> DeadlinesResult<String>;
    fn render_page(&self, page: &PageContext<'_>) -> DeadlinesResult<String>;
}

pub struct TeraTemplates {
    tera: Tera,
}

impl TeraTemplates {
    /// Built-in templates only.
    pub fn builtin() -> DeadlinesResult<Self> {
        let mut tera = Tera::default();
        for id in TemplateId::ALL {
            tera.add_raw_template(id.file_name(), id.builtin())?;
        }
        tera.autoescape_on(vec![".html"]);

        Ok(TeraTemplates { tera })
    }

    /// Built-in templates, with any file present in `dir` taking precedence.
    pub fn with_overrides(dir: &Path) -> DeadlinesResult<Self> {
        if !dir.is_dir() {
            return Err(DeadlinesError::Config(format!(
                "Template directory {} does not exist",
                dir.display()
            )));
        }

        let mut templates = Self::builtin()?;
        for id in TemplateId::ALL {
            let path = dir.join(id.file_name());
            if !path.exists() {
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            templates.tera.add_raw_template(id.file_name(), &content)?;
            info!(template = id.element_id(), path = %path.display(), "Using custom template");
        }

        Ok(templates)
    }

    fn render<T: Serialize>(&self, id: TemplateId, key: &str, value: &T) -> DeadlinesResult<String> {
        let mut context = Context::new();
        context.insert(key, value);

        debug!(template = id.element_id(), "Rendering");
        self.tera.render(id.file_name(), &context).map_err(|e| {
            DeadlinesError::Template(format!("{}: {}", id.element_id(), describe_tera_error(&e)))
        })
    }
}

impl ViewTemplates for TeraTemplates {
    fn render_deadlines(&self, items: &[DeadlineItem<'_>]) -> DeadlinesResult<String> {
        self.render(TemplateId::Deadlines, "items", &items)
    }

    fn render_details(&self, conferences: &[ConferenceDetails<'_>]) -> DeadlinesResult<String> {
        self.render(TemplateId::Details, "conferences", &conferences)
    }

    fn render_page(&self, page: &PageContext<'_>) -> DeadlinesResult<String> {
        self.render(TemplateId::Page, "page", page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;
    use crate::model::{Conference, Deadline, Person};
    use crate::views::{conference_details, deadline_items};
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn rustconf() -> Conference {
        Conference {
            name: "Rust <Conf>".into(),
            acronym: "RC".into(),
            location: vec!["Montreal".into(), "Canada".into()],
            url: "https://rustconf.com".into(),
            dates: (CalendarDate::parse("2025-09-02"), CalendarDate::parse("2025-09-05")),
            deadlines: vec![
                Deadline {
                    title: "Talks".into(),
                    date: CalendarDate::parse("2025-06-12"),
                },
                Deadline {
                    title: "Workshops".into(),
                    date: CalendarDate::parse("2025-05-01"),
                },
            ],
            interested: vec!["Ada".into(), "Ghost".into()],
        }
    }

    fn ada() -> Person {
        serde_json::from_str(r#"{"name": "Ada", "github": "ada"}"#).unwrap()
    }

    #[test]
    fn deadlines_template_renders_items() {
        let templates = TeraTemplates::builtin().unwrap();
        let conferences = vec![rustconf()];
        let humans = vec![ada()];
        let items = deadline_items(&conferences, &humans, day("2025-06-10"));

        let html = templates.render_deadlines(&items).unwrap();
        assert!(html.contains("RC"));
        assert!(html.contains("Talks"));
        assert!(html.contains("June 12, 2025"));
        assert!(html.contains("2 days"));
        assert!(html.contains("urgent"));
        assert!(html.contains("Ada"));
        assert!(html.contains("rustconf.com"));
    }

    #[test]
    fn missing_person_does_not_break_rendering() {
        let templates = TeraTemplates::builtin().unwrap();
        let conferences = vec![rustconf()];
        let items = deadline_items(&conferences, &[], day("2025-06-10"));

        let html = templates.render_deadlines(&items).unwrap();
        assert!(html.contains("RC"));
    }

    #[test]
    fn details_template_escapes_and_sorts() {
        let templates = TeraTemplates::builtin().unwrap();
        let conferences = vec![rustconf()];
        let details = conference_details(&conferences);

        let html = templates.render_details(&details).unwrap();
        assert!(html.contains("Rust &lt;Conf&gt;"));
        assert!(html.contains("Montreal, Canada"));
        assert!(html.contains("September 2, 2025 – September 5, 2025"));
        let workshops = html.find("Workshops").unwrap();
        let talks = html.find("Talks").unwrap();
        assert!(workshops < talks);
    }

    #[test]
    fn details_template_with_no_conferences() {
        let templates = TeraTemplates::builtin().unwrap();
        let html = templates.render_details(&[]).unwrap();
        assert!(!html.contains("<li"));
    }

    #[test]
    fn page_embeds_fragments_in_containers() {
        let templates = TeraTemplates::builtin().unwrap();
        let page = PageContext {
            title: "Deadlines",
            generated_on: "June 1, 2025".into(),
            deadlines_container: DEADLINES_CONTAINER,
            details_container: DETAILS_CONTAINER,
            deadlines_view: "<p>No upcoming deadlines</p>",
            details_view: "<ul class=\"conferences\"></ul>",
        };

        let html = templates.render_page(&page).unwrap();
        assert!(html.contains(r#"id="deadlines-view""#));
        assert!(html.contains(r#"id="details-view""#));
        assert!(html.contains("<p>No upcoming deadlines</p>"));
        assert!(html.contains("<title>Deadlines</title>"));
    }

    #[test]
    fn directory_overrides_single_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("details.html"),
            "{% for c in conferences %}[{{ c.acronym }}]{% endfor %}",
        )
        .unwrap();

        let templates = TeraTemplates::with_overrides(dir.path()).unwrap();
        let conferences = vec![rustconf()];
        let details = conference_details(&conferences);
        assert_eq!(templates.render_details(&details).unwrap(), "[RC]");

        // Untouched templates fall back to the built-in ones
        let items = deadline_items(&conferences, &[], day("2025-06-10"));
        assert!(templates.render_deadlines(&items).unwrap().contains("Talks"));
    }

    #[test]
    fn missing_template_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            TeraTemplates::with_overrides(&missing),
            Err(DeadlinesError::Config(_))
        ));
    }

    #[test]
    fn broken_override_reports_template_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), "{% if %}").unwrap();
        assert!(matches!(
            TeraTemplates::with_overrides(dir.path()),
            Err(DeadlinesError::Template(_))
        ));
    }
}
