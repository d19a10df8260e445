//! Terminal rendering for the deadline views.
//!
//! Extension traits that add colored output to the display records from
//! deadlines-core using owo_colors.

use deadlines_core::views::{ConferenceDetails, DeadlineItem};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DeadlineItem<'_> {
    fn render(&self) -> String {
        let relative = if self.is_urgent {
            self.relative_time.red().bold().to_string()
        } else {
            self.relative_time.yellow().to_string()
        };

        let mut line = format!(
            "{} {} {} {}",
            format!("{:<10}", self.acronym).bold(),
            self.deadline.title,
            format!("({})", self.deadline.formatted_date).dimmed(),
            relative
        );

        if !self.interested_people.is_empty() {
            line.push_str(&format!(" {}", render_people(&self.interested_people).dimmed()));
        }

        line
    }
}

impl Render for ConferenceDetails<'_> {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} {}", self.name.bold(), format!("({})", self.acronym).dimmed())];

        lines.push(format!("   {}", self.date_range));
        if !self.location.is_empty() {
            lines.push(format!("   {}", self.location));
        }
        if !self.url.is_empty() {
            lines.push(format!("   {}", self.url.blue()));
        }

        for deadline in &self.deadlines {
            lines.push(format!("   • {}: {}", deadline.title, deadline.formatted_date.dimmed()));
        }

        lines.join("\n")
    }
}

/// Interested names, `?` for people missing from the dataset
fn render_people(people: &[Option<&deadlines_core::Person>]) -> String {
    let names: Vec<&str> = people
        .iter()
        .map(|p| p.map(|p| p.name.as_str()).unwrap_or("?"))
        .collect();
    format!("[{}]", names.join(", "))
}
