use anyhow::Result;
use chrono::NaiveDate;
use deadlines_core::loader::DataSource;
use deadlines_core::views::deadline_items;
use owo_colors::OwoColorize;

use super::load_dataset;
use crate::render::Render;

pub async fn run(source: DataSource, today: NaiveDate) -> Result<()> {
    let dataset = load_dataset(&source).await?;
    let items = deadline_items(&dataset.conferences, &dataset.humans, today);

    if items.is_empty() {
        println!("{}", "No upcoming deadlines".dimmed());
        return Ok(());
    }

    for item in &items {
        println!("{}", item.render());
    }

    Ok(())
}
