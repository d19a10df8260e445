use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use deadlines_core::loader::DataSource;
use deadlines_core::site::build_page;
use deadlines_core::template::TeraTemplates;
use owo_colors::OwoColorize;
use tracing::info;

use super::load_dataset;

pub async fn run(
    source: DataSource,
    out: PathBuf,
    templates_dir: Option<PathBuf>,
    title: &str,
    today: NaiveDate,
) -> Result<()> {
    // Bad templates should fail before any network round trip
    let templates = match &templates_dir {
        Some(dir) => TeraTemplates::with_overrides(dir)?,
        None => TeraTemplates::builtin()?,
    };

    let dataset = load_dataset(&source).await?;
    let page = build_page(&dataset, title, today, &templates)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }
    std::fs::write(&out, &page.html).with_context(|| format!("Could not write {}", out.display()))?;

    info!(path = %out.display(), bytes = page.html.len(), "Wrote page");
    println!(
        "{} {} {}",
        "✓".green(),
        out.display(),
        format!("({} conferences)", dataset.conferences.len()).dimmed()
    );

    Ok(())
}
