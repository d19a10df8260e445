use anyhow::Result;
use deadlines_core::loader::DataSource;
use deadlines_core::views::conference_details;

use super::load_dataset;
use crate::render::Render;

pub async fn run(source: DataSource) -> Result<()> {
    let dataset = load_dataset(&source).await?;
    let details = conference_details(&dataset.conferences);

    let blocks: Vec<String> = details.iter().map(|c| c.render()).collect();
    if !blocks.is_empty() {
        println!("{}", blocks.join("\n\n"));
    }

    Ok(())
}
