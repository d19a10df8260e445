pub mod config;
pub mod details;
pub mod render;
pub mod upcoming;

use anyhow::Result;
use deadlines_core::Dataset;
use deadlines_core::loader::DataSource;

use crate::utils::tui::create_spinner;

/// Load the dataset behind a spinner. Failures are logged before being
/// returned, and nothing gets rendered.
pub async fn load_dataset(source: &DataSource) -> Result<Dataset> {
    let spinner = create_spinner(format!("Loading {source}"));
    let result = source.load().await;
    spinner.finish_and_clear();

    match result {
        Ok(dataset) => Ok(dataset),
        Err(e) => {
            tracing::error!(source = %source, error = %e, "Error loading conference data");
            Err(e.into())
        }
    }
}
