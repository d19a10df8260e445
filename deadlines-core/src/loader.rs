//! Reading the dataset from a file or over HTTP.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DeadlinesError, DeadlinesResult};
use crate::model::Dataset;

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    /// `~` in paths is expanded.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(shellexpand::tilde(s).into_owned()))
        }
    }

    /// Read and parse the dataset.
    pub async fn load(&self) -> DeadlinesResult<Dataset> {
        let content = match self {
            DataSource::File(path) => read_file(path).await?,
            DataSource::Url(url) => fetch(url).await?,
        };

        let dataset = parse_dataset(&content)?;
        info!(
            source = %self,
            conferences = dataset.conferences.len(),
            humans = dataset.humans.len(),
            "Loaded conference data"
        );
        debug!(?dataset, "Conference data");

        Ok(dataset)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

pub fn parse_dataset(content: &str) -> DeadlinesResult<Dataset> {
    Ok(serde_json::from_str(content)?)
}

async fn read_file(path: &Path) -> DeadlinesResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DeadlinesError::Fetch {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
}

async fn fetch(url: &str) -> DeadlinesResult<String> {
    let fetch_error = |message: String| DeadlinesError::Fetch {
        source_name: url.to_string(),
        message,
    };

    let response = reqwest::get(url).await.map_err(|e| fetch_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_error(format!("HTTP {status}")));
    }

    response.text().await.map_err(|e| fetch_error(e.to_string()))
}
