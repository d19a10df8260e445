//! Error types for deadline loading and rendering.

use thiserror::Error;

/// Errors that can occur while loading the dataset or rendering views.
#[derive(Error, Debug)]
pub enum DeadlinesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not fetch {source_name}: {message}")]
    Fetch { source_name: String, message: String },

    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for DeadlinesError {
    fn from(err: tera::Error) -> Self {
        DeadlinesError::Template(describe_tera_error(&err))
    }
}

/// Tera keeps the useful detail (line, missing variable) in the source chain.
pub(crate) fn describe_tera_error(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}

/// Result type alias for deadline operations.
pub type DeadlinesResult<T> = Result<T, DeadlinesError>;
