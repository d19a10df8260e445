//! Global deadlines configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{DeadlinesError, DeadlinesResult};

static DEFAULT_DATA: &str = "data.json";
static DEFAULT_OUTPUT: &str = "index.html";
static DEFAULT_TITLE: &str = "Conference Deadlines";

fn default_data() -> String {
    DEFAULT_DATA.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Configuration at ~/.config/deadlines/config.toml
///
/// Every value can be overridden from the command line.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeadlinesConfig {
    /// Dataset location: a file path or an http(s) URL.
    #[serde(default = "default_data")]
    pub data: String,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DeadlinesConfig {
    fn default() -> Self {
        DeadlinesConfig {
            data: default_data(),
            output: default_output(),
            templates_dir: None,
            title: default_title(),
        }
    }
}

impl DeadlinesConfig {
    pub fn config_path() -> DeadlinesResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DeadlinesError::Config("Could not determine config directory".into()))?
            .join("deadlines");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/deadlines/config.toml, creating a commented-out one on first run.
    ///
    /// Without a usable config directory the defaults apply, so flags alone
    /// are enough to run any command.
    pub fn load() -> DeadlinesResult<Self> {
        match Self::config_path() {
            Ok(config_path) => Self::load_or_create(&config_path),
            Err(e) => {
                warn!(error = %e, "Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load `path`, writing the commented-out default there first if it is
    /// missing. Failing to write it is logged, not fatal; a file that exists
    /// but doesn't parse is still an error.
    pub fn load_or_create(path: &Path) -> DeadlinesResult<Self> {
        if !path.exists() {
            if let Err(e) = Self::create_default_config(path) {
                warn!(path = %path.display(), error = %e, "Using default settings");
                return Ok(Self::default());
            }
        }

        Self::load_from(path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DeadlinesResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| DeadlinesError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DeadlinesError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DeadlinesResult<()> {
        let contents = format!(
            "\
# deadlines configuration

# Conference dataset, a file path or an http(s) URL:
# data = \"{}\"

# Where `deadlines render` writes the page:
# output = \"{}\"

# Directory with deadlines.html, details.html or page.html overriding the built-in templates:
# templates_dir = \"~/.config/deadlines/templates\"

# Page heading:
# title = \"{}\"
",
            DEFAULT_DATA, DEFAULT_OUTPUT, DEFAULT_TITLE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DeadlinesError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DeadlinesError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The effective settings as TOML.
    pub fn to_toml(&self) -> DeadlinesResult<String> {
        toml::to_string_pretty(self).map_err(|e| DeadlinesError::Config(e.to_string()))
    }

    pub fn output_path(&self) -> PathBuf {
        expand(&self.output)
    }

    pub fn templates_path(&self) -> Option<PathBuf> {
        self.templates_dir.as_deref().map(expand)
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeadlinesConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.data, "data.json");
        assert_eq!(config.output, PathBuf::from("index.html"));
        assert_eq!(config.title, "Conference Deadlines");
        assert!(config.templates_dir.is_none());
    }

    #[test]
    fn commented_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        DeadlinesConfig::create_default_config(&path).unwrap();

        assert!(path.exists());
        let config = DeadlinesConfig::load_from(&path).unwrap();
        assert_eq!(config.data, "data.json");
    }

    // --- load_or_create ---

    #[test]
    fn first_run_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deadlines").join("config.toml");

        let config = DeadlinesConfig::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.output, PathBuf::from("index.html"));
    }

    #[test]
    fn unwritable_config_dir_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be
        let blocker = dir.path().join("deadlines");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let config = DeadlinesConfig::load_or_create(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(config.data, "data.json");
        assert_eq!(config.title, "Conference Deadlines");
    }

    #[test]
    fn existing_broken_file_is_still_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "title = [").unwrap();

        assert!(matches!(
            DeadlinesConfig::load_or_create(&path),
            Err(DeadlinesError::Config(_))
        ));
    }

    // --- load_from ---

    #[test]
    fn reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data = \"https://example.org/data.json\"\noutput = \"public/index.html\"\ntemplates_dir = \"~/templates\"\n",
        )
        .unwrap();

        let config = DeadlinesConfig::load_from(&path).unwrap();
        assert_eq!(config.data, "https://example.org/data.json");
        assert_eq!(config.output_path(), PathBuf::from("public/index.html"));
        assert!(!config.templates_path().unwrap().to_string_lossy().starts_with('~'));
        assert_eq!(config.title, "Conference Deadlines");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data = [unterminated").unwrap();

        assert!(matches!(DeadlinesConfig::load_from(&path), Err(DeadlinesError::Config(_))));
    }

    #[test]
    fn to_toml_skips_unset_templates_dir() {
        let toml = DeadlinesConfig::default().to_toml().unwrap();
        assert!(toml.contains("data = \"data.json\""));
        assert!(!toml.contains("templates_dir"));
    }
}
