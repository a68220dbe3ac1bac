//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use poetry_pass_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Filter settings for both extractors
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Corpus and artifact locations
    #[serde(default)]
    pub paths: Paths,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Corpus and artifact locations, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Poetry corpus (JSON array of poems)
    pub poetry_input: PathBuf,

    /// Poetry artifact
    pub poetry_output: PathBuf,

    /// Vocabulary list (JSON array of entries)
    pub words_input: PathBuf,

    /// Vocabulary artifact
    pub words_output: PathBuf,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Could not find config directory".into()))?;
        Ok(dir.join("poetry-pass").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the default path is used when
    /// present, and built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => match Self::path() {
                Ok(path) if path.exists() => Self::load_from(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            poetry_input: PathBuf::from("data/raw/tang300.json"),
            poetry_output: PathBuf::from("data/poetry.txt"),
            words_input: PathBuf::from("data/raw/hsk3.json"),
            words_output: PathBuf::from("data/words.txt"),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
