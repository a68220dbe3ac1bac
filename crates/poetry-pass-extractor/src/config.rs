//! Configuration for the Extractor

use poetry_pass_domain::{LengthBounds, LevelCeiling, DEFAULT_LEVEL_PREFIX};
use serde::{Deserialize, Serialize};

/// Clause delimiters: full-width comma, period, exclamation mark, question mark, semicolon
pub const DEFAULT_DELIMITERS: [char; 5] = ['，', '。', '！', '？', '；'];

/// Settings for the poetry line extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoetryConfig {
    /// Shortest kept clause (code points)
    pub min_chars: usize,

    /// Longest kept clause (code points)
    pub max_chars: usize,

    /// Characters a paragraph is split on
    pub delimiters: Vec<char>,
}

impl PoetryConfig {
    /// Clause length bounds
    pub fn bounds(&self) -> Result<LengthBounds, String> {
        LengthBounds::try_new(self.min_chars, self.max_chars)
            .map_err(|e| format!("poetry: {}", e))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.bounds()?;
        if self.delimiters.is_empty() {
            return Err("poetry: delimiters must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for PoetryConfig {
    fn default() -> Self {
        Self {
            min_chars: 5,
            max_chars: 7,
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }
}

/// Settings for the vocabulary extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Shortest kept word (code points)
    pub min_chars: usize,

    /// Longest kept word (code points)
    pub max_chars: usize,

    /// Highest accepted proficiency level
    pub max_level: u32,

    /// Prefix of the level markers, followed by the level number
    pub level_prefix: String,
}

impl VocabularyConfig {
    /// Word length bounds
    pub fn bounds(&self) -> Result<LengthBounds, String> {
        LengthBounds::try_new(self.min_chars, self.max_chars)
            .map_err(|e| format!("vocabulary: {}", e))
    }

    /// Level ceiling
    pub fn ceiling(&self) -> Result<LevelCeiling, String> {
        LevelCeiling::new(self.max_level).map_err(|e| format!("vocabulary: {}", e))
    }

    /// Copy of this configuration with a different level ceiling
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.bounds()?;
        self.ceiling()?;
        if self.level_prefix.is_empty() {
            return Err("vocabulary: level_prefix must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            min_chars: 2,
            max_chars: 4,
            max_level: LevelCeiling::DEFAULT.get(),
            level_prefix: DEFAULT_LEVEL_PREFIX.to_string(),
        }
    }
}

/// Configuration for both extractors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Poetry line extraction
    pub poetry: PoetryConfig,

    /// Vocabulary extraction
    pub vocabulary: VocabularyConfig,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.poetry.validate()?;
        self.vocabulary.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
