//! Vocabulary word selection

use crate::config::VocabularyConfig;
use crate::error::ExtractorError;
use crate::types::{Harvest, WordEntry};
use poetry_pass_domain::{LengthBounds, LevelCeiling};

/// Selects graded vocabulary words usable as passphrase material
pub struct VocabularyExtractor {
    bounds: LengthBounds,
    ceiling: LevelCeiling,
    level_prefix: String,
}

impl VocabularyExtractor {
    /// Create a vocabulary extractor from a validated configuration
    pub fn new(config: &VocabularyConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let bounds = config.bounds().map_err(ExtractorError::Config)?;
        let ceiling = config.ceiling().map_err(ExtractorError::Config)?;
        Ok(Self {
            bounds,
            ceiling,
            level_prefix: config.level_prefix.clone(),
        })
    }

    /// Level ceiling in effect
    pub fn ceiling(&self) -> LevelCeiling {
        self.ceiling
    }

    /// Check whether an entry qualifies
    ///
    /// The first tag naming an accepted level decides; the word must then fit
    /// the length bounds. A graded entry whose word is `null` is never kept.
    pub fn keeps(&self, entry: &WordEntry) -> bool {
        self.graded(entry)
            && entry
                .simplified
                .as_deref()
                .is_some_and(|word| self.bounds.fits(word))
    }

    fn graded(&self, entry: &WordEntry) -> bool {
        self.ceiling
            .first_accepted(&entry.level, &self.level_prefix)
            .is_some()
    }

    /// Gather every qualifying word
    ///
    /// Fails on a graded entry whose word is `null`, since its length cannot
    /// be checked. Ungraded entries are never measured.
    pub fn harvest(&self, entries: &[WordEntry]) -> Result<Harvest, ExtractorError> {
        let mut harvest = Harvest::default();
        for (index, entry) in entries.iter().enumerate() {
            let graded = self.graded(entry);
            let word = match entry.simplified.as_deref() {
                Some(word) => word,
                None if graded => {
                    return Err(ExtractorError::InvalidRecord {
                        index,
                        reason: "graded entry has a null `simplified` word".to_string(),
                    });
                }
                None => "",
            };
            harvest.offer(word, graded && self.bounds.fits(word));
        }
        Ok(harvest)
    }
}
