//! Poetry line selection

use crate::clauses::ClauseSplitter;
use crate::config::PoetryConfig;
use crate::error::ExtractorError;
use crate::types::{Harvest, PoemRecord};
use poetry_pass_domain::{contains_rare_chars, LengthBounds};

/// Selects poem clauses usable as passphrase material
pub struct PoetryExtractor {
    splitter: ClauseSplitter,
    bounds: LengthBounds,
}

impl PoetryExtractor {
    /// Create a poetry extractor from a validated configuration
    pub fn new(config: &PoetryConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let bounds = config.bounds().map_err(ExtractorError::Config)?;
        Ok(Self {
            splitter: ClauseSplitter::new(config.delimiters.clone()),
            bounds,
        })
    }

    /// Check whether a trimmed clause qualifies
    pub fn keeps(&self, clause: &str) -> bool {
        self.bounds.fits(clause) && !contains_rare_chars(clause)
    }

    /// Gather every qualifying clause from every paragraph of every poem
    pub fn harvest(&self, poems: &[PoemRecord]) -> Harvest {
        let mut harvest = Harvest::default();

        let paragraphs = poems
            .iter()
            .filter_map(|poem| poem.paragraphs.as_deref())
            .flatten();

        for paragraph in paragraphs {
            for clause in self.splitter.split(paragraph) {
                harvest.offer(clause, self.keeps(clause));
            }
        }

        harvest
    }
}

impl Default for PoetryExtractor {
    fn default() -> Self {
        Self {
            splitter: ClauseSplitter::default(),
            bounds: LengthBounds::new(5, 7),
        }
    }
}
