//! End-to-end extraction runs: read, filter, dedupe, write

use crate::artifact::write_artifact;
use crate::config::{PoetryConfig, VocabularyConfig};
use crate::error::ExtractorError;
use crate::parser::{parse_poems, parse_word_entries, read_input};
use crate::poetry::PoetryExtractor;
use crate::types::{ArtifactKind, ExtractionReport, Harvest};
use crate::vocabulary::VocabularyExtractor;
use std::path::Path;
use tracing::{debug, info};

/// Extract poem clauses of 5 to 7 common ideographs into a line file
pub fn extract_poetry_lines(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ExtractionReport, ExtractorError> {
    extract_poetry_lines_with(&PoetryConfig::default(), input, output)
}

/// Extract poem clauses using explicit settings
pub fn extract_poetry_lines_with(
    config: &PoetryConfig,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ExtractionReport, ExtractorError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let extractor = PoetryExtractor::new(config)?;

    info!("Extracting poetry lines from {}", input.display());

    let parsed = parse_poems(&read_input(input)?)?;
    let harvest = extractor.harvest(&parsed.records);

    finish(
        ArtifactKind::Poetry,
        input,
        output,
        parsed.records.len(),
        parsed.skipped,
        harvest,
    )
}

/// Extract graded vocabulary words of 2 to 4 characters into a line file
///
/// Entries are kept when one of their level tags contains `new-1` ..
/// `new-{max_level}`.
pub fn extract_hsk_words(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    max_level: u32,
) -> Result<ExtractionReport, ExtractorError> {
    let config = VocabularyConfig::default().with_max_level(max_level);
    extract_hsk_words_with(&config, input, output)
}

/// Extract vocabulary words using explicit settings
pub fn extract_hsk_words_with(
    config: &VocabularyConfig,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ExtractionReport, ExtractorError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let extractor = VocabularyExtractor::new(config)?;

    info!(
        "Extracting words up to level {} from {}",
        extractor.ceiling(),
        input.display()
    );

    let parsed = parse_word_entries(&read_input(input)?)?;
    let harvest = extractor.harvest(&parsed.records)?;

    finish(
        ArtifactKind::Vocabulary,
        input,
        output,
        parsed.records.len(),
        parsed.skipped,
        harvest,
    )
}

fn finish(
    kind: ArtifactKind,
    input: &Path,
    output: &Path,
    records_read: usize,
    records_skipped: usize,
    harvest: Harvest,
) -> Result<ExtractionReport, ExtractorError> {
    debug!(
        "{}: {} candidates examined, {} kept, {} unique",
        kind,
        harvest.seen,
        harvest.kept,
        harvest.lines.len()
    );

    let lines_written = write_artifact(output, &harvest.lines)?;

    info!(
        "Extracted {} {} into {}",
        lines_written,
        kind.item_noun(),
        output.display()
    );

    Ok(ExtractionReport {
        kind,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records_read,
        records_skipped,
        candidates_seen: harvest.seen,
        candidates_kept: harvest.kept,
        lines_written,
    })
}
