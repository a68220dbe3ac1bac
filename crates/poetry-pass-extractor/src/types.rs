//! Input records and run reports

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A poem from the poetry corpus. Only `paragraphs` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PoemRecord {
    /// Lines of the poem, each possibly holding several clauses.
    /// `None` only when the key is missing; an explicit `null` is rejected.
    #[serde(default, deserialize_with = "present_paragraphs")]
    pub paragraphs: Option<Vec<String>>,
}

fn present_paragraphs<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer).map(Some)
}

/// A vocabulary list entry. Only `simplified` and `level` are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    /// Simplified-character form of the word. A missing key reads as the
    /// empty string; an explicit `null` reads as `None`.
    #[serde(default = "empty_word")]
    pub simplified: Option<String>,

    /// Proficiency tags such as `new-2` or `old-3`
    #[serde(default)]
    pub level: Vec<String>,
}

impl Default for WordEntry {
    fn default() -> Self {
        Self {
            simplified: empty_word(),
            level: Vec::new(),
        }
    }
}

fn empty_word() -> Option<String> {
    Some(String::new())
}

/// Which artifact a run or audit concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Poem clauses
    Poetry,
    /// Vocabulary words
    Vocabulary,
}

impl ArtifactKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Poetry => "poetry",
            ArtifactKind::Vocabulary => "vocabulary",
        }
    }

    /// Noun for the items of this artifact
    pub fn item_noun(&self) -> &'static str {
        match self {
            ArtifactKind::Poetry => "poetry lines",
            ArtifactKind::Vocabulary => "words",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records parsed from an input document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords<T> {
    /// Records that were JSON objects
    pub records: Vec<T>,

    /// Array elements skipped because they were not records
    pub skipped: usize,
}

/// Unique lines gathered from a set of records, with filter counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harvest {
    /// Kept candidates, deduplicated and in code-point order
    pub lines: BTreeSet<String>,

    /// Candidates examined
    pub seen: usize,

    /// Candidates that passed the filters, duplicates included
    pub kept: usize,
}

impl Harvest {
    /// Count a candidate and keep it if it passed
    pub(crate) fn offer(&mut self, candidate: &str, passed: bool) {
        self.seen += 1;
        if passed {
            self.kept += 1;
            if !self.lines.contains(candidate) {
                self.lines.insert(candidate.to_string());
            }
        }
    }
}

/// Outcome of a single extractor run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Artifact produced
    pub kind: ArtifactKind,

    /// Source file
    pub input: PathBuf,

    /// Artifact file
    pub output: PathBuf,

    /// Records parsed from the input
    pub records_read: usize,

    /// Input elements that were not records
    pub records_skipped: usize,

    /// Clauses or words examined
    pub candidates_seen: usize,

    /// Candidates that passed the filters, duplicates included
    pub candidates_kept: usize,

    /// Unique lines written
    pub lines_written: usize,
}

/// A line that breaks the invariants of its artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditViolation {
    /// 1-based line number in the file
    pub line_number: usize,

    /// Offending line, trimmed
    pub line: String,

    /// Why the line is invalid
    pub reason: String,
}

/// Result of re-checking an existing artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactAudit {
    /// Audited file
    pub path: PathBuf,

    /// Kind the file was checked as
    pub kind: ArtifactKind,

    /// Non-blank, non-comment lines
    pub total_lines: usize,

    /// Lines repeating an earlier line
    pub duplicate_lines: usize,

    /// Lines failing length or charset checks
    pub violations: Vec<AuditViolation>,
}

impl ArtifactAudit {
    /// No violations and no duplicates
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.duplicate_lines == 0
    }
}
