//! poetry-pass Extractor
//!
//! Turns Chinese text corpora into line files of passphrase material.
//!
//! # Overview
//!
//! Two independent batch pipelines share one character predicate:
//!
//! - **Poetry lines**: poem paragraphs are split into clauses on full-width
//!   punctuation; clauses of 5 to 7 characters made only of common ideographs
//!   (U+4E00..=U+9FFF) are kept.
//! - **Vocabulary words**: graded word-list entries tagged `new-1` ..
//!   `new-{max_level}` with a 2 to 4 character form are kept.
//!
//! Both deduplicate their output and write one item per line.
//!
//! # Architecture
//!
//! ```text
//! JSON file → parser → PoetryExtractor / VocabularyExtractor → Harvest → artifact file
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use poetry_pass_extractor::{extract_hsk_words, extract_poetry_lines};
//!
//! # fn example() -> Result<(), poetry_pass_extractor::ExtractorError> {
//! let poetry = extract_poetry_lines("data/raw/tang300.json", "data/poetry.txt")?;
//! println!("Extracted {} poetry lines", poetry.lines_written);
//!
//! let words = extract_hsk_words("data/raw/hsk3.json", "data/words.txt", 3)?;
//! println!("Extracted {} words", words.lines_written);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod artifact;
mod clauses;
mod config;
mod error;
mod extractor;
mod parser;
mod poetry;
mod types;
mod vocabulary;


pub use artifact::{audit_artifact, read_artifact, write_artifact};
pub use clauses::ClauseSplitter;
pub use config::{ExtractorConfig, PoetryConfig, VocabularyConfig, DEFAULT_DELIMITERS};
pub use error::ExtractorError;
pub use extractor::{
    extract_hsk_words, extract_hsk_words_with, extract_poetry_lines, extract_poetry_lines_with,
};
pub use parser::{parse_poems, parse_word_entries};
pub use poetry::PoetryExtractor;
pub use types::{
    ArtifactAudit, ArtifactKind, AuditViolation, ExtractionReport, Harvest, ParsedRecords,
    PoemRecord, WordEntry,
};
pub use vocabulary::VocabularyExtractor;

pub use poetry_pass_domain::contains_rare_chars;
