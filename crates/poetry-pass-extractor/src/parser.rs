//! Parse corpus JSON into records

use crate::error::ExtractorError;
use crate::types::{ParsedRecords, PoemRecord, WordEntry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read a whole input file as UTF-8 text
pub fn read_input(path: &Path) -> Result<String, ExtractorError> {
    fs::read_to_string(path).map_err(|e| ExtractorError::io(path, e))
}

/// What to do with one element of the top-level array
enum Screen {
    Record,
    Skip,
    Reject(String),
}

/// Parse a JSON array of poem records
///
/// Strings and arrays carry no `paragraphs` key and are skipped, unless they
/// mention `paragraphs` themselves (a substring of a string, or an element of
/// an array), which makes them look keyed without being records.
pub fn parse_poems(json: &str) -> Result<ParsedRecords<PoemRecord>, ExtractorError> {
    parse_records(json, screen_poem)
}

/// Parse a JSON array of vocabulary entries. Every element must be an object.
pub fn parse_word_entries(json: &str) -> Result<ParsedRecords<WordEntry>, ExtractorError> {
    parse_records(json, |item| match item {
        Value::Object(_) => Screen::Record,
        other => Screen::Reject(format!("expected object, found {}", type_name(other))),
    })
}

fn screen_poem(item: &Value) -> Screen {
    const KEY: &str = "paragraphs";
    match item {
        Value::Object(_) => Screen::Record,
        Value::String(text) if text.contains(KEY) => {
            Screen::Reject(format!("string element mentions `{}`", KEY))
        }
        Value::Array(values) if values.iter().any(|v| v.as_str() == Some(KEY)) => {
            Screen::Reject(format!("array element lists `{}`", KEY))
        }
        Value::String(_) | Value::Array(_) => Screen::Skip,
        other => Screen::Reject(format!(
            "expected object, string or array, found {}",
            type_name(other)
        )),
    }
}

/// Parse a JSON array, deserializing every element `screen` accepts as `T`
///
/// Skipped elements are counted. A rejected element, or an object whose
/// fields have the wrong type, fails the whole document.
fn parse_records<T, F>(json: &str, screen: F) -> Result<ParsedRecords<T>, ExtractorError>
where
    T: DeserializeOwned,
    F: Fn(&Value) -> Screen,
{
    let document: Value = serde_json::from_str(json)?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(ExtractorError::InvalidDocument(format!(
                "expected a JSON array of records, found {}",
                type_name(&other)
            )));
        }
    };

    let mut parsed = ParsedRecords {
        records: Vec::with_capacity(items.len()),
        skipped: 0,
    };

    for (index, item) in items.into_iter().enumerate() {
        match screen(&item) {
            Screen::Record => {}
            Screen::Skip => {
                warn!("Skipping element {}: not a record ({})", index, type_name(&item));
                parsed.skipped += 1;
                continue;
            }
            Screen::Reject(reason) => return Err(ExtractorError::InvalidRecord { index, reason }),
        }

        let record = serde_json::from_value(item).map_err(|e| ExtractorError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;
        parsed.records.push(record);
    }

    debug!(
        "Parsed {} records, skipped {} elements",
        parsed.records.len(),
        parsed.skipped
    );

    Ok(parsed)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
