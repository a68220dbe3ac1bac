//! Line artifacts: writing, reading back, auditing

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::{ArtifactAudit, ArtifactKind, AuditViolation};
use poetry_pass_domain::{char_len, contains_rare_chars};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write one line per item, each followed by `\n`
///
/// Missing parent directories are created. Returns the number of lines written.
pub fn write_artifact<I, S>(path: &Path, lines: I) -> Result<usize, ExtractorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExtractorError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| ExtractorError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;

    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| ExtractorError::io(path, e))?;
        count += 1;
    }

    writer.flush().map_err(|e| ExtractorError::io(path, e))?;
    debug!("Wrote {} lines to {}", count, path.display());
    Ok(count)
}

/// Read an artifact the way its consumers do
///
/// Lines are trimmed; blank lines and `#` comments are dropped.
pub fn read_artifact(path: &Path) -> Result<Vec<String>, ExtractorError> {
    let content = fs::read_to_string(path).map_err(|e| ExtractorError::io(path, e))?;
    Ok(artifact_lines(&content).map(|(_, line)| line.to_string()).collect())
}

/// Meaningful lines with their 1-based line numbers
fn artifact_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Re-check an existing artifact against the rules of its kind
pub fn audit_artifact(
    path: &Path,
    kind: ArtifactKind,
    config: &ExtractorConfig,
) -> Result<ArtifactAudit, ExtractorError> {
    config.validate().map_err(ExtractorError::Config)?;
    let content = fs::read_to_string(path).map_err(|e| ExtractorError::io(path, e))?;

    let bounds = match kind {
        ArtifactKind::Poetry => config.poetry.bounds(),
        ArtifactKind::Vocabulary => config.vocabulary.bounds(),
    }
    .map_err(ExtractorError::Config)?;

    let mut audit = ArtifactAudit {
        path: path.to_path_buf(),
        kind,
        total_lines: 0,
        duplicate_lines: 0,
        violations: Vec::new(),
    };
    let mut seen = HashSet::new();

    for (line_number, line) in artifact_lines(&content) {
        audit.total_lines += 1;

        if !seen.insert(line) {
            audit.duplicate_lines += 1;
        }

        let len = char_len(line);
        let reason = if !bounds.contains(len) {
            Some(format!("length {} outside {}", len, bounds))
        } else if kind == ArtifactKind::Poetry && contains_rare_chars(line) {
            Some("contains characters outside U+4E00..=U+9FFF".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            audit.violations.push(AuditViolation {
                line_number,
                line: line.to_string(),
                reason,
            });
        }
    }

    Ok(audit)
}
