//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use poetry_pass_extractor::{ArtifactAudit, ExtractionReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extraction reports.
    pub fn format_reports(&self, reports: &[ExtractionReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
            OutputFormat::Table => Ok(self.format_reports_table(reports)),
            OutputFormat::Quiet => Ok(reports
                .iter()
                .map(|r| r.lines_written.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_reports_table(&self, reports: &[ExtractionReport]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Kind", "Input", "Records", "Skipped", "Candidates", "Kept", "Written", "Output"]);

        for report in reports {
            builder.push_record([
                report.kind.to_string(),
                report.input.display().to_string(),
                report.records_read.to_string(),
                report.records_skipped.to_string(),
                report.candidates_seen.to_string(),
                report.candidates_kept.to_string(),
                report.lines_written.to_string(),
                report.output.display().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary: Vec<String> = reports
            .iter()
            .map(|r| {
                self.success(&format!(
                    "Extracted {} {}",
                    r.lines_written,
                    r.kind.item_noun()
                ))
            })
            .collect();

        format!("{}\n{}", table, summary.join("\n"))
    }

    /// Format an artifact audit.
    pub fn format_audit(&self, audit: &ArtifactAudit) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(audit)?),
            OutputFormat::Table => Ok(self.format_audit_table(audit)),
            OutputFormat::Quiet => Ok(audit
                .violations
                .iter()
                .map(|v| format!("{}:{}", v.line_number, v.line))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_audit_table(&self, audit: &ArtifactAudit) -> String {
        let heading = format!(
            "{} ({}): {} lines, {} duplicates, {} violations",
            audit.path.display(),
            audit.kind,
            audit.total_lines,
            audit.duplicate_lines,
            audit.violations.len()
        );

        if audit.is_clean() {
            return self.success(&heading);
        }

        let mut out = self.warning(&heading);
        if !audit.violations.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Line", "Text", "Reason"]);
            for violation in &audit.violations {
                builder.push_record([
                    violation.line_number.to_string(),
                    violation.line.clone(),
                    violation.reason.clone(),
                ]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push('\n');
            out.push_str(&table.to_string());
        }
        out
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
