//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use poetry_pass_extractor::audit_artifact;

/// Execute the inspect command.
///
/// Prints the audit, then fails if the artifact is not clean.
pub fn execute_inspect(args: InspectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let audit = audit_artifact(&args.path, args.kind.into(), &config.extractor)?;
    println!("{}", formatter.format_audit(&audit)?);

    if !audit.is_clean() {
        return Err(CliError::AuditFailed(format!(
            "{} has {} violations and {} duplicate lines",
            args.path.display(),
            audit.violations.len(),
            audit.duplicate_lines
        )));
    }

    Ok(())
}
