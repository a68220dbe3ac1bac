//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use poetry_pass_domain::LevelCeiling;
use poetry_pass_extractor::ArtifactKind;
use std::path::PathBuf;

/// poetry-pass data tool - Build passphrase material from Chinese corpora.
#[derive(Debug, Parser)]
#[command(name = "poetry-pass-data")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "POETRY_PASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract poetry lines, then vocabulary words, from the configured paths
    All,

    /// Extract poem clauses of 5-7 common ideographs
    Poetry(PoetryArgs),

    /// Extract graded vocabulary words of 2-4 characters
    Words(WordsArgs),

    /// Check an existing artifact for bad lengths, characters and duplicates
    Inspect(InspectArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the poetry command.
#[derive(Debug, Parser)]
pub struct PoetryArgs {
    /// Poetry corpus (JSON array of poems)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Artifact to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the words command.
#[derive(Debug, Parser)]
pub struct WordsArgs {
    /// Vocabulary list (JSON array of entries)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Artifact to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Highest accepted level (new-1 .. new-N)
    #[arg(short, long)]
    pub max_level: Option<LevelCeiling>,
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Artifact file to check
    pub path: PathBuf,

    /// Rules to check the artifact against
    #[arg(short, long, value_enum)]
    pub kind: KindArg,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Artifact kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Poetry lines
    Poetry,
    /// Vocabulary words
    Words,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for ArtifactKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Poetry => ArtifactKind::Poetry,
            KindArg::Words => ArtifactKind::Vocabulary,
        }
    }
}
