//! Extraction command implementations.

use crate::cli::{PoetryArgs, WordsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use poetry_pass_extractor::{extract_hsk_words_with, extract_poetry_lines_with, ExtractionReport};

/// Execute the poetry command.
pub fn execute_poetry(args: PoetryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let report = run_poetry(args, config)?;
    println!("{}", formatter.format_reports(&[report])?);
    Ok(())
}

/// Execute the words command.
pub fn execute_words(args: WordsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let report = run_words(args, config)?;
    println!("{}", formatter.format_reports(&[report])?);
    Ok(())
}

/// Execute the default run: poetry first, then vocabulary.
pub fn execute_all(config: &Config, formatter: &Formatter) -> Result<()> {
    let reports = run_all(config)?;
    println!("{}", formatter.format_reports(&reports)?);
    Ok(())
}

fn run_poetry(args: PoetryArgs, config: &Config) -> Result<ExtractionReport> {
    let input = args.input.unwrap_or_else(|| config.paths.poetry_input.clone());
    let output = args.output.unwrap_or_else(|| config.paths.poetry_output.clone());
    Ok(extract_poetry_lines_with(&config.extractor.poetry, input, output)?)
}

fn run_words(args: WordsArgs, config: &Config) -> Result<ExtractionReport> {
    let input = args.input.unwrap_or_else(|| config.paths.words_input.clone());
    let output = args.output.unwrap_or_else(|| config.paths.words_output.clone());

    let mut vocabulary = config.extractor.vocabulary.clone();
    if let Some(ceiling) = args.max_level {
        vocabulary = vocabulary.with_max_level(ceiling.get());
    }

    Ok(extract_hsk_words_with(&vocabulary, input, output)?)
}

fn run_all(config: &Config) -> Result<Vec<ExtractionReport>> {
    let poetry = run_poetry(
        PoetryArgs {
            input: None,
            output: None,
        },
        config,
    )?;
    let words = run_words(
        WordsArgs {
            input: None,
            output: None,
            max_level: None,
        },
        config,
    )?;
    Ok(vec![poetry, words])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.paths.poetry_input = dir.path().join("raw").join("tang300.json");
        config.paths.poetry_output = dir.path().join("poetry.txt");
        config.paths.words_input = dir.path().join("raw").join("hsk3.json");
        config.paths.words_output = dir.path().join("words.txt");
        config
    }

    fn seed(config: &Config) {
        let raw = config.paths.poetry_input.parent().unwrap();
        fs::create_dir_all(raw).unwrap();
        fs::write(
            &config.paths.poetry_input,
            r#"[{"paragraphs": ["床前明月光，疑是地上霜。"]}]"#,
        )
        .unwrap();
        fs::write(
            &config.paths.words_input,
            r#"[{"simplified": "学习", "level": ["new-2"]}, {"simplified": "经济", "level": ["new-4"]}]"#,
        )
        .unwrap();
    }

    #[test]
    fn test_run_all_uses_configured_paths() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        seed(&config);

        let reports = run_all(&config).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].lines_written, 2);
        assert_eq!(reports[1].lines_written, 1);
        assert_eq!(
            fs::read_to_string(&config.paths.poetry_output).unwrap(),
            "床前明月光\n疑是地上霜\n"
        );
    }

    #[test]
    fn test_max_level_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        seed(&config);

        let args = WordsArgs {
            input: None,
            output: Some(dir.path().join("words-4.txt")),
            max_level: Some("4".parse().unwrap()),
        };
        let report = run_words(args, &config).unwrap();
        assert_eq!(report.lines_written, 2);
    }

    #[test]
    fn test_missing_corpus_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let result = run_all(&config);
        assert!(matches!(result, Err(CliError::Extractor(_))));
        assert!(!config.paths.poetry_output.exists());
    }
}
