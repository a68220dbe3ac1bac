//! poetry-pass data tool - Build passphrase material from Chinese corpora.

use clap::Parser;
use poetry_pass_cli::cli::{ConfigAction, ConfigArgs};
use poetry_pass_cli::commands;
use poetry_pass_cli::config::OutputFormat;
use poetry_pass_cli::{logging, Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // The config may be what failed, so only the flag decides color here
    let diagnostics = Formatter::new(OutputFormat::Table, !cli.no_color);

    if let Err(e) = run(cli) {
        eprintln!("{}", diagnostics.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> poetry_pass_cli::Result<()> {
    // `config init` must not require the file it is about to create
    let config = match &cli.command {
        Some(Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        })) => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::All) => {
            commands::execute_all(&config, &formatter)?;
        }
        Some(Command::Poetry(args)) => {
            commands::execute_poetry(args, &config, &formatter)?;
        }
        Some(Command::Words(args)) => {
            commands::execute_words(args, &config, &formatter)?;
        }
        Some(Command::Inspect(args)) => {
            commands::execute_inspect(args, &config, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
    }

    Ok(())
}
