//! agenda CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use agenda_core::{TracingConfig, init_tracing};
use clap::Parser;
use tracing::debug;

use agenda_cli::cli::{Cli, Command, ConfigAction};
use agenda_cli::commands;
use agenda_cli::config::ClientConfig;
use agenda_cli::error::{ClientError, ClientResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(ClientConfig::default_path);
    let config = if cli.config.is_some() {
        ClientConfig::load_from(&config_path)
    } else {
        ClientConfig::load()
    };

    let verbose = cli.debug || config.as_ref().is_ok_and(|c| c.debug);
    let tracing_config = if verbose {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    let result = match config {
        Ok(config) => run(cli, config, &config_path).await,
        Err(e) => Err(ClientError::Config(e)),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: ClientConfig, config_path: &Path) -> ClientResult<String> {
    debug!(path = %config_path.display(), "configuration loaded");

    let calendar = cli.calendar.as_deref();
    match cli.command {
        Command::Calendars => {
            let agenda = commands::google_agenda(&config, calendar)?;
            commands::calendars::run(&agenda, cli.json).await
        }
        Command::Appointments { from, to } => {
            let agenda = commands::google_agenda(&config, calendar)?;
            commands::appointments::run(&agenda, from, to, cli.json).await
        }
        Command::Busy { from } => {
            let agenda = commands::google_agenda(&config, calendar)?;
            commands::busy::run(&agenda, from, cli.json).await
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, config_path),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(config_path),
        },
    }
}
