pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::process::ExitCode;

use crate::config;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let success = match &cli.command {
        Some(command @ types::Commands::Build { .. }) => {
            commands::handle_build_command(command, cli.config.as_ref())
        }
        Some(types::Commands::Clean { config }) => {
            commands::handle_clean_command(config.as_ref().or(cli.config.as_ref()))
        }
        None => {
            // Default to a build when no subcommand is given
            let config_path = cli
                .config
                .clone()
                .unwrap_or_else(commands::default_config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => commands::build_from_config(&cfg),
                Err(e) => {
                    log::error!("Failed to load config: {}", e);
                    false
                }
            }
        }
    };

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
