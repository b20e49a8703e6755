use log::{error, info, LevelFilter};
use std::path::PathBuf;

use crate::builder;
use crate::builder::BuildInfo;
use crate::cli::commands::default_config_path;
use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;
use crate::config;
use crate::config::Config;
use crate::site;

/// Handle the build command. Returns whether the build succeeded.
pub fn handle_build_command(command: &Commands, global_config: Option<&PathBuf>) -> bool {
    let Commands::Build {
        config: cfg_file,
        data,
        destination,
        quiet,
        verbose,
        debug,
    } = command
    else {
        return false;
    };

    // Set log level based on command line options
    if *verbose || *debug {
        set_log_level(LevelFilter::Debug);
    } else if *quiet {
        set_log_level(LevelFilter::Error);
    }

    let config_path = cfg_file
        .as_ref()
        .or(global_config)
        .cloned()
        .unwrap_or_else(default_config_path);

    let mut config = match config::load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return false;
        }
    };

    // Command line overrides take precedence over the config file
    if let Some(data) = data {
        config.data_path = data.clone();
    }
    if let Some(destination) = destination {
        config.build_path = destination.clone();
    }

    build_from_config(&config)
}

/// Load the site description and run a full build
pub fn build_from_config(config: &Config) -> bool {
    let model = site::load_site(config);
    let build = BuildInfo::generate();

    info!("Building site (build id {})...", build.id);
    match builder::build_site(&model, &build) {
        Ok(_) => {
            info!("Site built successfully at {}", config.build_path.display());
            true
        }
        Err(e) => {
            error!("Failed to build site: {}", e);
            false
        }
    }
}
