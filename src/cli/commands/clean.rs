use log::{error, info};
use std::path::PathBuf;

use crate::cli::commands::default_config_path;
use crate::config;
use crate::directory;

/// Handle the clean command. Returns whether cleaning succeeded.
pub fn handle_clean_command(config_path: Option<&PathBuf>) -> bool {
    let config_path = config_path.cloned().unwrap_or_else(default_config_path);

    let config = match config::load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return false;
        }
    };

    info!("Cleaning site at {}", config.build_path.display());
    match directory::clean_destination(&config.build_path) {
        Ok(_) => {
            info!("Site cleaned successfully");
            true
        }
        Err(e) => {
            error!("Failed to clean site: {}", e);
            false
        }
    }
}
