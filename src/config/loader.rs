use std::fs;
use std::path::Path;

use log::debug;

use crate::config::types::Config;
use crate::utils::error::{BoxResult, RustfolioError};

/// Load site configuration from a JSON config file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> BoxResult<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());

    let content = fs::read_to_string(config_path)
        .map_err(|e| RustfolioError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let config: Config = serde_json::from_str(&content)
        .map_err(|e| RustfolioError::Config(format!(
            "Failed to parse configuration file {}: {}", config_path.display(), e
        )))?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}
