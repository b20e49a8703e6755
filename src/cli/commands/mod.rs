mod build;
mod clean;

pub use build::{build_from_config, handle_build_command};
pub use clean::handle_clean_command;

use std::path::PathBuf;

/// Configuration file used when none is given on the command line
pub fn default_config_path() -> PathBuf {
    PathBuf::from("./config.json")
}
