use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the site description and content files
    #[serde(default = "defaults::default_data_path")]
    pub data_path: PathBuf,

    /// Destination directory for the generated site
    #[serde(default = "defaults::default_build_path")]
    pub build_path: PathBuf,

    /// URL prefix substituted for the web-root placeholder
    #[serde(default = "defaults::default_web_root")]
    pub web_root: String,

    /// Site title appended to every page title
    #[serde(default = "defaults::default_site_title")]
    pub site_title: String,

    /// Separator between page title and site title
    #[serde(default = "defaults::default_site_title_separator")]
    pub site_title_separator: String,

    /// Whether the published site rewrites .html extensions
    #[serde(default)]
    pub replace_file_extension: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: defaults::default_data_path(),
            build_path: defaults::default_build_path(),
            web_root: defaults::default_web_root(),
            site_title: defaults::default_site_title(),
            site_title_separator: defaults::default_site_title_separator(),
            replace_file_extension: false,
        }
    }
}
