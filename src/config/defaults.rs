use std::path::PathBuf;

/// Default data directory
pub fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

/// Default build output directory
pub fn default_build_path() -> PathBuf {
    PathBuf::from("./build")
}

/// Default web root prefix
pub fn default_web_root() -> String {
    "/".to_string()
}

/// Default site title
pub fn default_site_title() -> String {
    String::new()
}

/// Default separator between page title and site title
pub fn default_site_title_separator() -> String {
    "|".to_string()
}
