use std::path::PathBuf;

use crate::config::Config;

/// Asset folders copied verbatim from the data path into the build root
pub const STATIC_FOLDERS: [&str; 3] = ["css", "images", "scripts"];

/// Manages the directory layout of a site build
#[derive(Debug, Clone)]
pub struct DirectoryStructure {
    pub data: PathBuf,
    pub build: PathBuf,

    /// JSON site description files (routes, modules, posts, ...)
    pub config_dir: PathBuf,
    /// Reusable module source files
    pub modules_dir: PathBuf,
    /// Site-wide header/sidebar/footer fragments
    pub static_modules_dir: PathBuf,
    /// Post content files
    pub posts_dir: PathBuf,
}

impl DirectoryStructure {
    /// Create a new directory structure from config
    pub fn from_config(config: &Config) -> Self {
        let data = config.data_path.clone();
        let modules_dir = data.join("modules");

        DirectoryStructure {
            config_dir: data.join("config"),
            static_modules_dir: modules_dir.join("static"),
            posts_dir: data.join("posts"),
            build: config.build_path.clone(),
            data,
            modules_dir,
        }
    }

    /// Path of the base page skeleton
    pub fn base_template(&self) -> PathBuf {
        self.data.join("base.html")
    }

    /// Path of one of the JSON site description files
    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = Config {
            data_path: PathBuf::from("site/data"),
            build_path: PathBuf::from("site/build"),
            ..Config::default()
        };

        let dirs = DirectoryStructure::from_config(&config);
        assert_eq!(dirs.config_dir, PathBuf::from("site/data/config"));
        assert_eq!(dirs.modules_dir, PathBuf::from("site/data/modules"));
        assert_eq!(dirs.static_modules_dir, PathBuf::from("site/data/modules/static"));
        assert_eq!(dirs.posts_dir, PathBuf::from("site/data/posts"));
        assert_eq!(dirs.base_template(), PathBuf::from("site/data/base.html"));
        assert_eq!(dirs.config_file("routes.json"), PathBuf::from("site/data/config/routes.json"));
    }
}
