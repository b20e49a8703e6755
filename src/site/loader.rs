use std::path::Path;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::directory::DirectoryStructure;
use crate::site::model::{SiteModel, StaticFragments};
use crate::utils::fs;

/// Load the full site description for one build.
///
/// Every input degrades rather than aborts: a missing or unparsable JSON
/// array becomes empty, an unreadable fragment becomes an empty string.
pub fn load_site(config: &Config) -> SiteModel {
    let dirs = DirectoryStructure::from_config(config);

    let redirects = load_json_array(&dirs.config_file("redirects.json"));
    let modules = load_json_array(&dirs.config_file("modules.json"));
    let routes = load_json_array(&dirs.config_file("routes.json"));
    let posts = load_json_array(&dirs.config_file("posts.json"));
    let locales = load_json_array(&dirs.config_file("locales.json"));

    let fragments = StaticFragments {
        header: fs::read_file_or_empty(dirs.static_modules_dir.join("header.html")),
        sidebar: fs::read_file_or_empty(dirs.static_modules_dir.join("sidebar.html")),
        footer: fs::read_file_or_empty(dirs.static_modules_dir.join("footer.html")),
        base: fs::read_file_or_empty(dirs.base_template()),
    };

    SiteModel {
        config: config.clone(),
        locales,
        routes,
        modules,
        posts,
        redirects,
        fragments,
    }
}

/// Parse one JSON description file into a list of entities
fn load_json_array<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let content = fs::read_file_or_empty(path);
    if content.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&content) {
        Ok(items) => {
            debug!("Loaded {}", path.display());
            items
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::types::{Locale, Route};
    use std::fs as stdfs;
    use std::path::PathBuf;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("rustfolio-loader-{}-{}", name, std::process::id()));
        let _ = stdfs::remove_dir_all(&dir);
        stdfs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_json_array_missing_file_is_empty() {
        let locales: Vec<Locale> = load_json_array(Path::new("/nonexistent/locales.json"));
        assert!(locales.is_empty());
    }

    #[test]
    fn test_load_json_array_malformed_file_is_empty() {
        let dir = fixture_dir("malformed");
        let path = dir.join("routes.json");
        stdfs::write(&path, "{ not json").unwrap();

        let routes: Vec<Route> = load_json_array(&path);
        assert!(routes.is_empty());

        let _ = stdfs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_site_reads_fragments() {
        let dir = fixture_dir("site");
        stdfs::create_dir_all(dir.join("data/config")).unwrap();
        stdfs::create_dir_all(dir.join("data/modules/static")).unwrap();
        stdfs::write(dir.join("data/base.html"), "<html><?gen PAGE-MAIN ?></html>").unwrap();
        stdfs::write(dir.join("data/modules/static/header.html"), "<header/>").unwrap();
        stdfs::write(dir.join("data/modules/static/sidebar.html"), "<aside/>").unwrap();
        stdfs::write(dir.join("data/modules/static/footer.html"), "<footer/>").unwrap();
        stdfs::write(
            dir.join("data/config/locales.json"),
            r#"[{"id": "en", "path": ""}, {"id": "it", "path": "/it/"}]"#,
        ).unwrap();

        let config = Config {
            data_path: dir.join("data"),
            build_path: dir.join("build"),
            ..Config::default()
        };

        let model = load_site(&config);
        assert_eq!(model.locales.len(), 2);
        assert_eq!(model.fragments.header, "<header/>");
        assert_eq!(model.fragments.base, "<html><?gen PAGE-MAIN ?></html>");
        // missing description files degrade to empty lists
        assert!(model.routes.is_empty());
        assert!(model.posts.is_empty());

        let _ = stdfs::remove_dir_all(&dir);
    }
}
