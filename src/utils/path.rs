/// File name stem for a route path ("/" maps to the site index)
pub fn page_stem(route_path: &str) -> &str {
    if route_path == "/" {
        "index"
    } else {
        route_path.trim_start_matches('/')
    }
}

/// Folder name for a locale URL path prefix (path separators stripped)
pub fn locale_folder(locale_path: &str) -> String {
    locale_path.replace('/', "")
}

/// Strip a single leading slash from a URL-style path
pub fn strip_leading_slash(path: &str) -> &str {
    path.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_stem_index() {
        assert_eq!(page_stem("/"), "index");
    }

    #[test]
    fn test_page_stem_regular_path() {
        assert_eq!(page_stem("/about"), "about");
        assert_eq!(page_stem("/projects/gallery"), "projects/gallery");
    }

    #[test]
    fn test_locale_folder() {
        assert_eq!(locale_folder(""), "");
        assert_eq!(locale_folder("/it/"), "it");
        assert_eq!(locale_folder("/en/"), "en");
    }

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/old-page"), "old-page");
        assert_eq!(strip_leading_slash("plain"), "plain");
    }
}
