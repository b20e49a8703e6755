use serde::{Serialize, Deserialize};

/// A supported language variant of the site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    /// Two-letter language code
    pub id: String,
    /// URL path prefix for this locale, possibly empty
    #[serde(default)]
    pub path: String,
}

/// One localized string value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiLanguageText {
    /// Language code, or the "_any" sentinel
    pub lang_id: String,
    pub text: String,
}

/// One module reference within a route's layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStructure {
    #[serde(rename = "id")]
    pub module_id: String,
}

/// How a route is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    /// One page per locale
    Normal,
    /// One page per post version, plus cross-locale redirects
    Post,
    /// Configured but never generated
    Ignore,
    /// Unrecognized type string; skipped during generation
    #[serde(other)]
    Unknown,
}

/// One logical page (or a post list) of the site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub path: String,
    /// Extra paths that receive a copy of the generated page
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Ordered module references making up the page body
    #[serde(default)]
    pub structure: Vec<PageStructure>,
    #[serde(default)]
    pub title: Vec<MultiLanguageText>,
    #[serde(rename = "type")]
    pub route_type: RouteType,
}

/// A reusable, file-backed content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    /// Source file path below the modules directory, locale-agnostic
    pub src: String,
    #[serde(rename = "type", default)]
    pub module_type: String,
    /// JS asset paths emitted as script tags wherever the module appears
    #[serde(default)]
    pub scripts: Vec<String>,
}

/// Media attachment of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostMedia {
    #[serde(rename = "type", default)]
    pub media_type: String,
    #[serde(default)]
    pub src: String,
}

/// One locale's rendering of a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostVersion {
    pub lang_id: String,
    /// Stable per-locale URL slug
    pub permalink: String,
    /// Content source path below the posts directory
    pub file: String,
    pub title: String,
}

/// A versioned piece of blog content, at most one version per language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(rename = "created", default)]
    pub created_date: String,
    #[serde(rename = "last_modified", default)]
    pub last_modified_date: String,
    #[serde(default)]
    pub media: PostMedia,
    #[serde(default)]
    pub versions: Vec<PostVersion>,
}

impl Post {
    /// First version matching the given language code
    pub fn version_for(&self, lang_id: &str) -> Option<&PostVersion> {
        self.versions.iter().find(|v| v.lang_id == lang_id)
    }
}

/// A path to target redirect rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redirect {
    pub path: String,
    pub target: String,
}

/// JSON sidecar written next to every generated page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPage {
    pub title: String,
    /// Page body only, without the site shell
    pub html: String,
    /// Script URLs, cache-busted with the build id
    pub scripts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_type_parsing() {
        let route: Route = serde_json::from_str(r#"{
            "id": "home",
            "path": "/",
            "type": "normal"
        }"#).unwrap();
        assert_eq!(route.route_type, RouteType::Normal);
        assert!(route.aliases.is_empty());
        assert!(route.structure.is_empty());
    }

    #[test]
    fn test_route_type_unknown_string() {
        let route: Route = serde_json::from_str(r#"{
            "id": "odd",
            "path": "/odd",
            "type": "experimental"
        }"#).unwrap();
        assert_eq!(route.route_type, RouteType::Unknown);
    }

    #[test]
    fn test_post_version_lookup() {
        let post: Post = serde_json::from_str(r#"{
            "id": "first-post",
            "created": "2023-04-01",
            "last_modified": "2023-04-02",
            "versions": [
                {"lang_id": "en", "permalink": "first-post", "file": "first-post.en.html", "title": "First post"},
                {"lang_id": "it", "permalink": "primo-post", "file": "first-post.it.html", "title": "Primo post"}
            ]
        }"#).unwrap();

        assert_eq!(post.version_for("it").unwrap().permalink, "primo-post");
        assert!(post.version_for("fr").is_none());
    }
}
