use log::debug;

use crate::builder::module::render_module;
use crate::builder::types::BuildInfo;
use crate::directory::DirectoryStructure;
use crate::locale::resolve_list;
use crate::site::{ExportedPage, Locale, PostVersion, Route, RouteType, SiteModel};
use crate::utils::fs;
use crate::utils::path::locale_folder;

/// Placeholder tokens recognized in the base skeleton and fragments.
/// Substitution order is significant and fixed.
pub const TOKEN_PAGE_LANG: &str = "<?gen PAGE-LANG ?>";
pub const TOKEN_PAGE_REPLACE_EXTENSION: &str = "<?gen PAGE-REPLACE-EXTENSION ?>";
pub const TOKEN_PAGE_TITLE: &str = "<?gen PAGE-TITLE ?>";
pub const TOKEN_PAGE_HEADER: &str = "<?gen PAGE-HEADER ?>";
pub const TOKEN_PAGE_SIDEBAR: &str = "<?gen PAGE-SIDEBAR ?>";
pub const TOKEN_PAGE_FOOTER: &str = "<?gen PAGE-FOOTER ?>";
pub const TOKEN_PAGE_MAIN: &str = "<?gen PAGE-MAIN ?>";
pub const TOKEN_POST_TITLE: &str = "<?gen POST-TITLE ?>";
pub const TOKEN_POST_CONTENTS: &str = "<?gen POST-CONTENTS ?>";
pub const TOKEN_BUILD_ID: &str = "<?gen BUILD-ID ?>";
pub const TOKEN_BUILD_TIME: &str = "<?gen BUILD-TIME ?>";
pub const TOKEN_WEB_ROOT: &str = "<?gen WEB-ROOT ?>";

/// One fully assembled page: the HTML document plus its JSON sidecar
#[derive(Debug, Clone)]
pub struct AssembledPage {
    pub html: String,
    pub exported: ExportedPage,
}

/// Assemble one page for a route, an optional post version and a locale.
///
/// Starts from the base skeleton and substitutes every placeholder token
/// in fixed order. The web-root pass runs last, over the full document
/// and the sidecar body, since expanded modules may introduce the token.
pub fn assemble(
    model: &SiteModel,
    route: &Route,
    version: Option<&PostVersion>,
    locale: &Locale,
    build: &BuildInfo,
) -> AssembledPage {
    debug!("Assembling page [{}] with path \"{}\"", route.id, route.path);

    let dirs = DirectoryStructure::from_config(&model.config);
    let config = &model.config;

    // Post routes use the matching version's title when one exists;
    // everything else resolves the route title for this locale.
    let base_title = match version {
        Some(version) => version.title.clone(),
        None => resolve_list(&route.title, &locale.id),
    };
    let page_title = format!(
        "{} {} {}",
        base_title, config.site_title_separator, config.site_title
    );

    // Expand the module structure once, accumulating the full body and
    // the scripts-free body for the sidecar in parallel.
    let mut main_full = String::new();
    let mut main_html = String::new();
    let mut script_paths = Vec::new();
    for entry in &route.structure {
        let rendered = render_module(model, &dirs, &entry.module_id, locale, build);
        main_full.push_str(&rendered.html);
        main_full.push_str(&rendered.script_tags);
        main_html.push_str(&rendered.html);
        script_paths.extend(rendered.script_paths);
    }

    let mut substitutions: Vec<(&str, String)> = vec![
        (TOKEN_PAGE_LANG, locale_folder(&locale.path)),
        (TOKEN_PAGE_REPLACE_EXTENSION, config.replace_file_extension.to_string()),
        (TOKEN_PAGE_TITLE, page_title.clone()),
        (TOKEN_PAGE_HEADER, model.fragments.header.clone()),
        (TOKEN_PAGE_SIDEBAR, model.fragments.sidebar.clone()),
        (TOKEN_PAGE_FOOTER, model.fragments.footer.clone()),
        (TOKEN_PAGE_MAIN, main_full),
    ];

    if route.route_type == RouteType::Post {
        let post_title = version.map(|v| v.title.clone()).unwrap_or_default();
        // Post contents are taken verbatim; no inline locale resolution
        let post_contents = match version {
            Some(version) => fs::read_file_or_empty(dirs.posts_dir.join(&version.file)),
            None => String::new(),
        };
        substitutions.push((TOKEN_POST_TITLE, post_title));
        substitutions.push((TOKEN_POST_CONTENTS, post_contents));
    }

    substitutions.push((TOKEN_BUILD_ID, build.id.clone()));
    substitutions.push((TOKEN_BUILD_TIME, build.time.clone()));

    let mut html = model.fragments.base.clone();
    for (token, value) in &substitutions {
        html = html.replace(token, value);
    }

    // Second pass: modules and fragments may carry web-root tokens of
    // their own, so this must run after everything is expanded.
    let web_root = format!("{}{}", config.web_root, locale.path);
    html = html.replace(TOKEN_WEB_ROOT, &web_root);
    let main_html = main_html.replace(TOKEN_WEB_ROOT, &web_root);

    let scripts = script_paths
        .into_iter()
        .map(|path| format!("{}?bId={}", path, build.id))
        .collect();

    AssembledPage {
        html,
        exported: ExportedPage {
            title: page_title,
            html: main_html,
            scripts,
        },
    }
}
