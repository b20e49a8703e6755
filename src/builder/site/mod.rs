use std::path::Path;

use log::{debug, error, info, warn};

use crate::builder::page::assemble;
use crate::builder::redirect::redirect_page;
use crate::builder::types::BuildInfo;
use crate::directory::{clean_destination, copy_tree, DirectoryStructure, STATIC_FOLDERS};
use crate::site::{ExportedPage, Locale, Post, Route, RouteType, SiteModel};
use crate::utils::error::{BoxResult, RustfolioError};
use crate::utils::fs;
use crate::utils::path::{locale_folder, page_stem, strip_leading_slash};

/// Build statistics
#[derive(Debug, Default)]
struct BuildStats {
    /// Number of files written
    files_count: usize,
    /// Number of redirect pages emitted
    redirects_count: usize,
    /// Number of static files copied
    static_files_count: usize,
    /// Number of errors encountered
    errors_count: usize,
}

/// Build the whole site into the configured destination.
///
/// Locales, routes and posts are processed in configured order; the
/// build is a deterministic single pass. Only an invalid destination or
/// a sidecar serialization failure aborts the run; everything else is
/// reported and skipped.
pub fn build_site(model: &SiteModel, build: &BuildInfo) -> BoxResult<()> {
    let start_time = std::time::Instant::now();
    let config = &model.config;
    let dirs = DirectoryStructure::from_config(config);

    info!(
        "Building {} inside {}",
        config.site_title,
        dirs.build.display()
    );

    clean_destination(&dirs.build)?;
    if !dirs.build.is_dir() {
        return Err(RustfolioError::File(format!(
            "Destination directory {} is not valid, cancelling build",
            dirs.build.display()
        ))
        .into());
    }

    let mut stats = BuildStats::default();

    // Generate pages
    for locale in &model.locales {
        info!("Using locale [{}] with path [{}]", locale.id, locale.path);

        for route in &model.routes {
            match route.route_type {
                RouteType::Normal => {
                    generate_normal_page(model, &dirs, route, locale, build, &mut stats)?;
                }
                RouteType::Post => {
                    for post in &model.posts {
                        generate_post_page(model, &dirs, route, post, locale, build, &mut stats)?;
                    }
                }
                RouteType::Ignore => {
                    info!("Route [{}] is set to be ignored", route.id);
                }
                RouteType::Unknown => {
                    debug!("Route [{}] has an unrecognized type, skipping", route.id);
                }
            }
        }
    }

    // Create redirects
    for redirect in &model.redirects {
        info!(
            "Creating redirect in [{}] targeting [{}]",
            redirect.path, redirect.target
        );

        let html = redirect_page(&redirect.target);
        let path = dirs
            .build
            .join(format!("{}.html", strip_leading_slash(&redirect.path)));
        write_artifact(&path, &html, &mut stats);
        stats.redirects_count += 1;
    }

    // Copy static folders
    for folder in STATIC_FOLDERS {
        let source = dirs.data.join(folder);
        let destination = dirs.build.join(folder);

        if !source.is_dir() {
            warn!("Static folder {} does not exist, skipping", source.display());
            continue;
        }

        info!(
            "Copying folder [{}] into [{}]",
            source.display(),
            destination.display()
        );
        match copy_tree(&source, &destination) {
            Ok(count) => stats.static_files_count += count,
            Err(e) => {
                error!("Error copying folder {}: {}", source.display(), e);
                stats.errors_count += 1;
            }
        }
    }

    info!("Site built in {:.2?}", start_time.elapsed());
    info!(
        "Files: {}, Redirects: {}, Static files: {}, Errors: {}",
        stats.files_count, stats.redirects_count, stats.static_files_count, stats.errors_count
    );

    Ok(())
}

/// Generate one normal route for one locale, plus its aliases
fn generate_normal_page(
    model: &SiteModel,
    dirs: &DirectoryStructure,
    route: &Route,
    locale: &Locale,
    build: &BuildInfo,
    stats: &mut BuildStats,
) -> BoxResult<()> {
    info!("Generating page [{}] with path \"{}\"", route.id, route.path);

    let page = assemble(model, route, None, locale, build);
    let sidecar = export_json(&page.exported)?;

    let out_dir = dirs.build.join(locale_folder(&locale.path));
    let stem = page_stem(&route.path);
    write_artifact(&out_dir.join(format!("{}.html", stem)), &page.html, stats);
    write_artifact(&out_dir.join(format!("{}.json", stem)), &sidecar, stats);

    for alias in &route.aliases {
        info!("Generating alias [{}]", alias);

        let alias_stem = strip_leading_slash(alias);
        write_artifact(&out_dir.join(format!("{}.html", alias_stem)), &page.html, stats);
        write_artifact(&out_dir.join(format!("{}.json", alias_stem)), &sidecar, stats);
    }

    Ok(())
}

/// Generate one post for one locale.
///
/// The version matching the locale becomes the real page; every other
/// version's permalink receives a redirect stub pointing at it, so each
/// locale's permalink resolves wherever the content actually lives.
fn generate_post_page(
    model: &SiteModel,
    dirs: &DirectoryStructure,
    route: &Route,
    post: &Post,
    locale: &Locale,
    build: &BuildInfo,
    stats: &mut BuildStats,
) -> BoxResult<()> {
    let Some(version) = post.version_for(&locale.id) else {
        warn!(
            "Post [{}] has no version for locale [{}], skipping",
            post.id, locale.id
        );
        return Ok(());
    };

    info!("Generating post [{}] with path \"{}\"", post.id, route.path);

    let page = assemble(model, route, Some(version), locale, build);
    let sidecar = export_json(&page.exported)?;

    let post_dir = dirs.build.join(locale_folder(&locale.path)).join("post");
    write_artifact(
        &post_dir.join(format!("{}.html", version.permalink)),
        &page.html,
        stats,
    );
    write_artifact(
        &post_dir.join(format!("{}.json", version.permalink)),
        &sidecar,
        stats,
    );

    for other in &post.versions {
        if other.lang_id != locale.id {
            let stub = redirect_page(&format!("{}.html", version.permalink));
            write_artifact(&post_dir.join(format!("{}.html", other.permalink)), &stub, stats);
        }
    }

    Ok(())
}

/// Serialize the JSON sidecar. A failure here is the one fatal error of
/// the generation phase: it signals a structural bug, not a data issue.
fn export_json(exported: &ExportedPage) -> BoxResult<String> {
    serde_json::to_string(exported)
        .map_err(|e| RustfolioError::Export(format!("Failed to serialize page export: {}", e)).into())
}

/// Write one output file, reporting and counting failures without
/// aborting the build
fn write_artifact(path: &Path, contents: &str, stats: &mut BuildStats) {
    debug!("Writing file [{}]", path.display());

    match fs::write_file(path, contents) {
        Ok(()) => stats.files_count += 1,
        Err(e) => {
            error!("Failed to write {}: {}", path.display(), e);
            stats.errors_count += 1;
        }
    }
}
