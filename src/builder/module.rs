use log::debug;

use crate::builder::types::BuildInfo;
use crate::directory::DirectoryStructure;
use crate::locale::resolve_inline;
use crate::site::{Locale, SiteModel};
use crate::utils::fs;

/// Result of rendering one module reference for one locale
#[derive(Debug, Clone, Default)]
pub struct ModuleRender {
    /// Locale-resolved module content
    pub html: String,
    /// Script tags appended after the module content
    pub script_tags: String,
    /// Raw script paths, in declaration order, for the JSON sidecar
    pub script_paths: Vec<String>,
}

/// Render a module by id for one locale.
///
/// The first configured module with a matching id wins. An unknown id
/// renders empty output; so does an unreadable source file.
pub fn render_module(
    model: &SiteModel,
    dirs: &DirectoryStructure,
    module_id: &str,
    locale: &Locale,
    build: &BuildInfo,
) -> ModuleRender {
    let Some(module) = model.module_by_id(module_id) else {
        debug!("No module configured with id [{}], rendering empty", module_id);
        return ModuleRender::default();
    };

    let source = fs::read_file_or_empty(dirs.modules_dir.join(&module.src));
    let html = resolve_inline(&source, &locale.id);

    let mut script_tags = String::new();
    let mut script_paths = Vec::new();
    for script in &module.scripts {
        script_tags.push_str(&format!(
            "<script src=\"{}?bId={}\" type=\"text/javascript\"></script>",
            script, build.id
        ));
        script_paths.push(script.clone());
    }

    ModuleRender {
        html,
        script_tags,
        script_paths,
    }
}
