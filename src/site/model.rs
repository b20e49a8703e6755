use crate::config::Config;
use crate::site::types::{Locale, Module, Post, Redirect, Route};

/// The four site-wide HTML fragments composed into every page
#[derive(Debug, Clone, Default)]
pub struct StaticFragments {
    pub header: String,
    pub sidebar: String,
    pub footer: String,
    /// The base skeleton containing the placeholder tokens
    pub base: String,
}

/// Immutable description of the whole site, constructed once per build
/// and passed by reference into every core function.
#[derive(Debug, Clone)]
pub struct SiteModel {
    pub config: Config,
    pub locales: Vec<Locale>,
    pub routes: Vec<Route>,
    pub modules: Vec<Module>,
    pub posts: Vec<Post>,
    pub redirects: Vec<Redirect>,
    pub fragments: StaticFragments,
}

impl SiteModel {
    /// First configured module with the given id
    pub fn module_by_id(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}
