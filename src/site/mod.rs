mod types;
mod model;
mod loader;

pub use types::*;
pub use model::{SiteModel, StaticFragments};
pub use loader::load_site;
