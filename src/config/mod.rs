mod types;
mod loader;
mod defaults;

pub use types::*;
pub use loader::load_config;
