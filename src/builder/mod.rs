pub mod types;
pub mod module;
pub mod page;
pub mod redirect;
pub mod site;

pub use site::build_site;
pub use types::BuildInfo;
