mod structure;
mod cleaning;
mod copy;

pub use structure::{DirectoryStructure, STATIC_FOLDERS};
pub use cleaning::clean_destination;
pub use copy::copy_tree;
