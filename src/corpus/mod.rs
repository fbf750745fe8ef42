pub mod document;
pub mod loader;

pub use document::*;
pub use loader::*;
