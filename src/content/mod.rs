//! Content module - finds, parses and validates collection entries

mod entry;
mod frontmatter;
pub mod glob_loader;
mod image;
pub mod loader;
mod store;

pub use entry::{digest, hash_content, Entry};
pub use frontmatter::FrontMatter;
pub use image::{AssetContext, ImageRef, IMAGE_EXTENSIONS};
pub use loader::{ContentLoader, Loaded};
pub use store::{newest_first, CheckReport, ContentStore};
