//! site-content: typed content collections for a static site
//!
//! Declares the site's three collections (blog posts, talks and
//! publications), loads their Markdown/MDX files, and validates each
//! file's front-matter into a typed record.

pub mod collections;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod helpers;

pub use error::{ContentError, EntryError, Result};

use std::path::{Path, PathBuf};

/// Configuration file looked up in the site root
pub const CONFIG_FILE: &str = "content.config.yml";

/// A site on disk
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Output directory for exported data
    pub out_dir: PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let out_dir = base_dir.join(&config.out_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            out_dir,
        })
    }

    /// Load and validate every collection
    pub fn load(&self) -> Result<content::ContentStore> {
        content::ContentStore::load(self)
    }

    /// Validate every collection, collecting all errors
    pub fn check(&self) -> Result<content::CheckReport> {
        content::ContentStore::check(self)
    }

    /// Export the data store
    pub fn export(&self) -> Result<PathBuf> {
        let store = self.load()?;
        export::write(&store, &self.out_dir)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new entry in a collection
    pub fn new_entry(&self, collection: &str, title: &str) -> Result<PathBuf> {
        commands::new::create_entry(self, collection, title)
    }
}
