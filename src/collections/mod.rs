//! Collection definitions - blog posts, talks and publications
//!
//! Each collection binds a glob loader (where the files live) to a typed
//! record (what their front-matter must contain). Records are plain serde
//! structs: required fields are non-`Option`, optional fields are `Option`
//! with `#[serde(default)]` and reject an explicit `null`, and unknown keys
//! are ignored.

mod blog;
mod publications;
mod talks;

pub use blog::BlogPost;
pub use publications::Publication;
pub use talks::{Talk, TalkStatus};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Value;
use std::fmt::Debug;

use crate::config::SiteConfig;
use crate::content::glob_loader::GlobLoader;
use crate::content::AssetContext;

/// Default loader pattern: Markdown and MDX files at any depth
pub const DEFAULT_PATTERN: &str = "**/*.{md,mdx}";

/// Names of all declared collections, in declaration order
pub const COLLECTION_NAMES: &[&str] = &[BlogPost::NAME, Talk::NAME, Publication::NAME];

/// A typed content collection
pub trait Collection: DeserializeOwned + Serialize + Clone + Debug {
    /// Collection name, also the default directory name under `content_dir`
    const NAME: &'static str;

    /// Loader glob pattern relative to the collection base
    const PATTERN: &'static str = DEFAULT_PATTERN;

    /// Resolve file references (images) after deserialization
    fn resolve_assets(&mut self, _ctx: &AssetContext) -> Result<(), String> {
        Ok(())
    }

    /// Display title
    fn title(&self) -> &str;

    /// Primary date of the entry, used for ordering
    fn date(&self) -> DateTime<Utc>;

    /// Front-matter keys, besides `title`, written into a new entry.
    /// `today` is formatted `YYYY-MM-DD`.
    fn scaffold(today: &str) -> Vec<(&'static str, Value)>;
}

/// A collection name bound to its loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDefinition {
    pub name: &'static str,
    pub loader: GlobLoader,
}

/// Definition for one collection, with config overrides applied
pub fn definition<C: Collection>(config: &SiteConfig) -> CollectionDefinition {
    CollectionDefinition {
        name: C::NAME,
        loader: GlobLoader::new(
            config.collection_base(C::NAME),
            config.collection_pattern(C::NAME, C::PATTERN),
        ),
    }
}

/// Definitions for every declared collection
pub fn definitions(config: &SiteConfig) -> Vec<CollectionDefinition> {
    vec![
        definition::<BlogPost>(config),
        definition::<Talk>(config),
        definition::<Publication>(config),
    ]
}
