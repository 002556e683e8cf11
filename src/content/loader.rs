//! Content loader - loads collection entries from the site directory

use indexmap::IndexMap;
use std::fs;
use std::path::Path;

use super::entry::{self, Entry};
use super::glob_loader::{entry_id, SourceFile};
use super::{AssetContext, FrontMatter};
use crate::collections::{self, Collection};
use crate::error::{ContentError, EntryError, Result};
use crate::Site;

/// Entries of one collection plus the files that failed to load
#[derive(Debug, Clone)]
pub struct Loaded<C> {
    pub entries: IndexMap<String, Entry<C>>,
    pub errors: Vec<EntryError>,
}

impl<C> Loaded<C> {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Entries, or every collected error
    pub fn into_result(self) -> Result<IndexMap<String, Entry<C>>> {
        if self.errors.is_empty() {
            Ok(self.entries)
        } else {
            Err(ContentError::InvalidEntries(self.errors))
        }
    }
}

/// Loads collections from the site directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load every entry of a collection.
    ///
    /// Files that fail to parse or validate are reported in `errors`; they
    /// never stop the rest of the collection from loading.
    pub fn load<C: Collection>(&self) -> Result<Loaded<C>> {
        let definition = collections::definition::<C>(&self.site.config);
        let files = definition.loader.scan(&self.site.base_dir)?;

        let mut entries: IndexMap<String, Entry<C>> = IndexMap::new();
        let mut errors = Vec::new();

        for file in &files {
            match self.load_entry::<C>(file) {
                Ok(entry) => {
                    if let Some(previous) = entries.get(&entry.id) {
                        tracing::warn!(
                            "Duplicate id {:?} in collection {}: {} overrides {}",
                            entry.id,
                            C::NAME,
                            entry.file_path,
                            previous.file_path
                        );
                    }
                    entries.insert(entry.id.clone(), entry);
                }
                Err(e) => {
                    let error = EntryError {
                        collection: C::NAME.to_string(),
                        file: self.relative_path(&file.path),
                        message: e.to_string(),
                    };
                    tracing::warn!("Failed to load entry {}", error);
                    errors.push(error);
                }
            }
        }

        tracing::debug!(
            "Loaded {} entries into {} ({} errors)",
            entries.len(),
            C::NAME,
            errors.len()
        );

        Ok(Loaded { entries, errors })
    }

    /// Load a single entry from a file
    fn load_entry<C: Collection>(&self, file: &SourceFile) -> Result<Entry<C>> {
        let content = fs::read_to_string(&file.path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let id = entry_id(&file.relative, fm.slug());

        let mut data: C = serde_yaml::from_value(fm.into_value())
            .map_err(|e| ContentError::Schema(e.to_string()))?;

        let ctx = AssetContext::new(&self.site.base_dir, &file.path);
        data.resolve_assets(&ctx).map_err(ContentError::Schema)?;

        Ok(Entry {
            id,
            collection: C::NAME.to_string(),
            file_path: self.relative_path(&file.path),
            digest: entry::digest(&content),
            data,
            body: body.to_string(),
        })
    }

    /// Path relative to the site root, with `/` separators
    fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.site.base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
