//! Data store export
//!
//! Writes every loaded collection to a single JSON file so the page
//! templates can read validated content without re-parsing Markdown.
//! Layout: `{ "<collection>": { "<id>": <entry> } }`.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::collections::COLLECTION_NAMES;
use crate::content::ContentStore;
use crate::error::Result;

/// Data store file name inside the output directory
pub const DATA_STORE_FILE: &str = "data-store.json";

/// Build the data store document
pub fn to_json(store: &ContentStore) -> Result<Value> {
    let mut root = Map::new();
    for name in COLLECTION_NAMES {
        root.insert(name.to_string(), store.collection_json(name)?);
    }
    Ok(Value::Object(root))
}

/// Write the data store to `out_dir`, returning the written path
pub fn write(store: &ContentStore, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(DATA_STORE_FILE);
    let content = serde_json::to_string_pretty(&to_json(store)?)?;
    fs::write(&path, content)?;

    tracing::info!("Wrote {} entries to {:?}", store.len(), path);
    Ok(path)
}

/// Read a previously written data store
pub fn read(out_dir: &Path) -> Result<Value> {
    let content = fs::read_to_string(out_dir.join(DATA_STORE_FILE))?;
    Ok(serde_json::from_str(&content)?)
}
