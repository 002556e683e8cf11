//! Create a new collection entry

use chrono::Utc;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::PathBuf;

use crate::collections::{self, BlogPost, Collection, Publication, Talk};
use crate::error::{ContentError, Result};
use crate::Site;

/// Create a new entry file with a front-matter scaffold for its collection
pub fn create_entry(site: &Site, collection: &str, title: &str) -> Result<PathBuf> {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let (base, content) = match collection {
        c if c == BlogPost::NAME => (base_of::<BlogPost>(site), scaffold::<BlogPost>(title, &today)?),
        c if c == Talk::NAME => (base_of::<Talk>(site), scaffold::<Talk>(title, &today)?),
        c if c == Publication::NAME => (
            base_of::<Publication>(site),
            scaffold::<Publication>(title, &today)?,
        ),
        other => return Err(ContentError::UnknownCollection(other.to_string())),
    };

    let slug = slug::slugify(title);
    if slug.is_empty() {
        return Err(ContentError::Schema(format!(
            "title {:?} does not produce a file name",
            title
        )));
    }

    fs::create_dir_all(&base)?;
    let file_path = base.join(format!("{}.md", slug));

    // Check if file already exists
    if file_path.exists() {
        return Err(ContentError::EntryExists(file_path));
    }

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

fn base_of<C: Collection>(site: &Site) -> PathBuf {
    let definition = collections::definition::<C>(&site.config);
    site.base_dir.join(definition.loader.base)
}

/// Front-matter scaffold with every required field present
fn scaffold<C: Collection>(title: &str, today: &str) -> Result<String> {
    let mut mapping = Mapping::new();
    mapping.insert(Value::String("title".to_string()), Value::String(title.to_string()));
    for (key, value) in C::scaffold(today) {
        mapping.insert(Value::String(key.to_string()), value);
    }

    // Fail early if the scaffold would not load
    serde_yaml::from_value::<C>(Value::Mapping(mapping.clone()))
        .map_err(|e| ContentError::Schema(e.to_string()))?;

    Ok(format!("---\n{}---\n", serde_yaml::to_string(&mapping)?))
}
