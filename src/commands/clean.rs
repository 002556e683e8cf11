//! Clean the output directory

use std::fs;
use std::path::PathBuf;

use crate::error::{ContentError, Result};
use crate::Site;

/// Remove the output directory and everything exported into it
pub fn run(site: &Site) -> Result<()> {
    if !site.out_dir.exists() {
        tracing::debug!("Nothing to clean at {:?}", site.out_dir);
        return Ok(());
    }

    let out_dir = removable_out_dir(site)?;
    fs::remove_dir_all(&out_dir)?;
    tracing::info!("Deleted: {:?}", out_dir);

    Ok(())
}

/// Canonical output directory, as long as it holds neither the site root
/// nor the content directory
fn removable_out_dir(site: &Site) -> Result<PathBuf> {
    let out_dir = site.out_dir.canonicalize()?;
    let base_dir = site.base_dir.canonicalize()?;

    if base_dir.starts_with(&out_dir) {
        return Err(ContentError::UnsafeOutDir(
            site.out_dir.clone(),
            "it contains the site root",
        ));
    }

    if let Ok(content_dir) = site.content_dir.canonicalize() {
        if content_dir.starts_with(&out_dir) {
            return Err(ContentError::UnsafeOutDir(
                site.out_dir.clone(),
                "it contains the content directory",
            ));
        }
    }

    Ok(out_dir)
}
