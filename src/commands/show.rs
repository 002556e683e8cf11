//! Show a single entry

use anyhow::{Context, Result};

use crate::Site;

/// Pretty-print one entry as JSON
pub fn run(site: &Site, collection: &str, id: &str) -> Result<()> {
    let store = site.load()?;
    let entry = store
        .get_entry(collection, id)?
        .with_context(|| format!("No entry {:?} in collection {}", id, collection))?;

    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_show_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let talks = dir.path().join("src/content/talks");
        fs::create_dir_all(&talks).unwrap();
        fs::write(
            talks.join("keynote.md"),
            "---\ntitle: K\nconference: C\ndate: 2024-01-01\nstatus: past\n---\n",
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert!(run(&site, "talks", "keynote").is_ok());
        let err = run(&site, "talks", "nope").unwrap_err();
        assert!(err.to_string().contains("No entry \"nope\" in collection talks"));
    }
}
