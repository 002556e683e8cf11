//! Validate every collection

use anyhow::Result;

use crate::Site;

/// Validate all entries, printing a summary and every error
pub fn run(site: &Site) -> Result<()> {
    let report = site.check()?;

    for (name, count) in &report.counts {
        println!("  {:<14} {} valid", name, count);
    }

    if report.is_ok() {
        println!("All {} entries are valid.", report.total());
        return Ok(());
    }

    println!("\n{} invalid entries:", report.errors.len());
    for error in &report.errors {
        println!("  {}", error);
    }

    anyhow::bail!("Content check failed with {} errors", report.errors.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_check_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("src/content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(blog.join("ok.md"), "---\ntitle: A\ndescription: B\npubDate: 2024-01-01\n---\n").unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site).is_ok());

        fs::write(blog.join("bad.md"), "---\ntitle: A\npubDate: someday\n---\n").unwrap();
        let err = run(&site).unwrap_err();
        assert!(err.to_string().contains("1 errors"));
    }
}
