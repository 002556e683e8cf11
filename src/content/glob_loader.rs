//! Glob loader - finds collection files under a base directory

use glob::{MatchOptions, Pattern};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

lazy_static! {
    /// Anything that is not a letter, mark, number, connector, `-` or space
    static ref SLUG_STRIP_RE: Regex = Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc}\- ]").unwrap();
}

/// Loads every file matching `pattern` under `base`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobLoader {
    /// Base directory, relative to the site root
    pub base: PathBuf,
    /// Glob pattern relative to `base`, may contain `{a,b}` alternatives
    pub pattern: String,
}

/// A file found by the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute (root-joined) path
    pub path: PathBuf,
    /// Path relative to the loader base
    pub relative: PathBuf,
}

impl GlobLoader {
    pub fn new(base: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            pattern: pattern.into(),
        }
    }

    /// Find all matching files, sorted by path.
    /// Entries whose name starts with `_` are skipped, as are their children.
    pub fn scan(&self, root: &Path) -> Result<Vec<SourceFile>> {
        let base = root.join(&self.base);
        if !base.is_dir() {
            tracing::warn!("Collection directory {:?} does not exist", base);
            return Ok(Vec::new());
        }

        let patterns = expand_braces(&self.pattern)
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut files = Vec::new();

        for entry in WalkDir::new(&base)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_ignored(e.file_name()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read entry under {:?}: {}", base, e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&base).unwrap_or(path);
            if patterns
                .iter()
                .any(|p| p.matches_path_with(relative, MATCH_OPTIONS))
            {
                files.push(SourceFile {
                    path: path.to_path_buf(),
                    relative: relative.to_path_buf(),
                });
            }
        }

        tracing::debug!(
            "Found {} files in {:?} matching {}",
            files.len(),
            base,
            self.pattern
        );

        Ok(files)
    }
}

fn is_ignored(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|n| n.starts_with('_')).unwrap_or(false)
}

/// Expand `{a,b}` alternatives into plain glob patterns.
///
/// # Examples
/// ```ignore
/// expand_braces("**/*.{md,mdx}") // -> ["**/*.md", "**/*.mdx"]
/// ```
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    // Find the matching close brace and the top-level commas between them
    let mut depth = 0;
    let mut close = None;
    let mut splits = Vec::new();
    for (i, c) in pattern[open..].char_indices() {
        let i = open + i;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(i),
            _ => {}
        }
    }

    // Unbalanced braces are left for the glob parser to reject
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];

    let mut bounds = Vec::with_capacity(splits.len() + 2);
    bounds.push(open);
    bounds.extend(splits);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|w| {
            let alternative = &pattern[w[0] + 1..w[1]];
            expand_braces(&format!("{}{}{}", prefix, alternative, suffix))
        })
        .collect()
}

/// Derive an entry id from its path relative to the loader base.
///
/// A front-matter `slug` wins. Otherwise each path segment is slugified the
/// way GitHub builds heading anchors and the extension is dropped;
/// `dir/index.md` becomes `dir`.
pub fn entry_id(relative: &Path, slug_override: Option<&str>) -> String {
    if let Some(slug) = slug_override {
        return slug.to_string();
    }

    let without_ext = relative.with_extension("");
    let mut segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(slug_segment)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() > 1 && segments.last().map(String::as_str) == Some("index") {
        segments.pop();
    }

    if segments.is_empty() {
        return without_ext.to_string_lossy().to_string();
    }

    segments.join("/")
}

/// Lower-case, strip punctuation and symbols, turn each space into `-`.
/// Underscores and non-ASCII letters are kept.
fn slug_segment(segment: &str) -> String {
    SLUG_STRIP_RE
        .replace_all(&segment.to_lowercase(), "")
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_expand_braces() {
        assert_eq!(expand_braces("**/*.{md,mdx}"), vec!["**/*.md", "**/*.mdx"]);
        assert_eq!(expand_braces("**/*.md"), vec!["**/*.md"]);
        assert_eq!(
            expand_braces("{a,b/{c,d}}/*.md"),
            vec!["a/*.md", "b/c/*.md", "b/d/*.md"]
        );
        assert_eq!(
            expand_braces("{x,y}.{md,mdx}"),
            vec!["x.md", "x.mdx", "y.md", "y.mdx"]
        );
        assert_eq!(expand_braces("broken{md"), vec!["broken{md"]);
    }

    #[test]
    fn test_entry_id() {
        assert_eq!(entry_id(Path::new("first-post.md"), None), "first-post");
        assert_eq!(entry_id(Path::new("My Great Post.mdx"), None), "my-great-post");
        assert_eq!(entry_id(Path::new("2024/Rust Talk.md"), None), "2024/rust-talk");
        assert_eq!(entry_id(Path::new("series/index.md"), None), "series");
        assert_eq!(entry_id(Path::new("index.md"), None), "index");
        assert_eq!(entry_id(Path::new("whatever.md"), Some("custom")), "custom");
    }

    #[test]
    fn test_entry_id_keeps_underscores_and_unicode() {
        assert_eq!(entry_id(Path::new("rust_2024.md"), None), "rust_2024");
        assert_eq!(entry_id(Path::new("Café Notes.md"), None), "café-notes");
        assert_eq!(entry_id(Path::new("Hello: World!.md"), None), "hello-world");
        assert_eq!(entry_id(Path::new("v1.2 notes.md"), None), "v12-notes");
    }

    #[test]
    fn test_scan_matches_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("content/blog");
        fs::create_dir_all(base.join("2024")).unwrap();
        fs::create_dir_all(base.join("_drafts")).unwrap();
        fs::write(base.join("b.md"), "").unwrap();
        fs::write(base.join("a.mdx"), "").unwrap();
        fs::write(base.join("2024/c.md"), "").unwrap();
        fs::write(base.join("notes.txt"), "").unwrap();
        fs::write(base.join("_hidden.md"), "").unwrap();
        fs::write(base.join("_drafts/d.md"), "").unwrap();

        let loader = GlobLoader::new("content/blog", "**/*.{md,mdx}");
        let files = loader.scan(dir.path()).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.relative.to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(relative, vec!["2024/c.md", "a.mdx", "b.md"]);
        assert!(files[0].path.ends_with("content/blog/2024/c.md"));
    }

    #[test]
    fn test_scan_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("talks");
        fs::create_dir_all(base.join("nested")).unwrap();
        fs::write(base.join("top.md"), "").unwrap();
        fs::write(base.join("nested/deep.md"), "").unwrap();

        let files = GlobLoader::new("talks", "*.md").scan(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, PathBuf::from("top.md"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = GlobLoader::new("nope", "**/*.md").scan(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_invalid_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        let result = GlobLoader::new("blog", "***.md").scan(dir.path());
        assert!(result.is_err());
    }
}
