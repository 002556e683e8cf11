//! Error types

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("Frontmatter error: {0}")]
    Frontmatter(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("File already exists: {}", .0.display())]
    EntryExists(PathBuf),

    #[error("Refusing to remove output directory {}: {}", .0.display(), .1)]
    UnsafeOutDir(PathBuf, &'static str),

    #[error("{} invalid entries:\n{}", .0.len(), EntryErrors(.0))]
    InvalidEntries(Vec<EntryError>),
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// A single file that failed to load into its collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryError {
    pub collection: String,
    /// Path relative to the site root
    pub file: String,
    pub message: String,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.collection, self.file, self.message)
    }
}

struct EntryErrors<'a>(&'a [EntryError]);

impl fmt::Display for EntryErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}", err)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entries_lists_every_file() {
        let err = ContentError::InvalidEntries(vec![
            EntryError {
                collection: "blog".to_string(),
                file: "src/content/blog/a.md".to_string(),
                message: "missing field `title`".to_string(),
            },
            EntryError {
                collection: "talks".to_string(),
                file: "src/content/talks/b.md".to_string(),
                message: "invalid date".to_string(),
            },
        ]);

        let text = err.to_string();
        assert!(text.starts_with("2 invalid entries:"));
        assert!(text.contains("[blog] src/content/blog/a.md: missing field `title`"));
        assert!(text.contains("[talks] src/content/talks/b.md: invalid date"));
    }
}
