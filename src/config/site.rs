//! Site configuration (content.config.yml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: String,
    pub out_dir: String,

    // Per-collection loader overrides, keyed by collection name
    #[serde(default)]
    pub collections: IndexMap<String, LoaderOverride>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "src/content".to_string(),
            out_dir: ".content".to_string(),
            collections: IndexMap::new(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Loader base directory for a collection, relative to the site root
    pub fn collection_base(&self, name: &str) -> String {
        self.collections
            .get(name)
            .and_then(|o| o.base.clone())
            .unwrap_or_else(|| {
                format!("{}/{}", self.content_dir.trim_end_matches('/'), name)
            })
    }

    /// Loader glob pattern for a collection
    pub fn collection_pattern(&self, name: &str, default: &str) -> String {
        self.collections
            .get(name)
            .and_then(|o| o.pattern.clone())
            .unwrap_or_else(|| default.to_string())
    }
}

/// Loader override for a single collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOverride {
    pub base: Option<String>,
    pub pattern: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "src/content");
        assert_eq!(config.out_dir, ".content");
        assert_eq!(config.collection_base("blog"), "src/content/blog");
        assert_eq!(
            config.collection_pattern("blog", "**/*.{md,mdx}"),
            "**/*.{md,mdx}"
        );
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_dir: content/
out_dir: dist/.data
collections:
  talks:
    base: talks
    pattern: "**/*.md"
analytics: plausible
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.out_dir, "dist/.data");
        assert_eq!(config.collection_base("blog"), "content/blog");
        assert_eq!(config.collection_base("talks"), "talks");
        assert_eq!(config.collection_pattern("talks", "**/*.{md,mdx}"), "**/*.md");
        assert!(config.extra.contains_key("analytics"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.config.yml");
        fs::write(&path, "").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.content_dir, "src/content");
    }
}
