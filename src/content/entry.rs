//! Loaded collection entries

use serde::{Deserialize, Serialize};

/// A validated entry of a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry<T> {
    /// Id, unique within the collection
    pub id: String,

    /// Collection name
    pub collection: String,

    /// Source file, relative to the site root
    pub file_path: String,

    /// Hex-encoded hash of the raw file contents
    pub digest: String,

    /// Typed front-matter
    pub data: T,

    /// Raw Markdown/MDX body, front-matter removed
    pub body: String,
}

/// Calculate a hash for content
pub fn hash_content(content: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

/// Hex digest for content
pub fn digest(content: &str) -> String {
    format!("{:016x}", hash_content(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest() {
        let a = digest("---\ntitle: A\n---\n");
        assert_eq!(a.len(), 16);
        assert_eq!(a, digest("---\ntitle: A\n---\n"));
        assert_ne!(a, digest("---\ntitle: B\n---\n"));
    }
}
