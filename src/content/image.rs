//! Image references in front-matter

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted for image fields
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "avif", "svg", "tif", "tiff"];

/// Where an entry lives, for resolving relative asset paths
#[derive(Debug, Clone)]
pub struct AssetContext {
    /// Site root
    pub root: PathBuf,
    /// Directory containing the entry file
    pub entry_dir: PathBuf,
}

impl AssetContext {
    pub fn new(root: impl Into<PathBuf>, entry_file: &Path) -> Self {
        let root = root.into();
        let entry_dir = entry_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.clone());
        Self { root, entry_dir }
    }
}

/// A local image referenced from front-matter.
///
/// Deserialized from the raw string; `resolve` checks that the file exists
/// and fills in `file` and `format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct ImageRef {
    /// Path as written in the front-matter
    pub src: String,
    /// Resolved path relative to the site root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Lower-cased file extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip)]
    absolute: Option<PathBuf>,
}

impl From<String> for ImageRef {
    fn from(src: String) -> Self {
        Self {
            src,
            file: None,
            format: None,
            absolute: None,
        }
    }
}

impl ImageRef {
    /// Resolve against the entry's directory (or the site root for `/` paths)
    pub fn resolve(&mut self, ctx: &AssetContext) -> Result<(), String> {
        let src = self.src.trim();
        if src.is_empty() {
            return Err("image path is empty".to_string());
        }
        if src.starts_with("http://") || src.starts_with("https://") || src.starts_with("//") {
            return Err(format!("remote image {:?} is not a local file", src));
        }

        let format = Path::new(src)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .filter(|e| IMAGE_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| {
                format!(
                    "{:?} is not an image (expected one of: {})",
                    src,
                    IMAGE_EXTENSIONS.join(", ")
                )
            })?;

        let candidate = match src.strip_prefix('/') {
            Some(from_root) => ctx.root.join(from_root),
            None => ctx.entry_dir.join(src),
        };

        let absolute = fs::canonicalize(&candidate)
            .map_err(|_| format!("image {:?} not found at {}", src, candidate.display()))?;
        if !absolute.is_file() {
            return Err(format!("image {:?} is not a file", src));
        }

        let root = fs::canonicalize(&ctx.root).unwrap_or_else(|_| ctx.root.clone());
        let file = absolute
            .strip_prefix(&root)
            .unwrap_or(&absolute)
            .to_string_lossy()
            .replace('\\', "/");

        self.file = Some(file);
        self.format = Some(format);
        self.absolute = Some(absolute);
        Ok(())
    }

    /// Absolute path, once resolved
    pub fn path(&self) -> Option<&Path> {
        self.absolute.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.absolute.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> (tempfile::TempDir, AssetContext) {
        let dir = tempfile::tempdir().unwrap();
        let blog = dir.path().join("src/content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::create_dir_all(dir.path().join("src/assets")).unwrap();
        fs::write(blog.join("hero.PNG"), b"png").unwrap();
        fs::write(dir.path().join("src/assets/shared.webp"), b"webp").unwrap();
        let ctx = AssetContext::new(dir.path(), &blog.join("post.md"));
        (dir, ctx)
    }

    #[test]
    fn test_resolve_relative() {
        let (_dir, ctx) = site();
        let mut image = ImageRef::from("./hero.PNG".to_string());
        image.resolve(&ctx).unwrap();
        assert_eq!(image.file.as_deref(), Some("src/content/blog/hero.PNG"));
        assert_eq!(image.format.as_deref(), Some("png"));
        assert!(image.is_resolved());
    }

    #[test]
    fn test_resolve_parent_and_root() {
        let (_dir, ctx) = site();
        let mut image = ImageRef::from("../../assets/shared.webp".to_string());
        image.resolve(&ctx).unwrap();
        assert_eq!(image.file.as_deref(), Some("src/assets/shared.webp"));

        let mut image = ImageRef::from("/src/assets/shared.webp".to_string());
        image.resolve(&ctx).unwrap();
        assert_eq!(image.file.as_deref(), Some("src/assets/shared.webp"));
    }

    #[test]
    fn test_resolve_errors() {
        let (_dir, ctx) = site();

        let err = ImageRef::from("./missing.png".to_string()).resolve(&ctx).unwrap_err();
        assert!(err.contains("not found"));

        let err = ImageRef::from("./post.md".to_string()).resolve(&ctx).unwrap_err();
        assert!(err.contains("is not an image"));

        let err = ImageRef::from("https://cdn.example.com/a.png".to_string())
            .resolve(&ctx)
            .unwrap_err();
        assert!(err.contains("remote image"));
    }

    #[test]
    fn test_serialize_resolved() {
        let (_dir, ctx) = site();
        let mut image: ImageRef = serde_yaml::from_str("./hero.PNG").unwrap();
        image.resolve(&ctx).unwrap();

        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["src"], "./hero.PNG");
        assert_eq!(json["file"], "src/content/blog/hero.PNG");
        assert_eq!(json["format"], "png");
        assert!(json.get("absolute").is_none());
    }
}
