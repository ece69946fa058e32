//! Resolution of texture and layered-image files to their sprite sub-assets.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::payload::SpriteRef;

/// Lookup of sprite sub-assets generated from a source file.
pub trait AssetIndex {
    /// Sprites sliced from `path`, in import order. Unknown paths yield nothing.
    fn sprites_at(&self, path: &Path) -> Vec<SpriteRef>;
}

/// Errors raised while loading a sprite manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read sprite manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid sprite manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "sheet")]
    sheets: Vec<ManifestSheet>,
}

#[derive(Debug, Deserialize)]
struct ManifestSheet {
    path: PathBuf,
    #[serde(default)]
    sprites: Vec<String>,
}

/// Source file paired with the sprites imported from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    pub path: PathBuf,
    pub sprites: Vec<SpriteRef>,
}

/// In-memory asset index, optionally populated from a TOML manifest.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetIndex {
    sheets: Vec<SpriteSheet>,
}

impl MemoryAssetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the sprites imported from `path`.
    pub fn insert<I, S>(&mut self, path: impl Into<PathBuf>, sprite_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = path.into();
        let sprites = sprite_names
            .into_iter()
            .map(|name| SpriteRef::new(name).with_source(path.clone()))
            .collect();
        if let Some(existing) = self.sheets.iter_mut().find(|sheet| sheet.path == path) {
            existing.sprites = sprites;
        } else {
            self.sheets.push(SpriteSheet { path, sprites });
        }
    }

    pub fn sheets(&self) -> &[SpriteSheet] {
        &self.sheets
    }

    /// Load a manifest listing `[[sheet]]` entries with `path` and `sprites`.
    pub fn load_manifest(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_manifest_str(text: &str) -> Result<Self, toml::de::Error> {
        let manifest: ManifestFile = toml::from_str(text)?;
        let mut index = Self::new();
        for sheet in manifest.sheets {
            index.insert(sheet.path, sheet.sprites);
        }
        Ok(index)
    }
}

impl AssetIndex for MemoryAssetIndex {
    fn sprites_at(&self, path: &Path) -> Vec<SpriteRef> {
        self.sheets
            .iter()
            .find(|sheet| sheet.path == path)
            .map(|sheet| sheet.sprites.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn manifest_sheets_resolve_in_order() {
        let index = MemoryAssetIndex::from_manifest_str(
            r#"
[[sheet]]
path = "Assets/hero.png"
sprites = ["hero_0", "hero_1"]

[[sheet]]
path = "Assets/art.psd"
sprites = ["body", "head"]
"#,
        )
        .unwrap();
        let names: Vec<_> = index
            .sprites_at(Path::new("Assets/hero.png"))
            .into_iter()
            .map(|sprite| sprite.name)
            .collect();
        assert_eq!(names, vec!["hero_0", "hero_1"]);
        assert_eq!(index.sheets().len(), 2);
        assert!(index.sprites_at(Path::new("Assets/missing.png")).is_empty());
    }

    #[test]
    fn insert_replaces_existing_sheet() {
        let mut index = MemoryAssetIndex::new();
        index.insert("a.png", ["one"]);
        index.insert("a.png", ["two", "three"]);
        assert_eq!(index.sheets().len(), 1);
        assert_eq!(index.sprites_at(Path::new("a.png")).len(), 2);
    }

    #[test]
    fn load_manifest_reports_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sprites.toml");
        std::fs::write(&path, "[[sheet]]\nsprites = 3\n").unwrap();
        let err = MemoryAssetIndex::load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().contains("sprites.toml"));
    }

    #[test]
    fn load_manifest_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = MemoryAssetIndex::load_manifest(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
