// Asset loading functionality

use super::AssetError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    /// Level geometry
    Level,
    /// UI layouts
    Ui,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Level => "levels",
            AssetType::Ui => "ui",
        }
    }

    /// Get supported file extensions for this asset type
    pub fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }
}

/// Asset loader responsible for finding and reading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(asset_type.default_directory())
            .join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, asset_type: AssetType, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(asset_type, name);

        if !path.exists() {
            return Err(AssetError::NotFound(path));
        }

        Ok(std::fs::read(&path)?)
    }

    /// Load and deserialize a JSON asset
    pub fn load_json<T: DeserializeOwned>(
        &self,
        asset_type: AssetType,
        name: &str,
    ) -> Result<T, AssetError> {
        let bytes = self.load_bytes(asset_type, name)?;
        serde_json::from_slice(&bytes).map_err(|source| AssetError::Json {
            path: self.resolve_path(asset_type, name),
            source,
        })
    }

    /// Check if an asset exists
    pub fn exists(&self, asset_type: AssetType, name: &str) -> bool {
        self.resolve_path(asset_type, name).exists()
    }

    /// List all assets of a given type
    pub fn list_assets(&self, asset_type: AssetType) -> Result<Vec<String>, AssetError> {
        let dir = self.base_path.join(asset_type.default_directory());

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut assets = Vec::new();
        let extensions = asset_type.extensions();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if extensions.contains(&ext.to_string_lossy().as_ref()) {
                        if let Some(name) = path.file_name() {
                            assets.push(name.to_string_lossy().to_string());
                        }
                    }
                }
            }
        }

        assets.sort();
        Ok(assets)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::level::LevelData;

    fn repo_assets() -> AssetLoader {
        AssetLoader::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
    }

    #[test]
    fn test_asset_type_directories() {
        assert_eq!(AssetType::Level.default_directory(), "levels");
        assert_eq!(AssetType::Ui.default_directory(), "ui");
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path(AssetType::Level, "level.json");

        assert_eq!(path, PathBuf::from("/game/assets/levels/level.json"));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let loader = AssetLoader::new("/definitely/not/here");
        let result = loader.load_bytes(AssetType::Ui, "editor.json");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
        assert!(!loader.exists(AssetType::Ui, "editor.json"));
    }

    #[test]
    fn test_list_repo_assets() {
        let loader = repo_assets();
        let levels = loader.list_assets(AssetType::Level).unwrap();
        assert!(levels.contains(&"level.json".to_string()));
    }

    #[test]
    fn test_load_repo_level() {
        let loader = repo_assets();
        let level: LevelData = loader.load_json(AssetType::Level, "level.json").unwrap();
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_wrong_shape_is_json_error() {
        // The editor layout is not a level
        let loader = repo_assets();
        let result: Result<LevelData, _> = loader.load_json(AssetType::Ui, "editor.json");
        assert!(matches!(result, Err(AssetError::Json { .. })));
    }
}
