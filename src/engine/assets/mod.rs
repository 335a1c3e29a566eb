// Asset management system
//
// Level geometry and the editor layout are JSON files under the asset
// directory. They are loaded one per step so the loading screen can show
// progress.

mod loader;
mod manager;

pub use loader::{AssetLoader, AssetType};
pub use manager::{GameAssets, EDITOR_LAYOUT_FILE, LEVEL_FILE};

use crate::game::level::LevelError;
use std::path::PathBuf;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid asset {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: LevelError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound(PathBuf::from("levels/level.json"));
        assert_eq!(err.to_string(), "Asset not found: levels/level.json");
    }

    #[test]
    fn test_invalid_error_display() {
        let err = AssetError::Invalid {
            path: PathBuf::from("levels/level.json"),
            source: LevelError::DuplicateCheckpoint(3),
        };
        assert_eq!(
            err.to_string(),
            "Invalid asset levels/level.json: checkpoint 3 is defined twice"
        );
    }
}
