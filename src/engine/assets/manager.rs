// Game asset store with step-wise loading

use super::{AssetError, AssetLoader, AssetType};
use crate::game::level::{EditorLayout, LevelData};
use log::info;
use std::collections::VecDeque;
use std::path::Path;

/// File name of the level under `levels/`
pub const LEVEL_FILE: &str = "level.json";

/// File name of the editor layout under `ui/`
pub const EDITOR_LAYOUT_FILE: &str = "editor.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAsset {
    Level,
    EditorLayout,
}

/// All data the scenes need, loaded one asset at a time
#[derive(Debug)]
pub struct GameAssets {
    loader: AssetLoader,
    pending: VecDeque<PendingAsset>,
    total: usize,
    level: Option<LevelData>,
    editor_layout: Option<EditorLayout>,
}

impl GameAssets {
    /// Create the store and queue every asset for loading
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        let pending: VecDeque<_> = [PendingAsset::Level, PendingAsset::EditorLayout].into();
        Self {
            loader: AssetLoader::new(asset_path),
            total: pending.len(),
            pending,
            level: None,
            editor_layout: None,
        }
    }

    /// Load the next queued asset; returns `false` once nothing is left
    ///
    /// A failed asset is still taken off the queue so progress keeps moving.
    pub fn load_next(&mut self) -> Result<bool, AssetError> {
        let Some(next) = self.pending.pop_front() else {
            return Ok(false);
        };

        match next {
            PendingAsset::Level => {
                let level: LevelData = self.loader.load_json(AssetType::Level, LEVEL_FILE)?;
                level.validate().map_err(|source| AssetError::Invalid {
                    path: self.loader.resolve_path(AssetType::Level, LEVEL_FILE),
                    source,
                })?;
                info!(
                    "Loaded level: {} blocks, {} checkpoints",
                    level.blocks.len(),
                    level.checkpoints.len()
                );
                self.level = Some(level);
            }
            PendingAsset::EditorLayout => {
                let layout: EditorLayout =
                    self.loader.load_json(AssetType::Ui, EDITOR_LAYOUT_FILE)?;
                layout.validate().map_err(|source| AssetError::Invalid {
                    path: self.loader.resolve_path(AssetType::Ui, EDITOR_LAYOUT_FILE),
                    source,
                })?;
                info!("Loaded editor layout: {} buttons", layout.buttons.len());
                self.editor_layout = Some(layout);
            }
        }

        Ok(true)
    }

    /// Share of the queue that has been processed, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        (self.total - self.pending.len()) as f32 / self.total as f32
    }

    /// True when nothing is left in the queue
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Fill whatever failed to load with the data compiled into the binary
    pub fn use_builtin_fallbacks(&mut self) -> Result<(), AssetError> {
        if self.level.is_none() {
            self.level = Some(LevelData::builtin()?);
        }
        if self.editor_layout.is_none() {
            self.editor_layout = Some(EditorLayout::builtin()?);
        }
        Ok(())
    }

    pub fn level(&self) -> Option<&LevelData> {
        self.level.as_ref()
    }

    pub fn editor_layout(&self) -> Option<&EditorLayout> {
        self.editor_layout.as_ref()
    }

    /// Store the built-in data directly (tests and headless tools)
    pub fn with_builtin() -> Result<Self, AssetError> {
        let mut assets = Self::new("");
        assets.pending.clear();
        assets.use_builtin_fallbacks()?;
        Ok(assets)
    }

    /// Get the asset loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}
