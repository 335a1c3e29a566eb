// Level and editor layout data (JSON)
//
// Level coordinates are world units, y-up, one unit per block tile.

use super::session::CHECKPOINT_COUNT;
use super::upgrades::{Upgrade, UPGRADE_COUNT};
use crate::engine::assets::AssetError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

const BUILTIN_LEVEL: &str = include_str!("../../assets/levels/level.json");
const BUILTIN_EDITOR_LAYOUT: &str = include_str!("../../assets/ui/editor.json");

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LevelError {
    #[error("level size must be positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("start position ({x}, {y}) is outside the level")]
    StartOutOfBounds { x: f32, y: f32 },
    #[error("block {0} has no tiles")]
    EmptyBlock(usize),
    #[error("checkpoint number {0} is out of range")]
    CheckpointOutOfRange(usize),
    #[error("checkpoint {0} is defined twice")]
    DuplicateCheckpoint(usize),
    #[error("expected {expected} editor buttons, got {found}")]
    ButtonCount { expected: usize, found: usize },
    #[error("editor button {index} should be {expected}, found {found}")]
    ButtonOrder {
        index: usize,
        expected: Upgrade,
        found: Upgrade,
    },
    #[error("editor button {0} lies outside the editor area")]
    ButtonOutOfArea(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

fn one() -> u32 {
    1
}

/// A rectangle of block tiles; `x`/`y` is the bottom-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
    pub x: f32,
    pub y: f32,
    /// Tiles in a row
    pub tiles: u32,
    /// Stacked rows
    #[serde(default = "one")]
    pub rows: u32,
    /// Only built when this upgrade is active
    #[serde(default)]
    pub requires: Option<Upgrade>,
}

impl BlockData {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.tiles as f32, self.rows as f32)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + self.size() / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointData {
    pub number: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub width: f32,
    pub height: f32,
    pub start: Point,
    pub blocks: Vec<BlockData>,
    pub checkpoints: Vec<CheckpointData>,
    /// Bottom-left corner of the finish flag
    pub finish: Point,
}

impl LevelData {
    /// The level compiled into the binary
    pub fn builtin() -> Result<Self, AssetError> {
        parse_builtin(BUILTIN_LEVEL, "levels/level.json")
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LevelError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        let start = self.start;
        if start.x < 0.0 || start.x > self.width || start.y < 0.0 || start.y > self.height {
            return Err(LevelError::StartOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }

        if let Some(index) = self.blocks.iter().position(|b| b.tiles == 0 || b.rows == 0) {
            return Err(LevelError::EmptyBlock(index));
        }

        let mut seen = HashSet::new();
        for checkpoint in &self.checkpoints {
            if checkpoint.number >= CHECKPOINT_COUNT {
                return Err(LevelError::CheckpointOutOfRange(checkpoint.number));
            }
            if !seen.insert(checkpoint.number) {
                return Err(LevelError::DuplicateCheckpoint(checkpoint.number));
            }
        }

        Ok(())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Placement of one upgrade button, relative to the editor area (0..1, y-down)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonData {
    pub x: f32,
    pub y: f32,
    pub upgrade: Upgrade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorLayout {
    pub buttons: Vec<ButtonData>,
}

impl EditorLayout {
    /// The layout compiled into the binary
    pub fn builtin() -> Result<Self, AssetError> {
        parse_builtin(BUILTIN_EDITOR_LAYOUT, "ui/editor.json")
    }

    /// Seven buttons, in tree order, inside the area
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.buttons.len() != UPGRADE_COUNT {
            return Err(LevelError::ButtonCount {
                expected: UPGRADE_COUNT,
                found: self.buttons.len(),
            });
        }

        for (index, (button, expected)) in self.buttons.iter().zip(Upgrade::ALL).enumerate() {
            if button.upgrade != expected {
                return Err(LevelError::ButtonOrder {
                    index,
                    expected,
                    found: button.upgrade,
                });
            }
            if !(0.0..=1.0).contains(&button.x) || !(0.0..=1.0).contains(&button.y) {
                return Err(LevelError::ButtonOutOfArea(index));
            }
        }

        Ok(())
    }
}

fn parse_builtin<T: serde::de::DeserializeOwned>(
    source: &str,
    name: &str,
) -> Result<T, AssetError> {
    serde_json::from_str(source).map_err(|source| AssetError::Json {
        path: PathBuf::from(name),
        source,
    })
}
