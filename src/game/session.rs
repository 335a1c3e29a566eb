// Per-run state passed from scene to scene

use super::upgrades::UpgradeSet;
use glam::Vec2;

/// Number of checkpoints in the level
pub const CHECKPOINT_COUNT: usize = 7;

/// Which upgrades and checkpoints are active, and where the player respawns
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub upgrades: UpgradeSet,
    /// Active checkpoints, indexed by checkpoint number
    pub checkpoints: [bool; CHECKPOINT_COUNT],
    /// Last checkpoint reached (world units); `None` means the level start
    pub respawn: Option<Vec2>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Session {
    /// No upgrades, every checkpoint waiting to be reached
    pub fn new_game() -> Self {
        Self {
            upgrades: UpgradeSet::new(),
            checkpoints: [true; CHECKPOINT_COUNT],
            respawn: None,
        }
    }

    pub fn is_checkpoint_active(&self, number: usize) -> bool {
        self.checkpoints.get(number).copied().unwrap_or(false)
    }

    /// Mark a checkpoint as reached; returns false if it was already used
    pub fn reach_checkpoint(&mut self, number: usize, position: Vec2) -> bool {
        match self.checkpoints.get_mut(number) {
            Some(active) if *active => {
                *active = false;
                self.respawn = Some(position);
                true
            }
            _ => false,
        }
    }

    /// Where the player spawns
    pub fn spawn_point(&self, level_start: Vec2) -> Vec2 {
        self.respawn.unwrap_or(level_start)
    }

    pub fn remaining_checkpoints(&self) -> usize {
        self.checkpoints.iter().filter(|c| **c).count()
    }
}
