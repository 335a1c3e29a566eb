// Player stats and the abilities unlocked by upgrades

use crate::game::upgrades::{Upgrade, UpgradeSet};

/// Fixed movement and size values of the player
#[derive(Debug, Clone)]
pub struct PlayerStats {
    // Movement
    /// Horizontal speed (units/second)
    pub move_speed: f32,
    /// Initial vertical speed of a jump (units/second)
    pub jump_speed: f32,

    // Dimensions (for physics collider)
    /// Width in world units
    pub width: f32,
    /// Standing height in world units
    pub height: f32,
    /// Height while crouching
    pub crouch_height: f32,

    /// Falling below this y respawns the player
    pub kill_height: f32,
}

/// The stats of the one player
///
/// With gravity at -30 a jump reaches about 2.4 units, enough for the
/// two-tile steps of the level but not for the walls that need a double jump.
pub const BASE_STATS: PlayerStats = PlayerStats {
    move_speed: 6.0,
    jump_speed: 12.0,

    width: 0.8,
    height: 1.5,
    crouch_height: 0.75,

    kill_height: -2.0,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl PlayerStats {
    /// Collider offset that keeps the feet in place at the given height
    pub fn collider_offset(&self, height: f32) -> f32 {
        (height - self.height) / 2.0
    }
}

/// What the player is allowed to do with the current upgrades
///
/// Moving right is always possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abilities {
    pub can_move_left: bool,
    pub can_jump: bool,
    pub can_crouch: bool,
    /// Jumps before landing again (0 without the jump upgrade)
    pub max_jumps: u8,
}

impl Abilities {
    pub fn from_upgrades(upgrades: &UpgradeSet) -> Self {
        let can_jump = upgrades.is_active(Upgrade::Jump);
        let max_jumps = match (can_jump, upgrades.is_active(Upgrade::DoubleJump)) {
            (false, _) => 0,
            (true, false) => 1,
            (true, true) => 2,
        };

        Self {
            can_move_left: upgrades.is_active(Upgrade::MoveLeft),
            can_jump,
            can_crouch: upgrades.is_active(Upgrade::Small),
            max_jumps,
        }
    }
}
