// Player system
//
// This module contains everything related to the playable character:
// - Player body, movement and crouching
// - Stats and the abilities unlocked by upgrades
// - State machine for player behavior
// - Frame animations with raw and unraw variants

pub mod animation;
#[allow(clippy::module_inception)]
pub mod player;
pub mod state;
pub mod stats;

pub use animation::{AnimationClip, AnimationPlayer};
pub use player::{Player, PlayerInput};
pub use state::{PlayerState, PlayerStateMachine};
pub use stats::{Abilities, PlayerStats, BASE_STATS};
