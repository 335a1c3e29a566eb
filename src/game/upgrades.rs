// Upgrade tree
//
//        Graphics   Music
//            \       /
//   Jump  MoveLeft  Small  Platforms
//     |
//  DoubleJump

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every upgrade, in tree order (row by row, left to right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Upgrade {
    Graphics,
    Music,
    Jump,
    MoveLeft,
    Small,
    Platforms,
    DoubleJump,
}

pub const UPGRADE_COUNT: usize = 7;

impl Upgrade {
    pub const ALL: [Upgrade; UPGRADE_COUNT] = [
        Upgrade::Graphics,
        Upgrade::Music,
        Upgrade::Jump,
        Upgrade::MoveLeft,
        Upgrade::Small,
        Upgrade::Platforms,
        Upgrade::DoubleJump,
    ];

    /// Position in tree order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of the upgrade in the editor tree
    pub fn row(self) -> usize {
        match self {
            Upgrade::Graphics | Upgrade::Music => 0,
            Upgrade::Jump | Upgrade::MoveLeft | Upgrade::Small | Upgrade::Platforms => 1,
            Upgrade::DoubleJump => 2,
        }
    }

    /// Short label shown on the editor button
    pub fn label(self) -> &'static str {
        match self {
            Upgrade::Graphics => "GFX",
            Upgrade::Music => "MUSIC",
            Upgrade::Jump => "JUMP",
            Upgrade::MoveLeft => "LEFT",
            Upgrade::Small => "SMALL",
            Upgrade::Platforms => "PLAT",
            Upgrade::DoubleJump => "2JUMP",
        }
    }

    /// Description shown when the upgrade is selected in the editor
    pub fn description(self) -> &'static str {
        match self {
            Upgrade::Graphics => "Graphics: replace the raw shapes with real colors.",
            Upgrade::Music => "Music: add background music to the game.",
            Upgrade::Jump => "Jump: press UP to jump.",
            Upgrade::MoveLeft => "Move left: you can finally walk to the left.",
            Upgrade::Small => "Small: press DOWN to crouch and fit through low gaps.",
            Upgrade::Platforms => "Platforms: add more platforms to the level.",
            Upgrade::DoubleJump => "Double jump: jump once more while in the air.",
        }
    }

    /// Line printed by the game builder
    pub fn build_line(self) -> &'static str {
        match self {
            Upgrade::Graphics => "- Graphics",
            Upgrade::Music => "- Music",
            Upgrade::Jump => "- Jump",
            Upgrade::MoveLeft => "- Move left",
            Upgrade::Small => "- Small",
            Upgrade::Platforms => "- Platforms",
            Upgrade::DoubleJump => "- Double Jump",
        }
    }
}

impl fmt::Display for Upgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Availability of an upgrade in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeState {
    /// Dependencies missing
    Locked = 0,
    /// Can be activated
    Available = 1,
    /// Already activated
    Active = 2,
}

impl UpgradeState {
    /// Error line shown in the editor for this state
    pub fn error_text(self) -> &'static str {
        match self {
            UpgradeState::Locked => "(Not yet available)",
            UpgradeState::Available => "",
            UpgradeState::Active => "(Already activated)",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("upgrade {0} is not available yet")]
    NotAvailable(Upgrade),
    #[error("upgrade {0} is already active")]
    AlreadyActive(Upgrade),
}

/// Activation flags of all upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpgradeSet {
    active: [bool; UPGRADE_COUNT],
}

impl UpgradeSet {
    /// Nothing activated (a new game)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, upgrade: Upgrade) -> bool {
        self.active[upgrade.index()]
    }

    /// Dependency gate: row 0 is always open, row 1 needs any row-0 upgrade,
    /// double jump needs jump
    pub fn dependencies_met(&self, upgrade: Upgrade) -> bool {
        match upgrade.row() {
            0 => true,
            1 => self.is_active(Upgrade::Graphics) || self.is_active(Upgrade::Music),
            _ => self.is_active(Upgrade::Jump),
        }
    }

    pub fn state(&self, upgrade: Upgrade) -> UpgradeState {
        if self.is_active(upgrade) {
            UpgradeState::Active
        } else if self.dependencies_met(upgrade) {
            UpgradeState::Available
        } else {
            UpgradeState::Locked
        }
    }

    /// Activate an upgrade; only allowed from `Available`
    pub fn activate(&mut self, upgrade: Upgrade) -> Result<(), UpgradeError> {
        match self.state(upgrade) {
            UpgradeState::Locked => Err(UpgradeError::NotAvailable(upgrade)),
            UpgradeState::Active => Err(UpgradeError::AlreadyActive(upgrade)),
            UpgradeState::Available => {
                self.active[upgrade.index()] = true;
                Ok(())
            }
        }
    }

    /// Active upgrades in tree order
    pub fn active(&self) -> impl Iterator<Item = Upgrade> + '_ {
        Upgrade::ALL.into_iter().filter(|u| self.is_active(*u))
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_order_indices() {
        for (i, upgrade) in Upgrade::ALL.iter().enumerate() {
            assert_eq!(upgrade.index(), i);
            assert_eq!(Upgrade::from_index(i), Some(*upgrade));
        }
        assert_eq!(Upgrade::from_index(7), None);
    }

    #[test]
    fn test_new_game_states() {
        let set = UpgradeSet::new();
        assert_eq!(set.state(Upgrade::Graphics), UpgradeState::Available);
        assert_eq!(set.state(Upgrade::Music), UpgradeState::Available);
        assert_eq!(set.state(Upgrade::Jump), UpgradeState::Locked);
        assert_eq!(set.state(Upgrade::Platforms), UpgradeState::Locked);
        assert_eq!(set.state(Upgrade::DoubleJump), UpgradeState::Locked);
    }

    #[test]
    fn test_any_row_zero_unlocks_row_one() {
        let mut set = UpgradeSet::new();
        set.activate(Upgrade::Music).unwrap();
        assert_eq!(set.state(Upgrade::Music), UpgradeState::Active);
        for upgrade in [Upgrade::Jump, Upgrade::MoveLeft, Upgrade::Small, Upgrade::Platforms] {
            assert_eq!(set.state(upgrade), UpgradeState::Available);
        }
        assert_eq!(set.state(Upgrade::DoubleJump), UpgradeState::Locked);
    }

    #[test]
    fn test_double_jump_needs_jump() {
        let mut set = UpgradeSet::new();
        set.activate(Upgrade::Graphics).unwrap();
        set.activate(Upgrade::Jump).unwrap();
        assert_eq!(set.state(Upgrade::DoubleJump), UpgradeState::Available);
    }

    #[test]
    fn test_activate_errors() {
        let mut set = UpgradeSet::new();
        assert_eq!(
            set.activate(Upgrade::Jump),
            Err(UpgradeError::NotAvailable(Upgrade::Jump))
        );
        set.activate(Upgrade::Graphics).unwrap();
        assert_eq!(
            set.activate(Upgrade::Graphics),
            Err(UpgradeError::AlreadyActive(Upgrade::Graphics))
        );
        assert_eq!(set.active_count(), 1);
    }

    #[test]
    fn test_active_in_tree_order() {
        let mut set = UpgradeSet::new();
        for upgrade in [Upgrade::Music, Upgrade::Jump, Upgrade::DoubleJump] {
            set.activate(upgrade).unwrap();
        }
        let active: Vec<_> = set.active().collect();
        assert_eq!(active, vec![Upgrade::Music, Upgrade::Jump, Upgrade::DoubleJump]);
    }

    #[test]
    fn test_error_texts() {
        assert_eq!(UpgradeState::Locked.error_text(), "(Not yet available)");
        assert_eq!(UpgradeState::Available.error_text(), "");
        assert_eq!(UpgradeState::Active.error_text(), "(Already activated)");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Upgrade::DoubleJump).unwrap();
        assert_eq!(json, "\"doubleJump\"");
        let parsed: Upgrade = serde_json::from_str("\"moveLeft\"").unwrap();
        assert_eq!(parsed, Upgrade::MoveLeft);
    }
}
