// Upgrade editor widgets
//
// Geometry is in logical screen pixels (y-down). The tree sits inside the
// editor area; description, error text and OK button go below it.

pub mod buttons;
pub mod connectors;
pub mod selector;

pub use buttons::{OkButton, UpgradeButton};
pub use connectors::{connector_segments, draw_connectors, Segment};
pub use selector::Selector;

use crate::common::math::rel_to_px;
use crate::game::level::EditorLayout;
use crate::game::upgrades::UpgradeSet;
use glam::Vec2;

/// Rectangle of the upgrade tree on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorArea {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl EditorArea {
    /// 80% of the game width, half its height, 15% from the top, centered
    pub fn for_game(game_width: f32, game_height: f32) -> Self {
        let width = rel_to_px(0.8, game_width);
        Self {
            x: (game_width / 2.0 - width / 2.0).round(),
            y: rel_to_px(0.15, game_height),
            width,
            height: rel_to_px(0.5, game_height),
        }
    }

    /// Screen position of a point given relative to the area
    pub fn to_screen(&self, rel_x: f32, rel_y: f32) -> Vec2 {
        Vec2::new(
            self.x + rel_to_px(rel_x, self.width),
            self.y + rel_to_px(rel_y, self.height),
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Upgrade buttons placed by the layout, with states from the active upgrades
pub fn build_buttons(
    layout: &EditorLayout,
    area: &EditorArea,
    upgrades: &UpgradeSet,
) -> Vec<UpgradeButton> {
    layout
        .buttons
        .iter()
        .map(|data| {
            let mut button = UpgradeButton::new(data.upgrade, area.to_screen(data.x, data.y));
            button.set_state(upgrades.state(data.upgrade));
            button
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::upgrades::{Upgrade, UpgradeState};

    #[test]
    fn test_area_for_default_size() {
        let area = EditorArea::for_game(800.0, 600.0);
        assert_eq!(area, EditorArea {
            x: 80.0,
            y: 90.0,
            width: 640.0,
            height: 300.0,
        });
        assert_eq!(area.center(), Vec2::new(400.0, 240.0));
    }

    #[test]
    fn test_build_buttons_from_builtin_layout() {
        let layout = EditorLayout::builtin().unwrap();
        let area = EditorArea::for_game(800.0, 600.0);
        let mut upgrades = UpgradeSet::new();
        upgrades.activate(Upgrade::Music).unwrap();

        let buttons = build_buttons(&layout, &area, &upgrades);
        assert_eq!(buttons.len(), 7);
        assert_eq!(buttons[0].center, Vec2::new(80.0 + 224.0, 90.0 + 60.0));
        assert_eq!(buttons[1].state(), UpgradeState::Active);
        assert_eq!(buttons[2].state(), UpgradeState::Available);
        assert_eq!(buttons[6].state(), UpgradeState::Locked);
    }
}
