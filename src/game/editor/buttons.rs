// Editor buttons

use crate::engine::renderer::{Color, DrawList, Layer, TextStyle};
use crate::game::upgrades::{Upgrade, UpgradeState};
use glam::Vec2;

/// Size of an upgrade button in logical pixels
pub const UPGRADE_BUTTON_SIZE: Vec2 = Vec2::new(100.0, 50.0);

/// Size of the OK button in logical pixels
pub const OK_BUTTON_SIZE: Vec2 = Vec2::new(120.0, 50.0);

/// OK text color when the button can't be used
const OK_DISABLED_TEXT: u32 = 0x696A6A;

fn contains(center: Vec2, size: Vec2, point: Vec2) -> bool {
    let d = (point - center).abs();
    d.x <= size.x / 2.0 && d.y <= size.y / 2.0
}

/// One node of the upgrade tree
#[derive(Debug, Clone)]
pub struct UpgradeButton {
    pub upgrade: Upgrade,
    /// Center in logical pixels
    pub center: Vec2,
    pub size: Vec2,
    selected: bool,
    state: UpgradeState,
}

impl UpgradeButton {
    pub fn new(upgrade: Upgrade, center: Vec2) -> Self {
        Self {
            upgrade,
            center,
            size: UPGRADE_BUTTON_SIZE,
            selected: false,
            state: UpgradeState::Locked,
        }
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_state(&mut self, state: UpgradeState) {
        self.state = state;
    }

    pub fn state(&self) -> UpgradeState {
        self.state
    }

    pub fn contains(&self, point: Vec2) -> bool {
        contains(self.center, self.size, point)
    }

    pub fn draw(&self, list: &mut DrawList) {
        let (fill, text) = match self.state {
            UpgradeState::Locked => (Color::hex(0x3a3a3a), Color::hex(0x8a8a8a)),
            UpgradeState::Available => (Color::hex(0xf5f5f5), Color::BLACK),
            UpgradeState::Active => (Color::hex(0x27ff00), Color::BLACK),
        };
        list.rect(Layer::Screen, self.center, self.size, fill);
        list.text(
            self.center,
            self.upgrade.label(),
            TextStyle::new(16.0, text).origin(0.5, 0.5),
        );
    }
}

/// Confirms the selected upgrade
#[derive(Debug, Clone)]
pub struct OkButton {
    pub center: Vec2,
    pub size: Vec2,
    selectable: bool,
}

impl OkButton {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            size: OK_BUTTON_SIZE,
            selectable: true,
        }
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn contains(&self, point: Vec2) -> bool {
        contains(self.center, self.size, point)
    }

    pub fn text_color(&self) -> Color {
        if self.selectable {
            Color::BLACK
        } else {
            Color::hex(OK_DISABLED_TEXT)
        }
    }

    pub fn draw(&self, list: &mut DrawList) {
        let fill = if self.selectable {
            Color::hex(0xf5f5f5)
        } else {
            Color::hex(0xb0b0b0)
        };
        list.rect(Layer::Screen, self.center, self.size, fill);
        list.text(
            self.center,
            "OK",
            TextStyle::new(30.0, self.text_color()).origin(0.5, 0.5),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_button_hit_area() {
        let button = UpgradeButton::new(Upgrade::Jump, Vec2::new(100.0, 100.0));
        assert!(button.contains(Vec2::new(100.0, 100.0)));
        assert!(button.contains(Vec2::new(150.0, 125.0)));
        assert!(!button.contains(Vec2::new(151.0, 100.0)));
        assert!(!button.contains(Vec2::new(100.0, 74.0)));
    }

    #[test]
    fn test_upgrade_button_select() {
        let mut button = UpgradeButton::new(Upgrade::Music, Vec2::ZERO);
        assert!(!button.is_selected());
        assert_eq!(button.state(), UpgradeState::Locked);

        button.select();
        button.set_state(UpgradeState::Available);
        assert!(button.is_selected());
        assert_eq!(button.state(), UpgradeState::Available);

        button.deselect();
        assert!(!button.is_selected());
    }

    #[test]
    fn test_ok_button_colors() {
        let mut ok = OkButton::new(Vec2::new(400.0, 500.0));
        assert!(ok.is_selectable());
        assert_eq!(ok.text_color(), Color::BLACK);

        ok.set_selectable(false);
        assert_eq!(ok.text_color(), Color::hex(0x696A6A));
        assert!(ok.contains(Vec2::new(400.0, 520.0)));
    }

    #[test]
    fn test_draw_screen_layer_only() {
        let mut list = DrawList::new();
        UpgradeButton::new(Upgrade::Small, Vec2::new(50.0, 50.0)).draw(&mut list);
        OkButton::new(Vec2::new(50.0, 150.0)).draw(&mut list);
        assert!(list.quads(Layer::World).is_empty());
        assert!(list.quads(Layer::Screen).len() > 2);
    }
}
