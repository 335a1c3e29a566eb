// On-screen touch controls

use super::action::Action;
use crate::engine::events::{EventBus, UiEvent};
use crate::engine::renderer::{Color, DrawList, Layer, TextStyle};
use glam::Vec2;

/// The four on-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobileButton {
    Left,
    Right,
    Crouch,
    Jump,
}

impl MobileButton {
    pub const ALL: [MobileButton; 4] = [
        MobileButton::Left,
        MobileButton::Right,
        MobileButton::Crouch,
        MobileButton::Jump,
    ];

    /// The action this button stands for
    pub const fn action(self) -> Action {
        match self {
            MobileButton::Left => Action::Left,
            MobileButton::Right => Action::Right,
            MobileButton::Crouch => Action::Down,
            MobileButton::Jump => Action::Up,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MobileButton::Left => "<",
            MobileButton::Right => ">",
            MobileButton::Crouch => "V",
            MobileButton::Jump => "A",
        }
    }
}

/// An on-screen button with a square hit area (screen pixels)
#[derive(Debug, Clone, Copy)]
pub struct MobileControl {
    pub button: MobileButton,
    pub center: Vec2,
    pub size: f32,
    held: bool,
}

impl MobileControl {
    pub fn new(button: MobileButton, center: Vec2, size: f32) -> Self {
        Self {
            button,
            center,
            size,
            held: false,
        }
    }

    /// Standard layout: movement bottom-left, crouch/jump bottom-right
    pub fn default_layout(width: f32, height: f32) -> Vec<Self> {
        let size = (height * 0.12).round();
        let margin = (size * 0.35).round();
        let y = height - margin - size / 2.0;
        vec![
            Self::new(MobileButton::Left, Vec2::new(margin + size / 2.0, y), size),
            Self::new(MobileButton::Right, Vec2::new(2.0 * margin + 1.5 * size, y), size),
            Self::new(
                MobileButton::Crouch,
                Vec2::new(width - 2.0 * margin - 1.5 * size, y),
                size,
            ),
            Self::new(MobileButton::Jump, Vec2::new(width - margin - size / 2.0, y), size),
        ]
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.size / 2.0 && d.y <= self.size / 2.0
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Pointer pressed: publishes `MobileDown` when the press hits this control
    pub fn pointer_down(&mut self, point: Vec2, bus: &mut EventBus) -> bool {
        if !self.contains(point) {
            return false;
        }
        self.held = true;
        bus.publish(UiEvent::MobileDown(self.button));
        true
    }

    /// Pointer released anywhere: publishes `MobileUp` if this control was held
    pub fn pointer_up(&mut self, bus: &mut EventBus) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        bus.publish(UiEvent::MobileUp(self.button));
        true
    }

    pub fn draw(&self, list: &mut DrawList) {
        let alpha = if self.held { 0.7 } else { 0.4 };
        list.rect(
            Layer::Screen,
            self.center,
            Vec2::splat(self.size),
            Color::WHITE.with_alpha(alpha),
        );
        list.text(
            self.center,
            self.button.label(),
            TextStyle::new(self.size * 0.4, Color::BLACK).origin(0.5, 0.5),
        );
    }
}
