// Game action definitions and mappings

use super::mobile::MobileButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
///
/// Scenes give the directions their own meaning: in the game `Up` jumps and
/// `Down` crouches, in menus they move the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Back,
}

impl Action {
    /// The four direction actions
    pub const DIRECTIONS: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];
}

/// Represents an input source (keyboard key or on-screen touch button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mobile(MobileButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create an on-screen button input source
    pub fn mobile(button: MobileButton) -> Self {
        Self::Mobile(button)
    }
}

/// Default keyboard and touch bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Arrow keys
        (InputSource::key(KeyCode::ArrowLeft), Action::Left),
        (InputSource::key(KeyCode::ArrowRight), Action::Right),
        (InputSource::key(KeyCode::ArrowUp), Action::Up),
        (InputSource::key(KeyCode::ArrowDown), Action::Down),
        // WASD
        (InputSource::key(KeyCode::KeyA), Action::Left),
        (InputSource::key(KeyCode::KeyD), Action::Right),
        (InputSource::key(KeyCode::KeyW), Action::Up),
        (InputSource::key(KeyCode::KeyS), Action::Down),
        // Confirm / back
        (InputSource::key(KeyCode::Enter), Action::Confirm),
        (InputSource::key(KeyCode::NumpadEnter), Action::Confirm),
        (InputSource::key(KeyCode::Space), Action::Confirm),
        (InputSource::key(KeyCode::Escape), Action::Back),
        // Touch controls share the direction actions with the keyboard
        (InputSource::mobile(MobileButton::Left), MobileButton::Left.action()),
        (InputSource::mobile(MobileButton::Right), MobileButton::Right.action()),
        (InputSource::mobile(MobileButton::Crouch), MobileButton::Crouch.action()),
        (InputSource::mobile(MobileButton::Jump), MobileButton::Jump.action()),
    ]
}
