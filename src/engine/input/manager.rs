// Input manager - turns device events into action state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::mobile::MobileButton;
use super::state::InputState;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Routes keyboard and touch-button events through the bindings into one `InputState`
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    state: InputState,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeat doesn't count as a new press
            if event.repeat {
                return;
            }
            self.process_source(
                InputSource::key(key_code),
                event.state == ElementState::Pressed,
            );
        }
    }

    /// Process an on-screen button press or release
    pub fn process_mobile(&mut self, button: MobileButton, pressed: bool) {
        self.process_source(InputSource::mobile(button), pressed);
    }

    /// Look a source up in the bindings and update the state
    pub fn process_source(&mut self, source: InputSource, pressed: bool) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };
        if pressed {
            self.state.press(action);
        } else {
            self.state.release(action);
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    /// Shortcut for `state().just_pressed`
    pub fn just_pressed(&self, action: Action) -> bool {
        self.state.just_pressed(action)
    }
}
