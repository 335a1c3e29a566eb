// Action state shared by keyboard and touch input

use super::action::Action;
use super::buffer::InputBuffer;
use std::collections::{HashMap, HashSet};

/// Pressed / just pressed / just released state of every action
///
/// Keyboard keys and on-screen buttons both end up here, so scenes never
/// need to know which device produced an action.
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions that are currently held down
    pressed: HashSet<Action>,

    /// Actions pressed since the last step
    just_pressed: HashSet<Action>,

    /// Actions released since the last step
    just_released: HashSet<Action>,

    /// Press counts per action, so releasing one of two bound keys keeps it held
    holders: HashMap<Action, u32>,

    /// Recent presses for forgiving timing (jump buffering)
    buffer: InputBuffer,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last step
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was released since the last step
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Check if any of the given actions was just pressed
    pub fn any_just_pressed(&self, actions: &[Action]) -> bool {
        actions.iter().any(|a| self.just_pressed(*a))
    }

    /// Consume a buffered action, returns true if it was there
    pub fn consume_buffered(&mut self, action: Action) -> bool {
        self.buffer.consume(action)
    }

    /// Register a press from one source
    pub fn press(&mut self, action: Action) {
        let count = self.holders.entry(action).or_insert(0);
        *count += 1;
        if *count == 1 {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
            self.buffer.push(action);
        }
    }

    /// Register a release from one source
    pub fn release(&mut self, action: Action) {
        let Some(count) = self.holders.get_mut(&action) else {
            return;
        };
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.holders.remove(&action);
            self.just_released.insert(action);
            self.pressed.remove(&action);
        }
    }

    /// Advance to the next fixed step: clears edge state and ages the buffer
    pub fn end_step(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.buffer.update();
    }

    /// Forget everything (used on scene switches so held keys don't leak)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.holders.clear();
        self.buffer.clear();
    }

    /// Horizontal direction in -1.0..=1.0
    pub fn horizontal(&self) -> f32 {
        let mut horizontal = 0.0;
        if self.is_pressed(Action::Left) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::Right) {
            horizontal += 1.0;
        }
        horizontal
    }
}
