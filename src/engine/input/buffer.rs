// Input buffering so short presses aren't lost between fixed steps

use super::action::Action;
use std::collections::VecDeque;

/// Maximum number of buffered inputs to store
const MAX_BUFFER_SIZE: usize = 16;

/// How long an input remains in the buffer (in fixed steps)
///
/// Six steps at 60 Hz is 100 ms: a jump pressed slightly before landing
/// still fires when the player touches the ground.
pub const BUFFER_DURATION: u32 = 6;

/// Represents a single buffered input
#[derive(Debug, Clone, Copy)]
pub struct BufferedInput {
    pub action: Action,
    pub steps_remaining: u32,
}

impl BufferedInput {
    /// Create a new buffered input
    pub fn new(action: Action) -> Self {
        Self {
            action,
            steps_remaining: BUFFER_DURATION,
        }
    }

    /// Decrease the remaining steps
    pub fn age(&mut self) {
        self.steps_remaining = self.steps_remaining.saturating_sub(1);
    }

    /// Check if this input has expired
    pub fn is_expired(&self) -> bool {
        self.steps_remaining == 0
    }
}

/// Buffer of recent presses
///
/// The jump check reads it so a press a few steps early still counts.
#[derive(Debug)]
pub struct InputBuffer {
    buffer: VecDeque<BufferedInput>,
}

impl InputBuffer {
    /// Create an empty input buffer
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_BUFFER_SIZE),
        }
    }

    /// Add an input to the buffer, refreshing it if it is already there
    pub fn push(&mut self, action: Action) {
        if let Some(existing) = self.buffer.iter_mut().find(|input| input.action == action) {
            existing.steps_remaining = BUFFER_DURATION;
            return;
        }

        self.buffer.push_back(BufferedInput::new(action));
        if self.buffer.len() > MAX_BUFFER_SIZE {
            self.buffer.pop_front();
        }
    }

    /// Check if an action is currently buffered
    pub fn has(&self, action: Action) -> bool {
        self.buffer.iter().any(|input| input.action == action)
    }

    /// Consume an action from the buffer if it exists
    /// Returns true if the action was found and consumed
    pub fn consume(&mut self, action: Action) -> bool {
        if let Some(pos) = self.buffer.iter().position(|input| input.action == action) {
            self.buffer.remove(pos);
            true
        } else {
            false
        }
    }

    /// Age all inputs and drop expired ones; call once per fixed step
    pub fn update(&mut self) {
        for input in &mut self.buffer {
            input.age();
        }
        self.buffer.retain(|input| !input.is_expired());
    }

    /// Clear all buffered inputs
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Get the number of buffered inputs
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
