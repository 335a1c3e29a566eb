// Player state machine

/// Represents the current state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Walking,
    /// In the air, moving upward
    Jumping,
    /// In the air, moving downward
    Falling,
    /// Crouching on ground
    Crouching,
    /// Moving while crouched
    CrouchWalking,
}

impl PlayerState {
    /// Check if the player is on the ground
    pub fn is_grounded(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::Walking | Self::Crouching | Self::CrouchWalking
        )
    }

    /// Check if the player is in the air
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping | Self::Falling)
    }

    pub fn is_crouched(&self) -> bool {
        matches!(self, Self::Crouching | Self::CrouchWalking)
    }

    /// Check if the player can jump from this state
    pub fn can_jump(&self) -> bool {
        !self.is_crouched()
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walk",
            Self::Jumping => "jump",
            Self::Falling => "fall",
            Self::Crouching => "crouch",
            Self::CrouchWalking => "crouch_walk",
        }
    }
}

/// What the player is doing this step, as seen by the state machine
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInput {
    pub grounded: bool,
    pub velocity_y: f32,
    /// Horizontal input is non-zero
    pub moving: bool,
    /// Crouch is held and allowed
    pub crouching: bool,
}

/// State machine that handles player state transitions
#[derive(Debug, Default)]
pub struct PlayerStateMachine {
    current_state: PlayerState,
    previous_state: PlayerState,
    state_time: f32,
}

impl PlayerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> PlayerState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> PlayerState {
        self.previous_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Check if state just changed this step
    pub fn state_just_changed(&self) -> bool {
        self.state_time == 0.0
    }

    /// True on the step the player touched down after being in the air
    pub fn just_landed(&self) -> bool {
        self.state_just_changed()
            && self.previous_state.is_airborne()
            && self.current_state.is_grounded()
    }

    /// Transition to a new state
    pub fn transition(&mut self, new_state: PlayerState) {
        if self.current_state != new_state {
            log::trace!("Player {:?} -> {:?}", self.current_state, new_state);
            self.previous_state = self.current_state;
            self.current_state = new_state;
            self.state_time = 0.0;
        }
    }

    /// Update the state machine (called every step)
    pub fn update(&mut self, dt: f32, input: StepInput) {
        self.state_time += dt;

        if input.grounded {
            let next = match (self.current_state, input.crouching, input.moving) {
                // Just after the jump impulse the feet can still touch the ground
                (PlayerState::Jumping, _, _) if input.velocity_y > 0.0 => PlayerState::Jumping,
                (_, true, true) => PlayerState::CrouchWalking,
                (_, true, false) => PlayerState::Crouching,
                (_, false, true) => PlayerState::Walking,
                (_, false, false) => PlayerState::Idle,
            };
            self.transition(next);
        } else {
            match self.current_state {
                PlayerState::Jumping if input.velocity_y <= 0.0 => {
                    self.transition(PlayerState::Falling);
                }
                PlayerState::Jumping | PlayerState::Falling => {}
                // Walked off a ledge
                _ => self.transition(PlayerState::Falling),
            }
        }
    }

    /// Called when the player jumps
    pub fn jump(&mut self) {
        if self.current_state.can_jump() {
            // A second jump in the air restarts the jumping state
            self.previous_state = self.current_state;
            self.current_state = PlayerState::Jumping;
            self.state_time = 0.0;
        }
    }

    /// Respawn the player
    pub fn respawn(&mut self) {
        self.transition(PlayerState::Falling);
    }
}
