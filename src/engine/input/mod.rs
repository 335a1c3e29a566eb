// Input handling system
//
// Keyboard keys and the on-screen touch buttons are both input sources that
// the bindings map onto the same small set of actions.
//
// ## Architecture
//
// - `action`: game actions and default bindings
// - `buffer`: short input buffering (jump presses just before landing)
// - `state`: pressed / just pressed / just released tracking
// - `config`: bindings and remapping
// - `mobile`: on-screen buttons publishing events on the event bus
// - `manager`: routes device events through the bindings into the state

pub mod action;
pub mod buffer;
pub mod config;
pub mod manager;
pub mod mobile;
pub mod state;

pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use mobile::{MobileButton, MobileControl};
pub use state::InputState;
