// Scene system
//
// A scene owns the objects of one screen (menu, level, editor overlay...).
// The `SceneManager` keeps the running scenes on a stack: only the top one
// updates and receives input, all of them are drawn bottom to top.

mod manager;

pub use manager::SceneManager;

use crate::config::GameConfig;
use crate::engine::assets::GameAssets;
use crate::engine::audio::AudioQueue;
use crate::engine::events::EventBus;
use crate::engine::input::InputManager;
use crate::engine::renderer::{Camera, DrawList};
use crate::scenes::SceneRequest;
use glam::Vec2;

/// Identifies a running scene (also used as the event bus subscriber key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Loading,
    Home,
    Info,
    Build,
    Game,
    Editor,
    Finish,
}

/// What a scene asks the manager to do after an update or input callback
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    None,
    /// Stop every running scene and start this one
    Switch(SceneRequest),
    /// Start a scene on top of the running ones
    Overlay(SceneRequest),
    Quit,
}

/// Shared state handed to scene callbacks
pub struct SceneContext<'a> {
    pub config: &'a GameConfig,
    pub input: &'a mut InputManager,
    pub events: &'a mut EventBus,
    pub assets: &'a mut GameAssets,
    pub audio: &'a mut AudioQueue,
}

/// Lifecycle of a scene: `create` once, then `update`/`draw` every step,
/// `shutdown` once when the scene stops
pub trait Scene {
    fn key(&self) -> SceneKey;

    /// Build the scene objects
    fn create(&mut self, _ctx: &mut SceneContext) {}

    /// Fixed step update
    fn update(&mut self, dt: f32, ctx: &mut SceneContext) -> SceneCommand;

    /// Pointer pressed at a logical screen position
    fn pointer_down(&mut self, _position: Vec2, _ctx: &mut SceneContext) -> SceneCommand {
        SceneCommand::None
    }

    /// Pointer released at a logical screen position
    fn pointer_up(&mut self, _position: Vec2, _ctx: &mut SceneContext) -> SceneCommand {
        SceneCommand::None
    }

    /// Add this scene's quads; scenes with a world view also place the camera
    fn draw(&self, list: &mut DrawList, camera: &mut Camera);

    /// Release listeners and stop sounds
    fn shutdown(&mut self, _ctx: &mut SceneContext) {}
}
