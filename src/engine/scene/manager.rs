// Scene stack management

use super::{Scene, SceneCommand, SceneContext, SceneKey};
use crate::engine::renderer::{Camera, DrawList};
use crate::scenes::SceneRequest;
use glam::Vec2;
use log::info;

/// Builds a scene for a request
pub type SceneFactory = Box<dyn Fn(SceneRequest) -> Box<dyn Scene>>;

/// Stack of running scenes
pub struct SceneManager {
    stack: Vec<Box<dyn Scene>>,
    factory: SceneFactory,
    quit_requested: bool,
}

impl SceneManager {
    pub fn new(factory: SceneFactory) -> Self {
        Self {
            stack: Vec::new(),
            factory,
            quit_requested: false,
        }
    }

    /// Replace everything with the requested scene
    pub fn start(&mut self, request: SceneRequest, ctx: &mut SceneContext) {
        self.apply(SceneCommand::Switch(request), ctx);
    }

    /// Update the top scene
    pub fn update(&mut self, dt: f32, ctx: &mut SceneContext) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        let command = top.update(dt, ctx);
        self.apply(command, ctx);
    }

    /// Forward a pointer press to the top scene
    pub fn pointer_down(&mut self, position: Vec2, ctx: &mut SceneContext) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        let command = top.pointer_down(position, ctx);
        self.apply(command, ctx);
    }

    /// Forward a pointer release to the top scene
    pub fn pointer_up(&mut self, position: Vec2, ctx: &mut SceneContext) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        let command = top.pointer_up(position, ctx);
        self.apply(command, ctx);
    }

    /// Draw every running scene, bottom first
    pub fn draw(&self, list: &mut DrawList, camera: &mut Camera) {
        for scene in &self.stack {
            scene.draw(list, camera);
        }
    }

    /// Stop all scenes (on exit)
    pub fn shutdown_all(&mut self, ctx: &mut SceneContext) {
        while let Some(mut scene) = self.stack.pop() {
            info!("Stopping scene {:?}", scene.key());
            scene.shutdown(ctx);
        }
    }

    pub fn top_key(&self) -> Option<SceneKey> {
        self.stack.last().map(|scene| scene.key())
    }

    pub fn is_running(&self, key: SceneKey) -> bool {
        self.stack.iter().any(|scene| scene.key() == key)
    }

    /// Running scene keys, bottom first
    pub fn keys(&self) -> Vec<SceneKey> {
        self.stack.iter().map(|scene| scene.key()).collect()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    fn apply(&mut self, command: SceneCommand, ctx: &mut SceneContext) {
        match command {
            SceneCommand::None => {}
            SceneCommand::Switch(request) => {
                self.shutdown_all(ctx);
                // Held keys must not leak into the next scene
                ctx.input.state_mut().reset();
                self.push(request, ctx);
            }
            SceneCommand::Overlay(request) => {
                self.push(request, ctx);
            }
            SceneCommand::Quit => {
                info!("Quit requested");
                self.quit_requested = true;
            }
        }
    }

    fn push(&mut self, request: SceneRequest, ctx: &mut SceneContext) {
        info!("Starting scene {:?}", request.key());
        let mut scene = (self.factory)(request);
        scene.create(ctx);
        self.stack.push(scene);
    }
}
