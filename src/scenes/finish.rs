// End screen shown over the level when the flag is reached

use super::{draw_panel, SceneRequest};
use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::engine::audio::Sound;
use crate::engine::events::UiEvent;
use crate::engine::input::Action;
use crate::engine::renderer::{Camera, Color, DrawList, TextStyle};
use crate::engine::scene::{Scene, SceneCommand, SceneContext, SceneKey};
use glam::Vec2;

/// Seconds before the instructions appear and input is accepted
pub const INSTRUCTION_DELAY: f32 = 1.0;

const PANEL_MARGIN: f32 = 60.0;

pub struct FinishScene {
    screen: Vec2,
    elapsed: f32,
}

impl FinishScene {
    pub fn new() -> Self {
        Self {
            screen: Vec2::new(GAME_WIDTH, GAME_HEIGHT),
            elapsed: 0.0,
        }
    }

    pub fn accepts_input(&self) -> bool {
        self.elapsed >= INSTRUCTION_DELAY
    }
}

impl Default for FinishScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for FinishScene {
    fn key(&self) -> SceneKey {
        SceneKey::Finish
    }

    fn create(&mut self, ctx: &mut SceneContext) {
        self.screen = Vec2::new(ctx.config.width, ctx.config.height);
        ctx.events.subscribe(SceneKey::Finish);
        ctx.audio.play(Sound::Yeah);
    }

    fn update(&mut self, dt: f32, ctx: &mut SceneContext) -> SceneCommand {
        self.elapsed += dt;

        // Drained every step so early presses don't count later
        let mobile_pressed = ctx
            .events
            .drain(SceneKey::Finish)
            .iter()
            .any(|event| matches!(event, UiEvent::MobileDown(_)));
        if !self.accepts_input() {
            return SceneCommand::None;
        }

        let input = ctx.input.state();
        if mobile_pressed
            || input.any_just_pressed(&Action::DIRECTIONS)
            || input.just_pressed(Action::Confirm)
        {
            return SceneCommand::Switch(SceneRequest::Home);
        }
        SceneCommand::None
    }

    fn draw(&self, list: &mut DrawList, _camera: &mut Camera) {
        draw_panel(list, self.screen, PANEL_MARGIN, Color::hex(0xF5F5F5));

        let x = self.screen.x / 2.0;
        list.text(
            Vec2::new(x, self.screen.y * 0.32),
            "Congratulations!",
            TextStyle::new(40.0, Color::BLACK).origin(0.5, 0.5),
        );
        list.text(
            Vec2::new(x, self.screen.y * 0.36),
            "You unrawified your game and made it out!",
            TextStyle::new(30.0, Color::BLACK)
                .origin(0.5, 0.0)
                .wrap(self.screen.x - 2.0 * PANEL_MARGIN - 40.0),
        );
        if self.accepts_input() {
            list.text(
                Vec2::new(x, self.screen.y * 0.5),
                "Press any key or button to go back to the menu.",
                TextStyle::new(25.0, Color::BLACK)
                    .origin(0.5, 0.0)
                    .wrap(self.screen.x - 2.0 * PANEL_MARGIN - 40.0),
            );
        }
    }

    fn shutdown(&mut self, ctx: &mut SceneContext) {
        ctx.events.unsubscribe(SceneKey::Finish);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::MobileButton;
    use crate::engine::renderer::Layer;
    use crate::scenes::testing::Harness;

    #[test]
    fn test_input_ignored_during_delay() {
        let mut harness = Harness::new();
        let mut scene = FinishScene::new();
        scene.create(&mut harness.ctx());
        assert!(harness.audio.is_playing(Sound::Yeah));

        harness.tap(Action::Confirm);
        harness.events.publish(UiEvent::MobileDown(MobileButton::Jump));
        assert_eq!(scene.update(0.5, &mut harness.ctx()), SceneCommand::None);
        harness.end_step();

        // The early mobile press was drained and does not fire later
        assert_eq!(scene.update(0.6, &mut harness.ctx()), SceneCommand::None);
    }

    #[test]
    fn test_direction_returns_home() {
        let mut harness = Harness::new();
        let mut scene = FinishScene::new();
        scene.create(&mut harness.ctx());
        scene.update(1.0, &mut harness.ctx());

        harness.tap(Action::Left);
        assert_eq!(
            scene.update(1.0 / 60.0, &mut harness.ctx()),
            SceneCommand::Switch(SceneRequest::Home)
        );
    }

    #[test]
    fn test_mobile_button_returns_home() {
        let mut harness = Harness::new();
        let mut scene = FinishScene::new();
        scene.create(&mut harness.ctx());
        scene.update(1.2, &mut harness.ctx());

        harness.events.publish(UiEvent::MobileDown(MobileButton::Crouch));
        assert_eq!(
            scene.update(1.0 / 60.0, &mut harness.ctx()),
            SceneCommand::Switch(SceneRequest::Home)
        );
    }

    #[test]
    fn test_instructions_appear_after_delay() {
        let mut harness = Harness::new();
        let mut scene = FinishScene::new();
        scene.create(&mut harness.ctx());
        let mut camera = Camera::new(Vec2::ZERO, 25.0, 18.75);

        let mut before = DrawList::new();
        scene.draw(&mut before, &mut camera);
        scene.update(1.0, &mut harness.ctx());
        let mut after = DrawList::new();
        scene.draw(&mut after, &mut camera);
        assert!(after.quads(Layer::Screen).len() > before.quads(Layer::Screen).len());
    }

    #[test]
    fn test_shutdown_removes_listener() {
        let mut harness = Harness::new();
        let mut scene = FinishScene::new();
        scene.create(&mut harness.ctx());
        scene.shutdown(&mut harness.ctx());
        assert!(!harness.events.is_subscribed(SceneKey::Finish));
    }
}
