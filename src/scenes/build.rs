// "Game builder" log shown before every run
//
// Lists the features of the next build one line at a time, then waits for
// the player to start the game.

use super::SceneRequest;
use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::engine::audio::Sound;
use crate::engine::input::Action;
use crate::engine::renderer::{Camera, Color, DrawList, TextStyle};
use crate::engine::scene::{Scene, SceneCommand, SceneContext, SceneKey};
use crate::game::session::Session;
use crate::game::upgrades::UpgradeSet;
use glam::Vec2;
use log::info;

/// Seconds between two log lines
pub const LINE_DELAY: f32 = 0.3;

const TITLE: &str = "Starting Game Builder v3.2.3....\n\nBuilding game.....\n";
const FINISHED: &str = "\nBuild finished!\nPress SPACE or touch the screen to start.";
const TEXT_SIZE: f32 = 22.0;

/// Log lines for a build with these upgrades
pub fn build_lines(upgrades: &UpgradeSet) -> Vec<&'static str> {
    let mut lines = vec!["Adding features...", "- Move right"];
    lines.extend(upgrades.active().map(|upgrade| upgrade.build_line()));
    lines.push(" ");
    lines.push(FINISHED);
    lines
}

pub struct BuildScene {
    session: Session,
    lines: Vec<&'static str>,
    elapsed: f32,
    screen: Vec2,
}

impl BuildScene {
    pub fn new(session: Session) -> Self {
        let lines = build_lines(&session.upgrades);
        Self {
            session,
            lines,
            elapsed: 0.0,
            screen: Vec2::new(GAME_WIDTH, GAME_HEIGHT),
        }
    }

    /// Number of lines revealed so far
    pub fn visible_lines(&self) -> usize {
        ((self.elapsed / LINE_DELAY) as usize).min(self.lines.len())
    }

    /// Input is accepted one delay after the last line appeared
    pub fn is_finished(&self) -> bool {
        self.elapsed >= (self.lines.len() + 1) as f32 * LINE_DELAY
    }

    fn start_game(&self) -> SceneCommand {
        info!(
            "Build finished with {} upgrades",
            self.session.upgrades.active_count()
        );
        SceneCommand::Switch(SceneRequest::Game(self.session.clone()))
    }

    fn style(&self) -> TextStyle {
        TextStyle::new(TEXT_SIZE, Color::WHITE).wrap(self.screen.x * 0.9)
    }
}

impl Scene for BuildScene {
    fn key(&self) -> SceneKey {
        SceneKey::Build
    }

    fn create(&mut self, ctx: &mut SceneContext) {
        self.screen = Vec2::new(ctx.config.width, ctx.config.height);
        ctx.audio.play(Sound::Build);
    }

    fn update(&mut self, dt: f32, ctx: &mut SceneContext) -> SceneCommand {
        self.elapsed += dt;
        if self.is_finished() && ctx.input.state().just_pressed(Action::Confirm) {
            return self.start_game();
        }
        SceneCommand::None
    }

    fn pointer_down(&mut self, _position: Vec2, _ctx: &mut SceneContext) -> SceneCommand {
        if self.is_finished() {
            return self.start_game();
        }
        SceneCommand::None
    }

    fn draw(&self, list: &mut DrawList, _camera: &mut Camera) {
        let style = self.style();
        let spacing = self.screen.y * 0.01;
        let mut position = Vec2::new(self.screen.x * 0.03, self.screen.y * 0.03);

        list.text(position, TITLE, style);
        position.y += style.measure(TITLE).y + 2.0 * spacing;

        for line in &self.lines[..self.visible_lines()] {
            list.text(position, line, style);
            position.y += style.measure(line).y + spacing;
        }
    }

    fn shutdown(&mut self, ctx: &mut SceneContext) {
        ctx.audio.stop(Sound::Build);
    }
}
