// Loading screen: logo and progress bar while the data files load

use super::SceneRequest;
use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::engine::assets::AssetType;
use crate::engine::renderer::{Camera, Color, DrawList, Layer, TextStyle};
use crate::engine::scene::{Scene, SceneCommand, SceneContext, SceneKey};
use glam::Vec2;
use log::{debug, error, info, warn};

pub struct LoadingScene {
    screen: Vec2,
    progress: f32,
}

impl LoadingScene {
    pub fn new() -> Self {
        Self {
            screen: Vec2::new(GAME_WIDTH, GAME_HEIGHT),
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Bar background and fill rectangles as (min, size)
    fn bar(&self) -> ((Vec2, Vec2), (Vec2, Vec2)) {
        let width = self.screen.x * 0.3;
        let size = Vec2::new(width, width * 0.1);
        let min = self.screen / 2.0 - size / 2.0;
        let fill = Vec2::new(size.x * self.progress, size.y);
        ((min, size), (min, fill))
    }
}

impl Default for LoadingScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for LoadingScene {
    fn key(&self) -> SceneKey {
        SceneKey::Loading
    }

    fn create(&mut self, ctx: &mut SceneContext) {
        self.screen = Vec2::new(ctx.config.width, ctx.config.height);
        let loader = ctx.assets.loader();
        info!("Loading assets from {}", loader.base_path().display());
        match loader.list_assets(AssetType::Level) {
            Ok(files) => debug!("Level files: {:?}", files),
            Err(err) => debug!("Cannot list level files: {}", err),
        }
    }

    fn update(&mut self, _dt: f32, ctx: &mut SceneContext) -> SceneCommand {
        // One file per step
        if !ctx.assets.is_done() {
            if let Err(err) = ctx.assets.load_next() {
                warn!("{}, using the built-in copy", err);
            }
            self.progress = ctx.assets.progress();
            return SceneCommand::None;
        }

        if let Err(err) = ctx.assets.use_builtin_fallbacks() {
            error!("Built-in data is broken: {}", err);
            return SceneCommand::Quit;
        }
        SceneCommand::Switch(SceneRequest::Home)
    }

    fn draw(&self, list: &mut DrawList, _camera: &mut Camera) {
        let logo = Vec2::new(self.screen.x / 2.0, self.screen.y / 2.0 - self.screen.y * 0.1);
        list.text(
            logo,
            "UNRAW",
            TextStyle::new(48.0, Color::WHITE).origin(0.5, 1.0),
        );

        let ((bg_min, bg_size), (fill_min, fill_size)) = self.bar();
        list.rect_min(Layer::Screen, bg_min, bg_size, Color::hex(0xF5F5F5));
        if fill_size.x > 0.0 {
            list.rect_min(Layer::Screen, fill_min, fill_size, Color::hex(0x27ff00));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::GameAssets;
    use crate::scenes::testing::Harness;
    use std::path::Path;

    fn run(harness: &mut Harness) -> Vec<SceneCommand> {
        let mut scene = LoadingScene::new();
        scene.create(&mut harness.ctx());
        (0..4).map(|_| scene.update(1.0 / 60.0, &mut harness.ctx())).collect()
    }

    #[test]
    fn test_loads_files_then_goes_home() {
        let mut harness = Harness::new();
        harness.assets = GameAssets::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));

        let commands = run(&mut harness);
        assert_eq!(commands[0], SceneCommand::None);
        assert_eq!(commands[1], SceneCommand::None);
        assert_eq!(commands[2], SceneCommand::Switch(SceneRequest::Home));
        assert!(harness.assets.level().is_some());
        assert!(harness.assets.editor_layout().is_some());
    }

    #[test]
    fn test_missing_files_fall_back_to_builtin() {
        let mut harness = Harness::new();
        harness.assets = GameAssets::new("does/not/exist");

        let commands = run(&mut harness);
        assert_eq!(commands[2], SceneCommand::Switch(SceneRequest::Home));
        assert_eq!(harness.assets.level().unwrap().checkpoints.len(), 7);
        assert_eq!(harness.assets.editor_layout().unwrap().buttons.len(), 7);
    }

    #[test]
    fn test_progress_bar_fill() {
        let mut harness = Harness::new();
        harness.assets = GameAssets::new("does/not/exist");
        let mut scene = LoadingScene::new();
        scene.create(&mut harness.ctx());
        scene.update(1.0 / 60.0, &mut harness.ctx());
        assert!((scene.progress() - 0.5).abs() < 1e-6);

        let ((_, bg_size), (_, fill_size)) = scene.bar();
        assert!(bg_size.abs_diff_eq(Vec2::new(240.0, 24.0), 1e-4));
        assert!((fill_size.x - 120.0).abs() < 1e-4);
    }
}
