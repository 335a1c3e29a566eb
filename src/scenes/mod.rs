// Game scenes
//
// Loading -> Home -> Build -> Game, with the Editor and Finish scenes
// started as overlays on top of the running level.

mod build;
mod editor;
mod finish;
mod game;
mod home;
mod info;
mod loading;

pub use build::BuildScene;
pub use editor::EditorScene;
pub use finish::FinishScene;
pub use game::GameScene;
pub use home::HomeScene;
pub use info::{InfoPage, InfoScene};
pub use loading::LoadingScene;

use crate::engine::renderer::{Color, DrawList, Layer};
use crate::engine::scene::{Scene, SceneKey};
use crate::game::session::Session;
use glam::Vec2;

/// A scene to start, with the data it needs
#[derive(Debug, Clone, PartialEq)]
pub enum SceneRequest {
    Loading,
    Home,
    Info(InfoPage),
    Build(Session),
    Game(Session),
    Editor(Session),
    Finish,
}

impl SceneRequest {
    pub fn key(&self) -> SceneKey {
        match self {
            SceneRequest::Loading => SceneKey::Loading,
            SceneRequest::Home => SceneKey::Home,
            SceneRequest::Info(_) => SceneKey::Info,
            SceneRequest::Build(_) => SceneKey::Build,
            SceneRequest::Game(_) => SceneKey::Game,
            SceneRequest::Editor(_) => SceneKey::Editor,
            SceneRequest::Finish => SceneKey::Finish,
        }
    }
}

/// Scene factory used by the scene manager
pub fn create_scene(request: SceneRequest) -> Box<dyn Scene> {
    match request {
        SceneRequest::Loading => Box::new(LoadingScene::new()),
        SceneRequest::Home => Box::new(HomeScene::new()),
        SceneRequest::Info(page) => Box::new(InfoScene::new(page)),
        SceneRequest::Build(session) => Box::new(BuildScene::new(session)),
        SceneRequest::Game(session) => Box::new(GameScene::new(session)),
        SceneRequest::Editor(session) => Box::new(EditorScene::new(session)),
        SceneRequest::Finish => Box::new(FinishScene::new()),
    }
}

/// Window panel behind overlay scenes: the level is dimmed, the panel is
/// inset by `margin` pixels
fn draw_panel(list: &mut DrawList, screen: Vec2, margin: f32, color: Color) {
    const BORDER: f32 = 4.0;

    list.rect_min(Layer::Screen, Vec2::ZERO, screen, Color::BLACK.with_alpha(0.5));
    let size = screen - Vec2::splat(2.0 * margin);
    list.rect(Layer::Screen, screen / 2.0, size, color);
    list.outline(Layer::Screen, screen / 2.0, size, BORDER, Color::hex(0x696A6A));
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::SceneManager;
    use crate::scenes::testing::Harness;

    #[test]
    fn test_request_keys() {
        assert_eq!(SceneRequest::Home.key(), SceneKey::Home);
        assert_eq!(
            SceneRequest::Info(InfoPage::Credits).key(),
            SceneKey::Info
        );
        assert_eq!(
            SceneRequest::Editor(Session::new_game()).key(),
            SceneKey::Editor
        );
    }

    #[test]
    fn test_factory_builds_matching_scene() {
        let requests = [
            SceneRequest::Loading,
            SceneRequest::Home,
            SceneRequest::Info(InfoPage::HowToPlay),
            SceneRequest::Build(Session::new_game()),
            SceneRequest::Game(Session::new_game()),
            SceneRequest::Editor(Session::new_game()),
            SceneRequest::Finish,
        ];
        for request in requests {
            let key = request.key();
            assert_eq!(create_scene(request).key(), key);
        }
    }

    #[test]
    fn test_manager_with_real_scenes() {
        let mut harness = Harness::new();
        let mut manager = SceneManager::new(Box::new(create_scene));

        manager.start(SceneRequest::Game(Session::new_game()), &mut harness.ctx());
        manager.update(1.0 / 60.0, &mut harness.ctx());
        assert_eq!(manager.top_key(), Some(SceneKey::Game));

        manager.shutdown_all(&mut harness.ctx());
        assert_eq!(harness.events.subscriber_count(), 0);
    }
}
