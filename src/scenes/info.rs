// How to play and credits pages

use super::SceneRequest;
use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::engine::input::Action;
use crate::engine::renderer::{Camera, Color, DrawList, TextStyle};
use crate::engine::scene::{Scene, SceneCommand, SceneContext, SceneKey};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPage {
    HowToPlay,
    Credits,
}

impl InfoPage {
    pub fn title(self) -> &'static str {
        match self {
            InfoPage::HowToPlay => "How to Play",
            InfoPage::Credits => "Credits",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            InfoPage::HowToPlay => {
                "Your game starts out raw: all you can do is move right.\n\n\
                 Every checkpoint opens the game editor. Pick one upgrade \
                 there and the game is rebuilt with it.\n\n\
                 Move with the arrow keys or A and D, jump with UP or W, \
                 crouch with DOWN or S.\n\n\
                 Reach the flag to finish."
            }
            InfoPage::Credits => {
                "Unraw\n\n\
                 Design, code and art by the Unraw team.\n\n\
                 Built with winit, wgpu and rapier2d."
            }
        }
    }
}

pub struct InfoScene {
    page: InfoPage,
    screen: Vec2,
}

impl InfoScene {
    pub fn new(page: InfoPage) -> Self {
        Self {
            page,
            screen: Vec2::new(GAME_WIDTH, GAME_HEIGHT),
        }
    }
}

impl Scene for InfoScene {
    fn key(&self) -> SceneKey {
        SceneKey::Info
    }

    fn create(&mut self, ctx: &mut SceneContext) {
        self.screen = Vec2::new(ctx.config.width, ctx.config.height);
    }

    fn update(&mut self, _dt: f32, ctx: &mut SceneContext) -> SceneCommand {
        if ctx
            .input
            .state()
            .any_just_pressed(&[Action::Confirm, Action::Back])
        {
            return SceneCommand::Switch(SceneRequest::Home);
        }
        SceneCommand::None
    }

    fn pointer_down(&mut self, _position: Vec2, _ctx: &mut SceneContext) -> SceneCommand {
        SceneCommand::Switch(SceneRequest::Home)
    }

    fn draw(&self, list: &mut DrawList, _camera: &mut Camera) {
        list.text(
            Vec2::new(self.screen.x / 2.0, self.screen.y * 0.1),
            self.page.title(),
            TextStyle::new(50.0, Color::hex(0xFFFF00)).origin(0.5, 0.5),
        );
        list.text(
            Vec2::new(self.screen.x * 0.05, self.screen.y * 0.22),
            self.page.body(),
            TextStyle::new(18.0, Color::WHITE).wrap(self.screen.x * 0.9),
        );
        list.text(
            Vec2::new(self.screen.x / 2.0, self.screen.y - 46.0),
            "Press [SPACE] or [ENTER] to go back",
            TextStyle::new(14.0, Color::hex(0x27ff00)).origin(0.5, 0.5),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::Layer;
    use crate::scenes::testing::Harness;

    #[test]
    fn test_back_returns_home() {
        let mut harness = Harness::new();
        let mut scene = InfoScene::new(InfoPage::HowToPlay);
        scene.create(&mut harness.ctx());

        assert_eq!(scene.update(1.0 / 60.0, &mut harness.ctx()), SceneCommand::None);
        harness.tap(Action::Back);
        assert_eq!(
            scene.update(1.0 / 60.0, &mut harness.ctx()),
            SceneCommand::Switch(SceneRequest::Home)
        );
    }

    #[test]
    fn test_pages_draw_text() {
        for page in [InfoPage::HowToPlay, InfoPage::Credits] {
            let mut list = DrawList::new();
            let mut camera = Camera::new(Vec2::ZERO, 25.0, 18.75);
            InfoScene::new(page).draw(&mut list, &mut camera);
            assert!(!list.quads(Layer::Screen).is_empty());
            assert!(list.quads(Layer::World).is_empty());
        }
    }
}
