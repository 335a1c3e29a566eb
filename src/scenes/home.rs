// Main menu

use super::{InfoPage, SceneRequest};
use crate::common::math::{wrap_next, wrap_prev};
use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::engine::input::Action;
use crate::engine::renderer::{Camera, Color, DrawList, TextStyle};
use crate::engine::scene::{Scene, SceneCommand, SceneContext, SceneKey};
use crate::game::session::Session;
use glam::Vec2;
use log::info;

const TITLE: &str = "My Game";
const INSTRUCTIONS: &str =
    "Use arrow keys or W, A, S, D to select\nUse [SPACE] or [ENTER] to confirm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Start,
    HowToPlay,
    Credits,
}

impl Entry {
    const ALL: [Entry; 3] = [Entry::Start, Entry::HowToPlay, Entry::Credits];

    fn label(self) -> &'static str {
        match self {
            Entry::Start => "Start",
            Entry::HowToPlay => "How to Play",
            Entry::Credits => "Credits",
        }
    }

    fn request(self) -> SceneRequest {
        match self {
            Entry::Start => SceneRequest::Build(Session::new_game()),
            Entry::HowToPlay => SceneRequest::Info(InfoPage::HowToPlay),
            Entry::Credits => SceneRequest::Info(InfoPage::Credits),
        }
    }
}

pub struct HomeScene {
    screen: Vec2,
    selected: usize,
}

impl HomeScene {
    pub fn new() -> Self {
        Self {
            screen: Vec2::new(GAME_WIDTH, GAME_HEIGHT),
            selected: 0,
        }
    }

    pub fn selected_label(&self) -> &'static str {
        Entry::ALL[self.selected].label()
    }

    fn select_next(&mut self) {
        self.selected = wrap_next(self.selected, Entry::ALL.len());
    }

    fn select_previous(&mut self) {
        self.selected = wrap_prev(self.selected, Entry::ALL.len());
    }

    fn confirm(&self) -> SceneCommand {
        let entry = Entry::ALL[self.selected];
        info!("Menu: {}", entry.label());
        SceneCommand::Switch(entry.request())
    }

    fn entry_style(&self, index: usize) -> TextStyle {
        if index == self.selected {
            TextStyle::new(70.0, Color::hex(0x0000ff)).origin(0.5, 0.5)
        } else {
            TextStyle::new(60.0, Color::hex(0xffff00)).origin(0.5, 0.5)
        }
    }

    fn entry_position(&self, index: usize) -> Vec2 {
        Vec2::new(
            self.screen.x / 2.0,
            self.screen.y * 0.4 + index as f32 * self.screen.y * 0.1,
        )
    }

    /// Index of the entry under a screen position
    fn entry_at(&self, position: Vec2) -> Option<usize> {
        (0..Entry::ALL.len()).find(|&index| {
            let size = self.entry_style(index).measure(Entry::ALL[index].label());
            let d = (position - self.entry_position(index)).abs();
            d.x <= size.x / 2.0 && d.y <= size.y / 2.0
        })
    }
}

impl Default for HomeScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for HomeScene {
    fn key(&self) -> SceneKey {
        SceneKey::Home
    }

    fn create(&mut self, ctx: &mut SceneContext) {
        self.screen = Vec2::new(ctx.config.width, ctx.config.height);
    }

    fn update(&mut self, _dt: f32, ctx: &mut SceneContext) -> SceneCommand {
        let input = ctx.input.state();
        if input.just_pressed(Action::Down) {
            self.select_next();
        }
        if input.just_pressed(Action::Up) {
            self.select_previous();
        }

        if input.just_pressed(Action::Confirm) {
            return self.confirm();
        }
        if input.just_pressed(Action::Back) {
            return SceneCommand::Quit;
        }
        SceneCommand::None
    }

    fn pointer_down(&mut self, position: Vec2, _ctx: &mut SceneContext) -> SceneCommand {
        match self.entry_at(position) {
            Some(index) => {
                self.selected = index;
                self.confirm()
            }
            None => SceneCommand::None,
        }
    }

    fn draw(&self, list: &mut DrawList, _camera: &mut Camera) {
        list.text(
            Vec2::new(self.screen.x / 2.0, self.screen.y * 0.2),
            TITLE,
            TextStyle::new(80.0, Color::hex(0xFFFF00)).origin(0.5, 0.5),
        );

        for (index, entry) in Entry::ALL.iter().enumerate() {
            list.text(
                self.entry_position(index),
                entry.label(),
                self.entry_style(index),
            );
        }

        list.text(
            Vec2::new(self.screen.x / 2.0, self.screen.y - 46.0),
            INSTRUCTIONS,
            TextStyle::new(14.0, Color::hex(0x27ff00)).origin(0.5, 0.5),
        );
    }
}
