// Upgrade editor overlay, opened by a checkpoint

use super::{draw_panel, SceneRequest};
use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::engine::events::UiEvent;
use crate::engine::input::{Action, MobileButton};
use crate::engine::renderer::{Camera, Color, DrawList, TextStyle};
use crate::engine::scene::{Scene, SceneCommand, SceneContext, SceneKey};
use crate::game::editor::buttons::OK_BUTTON_SIZE;
use crate::game::editor::{
    build_buttons, connector_segments, draw_connectors, EditorArea, OkButton, Segment, Selector,
};
use crate::game::session::Session;
use glam::Vec2;
use log::{error, info, warn};

const PANEL_MARGIN: f32 = 30.0;

pub struct EditorScene {
    session: Session,
    screen: Vec2,
    area: EditorArea,
    selector: Option<Selector>,
    segments: Vec<Segment>,
}

impl EditorScene {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            screen: Vec2::new(GAME_WIDTH, GAME_HEIGHT),
            area: EditorArea::for_game(GAME_WIDTH, GAME_HEIGHT),
            selector: None,
            segments: Vec::new(),
        }
    }

    pub fn selector(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }

    fn description_position(&self) -> Vec2 {
        Vec2::new(self.screen.x / 2.0, self.area.y + self.area.height + 20.0)
    }

    fn ok_position(&self) -> Vec2 {
        Vec2::new(
            self.screen.x / 2.0,
            self.screen.y - PANEL_MARGIN - 20.0 - OK_BUTTON_SIZE.y / 2.0,
        )
    }

    /// Activate the selected upgrade and rebuild the game with it
    fn confirm(&mut self) -> SceneCommand {
        let Some(upgrade) = self
            .selector
            .as_ref()
            .and_then(Selector::selected_button)
            .map(|button| button.upgrade)
        else {
            return SceneCommand::None;
        };

        match self.session.upgrades.activate(upgrade) {
            Ok(()) => {
                info!("Upgrade {} activated", upgrade);
                SceneCommand::Switch(SceneRequest::Build(self.session.clone()))
            }
            Err(err) => {
                warn!("{}", err);
                SceneCommand::None
            }
        }
    }

    /// On-screen buttons: left/right walk the tree, jump confirms
    fn handle_mobile(&mut self, button: MobileButton) -> SceneCommand {
        let Some(selector) = self.selector.as_mut() else {
            return SceneCommand::None;
        };
        match button {
            MobileButton::Left => selector.previous(),
            MobileButton::Right => selector.next(),
            MobileButton::Jump => return self.confirm(),
            MobileButton::Crouch => {}
        }
        SceneCommand::None
    }
}

impl Scene for EditorScene {
    fn key(&self) -> SceneKey {
        SceneKey::Editor
    }

    fn create(&mut self, ctx: &mut SceneContext) {
        ctx.events.subscribe(SceneKey::Editor);
        self.screen = Vec2::new(ctx.config.width, ctx.config.height);
        self.area = EditorArea::for_game(self.screen.x, self.screen.y);

        let Some(layout) = ctx.assets.editor_layout() else {
            error!("No editor layout loaded");
            return;
        };
        let buttons = build_buttons(layout, &self.area, &self.session.upgrades);
        self.segments = connector_segments(&buttons);
        self.selector = Some(Selector::new(buttons, OkButton::new(self.ok_position())));
    }

    fn update(&mut self, _dt: f32, ctx: &mut SceneContext) -> SceneCommand {
        for event in ctx.events.drain(SceneKey::Editor) {
            if let UiEvent::MobileDown(button) = event {
                let command = self.handle_mobile(button);
                if command != SceneCommand::None {
                    return command;
                }
            }
        }

        let input = ctx.input.state();
        let Some(selector) = self.selector.as_mut() else {
            return SceneCommand::None;
        };
        if input.just_pressed(Action::Left) {
            selector.left();
        }
        if input.just_pressed(Action::Right) {
            selector.right();
        }
        if input.just_pressed(Action::Up) {
            selector.up();
        }
        if input.just_pressed(Action::Down) {
            selector.down();
        }

        if input.just_pressed(Action::Confirm) {
            return self.confirm();
        }
        SceneCommand::None
    }

    fn pointer_down(&mut self, position: Vec2, _ctx: &mut SceneContext) -> SceneCommand {
        let Some(selector) = self.selector.as_mut() else {
            return SceneCommand::None;
        };
        if selector.ok_button().contains(position) {
            return self.confirm();
        }
        if let Some(index) = selector
            .buttons()
            .iter()
            .position(|button| button.contains(position))
        {
            selector.select_by_index(index);
        }
        SceneCommand::None
    }

    fn draw(&self, list: &mut DrawList, _camera: &mut Camera) {
        draw_panel(list, self.screen, PANEL_MARGIN, Color::hex(0x333333));

        let Some(selector) = self.selector.as_ref() else {
            return;
        };
        draw_connectors(&self.segments, list);
        for button in selector.buttons() {
            button.draw(list);
        }
        selector.draw(list);

        let description = self.description_position();
        list.text(
            description,
            selector.description(),
            TextStyle::new(18.0, Color::WHITE)
                .origin(0.5, 0.0)
                .wrap(self.area.width),
        );
        list.text(
            description + Vec2::new(0.0, 50.0),
            selector.error_text(),
            TextStyle::new(18.0, Color::hex(0xff0000)).origin(0.5, 0.0),
        );
        selector.ok_button().draw(list);
    }

    fn shutdown(&mut self, ctx: &mut SceneContext) {
        ctx.events.unsubscribe(SceneKey::Editor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::upgrades::Upgrade;
    use crate::scenes::testing::Harness;

    fn editor(harness: &mut Harness, session: Session) -> EditorScene {
        let mut scene = EditorScene::new(session);
        scene.create(&mut harness.ctx());
        scene
    }

    fn step(scene: &mut EditorScene, harness: &mut Harness) -> SceneCommand {
        let command = scene.update(1.0 / 60.0, &mut harness.ctx());
        harness.end_step();
        command
    }

    fn selected(scene: &EditorScene) -> Upgrade {
        scene.selector().unwrap().selected_button().unwrap().upgrade
    }

    #[test]
    fn test_arrow_keys_move_selector() {
        let mut harness = Harness::new();
        let mut scene = editor(&mut harness, Session::new_game());
        assert_eq!(selected(&scene), Upgrade::Graphics);

        harness.tap(Action::Right);
        step(&mut scene, &mut harness);
        assert_eq!(selected(&scene), Upgrade::Music);

        harness.tap(Action::Right);
        step(&mut scene, &mut harness);
        assert_eq!(selected(&scene), Upgrade::Graphics);

        harness.tap(Action::Down);
        step(&mut scene, &mut harness);
        assert_eq!(scene.selector().unwrap().selected_cell().row, 1);
    }

    #[test]
    fn test_confirm_available_switches_to_build() {
        let mut harness = Harness::new();
        let mut scene = editor(&mut harness, Session::new_game());

        harness.tap(Action::Confirm);
        let command = step(&mut scene, &mut harness);
        let SceneCommand::Switch(SceneRequest::Build(session)) = command else {
            panic!("expected a build, got {:?}", command);
        };
        assert!(session.upgrades.is_active(Upgrade::Graphics));
    }

    #[test]
    fn test_confirm_locked_does_nothing() {
        let mut harness = Harness::new();
        let mut scene = editor(&mut harness, Session::new_game());

        // Second row needs a first-row upgrade
        harness.tap(Action::Down);
        step(&mut scene, &mut harness);
        assert_eq!(selected(&scene), Upgrade::MoveLeft);
        assert_eq!(scene.selector().unwrap().error_text(), "(Not yet available)");
        assert!(!scene.selector().unwrap().ok_button().is_selectable());

        harness.tap(Action::Confirm);
        assert_eq!(step(&mut scene, &mut harness), SceneCommand::None);
    }

    #[test]
    fn test_confirm_active_does_nothing() {
        let mut harness = Harness::new();
        let mut session = Session::new_game();
        session.upgrades.activate(Upgrade::Graphics).unwrap();
        let mut scene = editor(&mut harness, session);

        assert_eq!(scene.selector().unwrap().error_text(), "(Already activated)");
        harness.tap(Action::Confirm);
        assert_eq!(step(&mut scene, &mut harness), SceneCommand::None);
    }

    #[test]
    fn test_mobile_buttons_walk_and_confirm() {
        let mut harness = Harness::new();
        let mut session = Session::new_game();
        session.upgrades.activate(Upgrade::Graphics).unwrap();
        let mut scene = editor(&mut harness, session);
        assert!(harness.events.is_subscribed(SceneKey::Editor));

        harness.events.publish(UiEvent::MobileDown(MobileButton::Left));
        harness.events.publish(UiEvent::MobileUp(MobileButton::Left));
        step(&mut scene, &mut harness);
        // Previous from the first button wraps to the last one
        assert_eq!(selected(&scene), Upgrade::DoubleJump);

        harness.events.publish(UiEvent::MobileDown(MobileButton::Right));
        harness.events.publish(UiEvent::MobileDown(MobileButton::Right));
        harness.events.publish(UiEvent::MobileDown(MobileButton::Crouch));
        step(&mut scene, &mut harness);
        assert_eq!(selected(&scene), Upgrade::Music);

        harness.events.publish(UiEvent::MobileDown(MobileButton::Jump));
        let command = step(&mut scene, &mut harness);
        let SceneCommand::Switch(SceneRequest::Build(session)) = command else {
            panic!("expected a build, got {:?}", command);
        };
        assert!(session.upgrades.is_active(Upgrade::Music));
    }

    #[test]
    fn test_pointer_selects_and_ok_confirms() {
        let mut harness = Harness::new();
        let mut scene = editor(&mut harness, Session::new_game());

        let music = scene.selector().unwrap().buttons()[1].center;
        assert_eq!(
            scene.pointer_down(music, &mut harness.ctx()),
            SceneCommand::None
        );
        assert_eq!(selected(&scene), Upgrade::Music);

        let ok = scene.selector().unwrap().ok_button().center;
        assert!(matches!(
            scene.pointer_down(ok, &mut harness.ctx()),
            SceneCommand::Switch(SceneRequest::Build(_))
        ));
    }

    #[test]
    fn test_shutdown_removes_listener() {
        let mut harness = Harness::new();
        let mut scene = editor(&mut harness, Session::new_game());
        scene.shutdown(&mut harness.ctx());
        assert!(!harness.events.is_subscribed(SceneKey::Editor));
    }
}
