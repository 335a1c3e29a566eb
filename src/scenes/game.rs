// The level itself
//
// The physics world is rebuilt from the level data and the session every
// time this scene starts, so each build only contains what its upgrades
// allow.

use super::SceneRequest;
use crate::engine::audio::Sound;
use crate::engine::events::UiEvent;
use crate::engine::input::Action;
use crate::engine::physics::{DebugRenderer, PhysicsWorld};
use crate::engine::renderer::{Camera, DrawList, Layer};
use crate::engine::scene::{Scene, SceneCommand, SceneContext, SceneKey};
use crate::game::entities::{build_bounds, Block, Checkpoint, FinishFlag, Trigger};
use crate::game::level::LevelData;
use crate::game::palette::{palette, Palette};
use crate::game::player::{Abilities, Player, PlayerInput, BASE_STATS};
use crate::game::session::Session;
use crate::game::upgrades::Upgrade;
use glam::Vec2;
use log::{debug, error, info};

/// Physics objects of one run
pub struct LevelWorld {
    pub physics: PhysicsWorld,
    pub player: Player,
    pub blocks: Vec<Block>,
    pub checkpoints: Vec<Checkpoint>,
    pub finish: FinishFlag,
    pub size: Vec2,
}

impl LevelWorld {
    pub fn build(level: &LevelData, session: &Session) -> Self {
        let upgrades = &session.upgrades;
        let unraw = upgrades.is_active(Upgrade::Graphics);
        let mut physics = PhysicsWorld::new();

        let blocks = level
            .blocks
            .iter()
            .filter(|data| data.requires.map_or(true, |u| upgrades.is_active(u)))
            .map(|data| Block::new(&mut physics, data))
            .collect();

        let checkpoints = level
            .checkpoints
            .iter()
            .filter(|data| session.is_checkpoint_active(data.number))
            .map(|data| Checkpoint::new(&mut physics, data, unraw))
            .collect();

        let finish = FinishFlag::new(&mut physics, level.finish);
        build_bounds(&mut physics, level.size());

        let spawn = session.spawn_point(level.start.to_vec2());
        let player = Player::new(
            &mut physics,
            spawn,
            BASE_STATS,
            Abilities::from_upgrades(upgrades),
            unraw,
        );

        Self {
            physics,
            player,
            blocks,
            checkpoints,
            finish,
            size: level.size(),
        }
    }

    /// Move the player, step the physics and report the triggers entered
    pub fn step(&mut self, input: PlayerInput, dt: f32) -> Vec<Trigger> {
        self.player.update(&mut self.physics, input, dt);
        self.physics.step();

        for checkpoint in &mut self.checkpoints {
            checkpoint.update(dt);
        }

        let player_collider = self.player.collider_handle;
        self.physics
            .get_collision_events()
            .iter()
            .filter(|event| event.is_started())
            .filter_map(|event| event.other(player_collider))
            .filter_map(|collider| self.physics.get_entity_id(collider))
            .filter_map(Trigger::from_id)
            .collect()
    }

    fn checkpoint(&self, number: usize) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|c| c.number == number)
    }

    fn draw(&self, palette: &Palette, list: &mut DrawList) {
        for block in &self.blocks {
            block.draw(palette, list);
        }
        for checkpoint in &self.checkpoints {
            checkpoint.draw(palette, list);
        }
        self.finish.draw(palette, list);
        self.player.draw(&self.physics, palette, list);
    }
}

pub struct GameScene {
    session: Session,
    world: Option<LevelWorld>,
    level_start: Vec2,
    palette: &'static Palette,
    debug: DebugRenderer,
}

impl GameScene {
    pub fn new(session: Session) -> Self {
        let unraw = session.upgrades.is_active(Upgrade::Graphics);
        Self {
            session,
            world: None,
            level_start: Vec2::ZERO,
            palette: palette(unraw),
            debug: DebugRenderer::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn world(&self) -> Option<&LevelWorld> {
        self.world.as_ref()
    }

    /// Feed the on-screen buttons into the same actions as the keyboard
    fn forward_mobile_events(ctx: &mut SceneContext) {
        for event in ctx.events.drain(SceneKey::Game) {
            match event {
                UiEvent::MobileDown(button) => ctx.input.process_mobile(button, true),
                UiEvent::MobileUp(button) => ctx.input.process_mobile(button, false),
            }
        }
    }

    fn handle_trigger(&mut self, trigger: Trigger, ctx: &mut SceneContext) -> SceneCommand {
        match trigger {
            Trigger::Checkpoint(number) => {
                let Some(point) = self
                    .world
                    .as_ref()
                    .and_then(|world| world.checkpoint(number))
                    .map(Checkpoint::respawn_point)
                else {
                    return SceneCommand::None;
                };
                if !self.session.reach_checkpoint(number, point) {
                    return SceneCommand::None;
                }
                info!(
                    "Checkpoint {} reached, {} left",
                    number,
                    self.session.remaining_checkpoints()
                );
                ctx.audio.play(Sound::Checkpoint);
                SceneCommand::Overlay(SceneRequest::Editor(self.session.clone()))
            }
            Trigger::Finish => {
                info!("Finish reached");
                SceneCommand::Overlay(SceneRequest::Finish)
            }
        }
    }
}

impl Scene for GameScene {
    fn key(&self) -> SceneKey {
        SceneKey::Game
    }

    fn create(&mut self, ctx: &mut SceneContext) {
        ctx.events.subscribe(SceneKey::Game);
        self.debug.set_enabled(ctx.config.debug_physics);

        match ctx.assets.level() {
            Some(level) => {
                self.level_start = level.start.to_vec2();
                self.world = Some(LevelWorld::build(level, &self.session));
            }
            None => error!("No level loaded"),
        }

        if self.session.upgrades.is_active(Upgrade::Music) {
            ctx.audio.play(Sound::Music);
        }
    }

    fn update(&mut self, dt: f32, ctx: &mut SceneContext) -> SceneCommand {
        Self::forward_mobile_events(ctx);

        if ctx.input.state().just_pressed(Action::Back) {
            info!("Leaving the level");
            return SceneCommand::Switch(SceneRequest::Home);
        }

        let Some(world) = self.world.as_mut() else {
            return SceneCommand::Switch(SceneRequest::Loading);
        };

        let state = ctx.input.state_mut();
        let input = PlayerInput {
            horizontal: state.horizontal(),
            // A press shortly before landing still jumps
            jump: world.player.can_jump() && state.consume_buffered(Action::Up),
            crouch: state.is_pressed(Action::Down),
        };

        let triggers = world.step(input, dt);

        if world.player.is_out_of_world(&world.physics) {
            let point = self.session.spawn_point(self.level_start);
            debug!("Fell out of the world");
            world.player.respawn(&mut world.physics, point);
        }

        for trigger in triggers {
            let command = self.handle_trigger(trigger, ctx);
            if command != SceneCommand::None {
                return command;
            }
        }
        SceneCommand::None
    }

    fn draw(&self, list: &mut DrawList, camera: &mut Camera) {
        let Some(world) = self.world.as_ref() else {
            return;
        };

        let target = world.player.position(&world.physics);
        camera.follow(target, Vec2::ZERO, world.size);

        let view = camera.viewport_bounds();
        list.rect_min(
            Layer::World,
            view.min,
            view.max - view.min,
            self.palette.background,
        );
        world.draw(self.palette, list);
        self.debug.draw(world.physics.debug_data(), list);
    }

    fn shutdown(&mut self, ctx: &mut SceneContext) {
        ctx.events.unsubscribe(SceneKey::Game);
        ctx.audio.stop(Sound::Music);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::MobileButton;
    use crate::scenes::testing::Harness;

    const DT: f32 = 1.0 / 60.0;

    fn level() -> LevelData {
        LevelData::builtin().unwrap()
    }

    fn run(scene: &mut GameScene, harness: &mut Harness, steps: usize) -> SceneCommand {
        for _ in 0..steps {
            let command = scene.update(DT, &mut harness.ctx());
            harness.end_step();
            if command != SceneCommand::None {
                return command;
            }
        }
        SceneCommand::None
    }

    #[test]
    fn test_platforms_need_upgrade() {
        let level = level();
        let platforms = level.blocks.iter().filter(|b| b.requires.is_some()).count();
        assert!(platforms > 0);

        let session = Session::new_game();
        let world = LevelWorld::build(&level, &session);
        assert_eq!(world.blocks.len(), level.blocks.len() - platforms);

        let mut upgraded = Session::new_game();
        upgraded.upgrades.activate(Upgrade::Graphics).unwrap();
        upgraded.upgrades.activate(Upgrade::Platforms).unwrap();
        let world = LevelWorld::build(&level, &upgraded);
        assert_eq!(world.blocks.len(), level.blocks.len());
    }

    #[test]
    fn test_used_checkpoints_are_left_out() {
        let level = level();
        let mut session = Session::new_game();
        session.reach_checkpoint(0, Vec2::new(8.0, 2.0));

        let world = LevelWorld::build(&level, &session);
        assert_eq!(world.checkpoints.len(), level.checkpoints.len() - 1);
        assert!(world.checkpoints.iter().all(|c| c.number != 0));
        // Player starts at the respawn point
        assert_eq!(world.player.position(&world.physics), Vec2::new(8.0, 2.0));
    }

    #[test]
    fn test_walking_into_checkpoint_opens_editor() {
        let mut harness = Harness::new();
        let mut scene = GameScene::new(Session::new_game());
        scene.create(&mut harness.ctx());
        assert!(harness.events.is_subscribed(SceneKey::Game));

        harness.input.state_mut().press(Action::Right);
        let command = run(&mut scene, &mut harness, 180);

        let SceneCommand::Overlay(SceneRequest::Editor(session)) = command else {
            panic!("expected the editor, got {:?}", command);
        };
        assert!(!session.is_checkpoint_active(0));
        assert_eq!(session.respawn, Some(Vec2::new(8.0, 2.0)));
        assert!(harness.audio.is_playing(Sound::Checkpoint));
    }

    #[test]
    fn test_mobile_button_moves_player() {
        let mut harness = Harness::new();
        let mut scene = GameScene::new(Session::new_game());
        scene.create(&mut harness.ctx());
        run(&mut scene, &mut harness, 30);
        let start = scene.world().unwrap().player.position(&scene.world().unwrap().physics);

        harness
            .events
            .publish(UiEvent::MobileDown(MobileButton::Right));
        run(&mut scene, &mut harness, 20);
        let world = scene.world().unwrap();
        assert!(world.player.position(&world.physics).x > start.x + 1.0);

        harness.events.publish(UiEvent::MobileUp(MobileButton::Right));
        run(&mut scene, &mut harness, 1);
        assert!(!harness.input.state().is_pressed(Action::Right));
    }

    #[test]
    fn test_falling_out_respawns() {
        let mut harness = Harness::new();
        let mut scene = GameScene::new(Session::new_game());
        scene.create(&mut harness.ctx());

        let world = scene.world.as_mut().unwrap();
        world
            .player
            .respawn(&mut world.physics, Vec2::new(2.0, -5.0));
        run(&mut scene, &mut harness, 1);

        let world = scene.world().unwrap();
        let position = world.player.position(&world.physics);
        assert!((position.x - 2.0).abs() < 0.1);
        assert!(position.y > 1.0);
    }

    #[test]
    fn test_music_and_listener_lifecycle() {
        let mut harness = Harness::new();
        let mut session = Session::new_game();
        session.upgrades.activate(Upgrade::Music).unwrap();
        let mut scene = GameScene::new(session);

        scene.create(&mut harness.ctx());
        assert!(harness.audio.is_playing(Sound::Music));

        scene.shutdown(&mut harness.ctx());
        assert!(!harness.audio.is_playing(Sound::Music));
        assert!(!harness.events.is_subscribed(SceneKey::Game));
    }

    #[test]
    fn test_back_leaves_level() {
        let mut harness = Harness::new();
        let mut session = Session::new_game();
        session.upgrades.activate(Upgrade::Music).unwrap();
        session.reach_checkpoint(2, Vec2::new(26.0, 3.0));
        let mut scene = GameScene::new(session);
        scene.create(&mut harness.ctx());

        harness.input.state_mut().press(Action::Right);
        assert_eq!(run(&mut scene, &mut harness, 30), SceneCommand::None);

        harness.tap(Action::Back);
        assert_eq!(
            scene.update(DT, &mut harness.ctx()),
            SceneCommand::Switch(SceneRequest::Home)
        );
    }

    #[test]
    fn test_no_music_without_upgrade() {
        let mut harness = Harness::new();
        let mut scene = GameScene::new(Session::new_game());
        scene.create(&mut harness.ctx());
        assert!(!harness.audio.is_playing(Sound::Music));
    }

    #[test]
    fn test_camera_stays_inside_level() {
        let mut harness = Harness::new();
        let mut scene = GameScene::new(Session::new_game());
        scene.create(&mut harness.ctx());

        let mut list = DrawList::new();
        let mut camera = Camera::new(Vec2::ZERO, 25.0, 18.75);
        scene.draw(&mut list, &mut camera);

        let view = camera.viewport_bounds();
        assert!(view.min.x >= -1e-4);
        assert!((camera.position.x - 12.5).abs() < 1e-4);
        assert!(!list.quads(Layer::World).is_empty());
    }
}
