// The player body and its movement rules

use crate::engine::physics::{
    presets, ColliderHandle, CollisionGroups, PhysicsWorld, QueryFilter, RigidBodyHandle,
    Vector,
};
use crate::engine::renderer::{DrawList, Layer};
use crate::game::palette::Palette;
use glam::Vec2;

use super::animation::AnimationPlayer;
use super::state::{PlayerState, PlayerStateMachine, StepInput};
use super::stats::{Abilities, PlayerStats};

/// Rays start this far above the feet
const RAY_INSET: f32 = 0.05;

/// How far below the feet still counts as standing
const GROUND_RAY: f32 = 0.1;

/// What the player is asked to do this step
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    /// -1.0 (left) to 1.0 (right)
    pub horizontal: f32,
    /// A jump was requested
    pub jump: bool,
    /// Crouch is held
    pub crouch: bool,
}

#[derive(Debug)]
pub struct Player {
    // Physics
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,

    pub stats: PlayerStats,
    pub abilities: Abilities,
    pub state_machine: PlayerStateMachine,
    pub animation: AnimationPlayer,

    /// Jumps left before landing again
    pub jumps_remaining: u8,
    /// Direction the player is facing (1 = right, -1 = left)
    pub facing_direction: f32,

    crouched: bool,
    was_grounded: bool,
}

impl Player {
    /// Create the player and add it to the physics world
    pub fn new(
        physics: &mut PhysicsWorld,
        spawn: Vec2,
        stats: PlayerStats,
        abilities: Abilities,
        unraw: bool,
    ) -> Self {
        let body_handle = physics.add_rigid_body(presets::player_body(spawn.x, spawn.y));
        let collider_handle = physics.add_collider(
            presets::player_collider(stats.width, stats.height, 0.0),
            body_handle,
        );

        Self {
            body_handle,
            collider_handle,
            jumps_remaining: abilities.max_jumps,
            stats,
            abilities,
            state_machine: PlayerStateMachine::new(),
            animation: AnimationPlayer::with_player_animations(unraw),
            facing_direction: 1.0,
            crouched: false,
            was_grounded: false,
        }
    }

    /// Apply one step of input, call before stepping the physics world
    pub fn update(&mut self, physics: &mut PhysicsWorld, input: PlayerInput, dt: f32) {
        let grounded = self.is_grounded(physics);

        // Leaving the ground without jumping costs the ground jump
        if self.was_grounded && !grounded && self.jumps_remaining == self.abilities.max_jumps {
            self.jumps_remaining = self.abilities.max_jumps.saturating_sub(1);
        }
        if grounded {
            self.jumps_remaining = self.abilities.max_jumps;
        }
        self.was_grounded = grounded;

        self.update_crouch(physics, input.crouch && self.abilities.can_crouch, grounded);

        let horizontal = self.allowed_horizontal(input.horizontal);
        let Some(body) = physics.get_rigid_body_mut(self.body_handle) else {
            return;
        };

        // No input stops horizontal movement
        let mut velocity = *body.linvel();
        velocity.x = horizontal * self.stats.move_speed;
        body.set_linvel(velocity, true);

        if horizontal > 0.0 {
            self.facing_direction = 1.0;
        } else if horizontal < 0.0 {
            self.facing_direction = -1.0;
        }

        if input.jump {
            self.try_jump(physics);
        }

        let velocity_y = self.velocity(physics).y;
        self.state_machine.update(
            dt,
            StepInput {
                grounded,
                velocity_y,
                moving: horizontal != 0.0,
                crouching: self.crouched,
            },
        );

        if self.state_machine.just_landed() {
            log::debug!("Player landed after {:?}", self.state_machine.previous_state());
        }

        self.animation.play(self.state_machine.state().animation_name());
        self.animation.set_flip_horizontal(self.facing_direction < 0.0);
        self.animation.update(dt);
    }

    /// Horizontal input with the locked direction removed
    fn allowed_horizontal(&self, horizontal: f32) -> f32 {
        if horizontal < 0.0 && !self.abilities.can_move_left {
            0.0
        } else {
            horizontal.clamp(-1.0, 1.0)
        }
    }

    /// Check whether a jump would be performed right now
    pub fn can_jump(&self) -> bool {
        self.abilities.can_jump
            && self.jumps_remaining > 0
            && self.state_machine.state().can_jump()
            && !self.crouched
    }

    /// Jump if the upgrades and remaining jumps allow it
    pub fn try_jump(&mut self, physics: &mut PhysicsWorld) -> bool {
        if !self.can_jump() {
            return false;
        }

        let Some(body) = physics.get_rigid_body_mut(self.body_handle) else {
            return false;
        };

        let mut velocity = *body.linvel();
        velocity.y = self.stats.jump_speed;
        body.set_linvel(velocity, true);

        self.jumps_remaining -= 1;
        self.was_grounded = false;
        self.state_machine.jump();
        true
    }

    /// Crouch when asked and on the ground, stand up when asked and there is room
    fn update_crouch(&mut self, physics: &mut PhysicsWorld, wants_crouch: bool, grounded: bool) {
        if wants_crouch && grounded && !self.crouched {
            self.set_collider_height(physics, self.stats.crouch_height);
            self.crouched = true;
        } else if !wants_crouch && self.crouched && !self.is_ceiling_blocked(physics) {
            self.set_collider_height(physics, self.stats.height);
            self.crouched = false;
        }
    }

    fn set_collider_height(&mut self, physics: &mut PhysicsWorld, height: f32) {
        physics.remove_collider(self.collider_handle);
        let collider = presets::player_collider(
            self.stats.width,
            height,
            self.stats.collider_offset(height),
        );
        self.collider_handle = physics.add_collider(collider, self.body_handle);
    }

    /// Current collider height
    pub fn current_height(&self) -> f32 {
        if self.crouched {
            self.stats.crouch_height
        } else {
            self.stats.height
        }
    }

    pub fn is_crouched(&self) -> bool {
        self.crouched
    }

    fn ray_filter(&self) -> QueryFilter<'static> {
        QueryFilter::default()
            .exclude_rigid_body(self.body_handle)
            .exclude_sensors()
            .groups(CollisionGroups::solid_filter())
    }

    /// Three rays (both edges and the middle) starting at the given height
    fn cast_rays(&self, physics: &PhysicsWorld, y: f32, direction: Vector<f32>, distance: f32) -> bool {
        let x = self.position(physics).x;
        let half = self.stats.width / 2.0 - RAY_INSET;
        [x - half, x, x + half].into_iter().any(|ray_x| {
            physics
                .raycast(Vector::new(ray_x, y), direction, distance, true, self.ray_filter())
                .is_some()
        })
    }

    /// Check if the player stands on something solid
    pub fn is_grounded(&self, physics: &PhysicsWorld) -> bool {
        // Moving up means a jump just started
        if self.velocity(physics).y > 0.1 {
            return false;
        }
        let feet = self.position(physics).y - self.stats.height / 2.0;
        self.cast_rays(
            physics,
            feet + RAY_INSET,
            Vector::new(0.0, -1.0),
            RAY_INSET + GROUND_RAY,
        )
    }

    /// Check if something above the crouched player prevents standing up
    pub fn is_ceiling_blocked(&self, physics: &PhysicsWorld) -> bool {
        let feet = self.position(physics).y - self.stats.height / 2.0;
        let top = feet + self.stats.crouch_height;
        self.cast_rays(
            physics,
            top - RAY_INSET,
            Vector::new(0.0, 1.0),
            self.stats.height - self.stats.crouch_height + RAY_INSET,
        )
    }

    /// Body position in world units
    pub fn position(&self, physics: &PhysicsWorld) -> Vec2 {
        physics
            .get_rigid_body(self.body_handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or_default()
    }

    pub fn velocity(&self, physics: &PhysicsWorld) -> Vec2 {
        physics
            .get_rigid_body(self.body_handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or_default()
    }

    /// Check if the player fell out of the world
    pub fn is_out_of_world(&self, physics: &PhysicsWorld) -> bool {
        self.position(physics).y < self.stats.kill_height
    }

    /// Teleport to a spawn point and stop
    pub fn respawn(&mut self, physics: &mut PhysicsWorld, point: Vec2) {
        if let Some(body) = physics.get_rigid_body_mut(self.body_handle) {
            body.set_translation(Vector::new(point.x, point.y), true);
            body.set_linvel(Vector::new(0.0, 0.0), true);
        }
        self.jumps_remaining = self.abilities.max_jumps;
        self.was_grounded = false;
        self.state_machine.respawn();
        log::debug!("Player respawned at ({:.1}, {:.1})", point.x, point.y);
    }

    pub fn state(&self) -> PlayerState {
        self.state_machine.state()
    }

    /// Body rectangle plus an eye on the facing side
    pub fn draw(&self, physics: &PhysicsWorld, palette: &Palette, list: &mut DrawList) {
        let position = self.position(physics);
        let height = self.current_height();

        // Walking bobs the body by a few pixels
        let bob = match self.state() {
            PlayerState::Walking | PlayerState::CrouchWalking => {
                (self.animation.cycle_position() * std::f32::consts::TAU).sin() * 0.04
            }
            _ => 0.0,
        };
        let feet = position.y - self.stats.height / 2.0;
        let center = Vec2::new(position.x, feet + height / 2.0 + bob);
        list.rect(
            Layer::World,
            center,
            Vec2::new(self.stats.width, height),
            palette.player,
        );

        let side = if self.animation.is_flipped_horizontal() { -1.0 } else { 1.0 };
        let eye = Vec2::new(
            center.x + side * self.stats.width * 0.25,
            center.y + height * 0.25,
        );
        list.rect(Layer::World, eye, Vec2::splat(0.12), palette.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::palette::palette;
    use crate::game::upgrades::{Upgrade, UpgradeSet};

    const DT: f32 = 1.0 / 60.0;

    fn world_with_ground() -> PhysicsWorld {
        let mut physics = PhysicsWorld::new();
        let ground = physics.add_rigid_body(presets::static_body(10.0, -0.5));
        physics.add_collider(presets::block_collider(40.0, 1.0), ground);
        physics
    }

    fn abilities(upgrades: &[Upgrade]) -> Abilities {
        let mut set = UpgradeSet::new();
        for upgrade in upgrades {
            set.activate(*upgrade).unwrap();
        }
        Abilities::from_upgrades(&set)
    }

    fn run(player: &mut Player, physics: &mut PhysicsWorld, input: PlayerInput, steps: usize) {
        for _ in 0..steps {
            player.update(physics, input, DT);
            physics.step();
        }
    }

    fn spawn(physics: &mut PhysicsWorld, abilities: Abilities) -> Player {
        let mut player = Player::new(
            physics,
            Vec2::new(0.0, 1.0),
            PlayerStats::default(),
            abilities,
            false,
        );
        run(&mut player, physics, PlayerInput::default(), 30);
        player
    }

    #[test]
    fn test_lands_and_idles() {
        let mut physics = world_with_ground();
        let player = spawn(&mut physics, abilities(&[]));

        assert!(player.is_grounded(&physics));
        assert_eq!(player.state(), PlayerState::Idle);
        assert!((player.position(&physics).y - 0.75).abs() < 0.05);
    }

    #[test]
    fn test_moves_right_without_upgrades() {
        let mut physics = world_with_ground();
        let mut player = spawn(&mut physics, abilities(&[]));

        let input = PlayerInput {
            horizontal: 1.0,
            ..Default::default()
        };
        run(&mut player, &mut physics, input, 60);
        assert!(player.position(&physics).x > 4.0);
        assert_eq!(player.state(), PlayerState::Walking);

        // Releasing stops horizontal movement
        run(&mut player, &mut physics, PlayerInput::default(), 2);
        assert!(player.velocity(&physics).x.abs() < 1e-3);
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_left_needs_upgrade() {
        let mut physics = world_with_ground();
        let mut player = spawn(&mut physics, abilities(&[]));
        let left = PlayerInput {
            horizontal: -1.0,
            ..Default::default()
        };

        run(&mut player, &mut physics, left, 30);
        assert!(player.position(&physics).x.abs() < 0.01);

        player.abilities = abilities(&[Upgrade::Graphics, Upgrade::MoveLeft]);
        run(&mut player, &mut physics, left, 30);
        assert!(player.position(&physics).x < -2.0);
        assert_eq!(player.facing_direction, -1.0);
    }

    #[test]
    fn test_jump_needs_upgrade() {
        let mut physics = world_with_ground();
        let mut player = spawn(&mut physics, abilities(&[]));
        let jump = PlayerInput {
            jump: true,
            ..Default::default()
        };

        run(&mut player, &mut physics, jump, 1);
        assert_eq!(player.velocity(&physics).y.max(0.0), 0.0);

        player.abilities = abilities(&[Upgrade::Graphics, Upgrade::Jump]);
        run(&mut player, &mut physics, jump, 1);
        run(&mut player, &mut physics, PlayerInput::default(), 10);
        assert!(player.position(&physics).y > 1.5);
        assert_eq!(player.state(), PlayerState::Jumping);
    }

    #[test]
    fn test_single_jump_has_no_air_jump() {
        let mut physics = world_with_ground();
        let mut player = spawn(&mut physics, abilities(&[Upgrade::Graphics, Upgrade::Jump]));

        assert!(player.try_jump(&mut physics));
        run(&mut player, &mut physics, PlayerInput::default(), 5);
        assert_eq!(player.jumps_remaining, 0);
        assert!(!player.try_jump(&mut physics));
    }

    #[test]
    fn test_double_jump_in_air() {
        let mut physics = world_with_ground();
        let mut player = spawn(
            &mut physics,
            abilities(&[Upgrade::Graphics, Upgrade::Jump, Upgrade::DoubleJump]),
        );

        assert!(player.try_jump(&mut physics));
        run(&mut player, &mut physics, PlayerInput::default(), 20);
        assert!(player.try_jump(&mut physics));
        assert!(!player.try_jump(&mut physics));

        // Landing restores both jumps
        run(&mut player, &mut physics, PlayerInput::default(), 120);
        assert!(player.is_grounded(&physics));
        assert_eq!(player.jumps_remaining, 2);
    }

    #[test]
    fn test_crouch_needs_ground_and_upgrade() {
        let mut physics = world_with_ground();
        let mut player = spawn(&mut physics, abilities(&[]));
        let crouch = PlayerInput {
            crouch: true,
            ..Default::default()
        };

        run(&mut player, &mut physics, crouch, 2);
        assert!(!player.is_crouched());

        player.abilities = abilities(&[Upgrade::Music, Upgrade::Small]);
        run(&mut player, &mut physics, crouch, 2);
        assert!(player.is_crouched());
        assert_eq!(player.current_height(), 0.75);
        assert_eq!(player.state(), PlayerState::Crouching);

        run(&mut player, &mut physics, PlayerInput::default(), 2);
        assert!(!player.is_crouched());
    }

    #[test]
    fn test_stays_crouched_under_ceiling() {
        let mut physics = world_with_ground();
        // Tunnel one unit high from x = 1.5 to x = 8.5
        let ceiling = physics.add_rigid_body(presets::static_body(5.0, 1.5));
        physics.add_collider(presets::block_collider(7.0, 1.0), ceiling);

        let mut player = spawn(&mut physics, abilities(&[Upgrade::Music, Upgrade::Small]));
        let crouch_walk = PlayerInput {
            horizontal: 1.0,
            crouch: true,
            ..Default::default()
        };
        run(&mut player, &mut physics, crouch_walk, 40);
        let x = player.position(&physics).x;
        assert!(x > 2.5 && x < 8.0, "player should be inside the tunnel, x = {x}");
        assert_eq!(player.state(), PlayerState::CrouchWalking);

        run(&mut player, &mut physics, PlayerInput::default(), 5);
        assert!(player.is_ceiling_blocked(&physics));
        assert!(player.is_crouched());

        // Walk out of the tunnel and stand up
        let walk = PlayerInput {
            horizontal: 1.0,
            ..Default::default()
        };
        run(&mut player, &mut physics, walk, 60);
        assert!(player.position(&physics).x > 9.0);
        assert!(!player.is_crouched());
    }

    #[test]
    fn test_fall_out_and_respawn() {
        let mut physics = PhysicsWorld::new();
        let mut player = Player::new(
            &mut physics,
            Vec2::new(0.0, 0.0),
            PlayerStats::default(),
            abilities(&[]),
            true,
        );
        run(&mut player, &mut physics, PlayerInput::default(), 30);
        assert!(player.is_out_of_world(&physics));
        assert_eq!(player.state(), PlayerState::Falling);

        player.respawn(&mut physics, Vec2::new(3.0, 5.0));
        assert_eq!(player.position(&physics), Vec2::new(3.0, 5.0));
        assert_eq!(player.velocity(&physics), Vec2::ZERO);
        assert!(!player.is_out_of_world(&physics));
    }

    #[test]
    fn test_draw_body_and_eye() {
        let mut physics = world_with_ground();
        let player = spawn(&mut physics, abilities(&[]));

        let mut list = DrawList::new();
        player.draw(&physics, palette(false), &mut list);
        assert_eq!(list.quads(Layer::World).len(), 2);
    }
}
