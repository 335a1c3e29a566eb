// Static level objects: blocks, checkpoints, the finish flag and the world bounds

use crate::engine::physics::{presets, ColliderHandle, CollisionGroups, PhysicsWorld};
use crate::engine::renderer::{Color, DrawList, Layer};
use crate::game::level::{BlockData, CheckpointData, Point};
use crate::game::palette::Palette;
use crate::game::player::AnimationPlayer;
use glam::Vec2;

/// Size of the finish flag in world units
pub const FINISH_SIZE: Vec2 = Vec2::new(2.0, 3.0);

/// Size of a checkpoint in world units
pub const CHECKPOINT_SIZE: f32 = 1.0;

/// Entity ids stored on trigger colliders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Checkpoint(usize),
    Finish,
}

impl Trigger {
    const FINISH_ID: u64 = 100;

    pub fn id(self) -> u64 {
        match self {
            Trigger::Checkpoint(number) => number as u64,
            Trigger::Finish => Self::FINISH_ID,
        }
    }

    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            Self::FINISH_ID => Some(Trigger::Finish),
            n if n < Self::FINISH_ID => Some(Trigger::Checkpoint(n as usize)),
            _ => None,
        }
    }
}

/// A run of block tiles on a fixed body
#[derive(Debug)]
pub struct Block {
    pub center: Vec2,
    pub size: Vec2,
    /// Built by the platforms upgrade
    pub platform: bool,
}

impl Block {
    pub fn new(physics: &mut PhysicsWorld, data: &BlockData) -> Self {
        let center = data.center();
        let size = data.size();
        let body = physics.add_rigid_body(presets::static_body(center.x, center.y));
        physics.add_collider(presets::block_collider(size.x, size.y), body);

        Self {
            center,
            size,
            platform: data.requires.is_some(),
        }
    }

    /// One square per tile with a darker seam, so single tiles stay visible
    pub fn draw(&self, palette: &Palette, list: &mut DrawList) {
        let color = if self.platform {
            palette.platform
        } else {
            palette.block
        };
        let seam = Color::rgb(color.r * 0.7, color.g * 0.7, color.b * 0.7);

        list.rect(Layer::World, self.center, self.size, seam);
        let min = self.center - self.size / 2.0;
        for row in 0..self.size.y as u32 {
            for col in 0..self.size.x as u32 {
                let tile_center = min + Vec2::new(col as f32 + 0.5, row as f32 + 0.5);
                list.rect(Layer::World, tile_center, Vec2::splat(0.9), color);
            }
        }
    }
}

/// Spinning checkpoint; touching it opens the editor
#[derive(Debug)]
pub struct Checkpoint {
    pub number: usize,
    pub position: Vec2,
    pub collider: ColliderHandle,
    pub animation: AnimationPlayer,
}

impl Checkpoint {
    pub fn new(physics: &mut PhysicsWorld, data: &CheckpointData, unraw: bool) -> Self {
        let position = Vec2::new(data.x, data.y);
        let body = physics.add_rigid_body(presets::static_body(position.x, position.y));
        let collider = physics.add_collider(
            presets::sensor_collider(CHECKPOINT_SIZE, CHECKPOINT_SIZE, CollisionGroups::Checkpoint),
            body,
        );
        physics.set_entity_mapping(collider, Trigger::Checkpoint(data.number).id());

        Self {
            number: data.number,
            position,
            collider,
            animation: AnimationPlayer::with_checkpoint_animations(unraw),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    /// Where the player respawns after reaching this checkpoint
    pub fn respawn_point(&self) -> Vec2 {
        self.position + Vec2::new(0.0, 0.5)
    }

    pub fn draw(&self, palette: &Palette, list: &mut DrawList) {
        // Rotation around the vertical axis shows as a shrinking width
        let angle = self.animation.cycle_position() * std::f32::consts::PI;
        let width = (CHECKPOINT_SIZE * angle.cos().abs()).max(0.1);
        list.rect(
            Layer::World,
            self.position,
            Vec2::new(width, CHECKPOINT_SIZE),
            palette.checkpoint,
        );
    }
}

/// Goal of the level
#[derive(Debug)]
pub struct FinishFlag {
    /// Bottom-left corner
    pub min: Vec2,
    pub collider: ColliderHandle,
}

impl FinishFlag {
    pub fn new(physics: &mut PhysicsWorld, position: Point) -> Self {
        let min = position.to_vec2();
        let (center, size) = Self::sensor_area(min);
        let body = physics.add_rigid_body(presets::static_body(center.x, center.y));
        let collider = physics.add_collider(
            presets::sensor_collider(size.x, size.y, CollisionGroups::Finish),
            body,
        );
        physics.set_entity_mapping(collider, Trigger::Finish.id());

        Self { min, collider }
    }

    /// The trigger only covers the left eighth of the flag, around the pole
    pub fn sensor_area(min: Vec2) -> (Vec2, Vec2) {
        let size = Vec2::new(FINISH_SIZE.x / 8.0, FINISH_SIZE.y);
        (min + size / 2.0, size)
    }

    pub fn draw(&self, palette: &Palette, list: &mut DrawList) {
        let pole = Vec2::new(FINISH_SIZE.x / 8.0, FINISH_SIZE.y);
        list.rect_min(Layer::World, self.min, pole, palette.finish_pole);

        let cloth = Vec2::new(FINISH_SIZE.x - pole.x, FINISH_SIZE.y / 2.0);
        let cloth_min = Vec2::new(self.min.x + pole.x, self.min.y + FINISH_SIZE.y / 2.0);
        list.rect_min(Layer::World, cloth_min, cloth, palette.finish);
    }
}

/// Walls left, right and above the level; the bottom stays open
pub fn build_bounds(physics: &mut PhysicsWorld, level_size: Vec2) {
    const THICKNESS: f32 = 1.0;
    let walls = [
        (
            Vec2::new(-THICKNESS / 2.0, level_size.y / 2.0),
            Vec2::new(THICKNESS, level_size.y * 2.0),
        ),
        (
            Vec2::new(level_size.x + THICKNESS / 2.0, level_size.y / 2.0),
            Vec2::new(THICKNESS, level_size.y * 2.0),
        ),
        (
            Vec2::new(level_size.x / 2.0, level_size.y + THICKNESS / 2.0),
            Vec2::new(level_size.x + 2.0 * THICKNESS, THICKNESS),
        ),
    ];

    for (center, size) in walls {
        let body = physics.add_rigid_body(presets::static_body(center.x, center.y));
        physics.add_collider(presets::bounds_collider(size.x, size.y), body);
    }
}
