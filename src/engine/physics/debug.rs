use super::world::DebugData;
use crate::engine::renderer::{Color, DrawList, Layer};
use glam::Vec2;
use rapier2d::prelude::*;

/// Line width of the outlines in world units
const LINE_WIDTH: f32 = 0.05;

/// Debug overlay for physics objects
///
/// Adds collider outlines to the world layer of the draw list.
#[derive(Debug, Default)]
pub struct DebugRenderer {
    enabled: bool,
}

impl DebugRenderer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enable or disable debug rendering
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Outline every collider
    pub fn draw(&self, data: DebugData<'_>, list: &mut DrawList) {
        if !self.enabled {
            return;
        }

        for (_handle, collider) in data.colliders.iter() {
            let parent_body = collider.parent().and_then(|h| data.rigid_bodies.get(h));

            let color = if collider.is_sensor() {
                Color::rgb(1.0, 1.0, 0.0) // Yellow for triggers
            } else if let Some(body) = parent_body {
                match body.body_type() {
                    RigidBodyType::Dynamic => Color::rgb(0.0, 1.0, 0.0), // Green for dynamic
                    _ => Color::rgb(0.5, 0.5, 0.5),                      // Gray for static
                }
            } else {
                Color::WHITE
            };

            self.draw_collider_shape(collider, color.with_alpha(0.8), list);
        }
    }

    fn draw_collider_shape(&self, collider: &Collider, color: Color, list: &mut DrawList) {
        let transform = collider.position();
        match collider.shape().as_cuboid() {
            Some(cuboid) => self.draw_box(transform, cuboid.half_extents, color, list),
            // Only boxes are used in the level, anything else gets a cross
            None => self.draw_cross(transform, 0.5, color, list),
        }
    }

    fn draw_box(
        &self,
        transform: &Isometry<Real>,
        half_extents: Vector<Real>,
        color: Color,
        list: &mut DrawList,
    ) {
        let corners = [
            [-half_extents.x, -half_extents.y],
            [half_extents.x, -half_extents.y],
            [half_extents.x, half_extents.y],
            [-half_extents.x, half_extents.y],
        ]
        .map(|c| to_vec2(transform * point![c[0], c[1]]));

        for i in 0..4 {
            list.line(Layer::World, corners[i], corners[(i + 1) % 4], LINE_WIDTH, color);
        }
    }

    fn draw_cross(&self, transform: &Isometry<Real>, size: Real, color: Color, list: &mut DrawList) {
        let points = [
            point![-size, 0.0],
            point![size, 0.0],
            point![0.0, -size],
            point![0.0, size],
        ]
        .map(|p| to_vec2(transform * p));

        list.line(Layer::World, points[0], points[1], LINE_WIDTH, color);
        list.line(Layer::World, points[2], points[3], LINE_WIDTH, color);
    }
}

fn to_vec2(point: Point<Real>) -> Vec2 {
    Vec2::new(point.x, point.y)
}
