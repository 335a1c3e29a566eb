// Camera for the world layer plus the fixed screen projection

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// 2D camera looking at the world (world units, y-up)
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera center in world space
    pub position: Vec2,
    /// Visible area width in world units
    viewport_width: f32,
    /// Visible area height in world units
    viewport_height: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn half_extents(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height) / 2.0
    }

    /// Update the view-projection matrix
    fn update_view_proj(&mut self) {
        let half = self.half_extents();
        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half.x,
            self.position.x + half.x,
            self.position.y - half.y,
            self.position.y + half.y,
            -100.0,
            100.0,
        );
    }

    /// Set camera position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_view_proj();
    }

    /// Center on `target` while keeping the view inside `bounds_min..bounds_max`
    ///
    /// On an axis where the bounds are smaller than the view, the view is
    /// centered on the bounds instead.
    pub fn follow(&mut self, target: Vec2, bounds_min: Vec2, bounds_max: Vec2) {
        let half = self.half_extents();
        let axis = |t: f32, lo: f32, hi: f32, h: f32| {
            if hi - lo <= 2.0 * h {
                (lo + hi) / 2.0
            } else {
                t.clamp(lo + h, hi - h)
            }
        };
        self.set_position(Vec2::new(
            axis(target.x, bounds_min.x, bounds_max.x, half.x),
            axis(target.y, bounds_min.y, bounds_max.y, half.y),
        ));
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Get the viewport bounds in world coordinates
    pub fn viewport_bounds(&self) -> Viewport {
        let half = self.half_extents();
        Viewport {
            min: self.position - half,
            max: self.position + half,
        }
    }
}

/// Projection for the screen layer: logical pixels with the origin top-left
pub fn screen_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, height, 0.0, -100.0, 100.0)
}

/// Viewport bounds in world coordinates
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Viewport {
    /// Check if a rectangle intersects the viewport
    pub fn intersects_rect(&self, center: Vec2, half_size: Vec2) -> bool {
        let rect_min = center - half_size;
        let rect_max = center + half_size;

        rect_max.x >= self.min.x
            && rect_min.x <= self.max.x
            && rect_max.y >= self.min.y
            && rect_min.y <= self.max.y
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self {
            view_proj: matrix.to_cols_array_2d(),
        }
    }
}
