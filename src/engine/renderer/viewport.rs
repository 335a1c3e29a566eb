// FIT scaling of the logical resolution into the window

use glam::Vec2;

/// Largest centered area of the window with the game's aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Top-left corner of the game area in window pixels
    pub offset: Vec2,
    /// Size of the game area in window pixels
    pub size: Vec2,
    /// Window pixels per logical pixel
    pub scale: f32,
}

impl Letterbox {
    /// Fit a `logical` sized game into a `window` sized surface
    pub fn fit(logical: Vec2, window: Vec2) -> Self {
        if logical.x <= 0.0 || logical.y <= 0.0 || window.x <= 0.0 || window.y <= 0.0 {
            return Self {
                offset: Vec2::ZERO,
                size: window.max(Vec2::ZERO),
                scale: 1.0,
            };
        }

        let scale = (window.x / logical.x).min(window.y / logical.y);
        let size = logical * scale;
        Self {
            offset: (window - size) / 2.0,
            size,
            scale,
        }
    }

    /// Convert a window position into logical pixels, `None` outside the game area
    pub fn to_logical(&self, window_pos: Vec2) -> Option<Vec2> {
        let local = window_pos - self.offset;
        if local.x < 0.0 || local.y < 0.0 || local.x > self.size.x || local.y > self.size.y {
            return None;
        }
        Some(local / self.scale)
    }
}
