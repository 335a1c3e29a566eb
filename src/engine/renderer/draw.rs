// Draw list: what a frame wants on screen, independent of the GPU

use super::font;
use glam::Vec2;

/// RGBA color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from a 0xRRGGBB value
    pub fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as f32 / 255.0,
            ((value >> 8) & 0xff) as f32 / 255.0,
            (value & 0xff) as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Which coordinate space a quad lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// World units, y-up, seen through the game camera
    World,
    /// Logical pixels, y-down, fixed to the screen
    Screen,
}

/// A filled quad given by its four corners (counter-clockwise on screen)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [Vec2; 4],
    pub color: Color,
}

/// Text placement and appearance
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Cap height in pixels
    pub size: f32,
    pub color: Color,
    /// Anchor inside the text box (0,0 = top left, 0.5,0.5 = center)
    pub origin: Vec2,
    /// Wrap after this many pixels, if set
    pub wrap_width: Option<f32>,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            origin: Vec2::ZERO,
            wrap_width: None,
        }
    }

    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    pub fn wrap(mut self, width: f32) -> Self {
        self.wrap_width = Some(width);
        self
    }

    /// Size of one font pixel
    fn pixel(&self) -> f32 {
        self.size / font::GLYPH_HEIGHT as f32
    }

    fn lines(&self, text: &str) -> Vec<String> {
        match self.wrap_width {
            Some(width) => {
                let max_chars = (width / (font::ADVANCE_X as f32 * self.pixel())).floor() as usize;
                font::wrap(text, max_chars.max(1))
            }
            None => text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Bounding box of the text in pixels
    pub fn measure(&self, text: &str) -> Vec2 {
        let lines = self.lines(text);
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let px = self.pixel();
        let width = if longest == 0 {
            0.0
        } else {
            (longest * font::ADVANCE_X - 1) as f32 * px
        };
        let height = if lines.is_empty() {
            0.0
        } else {
            ((lines.len() - 1) * font::ADVANCE_Y + font::GLYPH_HEIGHT) as f32 * px
        };
        Vec2::new(width, height)
    }
}

/// Everything to draw this frame, in painter's order per layer
#[derive(Debug, Default)]
pub struct DrawList {
    world: Vec<Quad>,
    screen: Vec<Quad>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<Quad> {
        match layer {
            Layer::World => &mut self.world,
            Layer::Screen => &mut self.screen,
        }
    }

    pub fn quads(&self, layer: Layer) -> &[Quad] {
        match layer {
            Layer::World => &self.world,
            Layer::Screen => &self.screen,
        }
    }

    pub fn clear(&mut self) {
        self.world.clear();
        self.screen.clear();
    }

    pub fn push(&mut self, layer: Layer, quad: Quad) {
        self.layer_mut(layer).push(quad);
    }

    /// Axis aligned rectangle from its minimum corner
    pub fn rect_min(&mut self, layer: Layer, min: Vec2, size: Vec2, color: Color) {
        let max = min + size;
        self.push(
            layer,
            Quad {
                corners: [
                    min,
                    Vec2::new(max.x, min.y),
                    max,
                    Vec2::new(min.x, max.y),
                ],
                color,
            },
        );
    }

    /// Axis aligned rectangle around its center
    pub fn rect(&mut self, layer: Layer, center: Vec2, size: Vec2, color: Color) {
        self.rect_min(layer, center - size / 2.0, size, color);
    }

    /// Rectangle frame of the given stroke thickness, drawn inside `size`
    pub fn outline(&mut self, layer: Layer, center: Vec2, size: Vec2, thickness: f32, color: Color) {
        let min = center - size / 2.0;
        let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
        self.rect_min(layer, min, Vec2::new(size.x, t), color);
        self.rect_min(layer, Vec2::new(min.x, min.y + size.y - t), Vec2::new(size.x, t), color);
        self.rect_min(layer, Vec2::new(min.x, min.y + t), Vec2::new(t, size.y - 2.0 * t), color);
        self.rect_min(
            layer,
            Vec2::new(min.x + size.x - t, min.y + t),
            Vec2::new(t, size.y - 2.0 * t),
            color,
        );
    }

    /// Straight line of the given width
    pub fn line(&mut self, layer: Layer, a: Vec2, b: Vec2, width: f32, color: Color) {
        let dir = b - a;
        if dir.length_squared() <= f32::EPSILON {
            return;
        }
        let normal = dir.perp().normalize() * (width / 2.0);
        self.push(
            layer,
            Quad {
                corners: [a - normal, b - normal, b + normal, a + normal],
                color,
            },
        );
    }

    /// Screen-space text
    pub fn text(&mut self, position: Vec2, text: &str, style: TextStyle) {
        let size = style.measure(text);
        let top_left = position - size * style.origin;
        let px = style.pixel();

        for (line_index, line) in style.lines(text).iter().enumerate() {
            let line_y = top_left.y + (line_index * font::ADVANCE_Y) as f32 * px;
            for (char_index, c) in line.chars().enumerate() {
                let char_x = top_left.x + (char_index * font::ADVANCE_X) as f32 * px;
                for (row_index, row) in font::glyph(c).iter().enumerate() {
                    for (start, len) in font::row_runs(*row) {
                        self.rect_min(
                            Layer::Screen,
                            Vec2::new(char_x + start as f32 * px, line_y + row_index as f32 * px),
                            Vec2::new(len as f32 * px, px),
                            style.color,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex_color() {
        let c = Color::hex(0x27ff00);
        assert_relative_eq!(c.r, 0x27 as f32 / 255.0);
        assert_relative_eq!(c.g, 1.0);
        assert_relative_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_rect_corners() {
        let mut list = DrawList::new();
        list.rect(Layer::World, Vec2::new(1.0, 1.0), Vec2::new(2.0, 4.0), Color::WHITE);
        let quad = list.quads(Layer::World)[0];
        assert_eq!(quad.corners[0], Vec2::new(0.0, -1.0));
        assert_eq!(quad.corners[2], Vec2::new(2.0, 3.0));
        assert!(list.quads(Layer::Screen).is_empty());
    }

    #[test]
    fn test_outline_has_four_sides() {
        let mut list = DrawList::new();
        list.outline(Layer::Screen, Vec2::ZERO, Vec2::new(10.0, 10.0), 2.0, Color::WHITE);
        assert_eq!(list.quads(Layer::Screen).len(), 4);
    }

    #[test]
    fn test_line_width() {
        let mut list = DrawList::new();
        list.line(Layer::Screen, Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, Color::WHITE);
        let quad = list.quads(Layer::Screen)[0];
        let span = (quad.corners[3] - quad.corners[0]).length();
        assert_relative_eq!(span, 2.0);
    }

    #[test]
    fn test_degenerate_line_is_skipped() {
        let mut list = DrawList::new();
        list.line(Layer::Screen, Vec2::ONE, Vec2::ONE, 2.0, Color::WHITE);
        assert!(list.quads(Layer::Screen).is_empty());
    }

    #[test]
    fn test_measure_single_line() {
        let style = TextStyle::new(7.0, Color::WHITE);
        // 2 chars: 2 * 6 - 1 = 11 font pixels wide, 7 high, 1 px per font pixel
        assert_eq!(style.measure("OK"), Vec2::new(11.0, 7.0));
    }

    #[test]
    fn test_measure_multi_line() {
        let style = TextStyle::new(14.0, Color::WHITE);
        let size = style.measure("A\nB");
        assert_relative_eq!(size.y, ((9 + 7) * 2) as f32);
    }

    #[test]
    fn test_text_centered_origin() {
        let mut list = DrawList::new();
        let style = TextStyle::new(7.0, Color::WHITE).origin(0.5, 0.5);
        list.text(Vec2::new(100.0, 100.0), "I", style);
        // Top bar of the I starts one pixel in from the glyph's left edge
        let first = list.quads(Layer::Screen)[0];
        assert_relative_eq!(first.corners[0].x, 100.0 - 2.5 + 1.0);
        assert_relative_eq!(first.corners[0].y, 100.0 - 3.5);
    }

    #[test]
    fn test_wrapped_text_measure() {
        let style = TextStyle::new(7.0, Color::WHITE).wrap(6.0 * 5.0);
        // 5 chars per line at 6 px advance
        let size = style.measure("AAAA BBBB");
        assert_relative_eq!(size.y, (9 + 7) as f32);
    }
}
