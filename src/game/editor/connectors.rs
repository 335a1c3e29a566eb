// Lines between the rows of the upgrade tree

use super::buttons::UpgradeButton;
use crate::engine::renderer::{Color, DrawList, Layer};
use glam::Vec2;

pub const LINE_WIDTH: f32 = 2.0;

/// A straight connector from `from` to `to` in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

fn segment(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
    Segment {
        from: Vec2::new(x0, y0),
        to: Vec2::new(x1, y1),
    }
}

/// All connector segments for the seven buttons in tree order
///
/// The vertical gap between row 0 and row 1 is split in thirds: row 0 drops
/// and joins in the first third, the join drops to the middle in the second,
/// row 1 rises and joins in the last. `DoubleJump` links straight up to `Jump`.
pub fn connector_segments(buttons: &[UpgradeButton]) -> Vec<Segment> {
    if buttons.len() < 7 {
        return Vec::new();
    }

    let height = buttons[0].size.y;
    let gap = (buttons[2].center.y - height / 2.0) - (buttons[0].center.y + height / 2.0);
    let third = gap / 3.0;
    let mut segments = Vec::new();

    // Row 0
    let (first, second) = (&buttons[0], &buttons[1]);
    let y0 = first.center.y + height / 2.0;
    let y1 = y0 + third;
    let y2 = y1 + third;
    let middle = (first.center.x + second.center.x) / 2.0;
    for button in [first, second] {
        segments.push(segment(button.center.x, y0, button.center.x, y1));
    }
    segments.push(segment(first.center.x, y1, second.center.x, y1));
    segments.push(segment(middle, y1, middle, y2));

    // Row 1
    let row = &buttons[2..6];
    let top = row[0].center.y - height / 2.0 - third;
    for button in row {
        segments.push(segment(button.center.x, top, button.center.x, top + third));
    }
    segments.push(segment(row[0].center.x, top, row[3].center.x, top));

    // Row 2
    let (jump, double_jump) = (&buttons[2], &buttons[6]);
    segments.push(segment(
        double_jump.center.x,
        double_jump.center.y - height / 2.0,
        double_jump.center.x,
        jump.center.y + height / 2.0,
    ));

    segments
}

pub fn draw_connectors(segments: &[Segment], list: &mut DrawList) {
    for s in segments {
        list.line(Layer::Screen, s.from, s.to, LINE_WIDTH, Color::WHITE);
    }
}
