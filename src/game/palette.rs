// Colors of the world, raw (no graphics upgrade) or unraw

use crate::engine::renderer::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub block: Color,
    pub platform: Color,
    pub player: Color,
    pub checkpoint: Color,
    pub checkpoint_used: Color,
    pub finish: Color,
    pub finish_pole: Color,
}

pub const RAW: Palette = Palette {
    background: Color::rgb(0.12, 0.12, 0.12),
    block: Color::rgb(0.55, 0.55, 0.55),
    platform: Color::rgb(0.45, 0.45, 0.45),
    player: Color::rgb(0.9, 0.9, 0.9),
    checkpoint: Color::rgb(0.7, 0.7, 0.7),
    checkpoint_used: Color::rgb(0.3, 0.3, 0.3),
    finish: Color::rgb(0.8, 0.8, 0.8),
    finish_pole: Color::rgb(0.6, 0.6, 0.6),
};

pub const UNRAW: Palette = Palette {
    background: Color::rgb(0.36, 0.67, 0.93),
    block: Color::rgb(0.45, 0.3, 0.16),
    platform: Color::rgb(0.25, 0.62, 0.2),
    player: Color::rgb(0.95, 0.45, 0.1),
    checkpoint: Color::rgb(1.0, 0.84, 0.0),
    checkpoint_used: Color::rgb(0.55, 0.5, 0.3),
    finish: Color::rgb(0.15, 1.0, 0.0),
    finish_pole: Color::rgb(0.9, 0.9, 0.9),
};

/// Palette for the current graphics setting
pub fn palette(unraw: bool) -> &'static Palette {
    if unraw {
        &UNRAW
    } else {
        &RAW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_grey(c: Color) -> bool {
        c.r == c.g && c.g == c.b
    }

    #[test]
    fn test_raw_is_grey() {
        let p = palette(false);
        for c in [p.background, p.block, p.platform, p.player, p.checkpoint, p.finish] {
            assert!(is_grey(c));
        }
    }

    #[test]
    fn test_unraw_is_colored() {
        let p = palette(true);
        assert!(!is_grey(p.player));
        assert!(!is_grey(p.block));
        assert_eq!(*p, UNRAW);
    }
}
