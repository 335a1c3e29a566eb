// Runtime configuration

use log::warn;
use std::path::PathBuf;

/// Logical game width in pixels (everything on screen is laid out in this space)
pub const GAME_WIDTH: f32 = 800.0;

/// Logical game height in pixels
pub const GAME_HEIGHT: f32 = 600.0;

/// Size of one world unit in logical pixels
pub const PIXELS_PER_UNIT: f32 = 32.0;

/// Top level game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window title
    pub title: String,
    /// Logical width (the window is scaled to fit this)
    pub width: f32,
    /// Logical height
    pub height: f32,
    /// Root directory of the data files
    pub asset_dir: PathBuf,
    /// Show the on-screen touch controls in the game scene
    pub mobile_controls: bool,
    /// Draw collider outlines on top of the world
    pub debug_physics: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Unraw".to_string(),
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            asset_dir: PathBuf::from("assets"),
            mobile_controls: false,
            debug_physics: false,
        }
    }
}

impl GameConfig {
    /// Build the configuration from defaults plus `UNRAW_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("UNRAW_ASSETS") {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup("UNRAW_MOBILE") {
            config.mobile_controls = parse_flag("UNRAW_MOBILE", &value);
        }
        if let Some(value) = lookup("UNRAW_DEBUG_PHYSICS") {
            config.debug_physics = parse_flag("UNRAW_DEBUG_PHYSICS", &value);
        }

        config
    }

    /// Convert a relative coordinate into logical pixels ('x' uses width, 'y' uses height)
    pub fn rel_x(&self, rel: f32) -> f32 {
        crate::common::math::rel_to_px(rel, self.width)
    }

    pub fn rel_y(&self, rel: f32) -> f32 {
        crate::common::math::rel_to_px(rel, self.height)
    }
}

fn parse_flag(name: &str, value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        other => {
            warn!("Ignoring invalid value {:?} for {}", other, name);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert!(!config.mobile_controls);
        assert!(!config.debug_physics);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("UNRAW_ASSETS", "/opt/unraw"),
            ("UNRAW_MOBILE", "true"),
            ("UNRAW_DEBUG_PHYSICS", "1"),
        ]
        .into_iter()
        .collect();

        let config = GameConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.asset_dir, PathBuf::from("/opt/unraw"));
        assert!(config.mobile_controls);
        assert!(config.debug_physics);
    }

    #[test]
    fn test_invalid_flag_is_off() {
        let config = GameConfig::from_lookup(|k| {
            (k == "UNRAW_MOBILE").then(|| "maybe".to_string())
        });
        assert!(!config.mobile_controls);
    }

    #[test]
    fn test_relative_coordinates() {
        let config = GameConfig::default();
        assert_eq!(config.rel_x(0.5), 400.0);
        assert_eq!(config.rel_y(0.32), 192.0);
    }
}
