//! Host configuration
//!
//! Window and simulation knobs for the macroquad host, loaded from a RON
//! file next to the executable when one exists. Every field has a default
//! matching the stock 800x600 / 60 FPS setup, so a partial file (or none at
//! all) is fine. A file that fails to parse falls back to defaults with a
//! warning rather than aborting.

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory on native targets.
pub const CONFIG_FILE: &str = "scoot.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub title: String,
    /// Target frames per second; 0 disables the frame limiter.
    pub target_fps: u32,
    /// Player movement speed in pixels per frame per active axis.
    pub player_speed: f32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            title: "scoot".to_string(),
            target_fps: 60,
            player_speed: crate::ecs::systems::PLAYER_SPEED,
        }
    }
}

impl HostConfig {
    /// Parse a RON document, falling back to defaults on error.
    pub fn from_ron(text: &str) -> Self {
        match ron::from_str(text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid {CONFIG_FILE}, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Load from [`CONFIG_FILE`] if present and readable, defaults otherwise.
    /// WASM builds have no filesystem, so they always get defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            match std::fs::read_to_string(CONFIG_FILE) {
                Ok(text) => return Self::from_ron(&text),
                Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
                    log::warn!("could not read {CONFIG_FILE}: {err}");
                }
                Err(_) => {}
            }
        }
        Self::default()
    }

    /// Target frame time in seconds, or None when the limiter is off.
    pub fn frame_time(&self) -> Option<f64> {
        if self.target_fps == 0 {
            None
        } else {
            Some(1.0 / f64::from(self.target_fps))
        }
    }
}
