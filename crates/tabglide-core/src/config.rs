use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How often the UI polls for input when nothing is animating (ms)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub motion: MotionConfig,
}

/// Settings for animated movement: page snapping and bar auto-scroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Animate movement instead of jumping instantly
    #[serde(default = "default_smooth_enabled")]
    pub smooth_enabled: bool,

    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,

    /// Easing curve applied to animated movement
    #[serde(default = "default_easing")]
    pub easing: EasingKind,

    /// Frames per second while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    /// No easing, instant movement
    None,
    /// Constant speed
    Linear,
    /// Cubic ease-out, fast start with gentle landing
    Cubic,
    /// Quintic ease-out, more pronounced deceleration
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Slow start and slow landing
    EaseInOut,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_smooth_enabled() -> bool {
    true
}

fn default_animation_duration_ms() -> u64 {
    200
}

fn default_easing() -> EasingKind {
    EasingKind::EaseInOut
}

fn default_animation_fps() -> u32 {
    60
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            motion: MotionConfig::default(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_smooth_enabled(),
            animation_duration_ms: default_animation_duration_ms(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path, falling back to defaults if
    /// the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Path to the configuration file: `~/.config/tabglide/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(".config").join("tabglide").join("config.toml"))
    }
}
