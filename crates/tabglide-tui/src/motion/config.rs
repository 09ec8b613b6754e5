//! L4 Atomic Layer: Configuration types for animated movement
//!
//! Re-exports configuration from tabglide-core and provides additional utilities.

use std::time::Duration;

// Re-export config types from core
pub use tabglide_core::{EasingKind, MotionConfig};

/// Extension trait for MotionConfig with utility methods
pub trait MotionConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if animated movement is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl MotionConfigExt for MotionConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MotionConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 200);
        assert_eq!(config.easing, EasingKind::EaseInOut);
        assert_eq!(config.animation_fps, 60);
    }

    #[test]
    fn test_animation_duration() {
        let config = MotionConfig {
            animation_duration_ms: 150,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(150));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = MotionConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
