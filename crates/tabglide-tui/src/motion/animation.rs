//! L3 Molecular Layer: Motion animation controller
//!
//! Combines easing functions and timing utilities to drive animated movement.
//! Positions are fractional columns, so page strips and bar scroll offsets
//! share one controller type.

use std::time::{Duration, Instant};

use super::config::{MotionConfig, MotionConfigExt};
use super::easing::{EasingKind, EasingKindExt};
use super::timing::{is_complete, lerp, progress};

/// Active motion animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting position
    from: f64,
    /// Target position
    to: f64,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingKind,
}

/// Motion animation controller
///
/// Manages animated movement toward a target position. Call `animate_to()`
/// to begin an animation, then `update()` each frame to get the current
/// interpolated position.
#[derive(Debug, Clone)]
pub struct MotionAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: MotionConfig,
    /// Current position (always up-to-date)
    position: f64,
    /// Pending delta for batching rapid nudge events
    pending_delta: f64,
}

impl Default for MotionAnimator {
    fn default() -> Self {
        Self {
            animation: None,
            config: MotionConfig::default(),
            position: 0.0,
            pending_delta: 0.0,
        }
    }
}

impl MotionAnimator {
    /// Create a new motion animator with configuration
    pub fn new(config: MotionConfig) -> Self {
        Self {
            animation: None,
            config,
            position: 0.0,
            pending_delta: 0.0,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Update configuration
    pub fn set_config(&mut self, config: MotionConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Get the target position (final position after animation)
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.position)
    }

    /// Get the current interpolated position
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Set position immediately (no animation)
    pub fn set_position(&mut self, position: f64) {
        self.animation = None;
        self.position = position;
        self.pending_delta = 0.0;
    }

    /// Start an animation to a target position
    ///
    /// If animated movement is disabled, jumps immediately to target.
    /// A new target supersedes any animation in progress: the new animation
    /// starts from the current visible position.
    pub fn animate_to(&mut self, target: f64, max: f64) {
        let target = target.clamp(0.0, max.max(0.0));

        if !self.config.is_smooth() {
            // Instant jump when animated movement is disabled
            self.position = target;
            self.animation = None;
            return;
        }

        // Start from current visible position
        let from = self.position;

        // Skip animation if already at target
        if (from - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Move by a delta amount (positive = forward, negative = backward)
    ///
    /// Multiple nudges within the same animation frame are batched together
    /// for smoother handling of rapid wheel events.
    pub fn nudge_by(&mut self, delta: f64, max: f64) {
        if !self.config.is_smooth() {
            // Instant move
            self.position = (self.position + delta).clamp(0.0, max.max(0.0));
            self.animation = None;
            return;
        }

        // Accumulate delta for batching
        self.pending_delta += delta;
    }

    /// Update animation state and return current position
    ///
    /// Call this every frame to advance the animation.
    pub fn update(&mut self, max: f64) -> f64 {
        let max = max.max(0.0);

        // Process any pending nudge delta
        if self.pending_delta != 0.0 {
            let new_target = (self.target() + self.pending_delta).clamp(0.0, max);
            self.pending_delta = 0.0;

            if (new_target - self.position).abs() >= f64::EPSILON {
                self.animation = Some(ActiveAnimation {
                    start: Instant::now(),
                    from: self.position,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        // Update active animation
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                // Animation complete
                self.position = anim.to.clamp(0.0, max);
                self.animation = None;
            } else {
                // Calculate interpolated position. Not clamped: `from` may sit
                // outside [0, max] after a rubber-band drag, and the animation
                // has to travel back through that range.
                let t = progress(anim.start, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.position = lerp(anim.from, anim.to, eased_t);
            }
        }

        self.position
    }

    /// Cancel any active animation and stop at current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }

    /// Reset to initial state
    pub fn reset(&mut self) {
        self.animation = None;
        self.position = 0.0;
        self.pending_delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_jump_when_disabled() {
        let config = MotionConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = MotionAnimator::new(config);

        animator.animate_to(100.0, 200.0);
        assert!((animator.position() - 100.0).abs() < 0.001);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let config = MotionConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        };
        let mut animator = MotionAnimator::new(config);

        animator.animate_to(100.0, 200.0);
        assert!(animator.is_animating());
        assert!((animator.target() - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_new_target_supersedes_old() {
        let config = MotionConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        };
        let mut animator = MotionAnimator::new(config);

        animator.animate_to(100.0, 200.0);
        animator.animate_to(40.0, 200.0);
        assert!((animator.target() - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_nudge_batching() {
        let config = MotionConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        };
        let mut animator = MotionAnimator::new(config);

        // Multiple nudges should batch into one animation
        animator.nudge_by(10.0, 200.0);
        animator.nudge_by(10.0, 200.0);
        animator.nudge_by(10.0, 200.0);

        animator.update(200.0);
        assert!((animator.target() - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut animator = MotionAnimator::with_defaults();
        animator.set_position(50.0);
        animator.animate_to(300.0, 100.0);
        animator.update(100.0);
        assert!(animator.target() <= 100.0);
    }

    #[test]
    fn test_animation_reaches_target() {
        let config = MotionConfig {
            smooth_enabled: true,
            animation_duration_ms: 10,
            ..Default::default()
        };
        let mut animator = MotionAnimator::new(config);

        animator.animate_to(80.0, 200.0);
        std::thread::sleep(Duration::from_millis(30));
        let position = animator.update(200.0);
        assert!((position - 80.0).abs() < 0.001);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_set_position_cancels_animation() {
        let mut animator = MotionAnimator::with_defaults();
        animator.animate_to(100.0, 200.0);
        animator.set_position(25.0);
        assert!(!animator.is_animating());
        assert!((animator.position() - 25.0).abs() < 0.001);
    }
}
