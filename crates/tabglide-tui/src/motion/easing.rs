//! L4 Atomic Layer: Pure easing functions for animated movement
//!
//! Provides mathematical easing functions that map input [0, 1] to output [0, 1]
//! with various acceleration curves.

// Re-export EasingKind from core
pub use tabglide_core::EasingKind;

/// Extension trait for EasingKind with calculation methods
pub trait EasingKindExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingKindExt for EasingKind {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingKind::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingKind::Linear => t,
            EasingKind::Cubic => cubic_ease_out(t),
            EasingKind::Quintic => quintic_ease_out(t),
            EasingKind::EaseOut => exponential_ease_out(t),
            EasingKind::EaseInOut => smoothstep(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Smoothstep ease-in-out: f(t) = t²(3 - 2t)
#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [
            EasingKind::None,
            EasingKind::Linear,
            EasingKind::Cubic,
            EasingKind::Quintic,
            EasingKind::EaseOut,
            EasingKind::EaseInOut,
        ] {
            // t=0 should give 0 (except None which jumps)
            if easing != EasingKind::None {
                assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            // t=1 should give 1
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [
            EasingKind::Linear,
            EasingKind::Cubic,
            EasingKind::Quintic,
            EasingKind::EaseOut,
            EasingKind::EaseInOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_smoothstep_symmetric_at_midpoint() {
        assert!((EasingKind::EaseInOut.apply(0.5) - 0.5).abs() < 0.001);
    }
}
