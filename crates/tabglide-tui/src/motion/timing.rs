//! L4 Atomic Layer: Time calculation utilities for motion animations
//!
//! Provides pure functions for calculating animation progress. Interpolation
//! itself lives in tabglide-core, shared with indicator geometry.

use std::time::{Duration, Instant};

// Re-export lerp from core so animation code has one import site
pub use tabglide_core::lerp;

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// # Arguments
/// * `start` - Animation start time
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = start.elapsed();
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}
