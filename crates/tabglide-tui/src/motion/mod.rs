//! Animated movement system for the tabglide widgets
//!
//! One controller drives every animated position in the crate: page strips
//! snapping to a selected tab and scrolling bars following the selection.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, smoothstep)
//! - `timing` - Time calculation utilities (progress, completion)
//! - `config` - Configuration types and defaults (re-exported from tabglide-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use tabglide_tui::motion::{MotionAnimator, MotionConfig};
//!
//! // Create with default config (animated movement enabled)
//! let mut animator = MotionAnimator::with_defaults();
//!
//! // Or with custom config
//! let config = MotionConfig {
//!     smooth_enabled: true,
//!     animation_duration_ms: 200,
//!     ..Default::default()
//! };
//! let mut animator = MotionAnimator::new(config);
//!
//! // Start an animation toward a target position
//! animator.animate_to(target, max);
//!
//! // In main loop, update each frame and get current position
//! let position = animator.update(max);
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::MotionAnimator;
pub use config::{MotionConfig, MotionConfigExt};
pub use easing::{EasingKind, EasingKindExt};
