//! Core interaction model for the tabglide tab widgets.
//!
//! Everything here is pure data and math: page samples feed
//! [`derive_interaction`], the resulting [`Interaction`] resolves against a
//! bar's [`AnchorMap`] via [`indicator_geometry`]. No terminal types appear
//! in this crate; the rendering side lives in `tabglide-tui`.

pub mod config;
pub mod error;
pub mod geometry;
pub mod indicator;
pub mod interaction;
pub mod item;

pub use config::{AppConfig, EasingKind, MotionConfig, UiConfig};
pub use error::{Error, Result};
pub use geometry::{AnchorMap, AnchorSpan, PageSample, SampleSet};
pub use indicator::{indicator_geometry, lerp, IndicatorGeometry};
pub use interaction::{derive_interaction, Interaction};
pub use item::TabItem;
