use std::hash::Hash;

use crate::geometry::AnchorMap;
use crate::interaction::Interaction;

/// Continuous position and size for a bar's selection indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    pub center_x: f64,
    pub width: f64,
}

impl IndicatorGeometry {
    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }
}

/// Linear interpolation between two values.
///
/// `t` is deliberately not clamped: values past 1.0 extrapolate, which is
/// what sweeps the indicator across intermediate tabs during a programmatic
/// multi-page jump.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Resolve an interaction against a bar's recorded button spans.
///
/// Both indices are clamped into the tab order before lookup, so an
/// interaction pointing past either end blends between a boundary tab and
/// itself and the indicator holds still there. Returns `None` when there is
/// no interaction, the order is empty, or either span is missing.
pub fn indicator_geometry<I: Eq + Hash>(
    interaction: Option<Interaction>,
    anchors: &AnchorMap<I>,
    order: &[I],
) -> Option<IndicatorGeometry> {
    let interaction = interaction?;
    if order.is_empty() {
        return None;
    }

    let max_index = order.len() as isize - 1;
    let current = interaction.current_index.clamp(0, max_index) as usize;
    let next = interaction.next_index.clamp(0, max_index) as usize;

    let current_span = anchors.get(&order[current])?;
    let next_span = anchors.get(&order[next])?;

    Some(IndicatorGeometry {
        center_x: lerp(current_span.center_x, next_span.center_x, interaction.fraction),
        width: lerp(current_span.width, next_span.width, interaction.fraction),
    })
}
