use crate::geometry::SampleSet;

/// A snapshot of where a horizontal page drag currently sits.
///
/// `current_index` is the selected tab, `next_index` the tab the drag is
/// heading toward, and `fraction` how far along that transition the pages
/// are. Indices are signed: at the ends of the strip `next_index` may be
/// `-1` or `tab_count`, and consumers clamp when they resolve geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub current_index: isize,
    pub next_index: isize,
    pub fraction: f64,
}

impl Interaction {
    pub fn new(current_index: isize, next_index: isize, fraction: f64) -> Self {
        Self {
            current_index,
            next_index,
            fraction,
        }
    }

    /// The interaction for a strip resting on `index` with no drag in flight.
    pub fn settled(index: isize) -> Self {
        Self {
            current_index: index,
            next_index: index,
            fraction: 0.0,
        }
    }

    /// Whether this interaction describes a resting strip.
    pub fn is_settled(&self) -> bool {
        self.fraction == 0.0 && self.current_index == self.next_index
    }
}

/// Derive the transition state from this pass's page samples.
///
/// Uses the first recorded sample's width as the common page width, so all
/// pages are assumed equally wide. Returns `None` whenever any input is
/// missing: no selection, no samples, a degenerate width, a selection that
/// is not in `order`, or no sample recorded for the selected tab.
pub fn derive_interaction<I: PartialEq>(
    samples: &SampleSet<I>,
    selection: Option<&I>,
    order: &[I],
) -> Option<Interaction> {
    let selection = selection?;
    let tab_width = samples.first()?.width;
    if !tab_width.is_finite() || tab_width <= 0.0 {
        return None;
    }

    let current_index = order.iter().position(|id| id == selection)? as isize;
    let current_offset = samples.get(selection)?.offset;

    let (next_index, fraction) = if current_offset < 0.0 {
        // Dragging toward the following page.
        (current_index + 1, -current_offset / tab_width)
    } else if current_offset > 0.0 {
        // Dragging toward the preceding page.
        (current_index - 1, current_offset / tab_width)
    } else {
        (current_index, 0.0)
    };

    Some(Interaction {
        current_index,
        next_index,
        fraction,
    })
}
