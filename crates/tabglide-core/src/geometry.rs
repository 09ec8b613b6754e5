use std::collections::HashMap;

/// One scroll-position observation for a page.
///
/// `offset` is the signed distance, in columns, of the page's leading edge
/// from the scroll viewport's leading edge. Negative means the page has been
/// dragged past its resting position toward the following page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSample<I> {
    pub tab_id: I,
    pub offset: f64,
    pub width: f64,
}

/// Page samples for the current layout pass, in recording order.
///
/// Samples are ephemeral: `begin_pass` discards the previous pass wholesale,
/// and within one pass the last record for a given tab id wins.
#[derive(Debug, Clone, Default)]
pub struct SampleSet<I> {
    samples: Vec<PageSample<I>>,
}

impl<I: PartialEq> SampleSet<I> {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Start a new layout pass, discarding all previous samples.
    pub fn begin_pass(&mut self) {
        self.samples.clear();
    }

    /// Record a sample for this pass.
    pub fn record(&mut self, sample: PageSample<I>) {
        match self.samples.iter_mut().find(|s| s.tab_id == sample.tab_id) {
            Some(existing) => *existing = sample,
            None => self.samples.push(sample),
        }
    }

    /// The first sample recorded in this pass, if any.
    pub fn first(&self) -> Option<&PageSample<I>> {
        self.samples.first()
    }

    /// The sample recorded for a given tab in this pass.
    pub fn get(&self, tab_id: &I) -> Option<&PageSample<I>> {
        self.samples.iter().find(|s| &s.tab_id == tab_id)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Horizontal span of one tab button, as laid out by a bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSpan {
    pub center_x: f64,
    pub width: f64,
}

impl AnchorSpan {
    pub fn new(center_x: f64, width: f64) -> Self {
        Self { center_x, width }
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    /// Whether a column position falls inside this span.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.left() && x < self.right()
    }
}

/// Button spans recorded by one bar instance, keyed by tab id.
///
/// Each bar owns its own map; on key collision the last update wins.
pub type AnchorMap<I> = HashMap<I, AnchorSpan>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_pass_discards_samples() {
        let mut set = SampleSet::new();
        set.record(PageSample {
            tab_id: 0u8,
            offset: -10.0,
            width: 80.0,
        });
        assert_eq!(set.len(), 1);

        set.begin_pass();
        assert!(set.is_empty());
        assert!(set.get(&0).is_none());
    }

    #[test]
    fn test_last_record_wins_within_pass() {
        let mut set = SampleSet::new();
        set.record(PageSample {
            tab_id: 1u8,
            offset: 5.0,
            width: 80.0,
        });
        set.record(PageSample {
            tab_id: 1u8,
            offset: -3.0,
            width: 80.0,
        });

        assert_eq!(set.len(), 1);
        let sample = set.get(&1).unwrap();
        assert!((sample.offset - -3.0).abs() < 0.001);
    }

    #[test]
    fn test_first_keeps_recording_order() {
        let mut set = SampleSet::new();
        set.record(PageSample {
            tab_id: 2u8,
            offset: 0.0,
            width: 40.0,
        });
        set.record(PageSample {
            tab_id: 3u8,
            offset: 40.0,
            width: 40.0,
        });

        assert_eq!(set.first().unwrap().tab_id, 2);
    }

    #[test]
    fn test_anchor_span_extents() {
        let span = AnchorSpan::new(10.0, 4.0);
        assert!((span.left() - 8.0).abs() < 0.001);
        assert!((span.right() - 12.0).abs() < 0.001);
        assert!(span.contains(8.0));
        assert!(span.contains(11.9));
        assert!(!span.contains(12.0));
    }
}
