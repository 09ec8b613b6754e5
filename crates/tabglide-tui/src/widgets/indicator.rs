use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use tabglide_core::IndicatorGeometry;

/// Which edge of a bar the selection indicator is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorEdge {
    Top,
    #[default]
    Bottom,
}

/// Paint the indicator onto one row of a bar.
///
/// `geometry` is in fractional columns relative to `area.x`. Cells are
/// picked by how much of them the span covers: mostly covered cells get a
/// full block, the fringe cells at either end get a half block when at
/// least a quarter covered. That keeps the indicator visibly gliding even
/// though the terminal only has whole columns.
pub(crate) fn draw_indicator(
    buf: &mut Buffer,
    area: Rect,
    y: u16,
    geometry: IndicatorGeometry,
    style: Style,
) {
    if geometry.width <= 0.0 || area.width == 0 {
        return;
    }

    let left = geometry.left();
    let right = geometry.right();

    let first = left.floor() as i64;
    let last = (right.ceil() as i64) - 1;
    for cell in first..=last {
        if cell < 0 || cell >= area.width as i64 {
            continue;
        }
        let cell_left = cell as f64;
        let coverage = (right.min(cell_left + 1.0) - left.max(cell_left)).max(0.0);
        if coverage < 0.25 {
            continue;
        }
        let symbol = if coverage >= 0.75 {
            "█"
        } else if left > cell_left {
            // Covered part hugs the right edge of the cell
            "▐"
        } else {
            "▌"
        };
        if let Some(c) = buf.cell_mut((area.x + cell as u16, y)) {
            c.set_symbol(symbol);
            c.set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(center_x: f64, width: f64) -> String {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        let geometry = IndicatorGeometry { center_x, width };
        draw_indicator(&mut buf, area, 0, geometry, Style::default());
        (0..12)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_cell_aligned_span_uses_full_blocks() {
        assert_eq!(render(5.0, 4.0), "   ████     ");
    }

    #[test]
    fn test_half_cell_overhang_uses_half_blocks() {
        // Span [3.5, 7.5): right half of cell 3, left half of cell 7.
        assert_eq!(render(5.5, 4.0), "   ▐███▌    ");
    }

    #[test]
    fn test_thin_fringe_is_dropped() {
        // Span [3.9, 7.9): cell 3 is 10% covered and dropped, cell 7 is
        // 90% covered and promoted to a full block.
        assert_eq!(render(5.9, 4.0), "    ████    ");
    }

    #[test]
    fn test_span_clipped_to_area() {
        // Centered past the right edge; no panic, only in-bounds cells drawn.
        assert_eq!(render(12.0, 4.0), "          ██");
        assert_eq!(render(-1.0, 4.0), "█           ");
    }

    #[test]
    fn test_zero_width_draws_nothing() {
        assert_eq!(render(5.0, 0.0), "            ");
    }
}
