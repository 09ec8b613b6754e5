use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::StatefulWidget,
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use tabglide_core::{indicator_geometry, AnchorMap, AnchorSpan, Interaction, TabItem};

use super::indicator::{draw_indicator, IndicatorEdge};

/// Tab bar that divides its width evenly between all tabs.
///
/// Button spans are fractional columns, so the indicator glides smoothly
/// even when the bar width doesn't divide by the tab count. Feed it the
/// interaction derived by the pager each frame.
pub struct FixedTabBar<'a, T, F>
where
    T: TabItem,
    F: Fn(&T) -> String,
{
    tabs: &'a [T],
    title: F,
    interaction: Option<Interaction>,
    edge: IndicatorEdge,
    spacing: u16,
    style: Style,
    active_style: Style,
    indicator_style: Style,
}

impl<'a, T, F> FixedTabBar<'a, T, F>
where
    T: TabItem,
    F: Fn(&T) -> String,
{
    pub fn new(tabs: &'a [T], title: F) -> Self {
        Self {
            tabs,
            title,
            interaction: None,
            edge: IndicatorEdge::default(),
            spacing: 1,
            style: Style::default(),
            active_style: Style::default().add_modifier(Modifier::BOLD),
            indicator_style: Style::default(),
        }
    }

    /// The interaction to render, usually taken from the pager state.
    pub fn interaction(mut self, interaction: Option<Interaction>) -> Self {
        self.interaction = interaction;
        self
    }

    /// Which edge carries the indicator row.
    pub fn edge(mut self, edge: IndicatorEdge) -> Self {
        self.edge = edge;
        self
    }

    /// Columns between neighbouring buttons.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Style for inactive tab titles.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for the selected tab's title.
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    /// Style for the indicator blocks.
    pub fn indicator_style(mut self, style: Style) -> Self {
        self.indicator_style = style;
        self
    }
}

/// Retained state for [`FixedTabBar`]: the button spans recorded on the
/// last render, used for click hit-testing and indicator lookup.
#[derive(Debug, Clone, Default)]
pub struct FixedTabBarState<I> {
    anchors: AnchorMap<I>,
    area: Rect,
}

impl<I: Clone + Eq + std::hash::Hash> FixedTabBarState<I> {
    pub fn new() -> Self {
        Self {
            anchors: AnchorMap::new(),
            area: Rect::default(),
        }
    }

    /// Select the clicked tab. Returns true if the event was consumed.
    pub fn handle_mouse(&self, mouse: &MouseEvent, selection: &mut Option<I>) -> bool {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return false;
        }
        if !self.area.contains(Position::new(mouse.column, mouse.row)) {
            return false;
        }
        // Hit-test against the cell's center to play fair with the
        // fractional button spans.
        let x = (mouse.column - self.area.x) as f64 + 0.5;
        for (id, span) in &self.anchors {
            if span.contains(x) {
                if selection.as_ref() != Some(id) {
                    debug!("fixed bar click at column {}", mouse.column);
                    *selection = Some(id.clone());
                }
                return true;
            }
        }
        false
    }
}

impl<'a, T, F, I> StatefulWidget for FixedTabBar<'a, T, F>
where
    T: TabItem<Id = I>,
    I: Clone + Eq + std::hash::Hash,
    F: Fn(&T) -> String,
{
    type State = FixedTabBarState<I>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        state.anchors.clear();
        let count = self.tabs.len();
        if count == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let (text_y, indicator_y) = match (self.edge, area.height) {
            (IndicatorEdge::Bottom, 1) | (IndicatorEdge::Top, 1) => (area.top(), None),
            (IndicatorEdge::Bottom, _) => (area.top(), Some(area.bottom() - 1)),
            (IndicatorEdge::Top, _) => (area.top() + 1, Some(area.top())),
        };

        let total_spacing = self.spacing as f64 * (count - 1) as f64;
        let button_width = ((area.width as f64 - total_spacing) / count as f64).max(0.0);
        if button_width <= 0.0 {
            return;
        }

        let active = self
            .interaction
            .map(|i| i.current_index.clamp(0, count as isize - 1) as usize);

        for (i, tab) in self.tabs.iter().enumerate() {
            let left = i as f64 * (button_width + self.spacing as f64);
            let span = AnchorSpan::new(left + button_width / 2.0, button_width);
            state.anchors.insert(tab.id(), span);

            let text = (self.title)(tab);
            let text_width = text.width().min(button_width.round() as usize);
            let text_x = (span.center_x - text_width as f64 / 2.0)
                .round()
                .max(left.ceil()) as u16;
            let style = if active == Some(i) {
                self.active_style
            } else {
                self.style
            };
            buf.set_stringn(
                area.x + text_x.min(area.width.saturating_sub(1)),
                text_y,
                &text,
                text_width.max(1),
                style,
            );
        }

        if let Some(y) = indicator_y {
            let order: Vec<I> = self.tabs.iter().map(|tab| tab.id()).collect();
            if let Some(geometry) = indicator_geometry(self.interaction, &state.anchors, &order) {
                draw_indicator(buf, area, y, geometry, self.indicator_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[derive(Debug, Clone)]
    struct Demo {
        id: u8,
        title: &'static str,
    }

    impl TabItem for Demo {
        type Id = u8;

        fn id(&self) -> u8 {
            self.id
        }
    }

    fn tabs() -> Vec<Demo> {
        vec![
            Demo { id: 0, title: "aa" },
            Demo { id: 1, title: "bb" },
            Demo { id: 2, title: "cc" },
        ]
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn render(
        tabs: &[Demo],
        interaction: Option<Interaction>,
        edge: IndicatorEdge,
        state: &mut FixedTabBarState<u8>,
    ) -> Buffer {
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        let widget = FixedTabBar::new(tabs, |tab: &Demo| tab.title.to_string())
            .interaction(interaction)
            .edge(edge)
            .spacing(0);
        StatefulWidget::render(widget, area, &mut buf, state);
        buf
    }

    #[test]
    fn test_titles_centered_in_even_buttons() {
        let tabs = tabs();
        let mut state = FixedTabBarState::new();
        let buf = render(&tabs, Some(Interaction::settled(0)), IndicatorEdge::Bottom, &mut state);

        // Three ten-column buttons with two-character titles at their centers.
        assert_eq!(row_text(&buf, 0), "    aa        bb        cc    ");
    }

    #[test]
    fn test_settled_indicator_covers_active_button() {
        let tabs = tabs();
        let mut state = FixedTabBarState::new();
        let buf = render(&tabs, Some(Interaction::settled(1)), IndicatorEdge::Bottom, &mut state);

        assert_eq!(row_text(&buf, 1), format!("{}{}{}", " ".repeat(10), "█".repeat(10), " ".repeat(10)));
    }

    #[test]
    fn test_midway_drag_straddles_two_buttons() {
        let tabs = tabs();
        let mut state = FixedTabBarState::new();
        let interaction = Interaction::new(0, 1, 0.5);
        let buf = render(&tabs, Some(interaction), IndicatorEdge::Bottom, &mut state);

        // Center glides from 5.0 to 15.0, halfway is [5, 15).
        assert_eq!(row_text(&buf, 1), format!("{}{}{}", " ".repeat(5), "█".repeat(10), " ".repeat(15)));
    }

    #[test]
    fn test_top_edge_swaps_rows() {
        let tabs = tabs();
        let mut state = FixedTabBarState::new();
        let buf = render(&tabs, Some(Interaction::settled(0)), IndicatorEdge::Top, &mut state);

        assert_eq!(row_text(&buf, 0), format!("{}{}", "█".repeat(10), " ".repeat(20)));
        assert!(row_text(&buf, 1).contains("aa"));
    }

    #[test]
    fn test_no_interaction_draws_no_indicator() {
        let tabs = tabs();
        let mut state = FixedTabBarState::new();
        let buf = render(&tabs, None, IndicatorEdge::Bottom, &mut state);

        assert_eq!(row_text(&buf, 1), " ".repeat(30));
    }

    #[test]
    fn test_active_title_uses_active_style() {
        let tabs = tabs();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        let mut state = FixedTabBarState::new();
        let widget = FixedTabBar::new(&tabs, |tab: &Demo| tab.title.to_string())
            .interaction(Some(Interaction::settled(1)))
            .spacing(0);
        StatefulWidget::render(widget, area, &mut buf, &mut state);

        let active = buf.cell((14, 0)).unwrap().style();
        let inactive = buf.cell((4, 0)).unwrap().style();
        assert!(active.add_modifier.contains(Modifier::BOLD));
        assert!(!inactive.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_click_selects_tab_under_cursor() {
        let tabs = tabs();
        let mut state = FixedTabBarState::new();
        render(&tabs, Some(Interaction::settled(0)), IndicatorEdge::Bottom, &mut state);

        let mut selection = Some(0u8);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 14,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };
        assert!(state.handle_mouse(&click, &mut selection));
        assert_eq!(selection, Some(1));
    }

    #[test]
    fn test_click_outside_bar_is_ignored() {
        let tabs = tabs();
        let mut state = FixedTabBarState::new();
        render(&tabs, Some(Interaction::settled(0)), IndicatorEdge::Bottom, &mut state);

        let mut selection = Some(0u8);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 14,
            row: 4,
            modifiers: KeyModifiers::empty(),
        };
        assert!(!state.handle_mouse(&click, &mut selection));
        assert_eq!(selection, Some(0));
    }

    #[test]
    fn test_single_row_bar_skips_indicator() {
        let tabs = tabs();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        let mut state = FixedTabBarState::new();
        let widget = FixedTabBar::new(&tabs, |tab: &Demo| tab.title.to_string())
            .interaction(Some(Interaction::settled(0)))
            .spacing(0);
        StatefulWidget::render(widget, area, &mut buf, &mut state);

        assert!(row_text(&buf, 0).contains("aa"));
        assert!(!row_text(&buf, 0).contains('█'));
    }

    #[test]
    fn test_fractional_buttons_keep_indicator_continuous() {
        // 32 columns over 3 tabs: button width 32/3, no dead columns while
        // sweeping from tab 0 to tab 2.
        let tabs = tabs();
        let area = Rect::new(0, 0, 32, 2);
        let mut state = FixedTabBarState::new();

        let mut previous_left = 0.0;
        for step in 0..=8 {
            let fraction = step as f64 / 4.0;
            let (current, next, fraction) = if fraction <= 1.0 {
                (0, 1, fraction)
            } else {
                (1, 2, fraction - 1.0)
            };
            let mut buf = Buffer::empty(area);
            let widget = FixedTabBar::new(&tabs, |tab: &Demo| tab.title.to_string())
                .interaction(Some(Interaction::new(current, next, fraction)))
                .spacing(0);
            StatefulWidget::render(widget, area, &mut buf, &mut state);

            let row = row_text(&buf, 1);
            let left = row.find(|c| c != ' ').unwrap() as f64;
            assert!(left >= previous_left);
            previous_left = left;
        }
    }
}
