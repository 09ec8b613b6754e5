use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::StatefulWidget,
};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use tabglide_core::{
    indicator_geometry, AnchorMap, AnchorSpan, IndicatorGeometry, Interaction, MotionConfig,
    TabItem,
};

use super::indicator::{draw_indicator, IndicatorEdge};
use crate::motion::MotionAnimator;

/// Columns per wheel notch when scrolling the strip by hand.
const WHEEL_STEP: f64 = 4.0;

/// Tab bar that sizes buttons to their titles and scrolls horizontally.
///
/// Buttons live on a virtual strip wider than the viewport; the strip
/// scrolls to keep the selected tab in view, proportionally biased so the
/// first tab rests at the left edge and the last at the right. The
/// indicator glides on the same strip and is clipped with the buttons.
pub struct ScrollingTabBar<'a, T, F>
where
    T: TabItem,
    F: Fn(&T) -> String,
{
    tabs: &'a [T],
    title: F,
    interaction: Option<Interaction>,
    edge: IndicatorEdge,
    spacing: u16,
    padding: u16,
    style: Style,
    active_style: Style,
    indicator_style: Style,
}

impl<'a, T, F> ScrollingTabBar<'a, T, F>
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
            spacing: 2,
            padding: 1,
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

    /// Horizontal padding inside each button.
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
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

/// Retained state for [`ScrollingTabBar`]: strip scroll position plus the
/// button spans recorded on the last render, in strip coordinates.
#[derive(Debug, Clone)]
pub struct ScrollingTabBarState<I> {
    scroll: MotionAnimator,
    anchors: AnchorMap<I>,
    last_selection: Option<I>,
    area: Rect,
    content_width: f64,
    initialized: bool,
}

impl<I: Clone + Eq + std::hash::Hash> Default for ScrollingTabBarState<I> {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl<I: Clone + Eq + std::hash::Hash> ScrollingTabBarState<I> {
    pub fn new(motion: MotionConfig) -> Self {
        Self {
            scroll: MotionAnimator::new(motion),
            anchors: AnchorMap::new(),
            last_selection: None,
            area: Rect::default(),
            content_width: 0.0,
            initialized: false,
        }
    }

    pub fn set_motion_config(&mut self, motion: MotionConfig) {
        self.scroll.set_config(motion);
    }

    /// Whether the strip is gliding and wants animation-rate frames.
    pub fn is_animating(&self) -> bool {
        self.scroll.needs_update()
    }

    fn max_scroll(&self) -> f64 {
        (self.content_width - self.area.width as f64).max(0.0)
    }

    /// Scroll target that brings a tab into view, biased by its position in
    /// the strip: the first tab aligns to the left edge, the last to the
    /// right, everything between proportionally.
    fn follow_target(&self, span: &AnchorSpan, index: usize, count: usize) -> f64 {
        let t = if count == 0 {
            0.0
        } else {
            index as f64 / count as f64
        };
        let target = span.left() + t * span.width - t * self.area.width as f64;
        target.clamp(0.0, self.max_scroll())
    }

    /// Advance animations and follow selection changes made elsewhere.
    /// Call once per frame before rendering.
    pub fn tick<T: TabItem<Id = I>>(&mut self, selection: &Option<I>, tabs: &[T]) {
        if self.area.width == 0 || tabs.is_empty() {
            return;
        }

        if *selection != self.last_selection {
            self.last_selection = selection.clone();
            let found = selection.as_ref().and_then(|id| {
                let index = tabs.iter().position(|tab| &tab.id() == id)?;
                let span = self.anchors.get(id)?;
                Some((index, *span))
            });
            if let Some((index, span)) = found {
                let target = self.follow_target(&span, index, tabs.len());
                debug!("scrolling bar following selection to column {:.1}", target);
                self.scroll.animate_to(target, self.max_scroll());
            }
        }

        self.scroll.update(self.max_scroll());
    }

    /// Select clicked tabs and scroll the strip on wheel input. Returns
    /// true if the event was consumed.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, selection: &mut Option<I>) -> bool {
        if !self.area.contains(Position::new(mouse.column, mouse.row)) {
            return false;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let x = (mouse.column - self.area.x) as f64 + 0.5 + self.scroll.position();
                for (id, span) in &self.anchors {
                    if span.contains(x) {
                        if selection.as_ref() != Some(id) {
                            debug!("scrolling bar click at column {}", mouse.column);
                            *selection = Some(id.clone());
                        }
                        return true;
                    }
                }
                false
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.scroll.nudge_by(WHEEL_STEP, self.max_scroll());
                true
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                self.scroll.nudge_by(-WHEEL_STEP, self.max_scroll());
                true
            }
            _ => false,
        }
    }
}

impl<'a, T, F, I> StatefulWidget for ScrollingTabBar<'a, T, F>
where
    T: TabItem<Id = I>,
    I: Clone + Eq + std::hash::Hash,
    F: Fn(&T) -> String,
{
    type State = ScrollingTabBarState<I>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        state.anchors.clear();
        let count = self.tabs.len();
        if count == 0 || area.width == 0 || area.height == 0 {
            state.content_width = 0.0;
            return;
        }

        let (text_y, indicator_y) = match (self.edge, area.height) {
            (IndicatorEdge::Bottom, 1) | (IndicatorEdge::Top, 1) => (area.top(), None),
            (IndicatorEdge::Bottom, _) => (area.top(), Some(area.bottom() - 1)),
            (IndicatorEdge::Top, _) => (area.top() + 1, Some(area.top())),
        };

        // Lay the buttons out on the strip: title width plus padding on
        // both sides, spacing between buttons.
        let titles: Vec<String> = self.tabs.iter().map(|tab| (self.title)(tab)).collect();
        let mut left = 0.0;
        for (tab, text) in self.tabs.iter().zip(&titles) {
            let width = (text.width() + 2 * self.padding as usize) as f64;
            state
                .anchors
                .insert(tab.id(), AnchorSpan::new(left + width / 2.0, width));
            left += width + self.spacing as f64;
        }
        state.content_width = left - self.spacing as f64;

        // First layout with a known interaction: put the selected tab in
        // view without animating.
        if !state.initialized {
            if let Some(interaction) = self.interaction {
                let index = interaction.current_index.clamp(0, count as isize - 1) as usize;
                if let Some(span) = state.anchors.get(&self.tabs[index].id()).copied() {
                    let target = state.follow_target(&span, index, count);
                    state.scroll.set_position(target);
                }
                state.initialized = true;
            }
        }

        let scroll = state.scroll.position();
        let active = self
            .interaction
            .map(|i| i.current_index.clamp(0, count as isize - 1) as usize);

        for (i, (tab, text)) in self.tabs.iter().zip(&titles).enumerate() {
            let span = state.anchors[&tab.id()];
            let style = if active == Some(i) {
                self.active_style
            } else {
                self.style
            };

            // Draw the title character by character so a button half off
            // the edge is clipped instead of skipped.
            let mut x = span.left() + self.padding as f64;
            for ch in text.chars() {
                let char_width = ch.width().unwrap_or(0);
                if char_width == 0 {
                    continue;
                }
                let screen_x = (x - scroll).round() as i64;
                x += char_width as f64;
                if screen_x < 0 || screen_x + char_width as i64 > area.width as i64 {
                    continue;
                }
                let mut utf8 = [0u8; 4];
                buf.set_stringn(
                    area.x + screen_x as u16,
                    text_y,
                    ch.encode_utf8(&mut utf8),
                    char_width,
                    style,
                );
            }
        }

        if let Some(y) = indicator_y {
            let order: Vec<I> = self.tabs.iter().map(|tab| tab.id()).collect();
            if let Some(geometry) = indicator_geometry(self.interaction, &state.anchors, &order) {
                let on_screen = IndicatorGeometry {
                    center_x: geometry.center_x - scroll,
                    width: geometry.width,
                };
                draw_indicator(buf, area, y, on_screen, self.indicator_style);
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
            Demo { id: 0, title: "AA" },
            Demo {
                id: 1,
                title: "BBBB",
            },
            Demo { id: 2, title: "CC" },
        ]
    }

    fn instant_state() -> ScrollingTabBarState<u8> {
        ScrollingTabBarState::new(MotionConfig {
            smooth_enabled: false,
            ..Default::default()
        })
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn render(
        tabs: &[Demo],
        interaction: Option<Interaction>,
        state: &mut ScrollingTabBarState<u8>,
    ) -> Buffer {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        let widget = ScrollingTabBar::new(tabs, |tab: &Demo| tab.title.to_string())
            .interaction(interaction);
        StatefulWidget::render(widget, area, &mut buf, state);
        buf
    }

    #[test]
    fn test_buttons_sized_by_title() {
        // Buttons: [0,4) [6,12) [14,18), strip 18 columns in a 10 column
        // viewport. Only the head of the strip is visible.
        let tabs = tabs();
        let mut state = instant_state();
        let buf = render(&tabs, Some(Interaction::settled(0)), &mut state);

        assert_eq!(row_text(&buf, 0), " AA    BBB");
        assert!((state.content_width - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_selection_follow_scrolls_strip() {
        let tabs = tabs();
        let mut state = instant_state();
        render(&tabs, Some(Interaction::settled(0)), &mut state);

        // Selecting the last tab pulls the tail of the strip into view.
        let selection = Some(2u8);
        state.tick(&selection, &tabs);
        let buf = render(&tabs, Some(Interaction::settled(2)), &mut state);

        assert_eq!(row_text(&buf, 0), "BBB    CC ");
        assert_eq!(row_text(&buf, 1), format!("{}{}", " ".repeat(6), "████"));
    }

    #[test]
    fn test_indicator_clipped_with_buttons() {
        let tabs = tabs();
        let mut state = instant_state();
        render(&tabs, Some(Interaction::settled(0)), &mut state);

        // Interaction moved to the middle tab but the strip hasn't
        // scrolled: its button spans strip [6,12) and the viewport ends at
        // column 10, so the indicator is cut at the edge.
        let buf = render(&tabs, Some(Interaction::settled(1)), &mut state);
        assert_eq!(row_text(&buf, 1), format!("{}{}", " ".repeat(6), "████"));
    }

    #[test]
    fn test_click_uses_strip_coordinates() {
        let tabs = tabs();
        let mut state = instant_state();
        render(&tabs, Some(Interaction::settled(0)), &mut state);

        // Scroll the strip, then click where button 2 lands on screen.
        let selection = Some(2u8);
        state.tick(&selection, &tabs);
        render(&tabs, Some(Interaction::settled(2)), &mut state);

        let mut clicked = Some(2u8);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };
        assert!(state.handle_mouse(&click, &mut clicked));
        assert_eq!(clicked, Some(1));
    }

    #[test]
    fn test_wheel_scrolls_strip() {
        let tabs = tabs();
        let mut state = instant_state();
        render(&tabs, Some(Interaction::settled(0)), &mut state);

        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };
        assert!(state.handle_mouse(&wheel, &mut Some(0u8)));

        let buf = render(&tabs, Some(Interaction::settled(0)), &mut state);
        // Strip shifted four columns left.
        assert_eq!(row_text(&buf, 0), "   BBBB   ");
    }

    #[test]
    fn test_first_render_lands_on_selected_tab() {
        let tabs = tabs();
        let mut state = instant_state();

        // First ever render already settled on the last tab: no animation,
        // the strip starts scrolled.
        let buf = render(&tabs, Some(Interaction::settled(2)), &mut state);
        assert_eq!(row_text(&buf, 0), "BBB    CC ");
    }

    #[test]
    fn test_empty_tabs_render_nothing() {
        let tabs: Vec<Demo> = Vec::new();
        let mut state = instant_state();
        let buf = render(&tabs, None, &mut state);
        assert_eq!(row_text(&buf, 0), " ".repeat(10));
    }
}
