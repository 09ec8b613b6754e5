use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::StatefulWidget,
};
use tracing::{debug, trace};

use tabglide_core::{derive_interaction, Interaction, MotionConfig, PageSample, SampleSet, TabItem};

use crate::motion::MotionAnimator;

/// Horizontally paged container: one full-size page per tab, swipeable with
/// the mouse.
///
/// The widget itself is stateless per frame; [`PagerState`] owns the strip
/// position, drag bookkeeping and the derived [`Interaction`] that tab bars
/// consume. Pages are drawn by the `render_page` closure so callers keep
/// full control over content.
pub struct TabPager<'a, T, F>
where
    T: TabItem,
    F: Fn(&T, Rect, &mut Buffer),
{
    tabs: &'a [T],
    selection: Option<&'a T::Id>,
    render_page: F,
    on_interaction_change: Option<Box<dyn FnMut(Option<Interaction>) + 'a>>,
}

impl<'a, T, F> TabPager<'a, T, F>
where
    T: TabItem,
    F: Fn(&T, Rect, &mut Buffer),
{
    pub fn new(tabs: &'a [T], render_page: F) -> Self {
        Self {
            tabs,
            selection: None,
            render_page,
            on_interaction_change: None,
        }
    }

    /// The currently selected tab, as owned by the caller.
    pub fn selection(mut self, selection: Option<&'a T::Id>) -> Self {
        self.selection = selection;
        self
    }

    /// Observe every change of the derived interaction, including the change
    /// back to `None` when inputs go missing.
    pub fn on_interaction_change(
        mut self,
        callback: impl FnMut(Option<Interaction>) + 'a,
    ) -> Self {
        self.on_interaction_change = Some(Box::new(callback));
        self
    }
}

/// An in-flight mouse drag on the page strip.
#[derive(Debug, Clone, Copy)]
struct DragState {
    last_x: u16,
}

/// Retained state for [`TabPager`].
#[derive(Debug, Clone)]
pub struct PagerState<I> {
    scroll: MotionAnimator,
    drag: Option<DragState>,
    samples: SampleSet<I>,
    interaction: Option<Interaction>,
    last_selection: Option<I>,
    area: Rect,
    initialized: bool,
}

impl<I: Clone + PartialEq> Default for PagerState<I> {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl<I: Clone + PartialEq> PagerState<I> {
    pub fn new(motion: MotionConfig) -> Self {
        Self {
            scroll: MotionAnimator::new(motion),
            drag: None,
            samples: SampleSet::new(),
            interaction: None,
            last_selection: None,
            area: Rect::default(),
            initialized: false,
        }
    }

    pub fn set_motion_config(&mut self, motion: MotionConfig) {
        self.scroll.set_config(motion);
    }

    /// The interaction derived on the most recent render, if any.
    pub fn interaction(&self) -> Option<Interaction> {
        self.interaction
    }

    /// Whether the strip is gliding and wants animation-rate frames.
    pub fn is_animating(&self) -> bool {
        self.scroll.needs_update()
    }

    /// Advance animations and pick up selection changes made outside this
    /// widget (bar clicks, programmatic selection). Call once per frame
    /// before rendering.
    pub fn tick<T: TabItem<Id = I>>(&mut self, selection: &Option<I>, tabs: &[T]) {
        if self.area.width == 0 || tabs.is_empty() {
            return;
        }
        let page_width = self.area.width as f64;
        let max = (tabs.len() - 1) as f64 * page_width;

        if self.drag.is_none() && *selection != self.last_selection {
            self.last_selection = selection.clone();
            if let Some(index) = index_of(selection.as_ref(), tabs) {
                debug!("pager selection changed, gliding to page {}", index);
                self.scroll.animate_to(index as f64 * page_width, max);
            }
        }

        self.scroll.update(max);
    }

    /// Select a tab by index, animating the strip to it.
    ///
    /// Returns true if the selection actually changed.
    pub fn select<T: TabItem<Id = I>>(
        &mut self,
        index: usize,
        selection: &mut Option<I>,
        tabs: &[T],
    ) -> bool {
        if tabs.is_empty() {
            return false;
        }
        let index = index.min(tabs.len() - 1);
        let id = tabs[index].id();
        let changed = selection.as_ref() != Some(&id);

        *selection = Some(id.clone());
        self.last_selection = Some(id);

        if self.area.width > 0 {
            let page_width = self.area.width as f64;
            self.scroll
                .animate_to(index as f64 * page_width, (tabs.len() - 1) as f64 * page_width);
        }
        changed
    }

    /// Move the selection with Left/Right. Returns true if handled.
    pub fn handle_key<T: TabItem<Id = I>>(
        &mut self,
        key: &KeyEvent,
        selection: &mut Option<I>,
        tabs: &[T],
    ) -> bool {
        if tabs.is_empty() {
            return false;
        }
        let current = index_of(selection.as_ref(), tabs).unwrap_or(0);
        match key.code {
            KeyCode::Left => {
                if current > 0 {
                    self.select(current - 1, selection, tabs);
                }
                true
            }
            KeyCode::Right => {
                if current + 1 < tabs.len() {
                    self.select(current + 1, selection, tabs);
                }
                true
            }
            _ => false,
        }
    }

    /// Drive the strip from mouse input. Returns true if the event was
    /// consumed.
    ///
    /// While a drag is in flight the selection follows the dominant page,
    /// the one covering more than half the viewport, so the interaction
    /// fraction stays within [0, 0.5] and the indicator leads the drag.
    pub fn handle_mouse<T: TabItem<Id = I>>(
        &mut self,
        mouse: &MouseEvent,
        selection: &mut Option<I>,
        tabs: &[T],
    ) -> bool {
        if tabs.is_empty() || self.area.width == 0 {
            return false;
        }
        let page_width = self.area.width as f64;
        let max = (tabs.len() - 1) as f64 * page_width;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.area.contains(Position::new(mouse.column, mouse.row)) {
                    return false;
                }
                self.scroll.cancel();
                self.drag = Some(DragState {
                    last_x: mouse.column,
                });
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(drag) = self.drag.as_mut() else {
                    return false;
                };
                let delta = drag.last_x as f64 - mouse.column as f64;
                drag.last_x = mouse.column;
                if delta == 0.0 {
                    return true;
                }

                // Rubber-band: allow half a page of overscroll at the ends.
                let position = (self.scroll.position() + delta)
                    .clamp(-page_width / 2.0, max + page_width / 2.0);
                self.scroll.set_position(position);

                let dominant = (position / page_width)
                    .round()
                    .clamp(0.0, (tabs.len() - 1) as f64) as usize;
                let id = tabs[dominant].id();
                if selection.as_ref() != Some(&id) {
                    debug!("drag crossed midpoint, selection now page {}", dominant);
                    *selection = Some(id.clone());
                    self.last_selection = Some(id);
                }
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag.take().is_none() {
                    return false;
                }
                let index = (self.scroll.position() / page_width)
                    .round()
                    .clamp(0.0, (tabs.len() - 1) as f64) as usize;
                let id = tabs[index].id();
                if selection.as_ref() != Some(&id) {
                    *selection = Some(id.clone());
                    self.last_selection = Some(id);
                }
                self.scroll.animate_to(index as f64 * page_width, max);
                true
            }
            _ => false,
        }
    }
}

fn index_of<T: TabItem>(id: Option<&T::Id>, tabs: &[T]) -> Option<usize> {
    let id = id?;
    tabs.iter().position(|tab| &tab.id() == id)
}

impl<'a, T, F, I> StatefulWidget for TabPager<'a, T, F>
where
    T: TabItem<Id = I>,
    I: Clone + PartialEq,
    F: Fn(&T, Rect, &mut Buffer),
{
    type State = PagerState<I>;

    fn render(mut self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 || self.tabs.is_empty() {
            state.area = area;
            state.samples.begin_pass();
            update_interaction(state, None, &mut self.on_interaction_change);
            return;
        }
        let page_width = area.width as f64;

        // First layout: land on the selected page without animating.
        if !state.initialized {
            let index = index_of(self.selection, self.tabs).unwrap_or(0);
            state.scroll.set_position(index as f64 * page_width);
            state.last_selection = self.selection.cloned();
            state.initialized = true;
        } else if state.area.width != area.width {
            // Column positions don't survive a resize; re-anchor on the
            // last settled selection.
            let index = index_of(state.last_selection.as_ref(), self.tabs).unwrap_or(0);
            state.drag = None;
            state.scroll.set_position(index as f64 * page_width);
        }
        state.area = area;

        // Sample every page's offset for this pass, then derive the
        // transition state from the samples alone.
        let position = state.scroll.position();
        state.samples.begin_pass();
        for (i, tab) in self.tabs.iter().enumerate() {
            state.samples.record(PageSample {
                tab_id: tab.id(),
                offset: i as f64 * page_width - position,
                width: page_width,
            });
        }
        let order: Vec<I> = self.tabs.iter().map(|tab| tab.id()).collect();
        let interaction = derive_interaction(&state.samples, self.selection, &order);
        update_interaction(state, interaction, &mut self.on_interaction_change);

        // At most two pages are ever visible; draw each shifted by its
        // current offset, clipping to the strip area.
        let first_visible = (position / page_width).floor() as isize;
        for page in [first_visible, first_visible + 1] {
            if page < 0 || page as usize >= self.tabs.len() {
                continue;
            }
            let offset = (page as f64 * page_width - position).round() as i32;
            if offset.abs() >= area.width as i32 {
                continue;
            }
            let tab = &self.tabs[page as usize];
            if offset == 0 {
                (self.render_page)(tab, area, buf);
            } else {
                let mut scratch = Buffer::empty(area);
                (self.render_page)(tab, area, &mut scratch);
                blit_shifted(&scratch, buf, area, offset);
            }
        }
    }
}

fn update_interaction<I>(
    state: &mut PagerState<I>,
    interaction: Option<Interaction>,
    callback: &mut Option<Box<dyn FnMut(Option<Interaction>) + '_>>,
) {
    if interaction != state.interaction {
        trace!("pager interaction now {:?}", interaction);
        state.interaction = interaction;
        if let Some(callback) = callback.as_mut() {
            callback(interaction);
        }
    }
}

/// Copy `src` into `dst` shifted horizontally by `offset` columns, keeping
/// only cells that land inside `area`.
fn blit_shifted(src: &Buffer, dst: &mut Buffer, area: Rect, offset: i32) {
    for y in area.top()..area.bottom() {
        for x in 0..area.width {
            let shifted = x as i32 + offset;
            if shifted < 0 || shifted >= area.width as i32 {
                continue;
            }
            if let (Some(from), Some(to)) = (
                src.cell((area.x + x, y)),
                dst.cell_mut((area.x + shifted as u16, y)),
            ) {
                *to = from.clone();
            }
        }
    }
}
