use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use tracing::debug;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use tabglide_core::{AppConfig, TabItem};
use tabglide_tui::{
    FixedTabBar, FixedTabBarState, IndicatorEdge, PagerState, ScrollingTabBar,
    ScrollingTabBarState, TabPager, Theme,
};

/// One demo tab: a stable id plus a display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTab {
    pub id: u8,
    pub title: &'static str,
}

impl TabItem for DemoTab {
    type Id = u8;

    fn id(&self) -> u8 {
        self.id
    }
}

/// The demo screens, selectable with 1/2/3 or `--screen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Fixed-width tab bar above the pages
    Top,
    /// Scrolling tab bar below the pages
    Bottom,
    /// Bars on both edges sharing one pager
    Dual,
}

fn feed_tabs() -> Vec<DemoTab> {
    vec![
        DemoTab {
            id: 0,
            title: "Recommend",
        },
        DemoTab {
            id: 1,
            title: "Following",
        },
        DemoTab {
            id: 2,
            title: "Popular",
        },
        DemoTab { id: 3, title: "New" },
        DemoTab {
            id: 4,
            title: "Trend",
        },
    ]
}

/// Enough tabs that the scrolling bar actually has to scroll.
fn channel_tabs() -> Vec<DemoTab> {
    let mut tabs = feed_tabs();
    tabs.extend([
        DemoTab {
            id: 5,
            title: "Sports",
        },
        DemoTab {
            id: 6,
            title: "Music",
        },
        DemoTab {
            id: 7,
            title: "Tech",
        },
    ]);
    tabs
}

fn stats_tabs() -> Vec<DemoTab> {
    vec![
        DemoTab {
            id: 0,
            title: "Calories",
        },
        DemoTab { id: 1, title: "PFC" },
        DemoTab {
            id: 2,
            title: "Weight",
        },
    ]
}

struct TopScreen {
    tabs: Vec<DemoTab>,
    selection: Option<u8>,
    pager: PagerState<u8>,
    bar: FixedTabBarState<u8>,
}

struct BottomScreen {
    tabs: Vec<DemoTab>,
    selection: Option<u8>,
    pager: PagerState<u8>,
    bar: ScrollingTabBarState<u8>,
}

struct DualScreen {
    tabs: Vec<DemoTab>,
    selection: Option<u8>,
    pager: PagerState<u8>,
    top_bar: FixedTabBarState<u8>,
    bottom_bar: ScrollingTabBarState<u8>,
}

/// Demo application state
pub struct App {
    pub should_quit: bool,
    pub config: AppConfig,
    theme: Theme,
    active: Screen,
    top: TopScreen,
    bottom: BottomScreen,
    dual: DualScreen,
}

impl App {
    pub fn new(config: AppConfig, screen: Screen) -> Self {
        let motion = config.ui.motion.clone();
        Self {
            should_quit: false,
            theme: Theme::default(),
            active: screen,
            top: TopScreen {
                tabs: feed_tabs(),
                selection: Some(0),
                pager: PagerState::new(motion.clone()),
                bar: FixedTabBarState::new(),
            },
            bottom: BottomScreen {
                tabs: channel_tabs(),
                selection: Some(0),
                pager: PagerState::new(motion.clone()),
                bar: ScrollingTabBarState::new(motion.clone()),
            },
            dual: DualScreen {
                tabs: stats_tabs(),
                selection: Some(0),
                pager: PagerState::new(motion.clone()),
                top_bar: FixedTabBarState::new(),
                bottom_bar: ScrollingTabBarState::new(motion),
            },
            config,
        }
    }

    /// Advance animations on the active screen. Call once per frame.
    pub fn tick(&mut self) {
        match self.active {
            Screen::Top => {
                let screen = &mut self.top;
                screen.pager.tick(&screen.selection, &screen.tabs);
            }
            Screen::Bottom => {
                let screen = &mut self.bottom;
                screen.pager.tick(&screen.selection, &screen.tabs);
                screen.bar.tick(&screen.selection, &screen.tabs);
            }
            Screen::Dual => {
                let screen = &mut self.dual;
                screen.pager.tick(&screen.selection, &screen.tabs);
                screen.bottom_bar.tick(&screen.selection, &screen.tabs);
            }
        }
    }

    /// Whether any animator on the active screen wants animation-rate frames.
    pub fn needs_motion_update(&self) -> bool {
        match self.active {
            Screen::Top => self.top.pager.is_animating(),
            Screen::Bottom => self.bottom.pager.is_animating() || self.bottom.bar.is_animating(),
            Screen::Dual => self.dual.pager.is_animating() || self.dual.bottom_bar.is_animating(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.set_screen(Screen::Top),
            KeyCode::Char('2') => self.set_screen(Screen::Bottom),
            KeyCode::Char('3') => self.set_screen(Screen::Dual),
            _ => {
                match self.active {
                    Screen::Top => {
                        let screen = &mut self.top;
                        screen
                            .pager
                            .handle_key(&key, &mut screen.selection, &screen.tabs);
                    }
                    Screen::Bottom => {
                        let screen = &mut self.bottom;
                        screen
                            .pager
                            .handle_key(&key, &mut screen.selection, &screen.tabs);
                    }
                    Screen::Dual => {
                        let screen = &mut self.dual;
                        screen
                            .pager
                            .handle_key(&key, &mut screen.selection, &screen.tabs);
                    }
                };
            }
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.active != screen {
            debug!("switching to {:?} screen", screen);
            self.active = screen;
        }
    }

    /// Route mouse input: bars claim their rows first, the pager takes the
    /// rest.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        match self.active {
            Screen::Top => {
                let screen = &mut self.top;
                if screen.bar.handle_mouse(mouse, &mut screen.selection) {
                    return;
                }
                screen
                    .pager
                    .handle_mouse(mouse, &mut screen.selection, &screen.tabs);
            }
            Screen::Bottom => {
                let screen = &mut self.bottom;
                if screen.bar.handle_mouse(mouse, &mut screen.selection) {
                    return;
                }
                screen
                    .pager
                    .handle_mouse(mouse, &mut screen.selection, &screen.tabs);
            }
            Screen::Dual => {
                let screen = &mut self.dual;
                if screen.top_bar.handle_mouse(mouse, &mut screen.selection) {
                    return;
                }
                if screen.bottom_bar.handle_mouse(mouse, &mut screen.selection) {
                    return;
                }
                screen
                    .pager
                    .handle_mouse(mouse, &mut screen.selection, &screen.tabs);
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main layout: content + status bar
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(size);

        match self.active {
            Screen::Top => self.render_top(frame, main_layout[0]),
            Screen::Bottom => self.render_bottom(frame, main_layout[0]),
            Screen::Dual => self.render_dual(frame, main_layout[0]),
        }
        self.render_status(frame, main_layout[1]);
    }

    fn render_top(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        let theme = &self.theme;
        let screen = &mut self.top;

        // Pager renders first so the bar sees this frame's interaction. The
        // callback form is used here; the other screens read the accessor.
        let mut interaction = screen.pager.interaction();
        let pager = TabPager::new(&screen.tabs, |tab: &DemoTab, area, buf| {
            render_feed_page(tab, area, buf, theme)
        })
        .selection(screen.selection.as_ref())
        .on_interaction_change(|change| interaction = change);
        frame.render_stateful_widget(pager, chunks[1], &mut screen.pager);

        let bar = FixedTabBar::new(&screen.tabs, |tab: &DemoTab| tab.title.to_string())
            .interaction(interaction)
            .edge(IndicatorEdge::Bottom)
            .style(Style::default().fg(theme.grey1))
            .active_style(Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD))
            .indicator_style(Style::default().fg(theme.accent));
        frame.render_stateful_widget(bar, chunks[0], &mut screen.bar);
    }

    fn render_bottom(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(area);

        let theme = &self.theme;
        let screen = &mut self.bottom;

        let pager = TabPager::new(&screen.tabs, |tab: &DemoTab, area, buf| {
            render_feed_page(tab, area, buf, theme)
        })
        .selection(screen.selection.as_ref());
        frame.render_stateful_widget(pager, chunks[0], &mut screen.pager);

        let bar = ScrollingTabBar::new(&screen.tabs, |tab: &DemoTab| tab.title.to_string())
            .interaction(screen.pager.interaction())
            .edge(IndicatorEdge::Top)
            .style(Style::default().fg(theme.grey1))
            .active_style(Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD))
            .indicator_style(Style::default().fg(theme.yellow));
        frame.render_stateful_widget(bar, chunks[1], &mut screen.bar);
    }

    fn render_dual(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(area);

        let theme = &self.theme;
        let screen = &mut self.dual;

        let pager = TabPager::new(&screen.tabs, |tab: &DemoTab, area, buf| {
            render_stats_page(tab, area, buf, theme)
        })
        .selection(screen.selection.as_ref());
        frame.render_stateful_widget(pager, chunks[1], &mut screen.pager);

        // Both bars consume the same interaction and stay in lockstep.
        let interaction = screen.pager.interaction();

        let top_bar = FixedTabBar::new(&screen.tabs, |tab: &DemoTab| tab.title.to_string())
            .interaction(interaction)
            .edge(IndicatorEdge::Bottom)
            .style(Style::default().fg(theme.grey1))
            .active_style(Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD))
            .indicator_style(Style::default().fg(theme.green));
        frame.render_stateful_widget(top_bar, chunks[0], &mut screen.top_bar);

        let bottom_bar = ScrollingTabBar::new(&screen.tabs, |tab: &DemoTab| tab.title.to_string())
            .interaction(interaction)
            .edge(IndicatorEdge::Top)
            .style(Style::default().fg(theme.grey1))
            .active_style(Style::default().fg(theme.blue).add_modifier(Modifier::BOLD))
            .indicator_style(Style::default().fg(theme.blue));
        frame.render_stateful_widget(bottom_bar, chunks[2], &mut screen.bottom_bar);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let screen_str = match self.active {
            Screen::Top => "TOP BAR",
            Screen::Bottom => "BOTTOM BAR",
            Screen::Dual => "DUAL BARS",
        };

        let (tabs, selection) = match self.active {
            Screen::Top => (&self.top.tabs, &self.top.selection),
            Screen::Bottom => (&self.bottom.tabs, &self.bottom.selection),
            Screen::Dual => (&self.dual.tabs, &self.dual.selection),
        };
        let position = selection
            .and_then(|id| tabs.iter().position(|tab| tab.id == id))
            .map(|index| index + 1)
            .unwrap_or(0);

        let status_text = format!(" {} | Tab {}/{}", screen_str, position, tabs.len());
        let help_hint = " q:quit 1/2/3:screen arrows:tab drag:swipe ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(self.theme.fg0).bg(self.theme.bg1),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(self.theme.bg1),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(self.theme.grey1).bg(self.theme.bg1),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// A page of list items, one list per tab.
fn render_feed_page(tab: &DemoTab, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", tab.title),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for i in 1..=40 {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>3}  ", i), Style::default().fg(theme.grey0)),
            Span::styled(
                format!("{} item {}", tab.title, i),
                Style::default().fg(theme.fg1),
            ),
        ]));
    }
    Paragraph::new(lines)
        .style(Style::default().bg(theme.bg0))
        .render(area, buf);
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A page of one-week measurements, one metric per tab.
fn render_stats_page(tab: &DemoTab, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", tab.title),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for (day, name) in WEEKDAYS.iter().enumerate() {
        let value = match tab.id {
            0 => format!("{} kcal", 1850 + day * 65),
            1 => format!(
                "P {}g  F {}g  C {}g",
                70 + day * 2,
                55 + day,
                230 + day * 5
            ),
            _ => format!("{:.1} kg", 72.5 - day as f64 * 0.2),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {}  ", name), Style::default().fg(theme.grey0)),
            Span::styled(value, Style::default().fg(theme.fg1)),
        ]));
    }
    Paragraph::new(lines)
        .style(Style::default().bg(theme.bg0))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_number_keys_switch_screens() {
        let mut app = App::new(AppConfig::default(), Screen::Top);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.active, Screen::Bottom);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.active, Screen::Dual);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.active, Screen::Top);
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::new(AppConfig::default(), Screen::Top);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrows_move_selection_on_active_screen() {
        let mut app = App::new(AppConfig::default(), Screen::Top);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.top.selection, Some(1));
        // The other screens are untouched.
        assert_eq!(app.bottom.selection, Some(0));

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.top.selection, Some(0));
    }

    #[test]
    fn test_demo_tab_ids_unique_per_screen() {
        for tabs in [feed_tabs(), channel_tabs(), stats_tabs()] {
            let mut ids: Vec<u8> = tabs.iter().map(|tab| tab.id).collect();
            ids.dedup();
            assert_eq!(ids.len(), tabs.len());
        }
    }
}
