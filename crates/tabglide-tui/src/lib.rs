pub mod event;
pub mod motion;
pub mod theme;
pub mod widgets;

pub use event::{AppEvent, EventHandler};
pub use theme::Theme;
pub use widgets::{
    FixedTabBar, FixedTabBarState, IndicatorEdge, PagerState, ScrollingTabBar,
    ScrollingTabBarState, TabPager,
};
