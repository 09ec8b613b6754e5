mod fixed_bar;
mod indicator;
mod pager;
mod scrolling_bar;

pub use fixed_bar::{FixedTabBar, FixedTabBarState};
pub use indicator::IndicatorEdge;
pub use pager::{PagerState, TabPager};
pub use scrolling_bar::{ScrollingTabBar, ScrollingTabBarState};
