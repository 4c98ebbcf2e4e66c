mod carousel;
mod indicator;
mod status_bar;

pub use carousel::{CarouselWidget, SlideCard, SlideRenderer};
pub use indicator::IndicatorWidget;
pub use status_bar::StatusBarWidget;
