pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod indicator;
pub mod layout;
pub mod runtime;
pub mod sequence;

pub use config::{AppConfig, CarouselConfig, EasingType, IndicatorConfig, ScrollConfig, TimingConfig};
pub use controller::{ChannelHost, HostCommand, PageController, PageStatus, Phase, ScrollHost};
pub use error::{Error, Result};
pub use layout::PageLayout;
pub use runtime::{CarouselHandle, HeadlessHost, ScrollSender, ScrollSyncBridge};
