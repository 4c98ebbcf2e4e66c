//! Async runtime around the page controller
//!
//! The host produces scroll samples on any thread through a [`ScrollSender`];
//! the [`ScrollSyncBridge`] task applies them, together with application
//! commands and timers, to the controller in order.

mod autoplay;
mod bridge;
mod handle;
mod headless;

pub use autoplay::AutoplayTimer;
pub use bridge::{CarouselCommand, ScrollEvent, ScrollSender, ScrollSyncBridge};
pub use handle::CarouselHandle;
pub use headless::HeadlessHost;
