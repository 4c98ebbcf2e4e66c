//! Derived animation values
//!
//! - `easing` - easing curves for programmatic scrolls and indicator tweens
//! - `timing` - progress and interpolation helpers
//! - `transform` - per-page scale/opacity/parallax driven by the scroll offset
//! - `tween` - eased transition of a single value toward a moving target

pub mod easing;
pub mod timing;
pub mod transform;
pub mod tween;

pub use easing::EasingType;
pub use transform::{PageAnimator, PageTransform};
pub use tween::Tween;
