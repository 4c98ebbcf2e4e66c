//! Terminal scroll container
//!
//! The carousel engine only sees offsets. This module turns key-driven drags
//! and host commands into a stream of offset samples, playing the part a
//! native scroll view plays on other platforms.
//!
//! - `view` - offset state, drag gestures, release snapping and momentum

pub mod view;

pub use view::TerminalScrollView;
