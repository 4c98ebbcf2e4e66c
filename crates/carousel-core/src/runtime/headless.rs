use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::animation::Tween;
use crate::config::ScrollConfig;
use crate::controller::HostCommand;

use super::bridge::ScrollSender;

/// A scroll container without a screen.
///
/// Applies host commands to a virtual offset and echoes every position back
/// through the scroll stream, the way a real container reports its offset.
/// Animated scrolls emit one sample per frame followed by momentum end.
pub struct HeadlessHost {
    commands: mpsc::UnboundedReceiver<HostCommand>,
    scroll: ScrollSender,
    config: ScrollConfig,
    position: Tween,
    scroll_enabled: bool,
}

impl HeadlessHost {
    pub fn new(
        commands: mpsc::UnboundedReceiver<HostCommand>,
        scroll: ScrollSender,
        config: ScrollConfig,
    ) -> Self {
        Self {
            commands,
            scroll,
            config,
            position: Tween::new(0.0),
            scroll_enabled: true,
        }
    }

    /// Serve commands until the controller side goes away; returns the final offset
    pub async fn run(mut self) -> f32 {
        while let Some(command) = self.commands.recv().await {
            self.apply(command);
            while self.position.is_animating() {
                sleep(self.config.frame_interval()).await;
                while let Ok(command) = self.commands.try_recv() {
                    self.apply(command);
                }
                if !self.position.is_animating() {
                    break;
                }
                let offset = self.position.update();
                self.scroll.offset(offset);
                if !self.position.is_animating() {
                    self.scroll.momentum_end();
                }
            }
        }
        debug!(offset = self.position.value(), "Headless host stopped");
        self.position.value()
    }

    fn apply(&mut self, command: HostCommand) {
        match command {
            HostCommand::ScrollTo { offset, animated } => {
                let duration = self.config.animation_duration();
                if animated && !duration.is_zero() {
                    trace!(from = self.position.value(), to = offset, "Animated scroll");
                    self.position.animate_to(offset, duration, self.config.easing);
                } else {
                    self.position.set(offset);
                    self.scroll.offset(offset);
                }
            }
            HostCommand::SetScrollEnabled(enabled) => {
                trace!(enabled, "User scrolling toggled");
                self.scroll_enabled = enabled;
            }
        }
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }
}
