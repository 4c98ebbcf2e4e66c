use std::sync::Arc;

use carousel_core::animation::Tween;
use carousel_core::layout::closest_snap_point;
use carousel_core::runtime::ScrollSender;
use carousel_core::{HostCommand, PageLayout, ScrollConfig};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Horizontal scroll container driven from the keyboard.
///
/// Every position change is reported through the [`ScrollSender`], including
/// programmatic ones, so the page controller always resolves pages from what
/// is actually on screen.
pub struct TerminalScrollView {
    commands: mpsc::UnboundedReceiver<HostCommand>,
    sender: ScrollSender,
    config: ScrollConfig,
    layout: Arc<PageLayout>,
    offset: Tween,
    scroll_enabled: bool,
    dragging: bool,
    /// A release or animated scroll is still moving
    momentum: bool,
}

impl TerminalScrollView {
    pub fn new(
        commands: mpsc::UnboundedReceiver<HostCommand>,
        sender: ScrollSender,
        config: ScrollConfig,
        layout: Arc<PageLayout>,
    ) -> Self {
        Self {
            commands,
            sender,
            config,
            layout,
            offset: Tween::new(0.0),
            scroll_enabled: true,
            dragging: false,
            momentum: false,
        }
    }

    /// Current content offset
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    #[inline]
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the next frame will move the content
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.offset.is_animating()
    }

    /// Swap in a rebuilt layout (new geometry or dataset)
    pub fn set_layout(&mut self, layout: Arc<PageLayout>) {
        self.layout = layout;
    }

    /// Apply every host command queued by the controller
    pub fn pump(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                HostCommand::ScrollTo { offset, animated } => self.scroll_to(offset, animated),
                HostCommand::SetScrollEnabled(enabled) => {
                    trace!(enabled, "User scrolling toggled");
                    self.scroll_enabled = enabled;
                }
            }
        }
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        let duration = self.config.animation_duration();
        if animated && !duration.is_zero() {
            self.offset.animate_to(offset, duration, self.config.easing);
            self.momentum = self.offset.is_animating();
        } else {
            self.offset.set(offset);
            self.sender.offset(offset);
        }
    }

    /// Move the content by `delta`, starting a drag if none is active.
    /// Ignored while user scrolling is disabled.
    pub fn drag_by(&mut self, delta: f32) {
        if !self.scroll_enabled {
            debug!("Drag ignored: scrolling disabled");
            return;
        }
        if !self.dragging {
            self.dragging = true;
            self.sender.drag_begin();
        }

        let max = self.layout.offsets().last().copied().unwrap_or(0.0);
        let offset = (self.offset.value() + delta).clamp(0.0, max);
        self.offset.set(offset);
        self.momentum = false;
        self.sender.offset(offset);
    }

    /// Lift the pointer: settle on the closest page
    pub fn release(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.sender.drag_end();

        let Some(page) = closest_snap_point(self.offset.value(), self.layout.offsets()) else {
            self.sender.momentum_end();
            return;
        };
        let target = self.layout.offsets()[page];
        self.offset
            .animate_to(target, self.config.animation_duration(), self.config.easing);
        if self.offset.is_animating() {
            self.momentum = true;
        } else {
            self.sender.offset(target);
            self.sender.momentum_end();
        }
    }

    /// Advance a running animation by one frame and report the new offset
    pub fn update(&mut self) -> f32 {
        if self.offset.is_animating() {
            let offset = self.offset.update();
            self.sender.offset(offset);
        }
        if self.momentum && !self.offset.is_animating() {
            self.momentum = false;
            self.sender.momentum_end();
        }
        self.offset.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use carousel_core::{ChannelHost, PageController, ScrollSyncBridge, TimingConfig};
    use carousel_core::config::CarouselConfig;

    fn carousel_config() -> CarouselConfig {
        CarouselConfig {
            loop_enabled: false,
            slider_width: 100.0,
            item_width: 100.0,
            ..Default::default()
        }
    }

    fn view() -> (TerminalScrollView, carousel_core::CarouselHandle) {
        let (host, rx) = ChannelHost::new();
        let controller =
            PageController::new(carousel_config(), TimingConfig::default(), 4, host).unwrap();
        let layout = controller.layout();
        let (bridge, sender, handle) = ScrollSyncBridge::new(controller);
        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            bridge.run(shutdown_rx).await;
            drop(shutdown_tx);
        });
        let view = TerminalScrollView::new(rx, sender, ScrollConfig::default(), layout);
        (view, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_and_release_snaps_to_closest_page() {
        let (mut view, handle) = view();
        view.pump();

        view.drag_by(70.0);
        assert!(view.is_dragging());
        view.drag_by(-5.0);
        assert_eq!(view.offset(), 65.0);

        view.release();
        assert!(view.needs_update());
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(view.update(), 100.0);
        assert!(!view.needs_update());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(handle.current_page(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_is_clamped_to_content() {
        let (mut view, _handle) = view();
        view.drag_by(-50.0);
        assert_eq!(view.offset(), 0.0);
        view.drag_by(1000.0);
        assert_eq!(view.offset(), 300.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_scrolling_blocks_drags() {
        let (mut view, _handle) = view();
        view.scroll_enabled = false;
        view.drag_by(40.0);
        assert_eq!(view.offset(), 0.0);
        assert!(!view.is_dragging());
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_next_animates_view() {
        let (mut view, handle) = view();
        view.pump();
        handle.go_next().unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        view.pump();
        assert!(view.needs_update());
        tokio::time::advance(Duration::from_millis(500)).await;
        view.update();
        assert_eq!(view.offset(), 100.0);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(handle.current_page(), 1);
    }
}
