use std::sync::Arc;

use anyhow::Result;
use carousel_core::animation::PageAnimator;
use carousel_core::indicator::PageIndicator;
use carousel_core::{AppConfig, CarouselHandle, Error, PageLayout, PageStatus};
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::input::Action;
use crate::scroll::TerminalScrollView;
use crate::theme::Theme;

/// One page of demo content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

/// Numbered placeholder slides
pub fn demo_slides(count: usize) -> Vec<Slide> {
    (0..count)
        .map(|i| Slide {
            title: format!("Slide {}", i + 1),
            body: format!("Page {} of {}", i + 1, count),
        })
        .collect()
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub slides: Vec<Slide>,
    pub handle: CarouselHandle,
    pub view: TerminalScrollView,
    pub indicator: PageIndicator,
    pub animator: PageAnimator,
    pub theme: Theme,
    /// Autoplay as requested from the keyboard
    pub autoplay: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    status: watch::Receiver<PageStatus>,
    /// Actual indices reported by the page-change callback
    page_changes: mpsc::UnboundedReceiver<usize>,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        slides: Vec<Slide>,
        handle: CarouselHandle,
        view: TerminalScrollView,
        page_changes: mpsc::UnboundedReceiver<usize>,
    ) -> Self {
        let status = handle.subscribe();
        let mut indicator = PageIndicator::new(config.indicator.clone());
        {
            let status = status.borrow();
            indicator.set_page(status.current, status.total);
        }
        Self {
            animator: PageAnimator::new(&config.carousel),
            autoplay: config.carousel.autoplay_enabled(),
            config,
            slides,
            handle,
            view,
            indicator,
            theme: Theme::default(),
            should_quit: false,
            status_message: None,
            status,
            page_changes,
        }
    }

    /// Latest published page status
    pub fn status(&self) -> PageStatus {
        self.status.borrow().clone()
    }

    pub fn layout(&self) -> Arc<PageLayout> {
        Arc::clone(&self.status.borrow().layout)
    }

    /// Advance one frame: apply host commands, move animations, pick up page changes
    pub fn tick(&mut self) {
        self.view.pump();
        self.view.update();

        if self.status.has_changed().unwrap_or(false) {
            let status = self.status.borrow_and_update().clone();
            self.view.set_layout(Arc::clone(&status.layout));
            self.indicator.set_page(status.current, status.total);
        }
        self.indicator.update();

        while let Ok(page) = self.page_changes.try_recv() {
            debug!(page, "Page changed");
            self.status_message = Some(format!("Page {}/{}", page + 1, self.slides.len()));
        }
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.view.needs_update() || self.view.is_dragging() || self.indicator.is_animating()
    }

    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => self.handle.go_next()?,
            Action::PrevPage => self.handle.go_prev()?,
            Action::DragNext => {
                let step = self.drag_step();
                self.view.drag_by(step);
            }
            Action::DragPrev => {
                let step = self.drag_step();
                self.view.drag_by(-step);
            }
            Action::Release => self.view.release(),
            Action::SnapTo(index) => {
                let len = self.slides.len();
                if index >= len {
                    self.status_message = Some(Error::IndexOutOfRange { index, len }.to_string());
                    return Ok(());
                }
                self.handle.snap_to_item(index, true)?;
            }
            Action::ToggleAutoplay => {
                if !self.config.carousel.loop_enabled {
                    self.status_message = Some("Autoplay needs loop = true".to_string());
                    return Ok(());
                }
                self.autoplay = !self.autoplay;
                self.handle.set_autoplay(self.autoplay)?;
                self.status_message = Some(
                    if self.autoplay { "Autoplay on" } else { "Autoplay off" }.to_string(),
                );
            }
            Action::None => {}
        }
        Ok(())
    }

    fn drag_step(&self) -> f32 {
        (self.layout().item_width() / 4.0).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use carousel_core::config::CarouselConfig;
    use carousel_core::{ChannelHost, PageController, ScrollSyncBridge};

    fn app(looping: bool) -> App {
        let config = Arc::new(AppConfig {
            carousel: CarouselConfig {
                loop_enabled: looping,
                additional_pages_per_side: 1,
                slider_width: 100.0,
                item_width: 100.0,
                ..Default::default()
            },
            ..Default::default()
        });
        let (host, rx) = ChannelHost::new();
        let mut controller =
            PageController::new(config.carousel.clone(), config.timing.clone(), 4, host).unwrap();
        let (page_tx, page_rx) = mpsc::unbounded_channel();
        controller.set_on_page_change(Box::new(move |page| {
            let _ = page_tx.send(page);
        }));
        let layout = controller.layout();
        let (bridge, sender, handle) = ScrollSyncBridge::new(controller);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            bridge.run(shutdown_rx).await;
            drop(shutdown_tx);
        });
        let view = TerminalScrollView::new(rx, sender, config.scroll.clone(), layout);
        App::new(Arc::clone(&config), demo_slides(4), handle, view, page_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_page_updates_status_message() {
        let mut app = app(false);
        app.tick();
        app.handle_action(Action::NextPage).unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        app.tick();
        tokio::time::advance(Duration::from_millis(500)).await;
        app.tick();
        tokio::time::sleep(Duration::from_millis(10)).await;
        app.tick();

        assert_eq!(app.status().current, 1);
        assert_eq!(app.indicator.current(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Page 2/4"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_snap_is_reported() {
        let mut app = app(false);
        app.handle_action(Action::SnapTo(7)).unwrap();
        assert!(app.status_message.unwrap().contains("Index not valid 7"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_toggle_requires_loop() {
        let mut plain = app(false);
        plain.handle_action(Action::ToggleAutoplay).unwrap();
        assert!(!plain.autoplay);

        let mut looping = app(true);
        looping.handle_action(Action::ToggleAutoplay).unwrap();
        assert!(looping.autoplay);
        assert_eq!(looping.status_message.as_deref(), Some("Autoplay on"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit() {
        let mut app = app(true);
        app.handle_action(Action::Quit).unwrap();
        assert!(app.should_quit);
    }
}
