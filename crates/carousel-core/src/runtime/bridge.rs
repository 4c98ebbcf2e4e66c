use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::config::CarouselConfig;
use crate::controller::{JumpTicket, PageController, ScrollHost};

use super::autoplay::AutoplayTimer;
use super::handle::CarouselHandle;

/// Continuous scroll stream events produced by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    Offset(f32),
    DragBegin,
    DragEnd,
    MomentumEnd,
}

/// Application-level requests
#[derive(Debug, Clone)]
pub enum CarouselCommand {
    GoNext,
    GoPrev,
    SnapToItem { index: usize, animated: bool },
    SetItemCount(usize),
    Reconfigure { config: CarouselConfig, item_count: usize },
    SetAutoplay(bool),
}

#[derive(Debug)]
pub(crate) enum BridgeInput {
    Scroll(ScrollEvent),
    Command(CarouselCommand),
}

/// Producer side of the scroll stream. Cheap to clone, callable from any
/// thread; never blocks.
#[derive(Debug, Clone)]
pub struct ScrollSender {
    tx: mpsc::UnboundedSender<BridgeInput>,
}

impl ScrollSender {
    pub fn send(&self, event: ScrollEvent) {
        if self.tx.send(BridgeInput::Scroll(event)).is_err() {
            debug!("Scroll event dropped: bridge stopped");
        }
    }

    pub fn offset(&self, offset: f32) {
        self.send(ScrollEvent::Offset(offset));
    }

    pub fn drag_begin(&self) {
        self.send(ScrollEvent::DragBegin);
    }

    pub fn drag_end(&self) {
        self.send(ScrollEvent::DragEnd);
    }

    pub fn momentum_end(&self) {
        self.send(ScrollEvent::MomentumEnd);
    }
}

/// Consumer side: applies scroll samples, timers and commands to the page
/// controller, strictly in arrival order, on a single task
pub struct ScrollSyncBridge<H: ScrollHost> {
    controller: PageController<H>,
    autoplay: AutoplayTimer,
    rx: mpsc::UnboundedReceiver<BridgeInput>,
    jump_deadline: Option<(Instant, u64)>,
    drag_release: Option<(Instant, u64)>,
}

impl<H: ScrollHost> ScrollSyncBridge<H> {
    /// Wrap a controller; returns the bridge plus its producer and application handles
    pub fn new(controller: PageController<H>) -> (Self, ScrollSender, CarouselHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = CarouselHandle::new(tx.clone(), controller.subscribe());
        let autoplay = AutoplayTimer::new(controller.config().autoplay_interval());

        let bridge = Self {
            controller,
            autoplay,
            rx,
            jump_deadline: None,
            drag_release: None,
        };
        (bridge, ScrollSender { tx }, handle)
    }

    pub fn controller(&self) -> &PageController<H> {
        &self.controller
    }

    /// Process events until shutdown or until every sender is dropped
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        self.sync_autoplay(Instant::now());
        info!(
            autoplay = self.autoplay.is_active(),
            interval_ms = self.autoplay.interval().as_millis() as u64,
            "Scroll bridge started"
        );

        loop {
            let jump_at = self.jump_deadline.map(|(at, _)| at);
            let release_at = self.drag_release.map(|(at, _)| at);
            let autoplay_at = self.autoplay.deadline();

            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Scroll bridge received shutdown signal");
                        break;
                    }
                }

                input = self.rx.recv() => {
                    match input {
                        Some(input) => self.handle_input(input, Instant::now()),
                        None => break,
                    }
                }

                _ = sleep_until_opt(jump_at) => {
                    if let Some((_, generation)) = self.jump_deadline.take() {
                        self.controller.fire_jump(generation);
                    }
                }

                _ = sleep_until_opt(release_at) => {
                    if let Some((_, epoch)) = self.drag_release.take() {
                        if self.controller.release_drag(epoch) {
                            debug!("Drag grace period over");
                            self.autoplay.resume(Instant::now());
                        }
                    }
                }

                _ = sleep_until_opt(autoplay_at) => {
                    if self.autoplay.fire(Instant::now()) && !self.controller.is_dragging() {
                        debug!("Autoplay advance");
                        self.controller.go_next();
                    }
                }
            }
        }

        info!("Scroll bridge stopped");
    }

    fn handle_input(&mut self, input: BridgeInput, now: Instant) {
        match input {
            BridgeInput::Scroll(event) => self.handle_scroll(event, now),
            BridgeInput::Command(command) => self.handle_command(command, now),
        }
    }

    fn handle_scroll(&mut self, event: ScrollEvent, now: Instant) {
        match event {
            ScrollEvent::Offset(offset) => {
                let ticket = self.controller.on_scroll(offset);
                self.schedule_jump(ticket, now);
            }
            ScrollEvent::DragBegin => {
                self.drag_release = None;
                self.autoplay.pause();
                let ticket = self.controller.drag_begin();
                self.schedule_jump(ticket, now);
            }
            ScrollEvent::DragEnd => {
                let release = self.controller.drag_end();
                self.drag_release = Some((now + release.grace, release.epoch));
            }
            ScrollEvent::MomentumEnd => self.controller.momentum_end(),
        }
    }

    fn handle_command(&mut self, command: CarouselCommand, now: Instant) {
        match command {
            CarouselCommand::GoNext => self.controller.go_next(),
            CarouselCommand::GoPrev => self.controller.go_prev(),
            CarouselCommand::SnapToItem { index, animated } => {
                if let Err(e) = self.controller.snap_to_item(index, animated) {
                    debug!("Snap request dropped: {}", e);
                }
            }
            CarouselCommand::SetItemCount(count) => {
                if self.controller.set_item_count(count).is_ok() {
                    self.jump_deadline = None;
                }
            }
            CarouselCommand::Reconfigure { config, item_count } => {
                if self.controller.reconfigure(config, item_count).is_ok() {
                    self.jump_deadline = None;
                    self.sync_autoplay(now);
                }
            }
            CarouselCommand::SetAutoplay(enabled) => {
                if enabled && !self.controller.config().loop_enabled {
                    warn!("Autoplay requires loop, ignoring");
                    return;
                }
                self.controller.set_auto_play(enabled);
                self.sync_autoplay(now);
            }
        }
    }

    fn schedule_jump(&mut self, ticket: Option<JumpTicket>, now: Instant) {
        if let Some(ticket) = ticket {
            self.jump_deadline = Some((now + ticket.delay, ticket.generation));
        }
    }

    fn sync_autoplay(&mut self, now: Instant) {
        let config = self.controller.config();
        if config.autoplay_enabled() {
            let interval = config.autoplay_interval();
            if !self.autoplay.is_active() || self.autoplay.interval() != interval {
                self.autoplay.start(interval, now);
            }
            if self.controller.is_dragging() {
                self.autoplay.pause();
            }
        } else {
            self.autoplay.stop();
        }
    }
}

async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
