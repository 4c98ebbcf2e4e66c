//! Page controller: the single owner of the current page
//!
//! Every page change is derived from an observed scroll offset (or a forced
//! jump target). Navigation calls only ask the host to scroll; the commit
//! happens when the resulting offset samples come back through `on_scroll`.

mod host;

pub use host::{ChannelHost, HostCommand, ScrollHost};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::{CarouselConfig, TimingConfig};
use crate::layout::{find_nearest_page, PageLayout};
use crate::{Error, Result};

/// Callback receiving the actual (unwrapped) dataset index of a new page
pub type PageChangeCallback = Box<dyn FnMut(usize) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    /// Released, momentum still running
    Settling,
    /// Silent loop-boundary reposition in flight
    Jumping,
}

/// Snapshot published on every state change
#[derive(Debug, Clone)]
pub struct PageStatus {
    /// Actual dataset index of the current page
    pub current: usize,
    /// Extended index of the current page
    pub extended: usize,
    /// Number of real items
    pub total: usize,
    pub phase: Phase,
    pub frozen: bool,
    pub layout: Arc<PageLayout>,
}

/// A delayed jump the runtime must fire through [`PageController::fire_jump`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTicket {
    pub generation: u64,
    pub delay: Duration,
}

/// A drag release the runtime must confirm through
/// [`PageController::release_drag`] after the grace period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRelease {
    pub epoch: u64,
    pub grace: Duration,
}

#[derive(Debug, Clone, Copy)]
struct PendingJump {
    target: usize,
    generation: u64,
    fired: bool,
}

pub struct PageController<H: ScrollHost> {
    host: H,
    config: CarouselConfig,
    timing: TimingConfig,
    layout: Arc<PageLayout>,
    current: usize,
    phase: Phase,
    /// A pointer is down
    drag_active: bool,
    /// Drag plus the grace period after release
    dragging: bool,
    drag_epoch: u64,
    frozen: bool,
    pending_jump: Option<PendingJump>,
    generation: u64,
    last_offset: f32,
    on_page_change: Option<PageChangeCallback>,
    status: watch::Sender<PageStatus>,
}

impl<H: ScrollHost> PageController<H> {
    /// Create a controller for a dataset of `item_count` items.
    ///
    /// Fails when the loop padding does not fit the dataset or the geometry is
    /// unusable. An out-of-range initial page is reported and falls back to
    /// the first page.
    pub fn new(config: CarouselConfig, timing: TimingConfig, item_count: usize, mut host: H) -> Result<Self> {
        let layout = PageLayout::build(&config, item_count)?;

        let initial = if item_count > 0 && config.initial_page >= item_count {
            let err = Error::InvalidInitialPage {
                page: config.initial_page,
                len: item_count,
            };
            error!("{}", err);
            0
        } else {
            config.initial_page
        };
        let current = if item_count == 0 {
            0
        } else {
            layout.mapper().body_index(initial)
        };

        let last_offset = layout.offset_of(current).unwrap_or(0.0);
        if item_count > 0 {
            host.scroll_to(last_offset, false);
        }

        let layout = Arc::new(layout);
        let (status, _) = watch::channel(PageStatus {
            current: layout.mapper().actual(current),
            extended: current,
            total: item_count,
            phase: Phase::Idle,
            frozen: false,
            layout: Arc::clone(&layout),
        });

        info!(
            items = item_count,
            looping = config.loop_enabled,
            initial_page = current,
            "Page controller ready"
        );

        Ok(Self {
            host,
            config,
            timing,
            layout,
            current,
            phase: Phase::Idle,
            drag_active: false,
            dragging: false,
            drag_epoch: 0,
            frozen: false,
            pending_jump: None,
            generation: 0,
            last_offset,
            on_page_change: None,
            status,
        })
    }

    /// Register the page-change notification
    pub fn set_on_page_change(&mut self, callback: PageChangeCallback) {
        self.on_page_change = Some(callback);
    }

    /// Watch channel of page snapshots
    pub fn subscribe(&self) -> watch::Receiver<PageStatus> {
        self.status.subscribe()
    }

    /// Current extended index
    #[inline]
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Current actual dataset index
    #[inline]
    pub fn current_actual(&self) -> usize {
        self.layout.mapper().actual(self.current)
    }

    #[inline]
    pub fn total_pages(&self) -> usize {
        self.layout.dataset_len()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Whether a drag or its grace period is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Extended index a pending silent jump is heading to
    pub fn expected_jump_target(&self) -> Option<usize> {
        self.pending_jump.map(|jump| jump.target)
    }

    pub fn layout(&self) -> Arc<PageLayout> {
        Arc::clone(&self.layout)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Resolve a scroll sample and commit the page it rests on
    pub fn on_scroll(&mut self, offset: f32) -> Option<JumpTicket> {
        self.last_offset = offset;
        let page = find_nearest_page(offset, self.layout.offsets(), self.timing.snap_tolerance_px)?;

        if self.phase == Phase::Settling && (self.layout.offsets()[page] - offset).abs() < 0.5 {
            self.set_phase(Phase::Idle);
        }
        if page == self.current {
            return None;
        }
        self.commit(page)
    }

    fn commit(&mut self, page: usize) -> Option<JumpTicket> {
        let mapper = *self.layout.mapper();

        if let Some(jump) = self.pending_jump {
            if page == jump.target {
                debug!(page, "Jump target reached");
                self.current = page;
                self.finish_jump();
                return None;
            }
            if mapper.jump_target(page).is_none() {
                debug!(page, target = jump.target, "Pending jump superseded");
                self.finish_jump();
            }
        }

        self.current = page;
        let actual = mapper.actual(page);
        debug!(extended = page, actual, "Page committed");
        if let Some(callback) = self.on_page_change.as_mut() {
            callback(actual);
        }

        let ticket = match mapper.jump_target(page) {
            Some(target) => self.schedule_jump(target),
            None => None,
        };
        self.publish();
        ticket
    }

    fn schedule_jump(&mut self, target: usize) -> Option<JumpTicket> {
        if let Some(pending) = self.pending_jump {
            debug!(target, pending = pending.target, "Jump already pending, ignoring");
            return None;
        }

        self.generation += 1;
        let generation = self.generation;
        self.pending_jump = Some(PendingJump {
            target,
            generation,
            fired: false,
        });
        self.phase = Phase::Jumping;
        if self.timing.freeze_during_jump {
            self.frozen = true;
            self.host.set_scroll_enabled(false);
        }
        debug!(target, generation, "Jump scheduled");

        let delay = self.timing.jump_delay();
        if delay.is_zero() {
            self.fire_jump(generation);
            None
        } else {
            Some(JumpTicket { generation, delay })
        }
    }

    /// Apply a scheduled jump. Stale generations are ignored.
    pub fn fire_jump(&mut self, generation: u64) -> bool {
        let Some(jump) = self.pending_jump.as_mut() else {
            return false;
        };
        if jump.generation != generation || jump.fired {
            return false;
        }
        jump.fired = true;
        let target = jump.target;

        let Some(offset) = self.layout.offset_of(target) else {
            self.finish_jump();
            return false;
        };
        self.last_offset = offset;
        self.host.scroll_to(offset, false);

        if !self.timing.confirm_jumps {
            self.current = target;
            self.finish_jump();
        }
        true
    }

    fn finish_jump(&mut self) {
        self.pending_jump = None;
        if self.frozen {
            self.frozen = false;
            self.host.set_scroll_enabled(true);
        }
        self.phase = if self.drag_active {
            Phase::Dragging
        } else {
            Phase::Idle
        };
        self.publish();
    }

    /// User put a pointer down on the content
    pub fn drag_begin(&mut self) -> Option<JumpTicket> {
        self.drag_active = true;
        self.dragging = true;
        self.drag_epoch += 1;
        if self.phase != Phase::Jumping {
            self.set_phase(Phase::Dragging);
        }

        // Resync with wherever the content actually rests
        match find_nearest_page(self.last_offset, self.layout.offsets(), self.timing.snap_tolerance_px) {
            Some(page) if page != self.current => self.commit(page),
            _ => None,
        }
    }

    /// User lifted the pointer; drag state persists through the grace period
    pub fn drag_end(&mut self) -> DragRelease {
        self.drag_active = false;
        if self.phase == Phase::Dragging {
            self.set_phase(Phase::Settling);
        }
        DragRelease {
            epoch: self.drag_epoch,
            grace: self.timing.drag_grace(),
        }
    }

    /// End the grace period of a released drag, returns whether drag state cleared
    pub fn release_drag(&mut self, epoch: u64) -> bool {
        if epoch != self.drag_epoch || self.drag_active {
            return false;
        }
        self.dragging = false;
        true
    }

    /// Momentum after a release has come to rest
    pub fn momentum_end(&mut self) {
        if self.phase == Phase::Settling {
            self.set_phase(Phase::Idle);
        }
    }

    /// Scroll to the next page; no-op on the last page
    pub fn go_next(&mut self) {
        let target = self.current + 1;
        if target >= self.layout.extended_len() {
            debug!(page = self.current, "Already on the last page");
            return;
        }
        self.scroll_to_page(target, true);
    }

    /// Scroll to the previous page; no-op on the first page
    pub fn go_prev(&mut self) {
        if self.current == 0 || self.layout.extended_len() == 0 {
            debug!(page = self.current, "Already on the first page");
            return;
        }
        self.scroll_to_page(self.current - 1, true);
    }

    /// Scroll to the page showing actual item `index`, choosing the copy
    /// closest to the current page when looping
    pub fn snap_to_item(&mut self, index: usize, animated: bool) -> Result<()> {
        let len = self.layout.dataset_len();
        if index >= len {
            let err = Error::IndexOutOfRange { index, len };
            error!("{}", err);
            return Err(err);
        }
        let target = self
            .layout
            .mapper()
            .nearest_extended(index, self.current)
            .unwrap_or(index);
        self.scroll_to_page(target, animated);
        Ok(())
    }

    fn scroll_to_page(&mut self, page: usize, animated: bool) {
        if let Some(offset) = self.layout.offset_of(page) {
            self.host.scroll_to(offset, animated);
        }
    }

    /// Rebuild the layout for a new configuration and/or dataset length.
    ///
    /// The current actual page is kept (clamped to the new dataset) and any
    /// pending jump is dropped. On error the previous layout stays in place.
    pub fn reconfigure(&mut self, config: CarouselConfig, item_count: usize) -> Result<()> {
        let layout = match PageLayout::build(&config, item_count) {
            Ok(layout) => layout,
            Err(e) => {
                warn!("Keeping previous layout: {}", e);
                return Err(e);
            }
        };

        let actual = self.current_actual().min(item_count.saturating_sub(1));
        if self.pending_jump.is_some() {
            debug!("Pending jump dropped by reconfiguration");
            self.finish_jump();
        }

        self.current = if item_count == 0 {
            0
        } else {
            layout.mapper().body_index(actual)
        };
        self.layout = Arc::new(layout);
        self.config = config;

        if let Some(offset) = self.layout.offset_of(self.current) {
            self.last_offset = offset;
            self.host.scroll_to(offset, false);
        }
        info!(
            items = item_count,
            extended = self.layout.extended_len(),
            "Layout rebuilt"
        );
        self.publish();
        Ok(())
    }

    /// Turn autoplay on or off. Geometry is untouched, so scrolls and jumps
    /// in flight carry on.
    pub fn set_auto_play(&mut self, enabled: bool) {
        if self.config.auto_play != enabled {
            debug!(enabled, "Autoplay setting changed");
            self.config.auto_play = enabled;
        }
    }

    /// Shorthand for a dataset length change under the current configuration
    pub fn set_item_count(&mut self, item_count: usize) -> Result<()> {
        self.reconfigure(self.config.clone(), item_count)
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.phase = phase;
            self.publish();
        }
    }

    fn publish(&self) {
        self.status.send_replace(PageStatus {
            current: self.layout.mapper().actual(self.current),
            extended: self.current,
            total: self.layout.dataset_len(),
            phase: self.phase,
            frozen: self.frozen,
            layout: Arc::clone(&self.layout),
        });
    }
}
