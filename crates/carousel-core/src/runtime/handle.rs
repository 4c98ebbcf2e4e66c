use tokio::sync::{mpsc, watch};

use crate::config::CarouselConfig;
use crate::controller::PageStatus;
use crate::{Error, Result};

use super::bridge::{BridgeInput, CarouselCommand};

/// Application-facing handle to a running carousel.
///
/// Requests are queued behind any scroll samples already in flight and applied
/// on the bridge task.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    tx: mpsc::UnboundedSender<BridgeInput>,
    status: watch::Receiver<PageStatus>,
}

impl CarouselHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<BridgeInput>, status: watch::Receiver<PageStatus>) -> Self {
        Self { tx, status }
    }

    fn send(&self, command: CarouselCommand) -> Result<()> {
        self.tx
            .send(BridgeInput::Command(command))
            .map_err(|_| Error::Closed)
    }

    pub fn go_next(&self) -> Result<()> {
        self.send(CarouselCommand::GoNext)
    }

    pub fn go_prev(&self) -> Result<()> {
        self.send(CarouselCommand::GoPrev)
    }

    /// Scroll to the page showing dataset item `index`.
    ///
    /// The index is checked on the bridge task against the layout in effect
    /// when the request is reached, after any resize queued before it. An
    /// out-of-range index is logged there and leaves the page unchanged.
    pub fn snap_to_item(&self, index: usize, animated: bool) -> Result<()> {
        self.send(CarouselCommand::SnapToItem { index, animated })
    }

    pub fn set_item_count(&self, count: usize) -> Result<()> {
        self.send(CarouselCommand::SetItemCount(count))
    }

    pub fn reconfigure(&self, config: CarouselConfig, item_count: usize) -> Result<()> {
        self.send(CarouselCommand::Reconfigure { config, item_count })
    }

    pub fn set_autoplay(&self, enabled: bool) -> Result<()> {
        self.send(CarouselCommand::SetAutoplay(enabled))
    }

    /// Actual index of the current page, as last published
    pub fn current_page(&self) -> usize {
        self.status.borrow().current
    }

    pub fn total_pages(&self) -> usize {
        self.status.borrow().total
    }

    pub fn status(&self) -> PageStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PageStatus> {
        self.status.clone()
    }
}
