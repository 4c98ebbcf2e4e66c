use tokio::sync::mpsc;
use tracing::warn;

/// The scrollable container the controller drives
pub trait ScrollHost: Send {
    /// Scroll the content to a pixel offset
    fn scroll_to(&mut self, offset: f32, animated: bool);

    /// Allow or block user-initiated scrolling
    fn set_scroll_enabled(&mut self, enabled: bool);
}

/// A request for the host scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    ScrollTo { offset: f32, animated: bool },
    SetScrollEnabled(bool),
}

/// Host implementation that forwards every request over a channel, for hosts
/// living on another task or thread
#[derive(Debug, Clone)]
pub struct ChannelHost {
    tx: mpsc::UnboundedSender<HostCommand>,
}

impl ChannelHost {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, command: HostCommand) {
        if self.tx.send(command).is_err() {
            warn!("Failed to send host command: receiver dropped");
        }
    }
}

impl ScrollHost for ChannelHost {
    fn scroll_to(&mut self, offset: f32, animated: bool) {
        self.send(HostCommand::ScrollTo { offset, animated });
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.send(HostCommand::SetScrollEnabled(enabled));
    }
}
