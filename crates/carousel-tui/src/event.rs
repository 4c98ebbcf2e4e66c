use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal input polled at one of two rates
pub struct EventHandler {
    /// Idle poll timeout
    tick_rate: Duration,
    /// One animation frame
    frame: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u32) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame: Duration::from_millis(1000 / u64::from(animation_fps.max(1))),
        }
    }

    /// Wait up to one idle tick
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.wait(self.tick_rate)
    }

    /// Wait up to one animation frame
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.wait(self.frame)
    }

    fn wait(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        Ok(match event::read()? {
            // Repeat counts as a press so held arrow keys keep dragging
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        })
    }
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Nothing arrived before the timeout
    Tick,
}
