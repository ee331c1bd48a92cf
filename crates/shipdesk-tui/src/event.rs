//! Terminal event handling.
//!
//! Polls `crossterm` for keyboard and resize events and turns silence into
//! periodic ticks so the run loop keeps redrawing.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick for UI refresh.
    Tick,
}

/// Blocking reader that yields one [`TerminalEvent`] per call.
#[derive(Debug, Clone, Copy)]
pub struct EventReader {
    tick_rate: Duration,
}

impl EventReader {
    /// Creates a reader that emits a tick after `tick_rate` without input.
    #[must_use]
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read.
    pub fn next(&self) -> io::Result<TerminalEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TerminalEvent::Tick);
        }
        Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => TerminalEvent::Key(key),
            Event::Resize(width, height) => TerminalEvent::Resize(width, height),
            _ => TerminalEvent::Tick,
        })
    }
}
