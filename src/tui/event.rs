//! Event handling for the TUI
//!
//! Terminal events (key presses, resize) are read on a background thread
//! and delivered over a channel together with periodic ticks.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                // Calculate timeout for next tick
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                // Poll for events; a broken terminal ends the thread
                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(_) => return,
                };

                if ready {
                    let event = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            Event::Resize(width, height)
                        }
                        Ok(_) => continue,
                        Err(_) => return,
                    };
                    if sender.send(event).is_err() {
                        return;
                    }
                }

                // Send tick event if needed
                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
