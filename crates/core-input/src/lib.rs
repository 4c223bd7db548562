//! Blocking input source backed by `crossterm::event`.
//!
//! The editor loop is single threaded: it asks the source for the next event
//! with a timeout and receives `Event::Tick` when nothing arrived, so timed
//! state (message expiry) can be redrawn without a background task.

mod key_token;

use anyhow::Result;
use core_events::{Event, KEYPRESS_TOTAL, RESIZE_TOTAL};
use crossterm::event::{self as cevent, Event as CEvent};
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Anything that can feed the editor loop.
pub trait EventSource {
    fn next_event(&mut self, timeout: Duration) -> Result<Event>;
}

/// Reads from the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self, timeout: Duration) -> Result<Event> {
        // Unmapped input (mouse, focus, paste, unbound keys) is skipped until
        // the poll window closes.
        loop {
            if !cevent::poll(timeout)? {
                return Ok(Event::Tick);
            }
            if let Some(ev) = map_event(cevent::read()?) {
                return Ok(ev);
            }
        }
    }
}

/// Translate one crossterm event. `None` for events the editor ignores.
pub fn map_event(ev: CEvent) -> Option<Event> {
    match ev {
        CEvent::Key(key) => {
            let mapped = key_token::map_key_event(&key)?;
            KEYPRESS_TOTAL.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(target: "input.key", code = ?mapped.code, mods = ?mapped.mods, "keypress");
            Some(Event::Key(mapped))
        }
        CEvent::Resize(cols, rows) => {
            RESIZE_TOTAL.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(target: "input", cols, rows, "resize");
            Some(Event::Resize { cols, rows })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyCode, KeyEvent};
    use crossterm::event::{KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers as CMods};

    #[test]
    fn maps_key_and_resize() {
        let key = CEvent::Key(CKeyEvent::new(CKeyCode::Enter, CMods::NONE));
        assert_eq!(map_event(key), Some(Event::Key(KeyEvent::plain(KeyCode::Enter))));
        assert_eq!(
            map_event(CEvent::Resize(80, 24)),
            Some(Event::Resize { cols: 80, rows: 24 })
        );
    }

    #[test]
    fn ignores_focus_and_paste() {
        assert_eq!(map_event(CEvent::FocusGained), None);
        assert_eq!(map_event(CEvent::Paste("x".into())), None);
    }
}
