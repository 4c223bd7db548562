#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, handle_key};
use core_events::{KeyCode, KeyEvent};
use core_state::{EditSession, ScreenSize};
use core_text::LineBuffer;

pub fn session(text: &str) -> EditSession {
    EditSession::new(LineBuffer::from_text(text, 4), ScreenSize::new(60, 10))
}

pub fn press(s: &mut EditSession, key: KeyEvent) -> DispatchResult {
    handle_key(&key, s).unwrap()
}

pub fn press_code(s: &mut EditSession, code: KeyCode) -> DispatchResult {
    press(s, KeyEvent::plain(code))
}

/// Feed every char of `text` as a plain key press.
pub fn type_text(s: &mut EditSession, text: &str) {
    for c in text.chars() {
        let key = if c == '\n' {
            KeyEvent::plain(KeyCode::Enter)
        } else {
            KeyEvent::plain(KeyCode::Char(c))
        };
        press(s, key);
    }
}

pub fn rows(s: &EditSession) -> Vec<String> {
    s.buffer().rows().iter().map(|r| r.raw_string()).collect()
}
