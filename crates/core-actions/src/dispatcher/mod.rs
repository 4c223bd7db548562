//! Dispatcher applying `Action` to an `EditSession`.
//!
//! Sub-modules:
//! * `edit`   - text mutation (insert/backspace/delete/newline)
//! * `prompt` - save-as and search prompt keys
//! * `file`   - saving the buffer through `io_ops`
//!
//! Quit confirmation: a quit request on a dirty buffer only arms
//! `quit_pending` and shows a warning; the next key either quits (Ctrl-Q again)
//! or disarms it.

use crate::{Action, translate};
use core_events::KeyEvent;
use core_state::EditSession;
use core_text::BufferError;

mod edit;
mod file;
mod prompt;

pub use file::save_session;

pub const UNSAVED_QUIT_WARNING: &str =
    "File has unsaved changes! Press Ctrl-Q again to quit anyways.";

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// A redraw is needed.
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Translate and dispatch one key. Keys without an action still disarm a
/// pending quit.
pub fn handle_key(key: &KeyEvent, session: &mut EditSession) -> Result<DispatchResult, BufferError> {
    match translate(key, session.prompt.is_some()) {
        Some(action) => dispatch(action, session),
        None => {
            session.quit_pending = false;
            Ok(DispatchResult::clean())
        }
    }
}

/// Apply an action. Only buffer index errors propagate; file errors are
/// reported through the message bar.
pub fn dispatch(action: Action, session: &mut EditSession) -> Result<DispatchResult, BufferError> {
    tracing::trace!(target: "actions.dispatch", kind = action_kind(&action), "dispatch");
    if action != Action::Quit {
        session.quit_pending = false;
    }
    let result = match action {
        Action::Motion(motion) => {
            session.move_cursor(motion);
            DispatchResult::dirty()
        }
        Action::Edit(kind) => edit::handle_edit(kind, session)?,
        Action::Save => file::request_save(session),
        Action::Find => {
            session.open_search();
            DispatchResult::dirty()
        }
        Action::Quit => handle_quit(session),
        Action::Redraw => DispatchResult::dirty(),
        Action::Prompt(input) => prompt::handle_prompt_input(input, session),
    };
    Ok(result)
}

/// Action name for logs; never carries typed text.
fn action_kind(action: &Action) -> &'static str {
    match action {
        Action::Motion(_) => "motion",
        Action::Edit(_) => "edit",
        Action::Save => "save",
        Action::Find => "find",
        Action::Quit => "quit",
        Action::Redraw => "redraw",
        Action::Prompt(_) => "prompt",
    }
}

fn handle_quit(session: &mut EditSession) -> DispatchResult {
    if session.is_dirty() && !session.quit_pending {
        session.quit_pending = true;
        session.set_message(UNSAVED_QUIT_WARNING);
        tracing::debug!(target: "actions.dispatch", "quit_blocked_unsaved");
        return DispatchResult::dirty();
    }
    DispatchResult::quit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyCode, KeyEvent};
    use core_state::{Cursor, Motion, ScreenSize};
    use core_text::LineBuffer;
    use std::time::Instant;

    fn session(text: &str) -> EditSession {
        EditSession::new(LineBuffer::from_text(text, 4), ScreenSize::new(40, 10))
    }

    #[test]
    fn clean_buffer_quits_immediately() {
        let mut s = session("abc");
        let r = dispatch(Action::Quit, &mut s).unwrap();
        assert!(r.quit);
    }

    #[test]
    fn dirty_buffer_needs_second_quit() {
        let mut s = session("abc");
        handle_key(&KeyEvent::plain(KeyCode::Char('x')), &mut s).unwrap();
        let r = handle_key(&KeyEvent::ctrl('q'), &mut s).unwrap();
        assert!(!r.quit);
        assert_eq!(s.visible_message(Instant::now()), Some(UNSAVED_QUIT_WARNING));
        let r = handle_key(&KeyEvent::ctrl('q'), &mut s).unwrap();
        assert!(r.quit);
    }

    #[test]
    fn other_key_disarms_pending_quit() {
        let mut s = session("abc");
        dispatch(Action::Edit(crate::EditKind::InsertChar('x')), &mut s).unwrap();
        dispatch(Action::Quit, &mut s).unwrap();
        assert!(s.quit_pending);
        handle_key(&KeyEvent::plain(KeyCode::Esc), &mut s).unwrap();
        assert!(!s.quit_pending);
        let r = dispatch(Action::Quit, &mut s).unwrap();
        assert!(!r.quit);
    }

    #[test]
    fn motion_moves_cursor() {
        let mut s = session("abc");
        let r = dispatch(Action::Motion(Motion::End), &mut s).unwrap();
        assert!(r.dirty);
        assert_eq!(s.cursor, Cursor { row: 0, col: 3 });
    }

    #[test]
    fn find_opens_search_prompt() {
        let mut s = session("abc");
        dispatch(Action::Find, &mut s).unwrap();
        assert!(s.prompt.as_ref().is_some_and(|p| p.is_search()));
    }
}
