//! Key to action translation, action dispatch and the file store.
//!
//! Flow per key: `key_translator::translate` maps a `KeyEvent` to an `Action`
//! (prompt keys get their own vocabulary), then `dispatcher::dispatch` applies
//! it to the `EditSession`. `dispatcher::handle_key` wraps both and is what the
//! event loop calls.

use core_state::{Direction, Motion};

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use dispatcher::{DispatchResult, dispatch, handle_key};
pub use key_translator::translate;

/// Text mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertNewline,
    /// Delete left of the cursor.
    Backspace,
    /// Delete under the cursor.
    DeleteUnder,
}

/// Keys as seen by an open prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    Char(char),
    Backspace,
    Accept,
    Cancel,
    Arrow(Direction),
    /// Any other key. Still reported to a running search.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(Motion),
    Edit(EditKind),
    Save,
    Find,
    Quit,
    Redraw,
    Prompt(PromptInput),
}
