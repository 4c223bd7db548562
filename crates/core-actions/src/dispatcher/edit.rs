//! Text edit action handling (insert/backspace/delete/newline).
//!
//! Cursor movement around edits lives in `EditSession`; this module only
//! routes and logs.

use super::DispatchResult;
use crate::EditKind;
use core_state::EditSession;
use core_text::BufferError;

pub(crate) fn handle_edit(
    kind: EditKind,
    session: &mut EditSession,
) -> Result<DispatchResult, BufferError> {
    let before = session.cursor;
    let op = match kind {
        EditKind::InsertChar(c) => {
            session.insert_character(c)?;
            "insert_char"
        }
        EditKind::InsertNewline => {
            session.insert_newline()?;
            "insert_newline"
        }
        EditKind::Backspace => {
            session.delete_character()?;
            "backspace"
        }
        EditKind::DeleteUnder => {
            session.delete_forward()?;
            "delete_under"
        }
    };
    tracing::trace!(
        target: "actions.dispatch",
        op,
        row = before.row,
        col = before.col,
        to_row = session.cursor.row,
        to_col = session.cursor.col,
        "edit"
    );
    Ok(DispatchResult::dirty())
}
