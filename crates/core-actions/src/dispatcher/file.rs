//! Save handling. Unnamed buffers go through the save-as prompt first.

use super::DispatchResult;
use crate::io_ops::write_file;
use core_state::EditSession;

pub(crate) fn request_save(session: &mut EditSession) -> DispatchResult {
    if session.file_name().is_none() {
        session.open_save_as();
        return DispatchResult::dirty();
    }
    save_session(session);
    DispatchResult::dirty()
}

/// Write the buffer to its file name and report the outcome in the message
/// bar. Returns true on success. No-op without a file name.
pub fn save_session(session: &mut EditSession) -> bool {
    let Some(path) = session.file_name().map(|p| p.to_path_buf()) else {
        return false;
    };
    match write_file(&path, session.buffer()) {
        Ok(bytes) => {
            session.buffer_mut().mark_clean();
            session.set_message(format!("{bytes}B written to disk."));
            true
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), error = %e, "file_write_error");
            session.set_message(format!("Save failed: {e}"));
            false
        }
    }
}
