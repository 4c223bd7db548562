//! Screen compositor: turns an `EditSession` into one terminal frame.
//!
//! Frame layout, top to bottom:
//! - `screen.rows` text rows (`rows`), each ending in clear-to-EOL + CRLF.
//! - Status bar in inverse video, exactly `screen.cols` wide (`status`).
//! - Message bar: the active prompt label, else the status message while it is
//!   younger than the session timeout.
//!
//! Every frame is built as a `Writer` command list and serialized into a single
//! byte buffer that reaches the terminal with one write. The cursor is hidden
//! while the frame is drawn and shown again at its final position.
//!
//! Color handling lives in `style`: escapes are only emitted on class changes.

use anyhow::Result;
use core_state::EditSession;
use std::io::Write;
use std::time::Instant;

pub mod rows;
pub mod status;
pub mod style;
pub mod timing;
pub mod writer;

use rows::{RowsView, draw_rows};
use status::{StatusContext, build_status};
use writer::{Command, Writer};

/// Build the full frame for `session` as of `now`. Does not scroll.
pub fn compose_frame(session: &EditSession, now: Instant) -> Writer {
    let vp = session.viewport;
    let cols = vp.screen.cols;
    let mut w = Writer::new();
    w.push(Command::HideCursor);
    w.move_to(0, 0);

    draw_rows(
        &mut w,
        session.buffer(),
        RowsView {
            row_offset: vp.row_offset,
            col_offset: vp.col_offset,
            cols,
            rows: vp.screen.rows,
        },
    );
    draw_status_bar(&mut w, session, cols);
    draw_message_bar(&mut w, session, now, cols);

    let x = session.render_col().saturating_sub(vp.col_offset);
    let y = session.cursor.row.saturating_sub(vp.row_offset);
    w.move_to(to_u16(x), to_u16(y));
    w.push(Command::ShowCursor);
    w
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn draw_status_bar(w: &mut Writer, session: &EditSession, cols: usize) {
    let ctx = StatusContext {
        file_name: session.file_name(),
        dirty: session.is_dirty(),
        line_count: session.buffer().len(),
        language: session.buffer().syntax().map(|d| d.name),
        row: session.cursor.row,
        col: session.cursor.col,
    };
    w.push(Command::Reverse);
    w.print(build_status(&ctx, cols));
    w.push(Command::ResetAttributes);
    w.push(Command::NewLine);
}

fn draw_message_bar(w: &mut Writer, session: &EditSession, now: Instant, cols: usize) {
    w.push(Command::ClearToEol);
    let text = match &session.prompt {
        Some(prompt) => prompt.label(),
        None => match session.visible_message(now) {
            Some(msg) => msg.to_owned(),
            None => return,
        },
    };
    w.print(text.chars().take(cols).collect::<String>());
}

/// Scroll the cursor into view, then draw and flush one frame to `out`.
/// Returns the number of bytes written.
pub fn render<W: Write>(session: &mut EditSession, out: &mut W) -> Result<usize> {
    let started = Instant::now();
    session.scroll();
    let frame = compose_frame(session, started);
    let bytes = frame.flush_to(out)?;
    let ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
    timing::record_frame(ns, bytes as u64);
    tracing::trace!(target: "render", bytes, ns, "frame_flushed");
    Ok(bytes)
}
