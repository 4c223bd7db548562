//! Editing session: one buffer, its cursor, viewport, status message and the
//! active prompt.
//!
//! `EditSession` is an owned value threaded through the dispatcher and the
//! renderer; there is no process-wide editor state.
//!
//! Cursor model:
//! - `cursor.row` ranges over `0..=buffer.len()`. `row == len` is the phantom
//!   row past the end of the file; typing there appends a new row.
//! - `cursor.col` is a logical (raw char) column and never exceeds the length
//!   of its row (0 on the phantom row).
//! - The render column is derived on demand from the row's tab layout.
//!
//! Edits go through `LineBuffer`, which owns the dirty flag and the syntax
//! rescan cascade; this crate only moves the cursor around them.

use core_syntax::select_for_filename;
use core_text::{BufferError, LineBuffer, TextRow};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub mod prompt;
pub mod search;
pub mod viewport;

pub use prompt::{Prompt, PromptKind};
pub use search::{Direction, SearchHit, SearchNav, SearchSession, ViewSnapshot};
pub use viewport::{ScreenSize, Viewport};

/// Default lifetime of a status message.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Logical cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Cursor motions bound to navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Transient message shown in the message bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

#[derive(Debug)]
pub struct EditSession {
    buffer: LineBuffer,
    file_name: Option<PathBuf>,
    pub cursor: Cursor,
    pub viewport: Viewport,
    message: Option<StatusMessage>,
    message_timeout: Duration,
    pub prompt: Option<Prompt>,
    /// Set after a first quit request on a dirty buffer.
    pub quit_pending: bool,
}

impl EditSession {
    pub fn new(buffer: LineBuffer, screen: ScreenSize) -> Self {
        Self {
            buffer,
            file_name: None,
            cursor: Cursor::default(),
            viewport: Viewport::new(screen),
            message: None,
            message_timeout: MESSAGE_TIMEOUT,
            prompt: None,
            quit_pending: false,
        }
    }

    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut LineBuffer {
        &mut self.buffer
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Bind the buffer to `path` and pick the language from its name.
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let syntax = select_for_filename(&path.to_string_lossy());
        self.buffer.set_syntax(syntax);
        self.file_name = Some(path);
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    fn current_row(&self) -> Option<&TextRow> {
        self.buffer.row(self.cursor.row)
    }

    fn row_len(&self, row: usize) -> usize {
        self.buffer.row(row).map_or(0, TextRow::len)
    }

    /// Render column of the cursor (0 on the phantom row).
    pub fn render_col(&self) -> usize {
        self.current_row()
            .map_or(0, |r| r.render_column_for(self.cursor.col))
    }

    /// Bring the cursor into view.
    pub fn scroll(&mut self) -> bool {
        let render_col = self.render_col();
        self.viewport.scroll(self.cursor.row, render_col)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport.resize(cols, rows);
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            cursor: self.cursor,
            row_offset: self.viewport.row_offset,
            col_offset: self.viewport.col_offset,
        }
    }

    // ---------------------------------------------------------------------
    // Edits
    // ---------------------------------------------------------------------

    /// Insert `ch` at the cursor and advance. On the phantom row a new row is
    /// appended first.
    pub fn insert_character(&mut self, ch: char) -> Result<(), BufferError> {
        if self.cursor.row == self.buffer.len() {
            self.buffer.insert_row(self.buffer.len(), std::iter::empty())?;
        }
        self.buffer
            .insert_char(self.cursor.row, self.cursor.col, ch)?;
        self.cursor.col += 1;
        Ok(())
    }

    /// Split the row at the cursor; the cursor moves to column 0 of the new row.
    pub fn insert_newline(&mut self) -> Result<(), BufferError> {
        let Cursor { row, col } = self.cursor;
        if col == 0 {
            self.buffer.insert_row(row, std::iter::empty())?;
        } else {
            self.buffer.split_row(row, col)?;
        }
        self.cursor = Cursor { row: row + 1, col: 0 };
        tracing::trace!(target: "edit", row, col, "insert_newline");
        Ok(())
    }

    /// Delete left of the cursor, joining with the previous row at column 0.
    pub fn delete_character(&mut self) -> Result<(), BufferError> {
        let Cursor { row, col } = self.cursor;
        if row == self.buffer.len() || (row == 0 && col == 0) {
            return Ok(());
        }
        if col > 0 {
            self.buffer.delete_char(row, col - 1)?;
            self.cursor.col -= 1;
        } else {
            let join_col = self.buffer.join_with_previous(row)?;
            self.cursor = Cursor {
                row: row - 1,
                col: join_col,
            };
            tracing::trace!(target: "edit", row, join_col, "join_rows");
        }
        Ok(())
    }

    /// Delete the char under the cursor (or the row break at end of row).
    /// No-op at the end of the last row.
    pub fn delete_forward(&mut self) -> Result<(), BufferError> {
        let Cursor { row, col } = self.cursor;
        if row >= self.buffer.len() || (col >= self.row_len(row) && row + 1 >= self.buffer.len())
        {
            return Ok(());
        }
        self.move_cursor(Motion::Right);
        self.delete_character()
    }

    /// Apply a navigation motion. Horizontal moves wrap across row ends in
    /// both directions; the column is clamped to the destination row.
    pub fn move_cursor(&mut self, motion: Motion) {
        let len = self.buffer.len();
        let c = &mut self.cursor;
        match motion {
            Motion::Left => {
                if c.col > 0 {
                    c.col -= 1;
                } else if c.row > 0 {
                    c.row -= 1;
                    c.col = self.buffer.row(c.row).map_or(0, TextRow::len);
                }
            }
            Motion::Right => {
                if let Some(r) = self.buffer.row(c.row) {
                    if c.col < r.len() {
                        c.col += 1;
                    } else {
                        c.row += 1;
                        c.col = 0;
                    }
                }
            }
            Motion::Up => c.row = c.row.saturating_sub(1),
            Motion::Down => {
                if c.row < len {
                    c.row += 1;
                }
            }
            Motion::Home => c.col = 0,
            Motion::End => c.col = self.buffer.row(c.row).map_or(0, TextRow::len),
            Motion::PageUp | Motion::PageDown => {
                let rows = self.viewport.screen.rows;
                let (target, step) = if motion == Motion::PageUp {
                    (self.viewport.row_offset, Motion::Up)
                } else {
                    let bottom = (self.viewport.row_offset + rows).saturating_sub(1);
                    (bottom.min(len), Motion::Down)
                };
                c.row = target;
                for _ in 0..rows {
                    self.move_cursor(step);
                }
            }
        }
        let row_len = self.row_len(self.cursor.row);
        self.cursor.col = self.cursor.col.min(row_len);
    }

    // ---------------------------------------------------------------------
    // Messages and prompts
    // ---------------------------------------------------------------------

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            text: text.into(),
            set_at: Instant::now(),
        });
    }

    /// Message text if it is younger than the timeout at `now`.
    pub fn visible_message(&self, now: Instant) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|m| now.saturating_duration_since(m.set_at) < self.message_timeout)
            .map(|m| m.text.as_str())
    }

    pub fn open_save_as(&mut self) {
        self.prompt = Some(Prompt::new(PromptKind::SaveAs));
    }

    pub fn open_search(&mut self) {
        let session = SearchSession::new(self.snapshot());
        self.prompt = Some(Prompt::new(PromptKind::Search(session)));
    }

    /// Feed one keystroke's meaning to the active search. No-op when the
    /// prompt is not a search.
    pub fn search_step(&mut self, nav: SearchNav) -> Option<SearchHit> {
        let prompt = self.prompt.as_mut()?;
        let query = prompt.input().to_owned();
        let PromptKind::Search(search) = &mut prompt.kind else {
            return None;
        };
        search.step(
            &query,
            nav,
            &mut self.buffer,
            &mut self.cursor,
            &mut self.viewport,
        )
    }

    /// Close the prompt, removing any search overlay.
    pub fn close_prompt(&mut self) -> Option<Prompt> {
        let mut prompt = self.prompt.take()?;
        if let PromptKind::Search(search) = &mut prompt.kind {
            search.clear_overlay(&mut self.buffer);
        }
        Some(prompt)
    }
}
