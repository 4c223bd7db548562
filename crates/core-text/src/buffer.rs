//! Ordered rows of a single file plus its language and dirty state.
//!
//! Invariants:
//! - `rows[i].index == i` after every public call.
//! - Every row's highlight equals what a from-scratch scan of the whole buffer
//!   would produce; edits that flip a row's trailing comment state rescan all
//!   following rows.

use crate::BufferError;
use crate::row::{SavedHighlight, ScanContext, TextRow};
use core_syntax::{Highlight, SyntaxDescriptor};
use std::ops::Range;

pub const DEFAULT_TAB_STOP: usize = 4;

#[derive(Debug, Clone)]
pub struct LineBuffer {
    rows: Vec<TextRow>,
    syntax: Option<&'static SyntaxDescriptor>,
    tab_stop: usize,
    dirty: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl LineBuffer {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            syntax: None,
            tab_stop: tab_stop.max(1),
            dirty: false,
        }
    }

    /// Split `text` into rows on `\n`, dropping trailing `\r`. A final newline
    /// does not produce an extra empty row. The result is clean.
    pub fn from_text(text: &str, tab_stop: usize) -> Self {
        let mut buf = Self::new(tab_stop);
        for line in text.lines() {
            let idx = buf.rows.len();
            let ctx = buf.context_before(idx);
            let raw = line.trim_end_matches('\r').chars().collect();
            buf.rows.push(TextRow::new(idx, raw, buf.tab_stop, ctx));
        }
        buf
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&TextRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[TextRow] {
        &self.rows
    }

    pub fn syntax(&self) -> Option<&'static SyntaxDescriptor> {
        self.syntax
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Replace the language and rescan everything.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxDescriptor>) {
        self.syntax = syntax;
        self.rescan_syntax_from(0);
    }

    fn context_before(&self, index: usize) -> ScanContext<'static> {
        let comment_open = index
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .is_some_and(TextRow::open_comment);
        ScanContext::new(self.syntax, comment_open)
    }

    fn check_row(&self, index: usize) -> Result<(), BufferError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(BufferError::RowOutOfBounds {
                index,
                len: self.rows.len(),
            })
        }
    }

    fn renumber_from(&mut self, index: usize) {
        for (i, row) in self.rows.iter_mut().enumerate().skip(index) {
            row.index = i;
        }
    }

    /// Insert a new row holding `text` at `index` (`index <= len`).
    pub fn insert_row(
        &mut self,
        index: usize,
        text: impl IntoIterator<Item = char>,
    ) -> Result<(), BufferError> {
        if index > self.rows.len() {
            return Err(BufferError::RowOutOfBounds {
                index,
                len: self.rows.len(),
            });
        }
        let ctx = self.context_before(index);
        let row = TextRow::new(index, text.into_iter().collect(), self.tab_stop, ctx);
        let follows_changed = row.open_comment() != ctx.comment_open;
        self.rows.insert(index, row);
        self.renumber_from(index + 1);
        self.dirty = true;
        if follows_changed {
            self.rescan_syntax_from(index + 1);
        }
        Ok(())
    }

    /// Remove the row at `index` and return it.
    pub fn delete_row(&mut self, index: usize) -> Result<TextRow, BufferError> {
        self.check_row(index)?;
        let removed = self.rows.remove(index);
        self.renumber_from(index);
        self.dirty = true;
        if removed.open_comment() != self.context_before(index).comment_open {
            self.rescan_syntax_from(index);
        }
        Ok(removed)
    }

    /// Rescan every row from `index` to the end, chaining the comment state.
    /// The result equals a full rescan from row 0.
    pub fn rescan_syntax_from(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        let mut comment_open = self.context_before(index).comment_open;
        for row in &mut self.rows[index..] {
            row.update_syntax(ScanContext::new(self.syntax, comment_open));
            comment_open = row.open_comment();
        }
        tracing::trace!(
            target: "edit",
            from = index,
            rows = self.rows.len() - index,
            "rescan_syntax"
        );
    }

    fn after_row_edit(&mut self, index: usize, comment_changed: bool) {
        self.dirty = true;
        if comment_changed {
            self.rescan_syntax_from(index + 1);
        }
    }

    pub fn insert_char(&mut self, index: usize, col: usize, ch: char) -> Result<(), BufferError> {
        self.check_row(index)?;
        let ctx = self.context_before(index);
        let changed = self.rows[index].insert_char(col, ch, ctx);
        self.after_row_edit(index, changed);
        Ok(())
    }

    /// Delete the char at `col`. Returns false (and leaves the buffer clean)
    /// when `col` is past the end of the row.
    pub fn delete_char(&mut self, index: usize, col: usize) -> Result<bool, BufferError> {
        self.check_row(index)?;
        if col >= self.rows[index].len() {
            return Ok(false);
        }
        let ctx = self.context_before(index);
        let changed = self.rows[index].delete_char(col, ctx);
        self.after_row_edit(index, changed);
        Ok(true)
    }

    pub fn append_to_row(&mut self, index: usize, text: &[char]) -> Result<(), BufferError> {
        self.check_row(index)?;
        let ctx = self.context_before(index);
        let changed = self.rows[index].append_text(text, ctx);
        self.after_row_edit(index, changed);
        Ok(())
    }

    /// Cut the row at `col` and return the removed tail.
    pub fn truncate_row(&mut self, index: usize, col: usize) -> Result<Vec<char>, BufferError> {
        self.check_row(index)?;
        let ctx = self.context_before(index);
        let (tail, changed) = self.rows[index].truncate(col, ctx);
        self.after_row_edit(index, changed);
        Ok(tail)
    }

    /// Move `[col, len)` of row `index` into a new row right below it.
    pub fn split_row(&mut self, index: usize, col: usize) -> Result<(), BufferError> {
        let tail = self.truncate_row(index, col)?;
        self.insert_row(index + 1, tail)
    }

    /// Append row `index` onto row `index - 1` and remove it. Returns the
    /// join column in the surviving row.
    pub fn join_with_previous(&mut self, index: usize) -> Result<usize, BufferError> {
        self.check_row(index)?;
        let prev = index.checked_sub(1).ok_or(BufferError::RowOutOfBounds {
            index,
            len: self.rows.len(),
        })?;
        let join_col = self.rows[prev].len();
        let moved = self.rows[index].raw().to_vec();
        self.append_to_row(prev, &moved)?;
        self.delete_row(index)?;
        Ok(join_col)
    }

    /// Rows joined by `\n` with a trailing `\n`; empty for an empty buffer.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.extend(row.raw().iter());
            out.push('\n');
        }
        out
    }

    /// Temporarily paint `class` over a render range of row `index`.
    pub fn overlay(
        &mut self,
        index: usize,
        range: Range<usize>,
        class: Highlight,
    ) -> Result<SavedHighlight, BufferError> {
        self.check_row(index)?;
        Ok(self.rows[index].overlay(range, class))
    }

    /// Undo an overlay. Stale saves (row since deleted) are dropped.
    pub fn restore(&mut self, saved: SavedHighlight) {
        if let Some(row) = self.rows.get_mut(saved.row) {
            row.restore(saved);
        }
    }
}
