//! A single logical line: raw text, its tab-expanded render form and the
//! per-cell highlight classification.
//!
//! Invariants:
//! - `render` is a pure function of `raw` and `tab_stop`.
//! - `highlight.len() == render.len()` after every mutation.
//! - `open_comment` always reflects the last scan of this row.

use core_syntax::{Highlight, SyntaxDescriptor, scan_row};
use std::ops::Range;

/// Inputs the scanner needs from outside the row: the language and whether
/// the previous row left a block comment open.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanContext<'a> {
    pub syntax: Option<&'a SyntaxDescriptor>,
    pub comment_open: bool,
}

impl<'a> ScanContext<'a> {
    pub fn new(syntax: Option<&'a SyntaxDescriptor>, comment_open: bool) -> Self {
        Self {
            syntax,
            comment_open,
        }
    }

    /// No language, no comment carried in.
    pub fn plain() -> Self {
        Self::default()
    }
}

/// Highlight cells captured before a temporary overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedHighlight {
    pub row: usize,
    cells: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow {
    pub(crate) index: usize,
    raw: Vec<char>,
    render: Vec<char>,
    highlight: Vec<Highlight>,
    open_comment: bool,
    tab_stop: usize,
}

impl TextRow {
    /// Build a row and compute its render and highlight state.
    pub fn new(index: usize, raw: Vec<char>, tab_stop: usize, ctx: ScanContext<'_>) -> Self {
        let mut row = Self {
            index,
            raw,
            render: Vec::new(),
            highlight: Vec::new(),
            open_comment: false,
            tab_stop: tab_stop.max(1),
        };
        row.update_render();
        row.update_syntax(ctx);
        row
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn raw(&self) -> &[char] {
        &self.raw
    }

    pub fn render(&self) -> &[char] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Logical length in chars.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn raw_string(&self) -> String {
        self.raw.iter().collect()
    }

    pub fn render_string(&self) -> String {
        self.render.iter().collect()
    }

    /// Insert `ch` at `col` (clamped to `[0, len]`). Returns true when the
    /// row's trailing comment state changed.
    pub fn insert_char(&mut self, col: usize, ch: char, ctx: ScanContext<'_>) -> bool {
        let col = col.min(self.raw.len());
        self.raw.insert(col, ch);
        self.refresh(ctx)
    }

    /// Remove the char at `col`. Out of range is a no-op returning false.
    pub fn delete_char(&mut self, col: usize, ctx: ScanContext<'_>) -> bool {
        if col >= self.raw.len() {
            return false;
        }
        self.raw.remove(col);
        self.refresh(ctx)
    }

    /// Append `text` to the end of the row.
    pub fn append_text(&mut self, text: &[char], ctx: ScanContext<'_>) -> bool {
        self.raw.extend_from_slice(text);
        self.refresh(ctx)
    }

    /// Keep `[0, col)` and hand back the removed tail.
    pub fn truncate(&mut self, col: usize, ctx: ScanContext<'_>) -> (Vec<char>, bool) {
        let col = col.min(self.raw.len());
        let tail = self.raw.split_off(col);
        let changed = self.refresh(ctx);
        (tail, changed)
    }

    fn refresh(&mut self, ctx: ScanContext<'_>) -> bool {
        self.update_render();
        self.update_syntax(ctx)
    }

    /// Rebuild `render` by expanding tabs to the next tab stop.
    pub fn update_render(&mut self) {
        self.render.clear();
        self.render.reserve(self.raw.len());
        for &c in &self.raw {
            if c == '\t' {
                self.render.push(' ');
                while self.render.len() % self.tab_stop != 0 {
                    self.render.push(' ');
                }
            } else {
                self.render.push(c);
            }
        }
    }

    /// Rescan highlight classes from scratch. Returns true when the trailing
    /// comment state differs from the previous scan.
    pub fn update_syntax(&mut self, ctx: ScanContext<'_>) -> bool {
        let before = self.open_comment;
        self.open_comment = scan_row(
            &self.render,
            ctx.syntax,
            ctx.comment_open,
            &mut self.highlight,
        );
        before != self.open_comment
    }

    /// Render column of logical column `col` (clamped to the row length).
    pub fn render_column_for(&self, col: usize) -> usize {
        let ts = self.tab_stop;
        self.raw[..col.min(self.raw.len())]
            .iter()
            .fold(0, |rx, &c| {
                if c == '\t' {
                    rx + (ts - rx % ts)
                } else {
                    rx + 1
                }
            })
    }

    /// First logical column whose cumulative render width exceeds
    /// `render_col`, or `len` when none does.
    pub fn logical_column_for(&self, render_col: usize) -> usize {
        let ts = self.tab_stop;
        let mut rx = 0;
        for (col, &c) in self.raw.iter().enumerate() {
            if c == '\t' {
                rx += ts - rx % ts;
            } else {
                rx += 1;
            }
            if rx > render_col {
                return col;
            }
        }
        self.raw.len()
    }

    /// Paint `class` over `range` (clamped to the render length), returning
    /// the cells needed to undo it.
    pub fn overlay(&mut self, range: Range<usize>, class: Highlight) -> SavedHighlight {
        let saved = SavedHighlight {
            row: self.index,
            cells: self.highlight.clone(),
        };
        let end = range.end.min(self.highlight.len());
        let start = range.start.min(end);
        self.highlight[start..end].fill(class);
        saved
    }

    /// Put back highlight cells captured by `overlay`. Ignored when the row
    /// has been re-rendered to a different width since.
    pub fn restore(&mut self, saved: SavedHighlight) {
        if saved.cells.len() == self.highlight.len() {
            self.highlight = saved.cells;
        }
    }
}
