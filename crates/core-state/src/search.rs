//! Incremental find over the render text of a `LineBuffer`.
//!
//! A `SearchSession` lives inside the search prompt. Every prompt keystroke is
//! reported as a `SearchNav`; the session undoes its previous Match overlay,
//! picks a direction and scans at most one full lap of the buffer.

use crate::Cursor;
use crate::viewport::Viewport;
use core_syntax::Highlight;
use core_text::{LineBuffer, SavedHighlight, TextRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// What the last prompt keystroke means for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNav {
    /// Query text changed: restart from the top.
    Edited,
    Next,
    Previous,
    /// Enter: keep the cursor where the last match put it.
    Accept,
    /// Esc: return to where the search started.
    Cancel,
}

/// Cursor and offsets captured when the prompt opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub cursor: Cursor,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// A match location in render coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub row: usize,
    pub render_col: usize,
    pub len: usize,
}

/// First render index in `row` where `query` occurs.
fn find_in_row(row: &TextRow, query: &[char]) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    row.render().windows(query.len()).position(|w| w == query)
}

/// Scan up to `rows.len()` rows starting after `last_match` in `direction`,
/// wrapping at both ends. With no previous match the scan starts at row 0
/// going forward.
pub fn find_match(
    rows: &[TextRow],
    query: &str,
    last_match: Option<usize>,
    direction: Direction,
) -> Option<SearchHit> {
    let query: Vec<char> = query.chars().collect();
    let len = rows.len();
    if query.is_empty() || len == 0 {
        return None;
    }
    let (mut current, direction) = match last_match {
        Some(row) => (row.min(len - 1), direction),
        None => (len - 1, Direction::Forward),
    };
    for _ in 0..len {
        current = match direction {
            Direction::Forward => (current + 1) % len,
            Direction::Backward => current.checked_sub(1).unwrap_or(len - 1),
        };
        if let Some(render_col) = find_in_row(&rows[current], &query) {
            return Some(SearchHit {
                row: current,
                render_col,
                len: query.len(),
            });
        }
    }
    None
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    last_match: Option<usize>,
    direction: Direction,
    saved: Option<SavedHighlight>,
    origin: ViewSnapshot,
}

impl SearchSession {
    pub fn new(origin: ViewSnapshot) -> Self {
        Self {
            last_match: None,
            direction: Direction::Forward,
            saved: None,
            origin,
        }
    }

    /// Undo the Match overlay, if any.
    pub fn clear_overlay(&mut self, buffer: &mut LineBuffer) {
        if let Some(saved) = self.saved.take() {
            buffer.restore(saved);
        }
    }

    /// React to one prompt keystroke. Returns the hit, if the keystroke
    /// triggered a scan that found one.
    pub fn step(
        &mut self,
        query: &str,
        nav: SearchNav,
        buffer: &mut LineBuffer,
        cursor: &mut Cursor,
        viewport: &mut Viewport,
    ) -> Option<SearchHit> {
        self.clear_overlay(buffer);
        match nav {
            SearchNav::Accept => {
                self.last_match = None;
                return None;
            }
            SearchNav::Cancel => {
                self.last_match = None;
                *cursor = self.origin.cursor;
                viewport.row_offset = self.origin.row_offset;
                viewport.col_offset = self.origin.col_offset;
                return None;
            }
            SearchNav::Next => self.direction = Direction::Forward,
            SearchNav::Previous => self.direction = Direction::Backward,
            SearchNav::Edited => {
                self.last_match = None;
                self.direction = Direction::Forward;
            }
        }
        self.find(query, self.direction, buffer, cursor, viewport)
    }

    /// Find the next occurrence of `query` from the last match and move the
    /// cursor onto it, painting a Match overlay over the span.
    pub fn find(
        &mut self,
        query: &str,
        direction: Direction,
        buffer: &mut LineBuffer,
        cursor: &mut Cursor,
        viewport: &mut Viewport,
    ) -> Option<SearchHit> {
        self.clear_overlay(buffer);
        let hit = find_match(buffer.rows(), query, self.last_match, direction)?;
        self.last_match = Some(hit.row);
        cursor.row = hit.row;
        cursor.col = buffer
            .row(hit.row)
            .map_or(0, |r| r.logical_column_for(hit.render_col));
        // Past-the-end offset makes the next scroll put the match on the top row.
        viewport.row_offset = buffer.len();
        self.saved = buffer
            .overlay(hit.row, hit.render_col..hit.render_col + hit.len, Highlight::Match)
            .ok();
        tracing::debug!(
            target: "search",
            row = hit.row,
            render_col = hit.render_col,
            ?direction,
            "match"
        );
        Some(hit)
    }
}
