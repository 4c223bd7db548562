//! Viewport offsets and the scroll clamp that keeps the cursor visible.
//!
//! Invariants (after `scroll`):
//! * `row_offset <= cursor_row < row_offset + screen.rows` when `screen.rows > 0`.
//! * `col_offset <= render_col < col_offset + screen.cols` when `screen.cols > 0`.

/// Rows reserved below the text area: status bar and message bar.
pub const BAR_ROWS: usize = 2;

/// Drawable text area in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenSize {
    pub cols: usize,
    /// Text rows only; the two bars are excluded.
    pub rows: usize,
}

impl ScreenSize {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Text area for a terminal of `cols` x `rows` cells.
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            cols: usize::from(cols),
            rows: usize::from(rows).saturating_sub(BAR_ROWS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    pub screen: ScreenSize,
}

/// New offset so that `pos` falls inside `[offset, offset + extent)`.
///
/// Moves up to `pos` when above the window, down to `pos - extent + 1` when
/// below it, and otherwise keeps `offset`. A zero extent pins the offset to
/// `pos`.
pub fn clamp_offset(offset: usize, pos: usize, extent: usize) -> usize {
    if extent == 0 || pos < offset {
        pos
    } else if pos >= offset + extent {
        pos + 1 - extent
    } else {
        offset
    }
}

impl Viewport {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen,
        }
    }

    /// Clamp both offsets around the cursor. Returns true if either moved.
    pub fn scroll(&mut self, cursor_row: usize, render_col: usize) -> bool {
        let row_offset = clamp_offset(self.row_offset, cursor_row, self.screen.rows);
        let col_offset = clamp_offset(self.col_offset, render_col, self.screen.cols);
        let moved = row_offset != self.row_offset || col_offset != self.col_offset;
        self.row_offset = row_offset;
        self.col_offset = col_offset;
        moved
    }

    /// Adopt a new terminal size. Offsets are corrected on the next `scroll`.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.screen = ScreenSize::from_terminal(cols, rows);
        tracing::debug!(
            target: "state.viewport",
            cols = self.screen.cols,
            rows = self.screen.rows,
            "resize"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_rows_exclude_bars() {
        assert_eq!(ScreenSize::from_terminal(80, 24), ScreenSize::new(80, 22));
        assert_eq!(ScreenSize::from_terminal(80, 1).rows, 0);
    }

    #[test]
    fn scroll_down_and_up() {
        let mut vp = Viewport::new(ScreenSize::new(10, 5));
        assert!(!vp.scroll(4, 0));
        assert!(vp.scroll(5, 0));
        assert_eq!(vp.row_offset, 1);
        assert!(vp.scroll(0, 0));
        assert_eq!(vp.row_offset, 0);
    }

    #[test]
    fn scroll_horizontal() {
        let mut vp = Viewport::new(ScreenSize::new(10, 5));
        vp.scroll(0, 25);
        assert_eq!(vp.col_offset, 16);
        vp.scroll(0, 12);
        assert_eq!(vp.col_offset, 12);
    }

    #[test]
    fn offset_past_cursor_snaps_to_cursor() {
        let mut vp = Viewport::new(ScreenSize::new(10, 5));
        vp.row_offset = 100;
        vp.scroll(7, 0);
        assert_eq!(vp.row_offset, 7);
    }
}
