//! Text area drawing: visible row slices, filler rows and the welcome banner.

use crate::style::ColorState;
use crate::writer::{Command, Writer};
use core_syntax::Highlight;
use core_text::{LineBuffer, TextRow};

pub const WELCOME: &str = concat!("Neo Text Editor -- version ", env!("CARGO_PKG_VERSION"));

/// Geometry of the text area for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsView {
    pub row_offset: usize,
    pub col_offset: usize,
    pub cols: usize,
    pub rows: usize,
}

/// Draw `view.rows` screen rows, each terminated by clear-to-EOL and CRLF.
pub fn draw_rows(w: &mut Writer, buffer: &LineBuffer, view: RowsView) {
    for screen_row in 0..view.rows {
        let file_row = screen_row + view.row_offset;
        match buffer.row(file_row) {
            Some(row) => draw_text_row(w, row, view.col_offset, view.cols),
            None if buffer.is_empty() && screen_row == view.rows / 3 => {
                draw_welcome(w, view.cols)
            }
            None => w.print("~"),
        }
        w.push(Command::ClearToEol);
        w.push(Command::NewLine);
    }
}

fn draw_welcome(w: &mut Writer, cols: usize) {
    let text: String = WELCOME.chars().take(cols).collect();
    let mut padding = (cols - text.chars().count()) / 2;
    if padding > 0 {
        w.print("~");
        padding -= 1;
    }
    w.print(" ".repeat(padding));
    w.print(text);
}

/// Glyph drawn in inverse video for a control char.
pub fn control_glyph(c: char) -> char {
    match u32::from(c) {
        code @ 0..=26 => char::from_u32(u32::from('@') + code).unwrap_or('?'),
        _ => '?',
    }
}

/// Render slice `[col_offset, col_offset + cols)` of `row` with color runs.
pub fn draw_text_row(w: &mut Writer, row: &TextRow, col_offset: usize, cols: usize) {
    let render = row.render();
    let highlight = row.highlight();
    let start = col_offset.min(render.len());
    let end = (col_offset + cols).min(render.len());
    let mut colors = ColorState::new();
    for (&c, &class) in render[start..end].iter().zip(&highlight[start..end]) {
        if c.is_control() {
            w.push(Command::Reverse);
            w.print_char(control_glyph(c));
            w.push(Command::ResetAttributes);
            colors.reapply(w);
        } else {
            colors.switch(w, class);
            w.print_char(c);
        }
    }
    colors.switch(w, Highlight::Normal);
}
