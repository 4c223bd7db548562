//! Highlight class to terminal color mapping and the color transition tracker.
//!
//! Design invariants:
//! * `Normal` has no color; returning to it emits a single `ResetColor`.
//! * A color escape is emitted only when the class differs from the last
//!   emitted class on the current row.

use crate::writer::{Command, Writer};
use core_syntax::Highlight;
use crossterm::style::Color;

/// 256-color foreground for a highlight class; `None` for Normal.
pub fn color_for(h: Highlight) -> Option<Color> {
    let color = match h {
        Highlight::Normal => return None,
        Highlight::Number => Color::AnsiValue(207),
        Highlight::String => Color::AnsiValue(208),
        Highlight::Character => Color::AnsiValue(178),
        Highlight::Comment => Color::AnsiValue(34),
        Highlight::Keyword => Color::AnsiValue(20),
        Highlight::Type => Color::AnsiValue(21),
        Highlight::Match => Color::AnsiValue(51),
        Highlight::Preprocessor | Highlight::Separator => Color::Grey,
    };
    Some(color)
}

/// Tracks the class whose color is currently active on the terminal.
#[derive(Debug, Default)]
pub struct ColorState {
    current: Highlight,
}

impl ColorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `class`, emitting only if it differs from the active one.
    pub fn switch(&mut self, w: &mut Writer, class: Highlight) {
        if class == self.current {
            return;
        }
        match color_for(class) {
            Some(color) => w.push(Command::Fg(color)),
            None => w.push(Command::ResetColor),
        }
        self.current = class;
    }

    /// Re-emit the active color after something reset all attributes.
    pub fn reapply(&self, w: &mut Writer) {
        if let Some(color) = color_for(self.current) {
            w.push(Command::Fg(color));
        }
    }
}
