//! Status bar composition.
//!
//! Two stages:
//! 1. `compose_status` produces an ordered vector of `StatusSegment` items.
//! 2. `format_status` renders those segments into exactly `cols` columns.
//!
//! Layout: `[UNSAVED]  <name> ~ <N> lines (<lang>)` on the left, `row:col` on
//! the right. The left part is truncated to the width; the right part is only
//! placed when it fits after the left part, otherwise the bar is space padded.

use std::borrow::Cow;
use std::path::Path;

/// Longest file name shown, in chars.
pub const NAME_MAX: usize = 50;

pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub dirty: bool,
    pub line_count: usize,
    pub language: Option<&'static str>,
    /// 0-based cursor row.
    pub row: usize,
    /// 0-based logical column.
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    /// `[UNSAVED]` marker, empty when clean.
    Dirty(bool),
    FileName(Cow<'a, str>),
    LineCount(usize),
    Language(&'static str),
    /// 1-based, right aligned.
    Position { line_1: usize, col_1: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match ctx.file_name {
        Some(p) => p.to_string_lossy(),
        None => "[No Name]".into(),
    };
    let mut out = Vec::with_capacity(5);
    out.push(StatusSegment::Dirty(ctx.dirty));
    out.push(StatusSegment::FileName(name));
    out.push(StatusSegment::LineCount(ctx.line_count));
    if let Some(lang) = ctx.language {
        out.push(StatusSegment::Language(lang));
    }
    out.push(StatusSegment::Position {
        line_1: ctx.row + 1,
        col_1: ctx.col + 1,
    });
    out
}

/// Render segments into a string of exactly `cols` chars.
pub fn format_status(segments: &[StatusSegment<'_>], cols: usize) -> String {
    use std::fmt::Write as _;
    let mut left = String::with_capacity(cols);
    let mut right = String::new();
    for seg in segments {
        match seg {
            StatusSegment::Dirty(dirty) => {
                if *dirty {
                    left.push_str("[UNSAVED]");
                }
                left.push_str("  ");
            }
            StatusSegment::FileName(name) => left.extend(name.chars().take(NAME_MAX)),
            StatusSegment::LineCount(n) => {
                let _ = write!(left, " ~ {n} lines");
            }
            StatusSegment::Language(lang) => {
                let _ = write!(left, " ({lang})");
            }
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(right, "{line_1}:{col_1}");
            }
        }
    }

    let mut bar: String = left.chars().take(cols).collect();
    let used = bar.chars().count();
    let right_len = right.chars().count();
    if cols - used >= right_len {
        bar.extend(std::iter::repeat_n(' ', cols - used - right_len));
        bar.push_str(&right);
    } else {
        bar.extend(std::iter::repeat_n(' ', cols - used));
    }
    bar
}

pub fn build_status(ctx: &StatusContext, cols: usize) -> String {
    format_status(&compose_status(ctx), cols)
}
