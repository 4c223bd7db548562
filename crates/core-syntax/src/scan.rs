//! Single-pass, left-to-right highlight scanner for one row of render text.
//!
//! Rules, in priority order at each position:
//! 1. Column 0 outside a block comment starting with a preprocessor marker:
//!    the whole row is Preprocessor.
//! 2. Outside strings and comments, the single-line marker turns the rest of
//!    the row into Comment.
//! 3. Outside strings, a block comment (continued or newly opened) is Comment
//!    up to and including its end marker.
//! 4. `"` (and `'` when CHARACTERS is enabled) open a literal that runs to the
//!    next matching quote. Backslashes get no special treatment.
//! 5. Digits after a separator or a number, and `.` after a number, are Number.
//! 6. After a separator, the longest keyword then the longest type followed by
//!    a separator (or end of row) is Keyword / Type.
//! 7. Non-whitespace separators are Separator when enabled.
//! 8. Everything else stays Normal.

use crate::{Highlight, HighlightFlags, SyntaxDescriptor, is_separator};

/// Classify `render` into `out` (cleared and resized to `render.len()`).
///
/// `comment_open` is the open-comment state left by the previous row. Returns
/// the open-comment state at the end of this row.
pub fn scan_row(
    render: &[char],
    syntax: Option<&SyntaxDescriptor>,
    comment_open: bool,
    out: &mut Vec<Highlight>,
) -> bool {
    out.clear();
    out.resize(render.len(), Highlight::Normal);
    let Some(syn) = syntax else {
        return false;
    };
    let flags = syn.flags;
    let comments = flags.contains(HighlightFlags::COMMENTS);
    let block = if comments { syn.block_comment } else { None };
    let mut in_comment = comment_open && block.is_some();

    if !in_comment
        && flags.contains(HighlightFlags::PREPROCESSOR)
        && syn.preprocessor.iter().any(|marker| starts_with(render, marker))
    {
        out.fill(Highlight::Preprocessor);
        return false;
    }

    let n = render.len();
    let mut prev_sep = true;
    let mut in_literal: Option<char> = None;
    let mut i = 0;
    while i < n {
        let c = render[i];
        let prev_hl = if i > 0 { out[i - 1] } else { Highlight::Normal };
        let rest = &render[i..];

        if comments
            && in_literal.is_none()
            && !in_comment
            && let Some(marker) = syn.single_line_comment
            && starts_with(rest, marker)
        {
            out[i..].fill(Highlight::Comment);
            break;
        }

        if in_literal.is_none()
            && let Some((start, end)) = block
        {
            if in_comment {
                if starts_with(rest, end) {
                    let len = marker_len(end);
                    out[i..i + len].fill(Highlight::Comment);
                    i += len;
                    in_comment = false;
                    prev_sep = true;
                } else {
                    out[i] = Highlight::Comment;
                    i += 1;
                }
                continue;
            }
            if starts_with(rest, start) {
                let len = marker_len(start);
                out[i..i + len].fill(Highlight::Comment);
                i += len;
                in_comment = true;
                continue;
            }
        }

        if let Some(quote) = in_literal {
            let class = literal_class(quote);
            out[i] = class;
            if c == quote {
                in_literal = None;
            }
            prev_sep = true;
            i += 1;
            continue;
        }
        if (c == '"' && flags.contains(HighlightFlags::STRINGS))
            || (c == '\'' && flags.contains(HighlightFlags::CHARACTERS))
        {
            in_literal = Some(c);
            out[i] = literal_class(c);
            i += 1;
            continue;
        }

        if flags.contains(HighlightFlags::NUMBERS)
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == '.' && prev_hl == Highlight::Number))
        {
            out[i] = Highlight::Number;
            prev_sep = false;
            i += 1;
            continue;
        }

        if prev_sep
            && flags.contains(HighlightFlags::KEYWORDS)
            && let Some((len, class)) = match_word(rest, syn)
        {
            out[i..i + len].fill(class);
            i += len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(c);
        if prev_sep && !c.is_whitespace() && flags.contains(HighlightFlags::SEPARATORS) {
            out[i] = Highlight::Separator;
        }
        i += 1;
    }

    in_comment
}

fn literal_class(quote: char) -> Highlight {
    if quote == '\'' {
        Highlight::Character
    } else {
        Highlight::String
    }
}

fn marker_len(marker: &str) -> usize {
    marker.chars().count()
}

fn starts_with(hay: &[char], pattern: &str) -> bool {
    let mut cells = hay.iter();
    !pattern.is_empty() && pattern.chars().all(|p| cells.next() == Some(&p))
}

/// Longest keyword, else longest type, that starts `rest` and ends at a separator.
fn match_word(rest: &[char], syn: &SyntaxDescriptor) -> Option<(usize, Highlight)> {
    let longest = |words: &[&str]| {
        words
            .iter()
            .filter(|w| starts_with(rest, w))
            .map(|w| marker_len(w))
            .filter(|&len| is_separator(rest.get(len).copied().unwrap_or('\0')))
            .max()
    };
    longest(syn.keywords)
        .map(|len| (len, Highlight::Keyword))
        .or_else(|| longest(syn.types).map(|len| (len, Highlight::Type)))
}
