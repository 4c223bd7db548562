//! Syntax descriptors, highlight classes and the per-row highlight scanner.
//!
//! A `SyntaxDescriptor` is immutable language data: keyword and type lists,
//! comment markers, preprocessor markers and the set of highlight categories
//! the language enables. Descriptors live in static tables (`languages`) and
//! are handed out as `&'static` references; nothing here owns editor state.
//!
//! The scanner (`scan::scan_row`) classifies one row of render text from
//! scratch. The only state carried between rows is a single boolean: whether a
//! block comment is still open when the row ends. Callers (the line buffer)
//! are responsible for chaining that flag from row to row.
//!
//! Invariants:
//! - The highlight vector produced for a row has exactly one entry per render cell.
//! - Scanning is a pure function of (render text, descriptor, comment-open input).

use bitflags::bitflags;

pub mod languages;
pub mod scan;

pub use languages::{LANGUAGES, select_for_filename, select_from};
pub use scan::scan_row;

/// Syntax category assigned to each rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Number,
    String,
    Character,
    Comment,
    Keyword,
    Type,
    Preprocessor,
    Separator,
    /// Temporary search-match overlay. Never produced by the scanner.
    Match,
}

bitflags! {
    /// Highlight categories a language enables.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HighlightFlags: u8 {
        const NUMBERS      = 0b0000_0001;
        const STRINGS      = 0b0000_0010;
        const CHARACTERS   = 0b0000_0100;
        const COMMENTS     = 0b0000_1000;
        const KEYWORDS     = 0b0001_0000;
        const PREPROCESSOR = 0b0010_0000;
        const SEPARATORS   = 0b0100_0000;
    }
}

/// Immutable per-language rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDescriptor {
    pub name: &'static str,
    /// Entries starting with `.` match the file extension; any other entry
    /// matches as a substring of the file name.
    pub file_match: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub types: &'static [&'static str],
    pub single_line_comment: Option<&'static str>,
    /// (start, end) markers of a block comment.
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Markers that turn a whole row into a preprocessor line when found at column 0.
    pub preprocessor: &'static [&'static str],
    pub flags: HighlightFlags,
}

impl SyntaxDescriptor {
    /// True if `filename` is claimed by this descriptor.
    pub fn matches(&self, filename: &str) -> bool {
        let extension = filename.rfind('.').map(|idx| &filename[idx..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                extension == Some(*pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

/// Characters that delimit words for keyword and number recognition.
pub const SEPARATOR_PUNCTUATION: &str = ",.()+-/*=~%<>[];";

/// Separator predicate: whitespace, NUL, or one of `SEPARATOR_PUNCTUATION`.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\0' || SEPARATOR_PUNCTUATION.contains(c)
}
