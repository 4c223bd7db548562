//! Line-structured text model.
//!
//! A `LineBuffer` owns an ordered `Vec<TextRow>`; each row keeps its raw
//! chars, the tab-expanded render form and one highlight class per render
//! cell. The model is codepoint oriented: one `char` occupies one cell.
//!
//! Rows are scanned with `core_syntax::scan_row`. The only cross-row state is
//! the open block comment flag, which the buffer chains from row to row and
//! re-propagates whenever an edit flips it.

pub mod buffer;
pub mod row;

pub use buffer::{DEFAULT_TAB_STOP, LineBuffer};
pub use row::{SavedHighlight, ScanContext, TextRow};

use thiserror::Error;

/// Row addressing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("row {index} out of bounds (buffer has {len} rows)")]
    RowOutOfBounds { index: usize, len: usize },
}
