//! Single-line prompt shown in the message bar.
//!
//! The prompt only owns its input text and what it is for. Key handling
//! lives with the dispatcher; searches get their per-keystroke updates through
//! `EditSession::search_step`.

use crate::search::SearchSession;

#[derive(Debug, Clone)]
pub enum PromptKind {
    /// File name for a buffer that has none yet.
    SaveAs,
    Search(SearchSession),
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Remove the last char; no-op on empty input.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn is_search(&self) -> bool {
        matches!(self.kind, PromptKind::Search(_))
    }

    /// Text for the message bar.
    pub fn label(&self) -> String {
        match self.kind {
            PromptKind::SaveAs => format!("Save file as: {}", self.input),
            PromptKind::Search(_) => format!("Search: {} (Use ESC/Arrows/Enter)", self.input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_input_and_labels() {
        let mut p = Prompt::new(PromptKind::SaveAs);
        p.backspace();
        p.push_char('a');
        p.push_char('.');
        p.push_char('c');
        p.backspace();
        assert_eq!(p.input(), "a.");
        assert_eq!(p.label(), "Save file as: a.");
        assert!(!p.is_search());
    }
}
