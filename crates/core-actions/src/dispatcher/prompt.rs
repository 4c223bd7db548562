//! Prompt key handling for the save-as and search prompts.
//!
//! Input edits and arrows are forwarded to a running search as `SearchNav`.
//! Enter with empty input is ignored; Esc always closes the prompt.

use super::DispatchResult;
use super::file::save_session;
use crate::PromptInput;
use core_state::{Direction, EditSession, PromptKind, SearchNav};

pub(crate) fn handle_prompt_input(input: PromptInput, session: &mut EditSession) -> DispatchResult {
    let Some(prompt) = session.prompt.as_mut() else {
        return DispatchResult::clean();
    };
    let nav = match input {
        PromptInput::Char(c) => {
            prompt.push_char(c);
            SearchNav::Edited
        }
        PromptInput::Backspace => {
            prompt.backspace();
            SearchNav::Edited
        }
        PromptInput::Arrow(Direction::Forward) => SearchNav::Next,
        PromptInput::Arrow(Direction::Backward) => SearchNav::Previous,
        PromptInput::Other => SearchNav::Edited,
        PromptInput::Cancel => return cancel(session),
        PromptInput::Accept if prompt.input().is_empty() => return DispatchResult::clean(),
        PromptInput::Accept => return accept(session),
    };
    if prompt.is_search() {
        let hit = session.search_step(nav);
        tracing::debug!(target: "search", found = hit.is_some(), "search_step");
    }
    DispatchResult::dirty()
}

fn cancel(session: &mut EditSession) -> DispatchResult {
    if session.prompt.as_ref().is_some_and(|p| p.is_search()) {
        session.search_step(SearchNav::Cancel);
    }
    match session.close_prompt().map(|p| p.kind) {
        Some(PromptKind::SaveAs) => session.set_message("Save cancelled!"),
        _ => session.set_message(""),
    }
    DispatchResult::dirty()
}

fn accept(session: &mut EditSession) -> DispatchResult {
    if session.prompt.as_ref().is_some_and(|p| p.is_search()) {
        session.search_step(SearchNav::Accept);
    }
    let Some(prompt) = session.close_prompt() else {
        return DispatchResult::clean();
    };
    session.set_message("");
    if matches!(prompt.kind, PromptKind::SaveAs) {
        session.set_file_name(prompt.input());
        save_session(session);
    }
    DispatchResult::dirty()
}
