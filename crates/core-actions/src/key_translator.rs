//! Stateless key -> `Action` translation.
//!
//! Two vocabularies:
//! * Editing (no prompt open): printable chars and Tab insert, Enter splits the
//!   row, navigation keys move, Ctrl chords run commands.
//! * Prompt open: every key becomes `Action::Prompt`, so a running search sees
//!   each keystroke.
//!
//! Keys with no meaning (Esc while editing, unbound Ctrl chords) yield `None`.

use crate::{Action, EditKind, PromptInput};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::{Direction, Motion};

pub fn translate(key: &KeyEvent, prompt_active: bool) -> Option<Action> {
    tracing::trace!(
        target: "actions.translate",
        ctrl = key.mods.contains(KeyModifiers::CTRL),
        prompt_active,
        "translate_key_attempt"
    );
    if prompt_active {
        return Some(Action::Prompt(prompt_input(key)));
    }
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                's' => Some(Action::Save),
                'f' => Some(Action::Find),
                'q' => Some(Action::Quit),
                'l' => Some(Action::Redraw),
                'h' => Some(Action::Edit(EditKind::Backspace)),
                _ => None,
            },
            code => editing_key(code),
        };
    }
    match key.code {
        KeyCode::Char(_) if key.mods.contains(KeyModifiers::ALT) => None,
        code => editing_key(code),
    }
}

fn editing_key(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char(c) if !c.is_control() => Action::Edit(EditKind::InsertChar(c)),
        KeyCode::Char(_) | KeyCode::Esc => return None,
        KeyCode::Tab => Action::Edit(EditKind::InsertChar('\t')),
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Delete => Action::Edit(EditKind::DeleteUnder),
        KeyCode::Up => Action::Motion(Motion::Up),
        KeyCode::Down => Action::Motion(Motion::Down),
        KeyCode::Left => Action::Motion(Motion::Left),
        KeyCode::Right => Action::Motion(Motion::Right),
        KeyCode::Home => Action::Motion(Motion::Home),
        KeyCode::End => Action::Motion(Motion::End),
        KeyCode::PageUp => Action::Motion(Motion::PageUp),
        KeyCode::PageDown => Action::Motion(Motion::PageDown),
    };
    Some(action)
}

fn prompt_input(key: &KeyEvent) -> PromptInput {
    if key.is_ctrl('h') {
        return PromptInput::Backspace;
    }
    match key.code {
        KeyCode::Backspace | KeyCode::Delete => PromptInput::Backspace,
        KeyCode::Esc => PromptInput::Cancel,
        KeyCode::Enter => PromptInput::Accept,
        KeyCode::Right | KeyCode::Down => PromptInput::Arrow(Direction::Forward),
        KeyCode::Left | KeyCode::Up => PromptInput::Arrow(Direction::Backward),
        KeyCode::Char(c)
            if c.is_ascii()
                && !c.is_ascii_control()
                && !key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) =>
        {
            PromptInput::Char(c)
        }
        _ => PromptInput::Other,
    }
}
