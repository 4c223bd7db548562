use core_render::writer::{Command, Writer};
use core_render::{compose_frame, render, timing};
use core_state::{Cursor, EditSession, ScreenSize};
use core_text::LineBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::time::{Duration, Instant};

fn session(text: &str, cols: usize, rows: usize) -> EditSession {
    EditSession::new(LineBuffer::from_text(text, 4), ScreenSize::new(cols, rows))
}

/// Printed text of the frame with rows separated by '\n'.
fn screen_text(w: &Writer) -> String {
    w.commands()
        .iter()
        .filter_map(|c| match c {
            Command::Print(s) => Some(s.as_str()),
            Command::NewLine => Some("\n"),
            _ => None,
        })
        .collect()
}

#[test]
fn frame_order_hides_then_shows_cursor() {
    let s = session("abc", 20, 3);
    let w = compose_frame(&s, Instant::now());
    let cmds = w.commands();
    assert_eq!(cmds[0], Command::HideCursor);
    assert_eq!(cmds[1], Command::MoveTo(0, 0));
    assert_eq!(cmds[cmds.len() - 1], Command::ShowCursor);
    assert_eq!(cmds[cmds.len() - 2], Command::MoveTo(0, 0));
}

#[test]
fn text_rows_status_and_message_lines() {
    let mut s = session("hello\nworld", 25, 3);
    s.set_message("HELP: Ctrl-Q = quit");
    let text = screen_text(&compose_frame(&s, Instant::now()));
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[0], "hello");
    assert_eq!(lines[1], "world");
    assert_eq!(lines[2], "~");
    assert_eq!(lines[3], "  [No Name] ~ 2 lines 1:1");
    assert_eq!(lines[4], "HELP: Ctrl-Q = quit");
}

#[test]
fn expired_message_is_not_drawn() {
    let mut s = session("x", 20, 1).with_message_timeout(Duration::from_secs(10));
    s.set_message("old news");
    let later = Instant::now() + Duration::from_secs(11);
    let text = screen_text(&compose_frame(&s, later));
    assert!(!text.contains("old news"));
}

#[test]
fn prompt_label_replaces_message() {
    let mut s = session("x", 40, 1);
    s.set_message("ignored");
    s.open_save_as();
    s.prompt.as_mut().unwrap().push_char('a');
    let text = screen_text(&compose_frame(&s, Instant::now()));
    assert!(text.ends_with("Save file as: a"));
}

#[test]
fn message_truncated_to_width() {
    let mut s = session("x", 8, 1);
    s.set_message("0123456789");
    let text = screen_text(&compose_frame(&s, Instant::now()));
    assert!(text.ends_with("\n01234567"));
}

#[test]
fn cursor_placed_relative_to_offsets() {
    let text: Vec<String> = (0..30).map(|i| format!("\tline {i}")).collect();
    let mut s = session(&text.join("\n"), 10, 5);
    s.cursor = Cursor { row: 20, col: 1 };
    let mut sink = Vec::new();
    render(&mut s, &mut sink).unwrap();
    assert_eq!(s.viewport.row_offset, 16);
    let w = compose_frame(&s, Instant::now());
    let cmds = w.commands();
    assert_eq!(cmds[cmds.len() - 2], Command::MoveTo(4, 4));
}

#[test]
fn render_flushes_and_records_timing() {
    let mut s = session("abc", 20, 3);
    let before = timing::frames_total();
    let mut sink = Vec::new();
    let n = render(&mut s, &mut sink).unwrap();
    assert_eq!(n, sink.len());
    assert!(timing::frames_total() > before);
    let out = String::from_utf8(sink).unwrap();
    assert!(out.contains("abc"));
    assert!(out.contains("\x1b[K"));
}

proptest! {
    // Every drawn row stays within the width and the status bar fills it exactly.
    #[test]
    fn rows_fit_and_status_is_exact(
        lines in proptest::collection::vec("[a-z\t \"/*0-9]{0,40}", 0..12),
        cols in 1usize..60,
        rows in 1usize..10,
        col_offset in 0usize..20,
    ) {
        let mut s = session(&lines.join("\n"), cols, rows);
        s.set_file_name("t.c");
        s.viewport.col_offset = col_offset;
        let text = screen_text(&compose_frame(&s, Instant::now()));
        let drawn: Vec<&str> = text.split('\n').collect();
        prop_assert_eq!(drawn.len(), rows + 2);
        for line in &drawn[..rows] {
            prop_assert!(line.chars().count() <= cols);
        }
        prop_assert_eq!(drawn[rows].chars().count(), cols);
    }
}
