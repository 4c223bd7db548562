use core_state::{Cursor, EditSession, Motion, ScreenSize, SearchNav};
use core_syntax::Highlight;
use core_text::LineBuffer;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn session(text: &str) -> EditSession {
    EditSession::new(LineBuffer::from_text(text, 4), ScreenSize::new(40, 5))
}

fn rows(s: &EditSession) -> Vec<String> {
    s.buffer().rows().iter().map(|r| r.raw_string()).collect()
}

#[test]
fn typing_on_phantom_row_appends_row() {
    let mut s = session("a\nb\nc");
    s.cursor = Cursor { row: 3, col: 0 };
    s.insert_character('x').unwrap();
    assert_eq!(rows(&s), vec!["a", "b", "c", "x"]);
    assert_eq!(s.cursor, Cursor { row: 3, col: 1 });
    assert!(s.is_dirty());
}

#[test]
fn backspace_on_single_char_row_keeps_row() {
    let mut s = session("x");
    s.cursor = Cursor { row: 0, col: 1 };
    s.delete_character().unwrap();
    assert_eq!(rows(&s), vec![""]);
    assert_eq!(s.cursor, Cursor { row: 0, col: 0 });
}

#[test]
fn backspace_at_column_zero_joins_rows() {
    let mut s = session("abc\ndef");
    s.cursor = Cursor { row: 1, col: 0 };
    s.delete_character().unwrap();
    assert_eq!(rows(&s), vec!["abcdef"]);
    assert_eq!(s.cursor, Cursor { row: 0, col: 3 });
}

#[test]
fn backspace_noop_at_start_and_phantom_row() {
    let mut s = session("abc");
    s.delete_character().unwrap();
    s.cursor = Cursor { row: 1, col: 0 };
    s.delete_character().unwrap();
    assert_eq!(rows(&s), vec!["abc"]);
    assert!(!s.is_dirty());
}

#[test]
fn newline_splits_and_opens_above() {
    let mut s = session("hello");
    s.cursor = Cursor { row: 0, col: 2 };
    s.insert_newline().unwrap();
    assert_eq!(rows(&s), vec!["he", "llo"]);
    assert_eq!(s.cursor, Cursor { row: 1, col: 0 });
    s.insert_newline().unwrap();
    assert_eq!(rows(&s), vec!["he", "", "llo"]);
    assert_eq!(s.cursor, Cursor { row: 2, col: 0 });
}

#[test]
fn delete_forward_joins_next_row_and_stops_at_end() {
    let mut s = session("ab\ncd");
    s.cursor = Cursor { row: 0, col: 2 };
    s.delete_forward().unwrap();
    assert_eq!(rows(&s), vec!["abcd"]);
    assert_eq!(s.cursor, Cursor { row: 0, col: 2 });
    s.move_cursor(Motion::End);
    s.delete_forward().unwrap();
    assert_eq!(rows(&s), vec!["abcd"]);
    assert_eq!(s.cursor, Cursor { row: 0, col: 4 });
}

#[test]
fn horizontal_motion_wraps_both_ways() {
    let mut s = session("ab\ncd");
    s.cursor = Cursor { row: 0, col: 2 };
    s.move_cursor(Motion::Right);
    assert_eq!(s.cursor, Cursor { row: 1, col: 0 });
    s.move_cursor(Motion::Left);
    assert_eq!(s.cursor, Cursor { row: 0, col: 2 });
}

#[test]
fn vertical_motion_clamps_column() {
    let mut s = session("long line\nab");
    s.cursor = Cursor { row: 0, col: 8 };
    s.move_cursor(Motion::Down);
    assert_eq!(s.cursor, Cursor { row: 1, col: 2 });
    s.move_cursor(Motion::Down);
    assert_eq!(s.cursor, Cursor { row: 2, col: 0 });
    s.move_cursor(Motion::Down);
    assert_eq!(s.cursor.row, 2);
}

#[test]
fn page_down_moves_a_screen() {
    let text: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    let mut s = session(&text.join("\n"));
    s.move_cursor(Motion::PageDown);
    assert_eq!(s.cursor.row, 9);
    s.scroll();
    assert_eq!(s.viewport.row_offset, 5);
    s.move_cursor(Motion::PageUp);
    assert_eq!(s.cursor.row, 0);
}

#[test]
fn scroll_tracks_tabbed_render_column() {
    let mut s = session("\t\t\t\t\t\t\t\t\t\t\tx");
    s.move_cursor(Motion::End);
    assert_eq!(s.render_col(), 45);
    s.scroll();
    assert_eq!(s.viewport.col_offset, 6);
}

#[test]
fn message_expires_after_timeout() {
    let mut s = session("").with_message_timeout(Duration::from_secs(10));
    s.set_message("hello");
    let now = Instant::now();
    assert_eq!(s.visible_message(now), Some("hello"));
    assert_eq!(s.visible_message(now + Duration::from_secs(11)), None);
}

#[test]
fn search_prompt_moves_cursor_and_cancel_restores() {
    let mut s = session("foo a\nb\nc\nd\ne foo");
    s.cursor = Cursor { row: 2, col: 1 };
    s.open_search();
    for ch in "foo".chars() {
        s.prompt.as_mut().unwrap().push_char(ch);
    }
    let hit = s.search_step(SearchNav::Edited).unwrap();
    assert_eq!(hit.row, 0);
    assert_eq!(s.cursor, Cursor { row: 0, col: 0 });

    let hit = s.search_step(SearchNav::Previous).unwrap();
    assert_eq!(hit.row, 4);
    assert_eq!(s.cursor, Cursor { row: 4, col: 2 });
    assert_eq!(s.buffer().row(4).unwrap().highlight()[2], Highlight::Match);
    assert_eq!(s.buffer().row(0).unwrap().highlight()[0], Highlight::Normal);

    s.search_step(SearchNav::Cancel);
    s.close_prompt();
    assert_eq!(s.cursor, Cursor { row: 2, col: 1 });
    assert!(s.prompt.is_none());
    assert!(
        s.buffer()
            .rows()
            .iter()
            .all(|r| !r.highlight().contains(&Highlight::Match))
    );
}

#[test]
fn set_file_name_selects_language() {
    let mut s = session("int x;");
    s.set_file_name("src/main.c");
    assert_eq!(s.buffer().syntax().map(|d| d.name), Some("C"));
    assert_eq!(s.buffer().row(0).unwrap().highlight()[0], Highlight::Type);
}
