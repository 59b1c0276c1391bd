use super::*;

#[test]
fn editing_tracks_chars_not_bytes() {
    let mut input = Input::default();
    for c in "añb".chars() {
        input.insert_char(c);
    }
    assert_eq!(input.cursor, 3);

    input.move_left();
    input.backspace();
    assert_eq!(input.buf, "ab");
    assert_eq!(input.cursor, 1);

    input.delete();
    assert_eq!(input.buf, "a");
    input.move_right();
    assert_eq!(input.cursor, 1);
}

#[test]
fn set_moves_cursor_to_end() {
    let mut input = Input::default();
    input.set("jane".to_string());
    assert_eq!(input.cursor, 4);
    input.clear();
    assert!(input.buf.is_empty());
    assert_eq!(input.cursor, 0);
}
