//! Decoder table conformance.
//!
//! Each row is one non-blocking read as the terminal delivers it.

use proptest::prelude::*;
use shellcfg_tui::input::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, decode};

fn plain(code: KeyCode) -> Option<Event> {
    Some(Event::Key(KeyEvent::key(code)))
}

fn ctrl(c: char) -> Option<Event> {
    Some(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CTRL)))
}

#[test]
fn decode_table() {
    let table: &[(&[u8], Option<Event>)] = &[
        (b"", None),
        (b"\x1b", plain(KeyCode::Esc)),
        (b"\x1b[A", plain(KeyCode::Up)),
        (b"\x1b[B", plain(KeyCode::Down)),
        (b"\x1b[C", plain(KeyCode::Right)),
        (b"\x1b[D", plain(KeyCode::Left)),
        (b"\x1b[H", plain(KeyCode::Home)),
        (b"\x1b[F", plain(KeyCode::End)),
        (b"\x1bOP", plain(KeyCode::F(1))),
        (b"\x1bOQ", plain(KeyCode::F(2))),
        (b"\x1bOR", plain(KeyCode::F(3))),
        (b"\x1bOS", plain(KeyCode::F(4))),
        (b"\x1b[5~", plain(KeyCode::F(5))),
        (b"\x1b[7~", plain(KeyCode::F(6))),
        (b"\x1b[8~", plain(KeyCode::F(7))),
        (b"\x1b[9~", plain(KeyCode::F(8))),
        (b"\x1b[1~", None),
        (b"\x1b[3~", None),
        (b"\x1b[6~", None),
        (b"\x1b[Z", None),
        (b"\x1bx", None),
        (b"\r", plain(KeyCode::Enter)),
        (b"\n", plain(KeyCode::Enter)),
        (b"\t", plain(KeyCode::Tab)),
        (b"\x7f", plain(KeyCode::Backspace)),
        (b"\x08", plain(KeyCode::Backspace)),
        (b"\x01", ctrl('a')),
        (b"\x03", ctrl('c')),
        (b"\x11", ctrl('q')),
        (b"\x13", ctrl('s')),
        (b"\x1a", ctrl('z')),
        (b" ", plain(KeyCode::Char(' '))),
        (b"q", plain(KeyCode::Char('q'))),
        (b"~", plain(KeyCode::Char('~'))),
        (b"\x00", None),
        (b"\x1c", None),
        (b"\xc3\xa9", None),
    ];

    for (input, expected) in table {
        assert_eq!(decode(input), *expected, "input {input:?}");
    }
}

#[test]
fn decode_sgr_mouse() {
    assert_eq!(
        decode(b"\x1b[<0;10;5M"),
        Some(Event::Mouse(MouseEvent::new(9, 4, MouseButton::Left)))
    );
    assert_eq!(
        decode(b"\x1b[<2;1;1M"),
        Some(Event::Mouse(MouseEvent::new(0, 0, MouseButton::Right)))
    );
    assert_eq!(
        decode(b"\x1b[<0;3;3m"),
        Some(Event::Mouse(MouseEvent::new(2, 2, MouseButton::Release)))
    );
}

#[test]
fn decode_is_deterministic() {
    for byte in 0u8..=255 {
        assert_eq!(decode(&[byte]), decode(&[byte]));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any read of up to 8 bytes decodes without panicking.
    #[test]
    fn arbitrary_reads_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..=8)) {
        let _ = decode(&bytes);
    }

    /// Printable ASCII always decodes to itself with no modifiers.
    #[test]
    fn printable_ascii_roundtrip(byte in 0x20u8..=0x7e) {
        let event = decode(&[byte]);
        prop_assert_eq!(event, Some(Event::Key(KeyEvent::char(char::from(byte)))));
    }
}
