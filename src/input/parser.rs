//! Raw terminal bytes to typed events.
//!
//! [`decode`] looks at the bytes returned by one non-blocking read and
//! produces at most one [`Event`]. It is a pure function with no error type:
//! anything it does not recognize yields `None`, which callers treat as
//! "nothing this tick". Terminal input is noisy (escape sequences can be split
//! across reads), so unrecognized bytes are dropped rather than reported.
//!
//! Recognized input:
//! - lone `ESC` → Escape
//! - `ESC [ A/B/C/D` → arrows, `ESC [ H/F` → Home/End
//! - `ESC [ 5|7|8|9 ~` → F5..F8
//! - `ESC O P/Q/R/S` → F1..F4
//! - `ESC [ < b ; x ; y M|m` → SGR mouse
//! - `LF`/`CR` → Enter, `HT` → Tab, `DEL`/`BS` → Backspace
//! - other C0 controls `0x01..=0x1a` → Ctrl+letter
//! - printable ASCII → character

use crate::input::event::{Event, MouseButton, MouseEvent};
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Maximum number of bytes the main loop reads per poll.
pub const READ_CHUNK: usize = 8;

const ESC: u8 = 0x1b;

/// Decode one event from the start of `input`.
///
/// Bytes after the first complete event are ignored.
#[must_use]
pub fn decode(input: &[u8]) -> Option<Event> {
    let &first = input.first()?;

    match first {
        ESC => decode_escape(input),
        b'\n' | b'\r' => Some(KeyEvent::key(KeyCode::Enter).into()),
        b'\t' => Some(KeyEvent::key(KeyCode::Tab).into()),
        0x7f | 0x08 => Some(KeyEvent::key(KeyCode::Backspace).into()),
        0x01..=0x1a => {
            // Ctrl+A through Ctrl+Z
            let c = char::from(first - 1 + b'a');
            Some(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CTRL).into())
        }
        0x20..=0x7e => Some(KeyEvent::char(char::from(first)).into()),
        _ => None,
    }
}

fn decode_escape(input: &[u8]) -> Option<Event> {
    let Some(&second) = input.get(1) else {
        return Some(KeyEvent::key(KeyCode::Esc).into());
    };

    match second {
        b'[' => decode_csi(input),
        b'O' => decode_ss3(input),
        _ => None,
    }
}

/// CSI sequences: `ESC [ ...`.
fn decode_csi(input: &[u8]) -> Option<Event> {
    let &third = input.get(2)?;

    let code = match third {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'<' => return decode_sgr_mouse(&input[3..]),
        b'0'..=b'9' => return decode_tilde(third, input.get(3).copied()),
        _ => return None,
    };

    Some(KeyEvent::key(code).into())
}

/// `ESC [ <digit> ~`.
///
/// The digit table is 5→F5, 7→F6, 8→F7, 9→F8. F9 has no digit here and the
/// usual PageUp/PageDown/Delete tilde codes are not decoded.
fn decode_tilde(digit: u8, terminator: Option<u8>) -> Option<Event> {
    if terminator != Some(b'~') {
        return None;
    }

    let n = match digit {
        b'5' => 5,
        b'7' => 6,
        b'8' => 7,
        b'9' => 8,
        _ => return None,
    };

    Some(KeyEvent::key(KeyCode::F(n)).into())
}

/// SS3 sequences: `ESC O P/Q/R/S` for F1-F4.
fn decode_ss3(input: &[u8]) -> Option<Event> {
    let n = match input.get(2)? {
        b'P' => 1,
        b'Q' => 2,
        b'R' => 3,
        b'S' => 4,
        _ => return None,
    };

    Some(KeyEvent::key(KeyCode::F(n)).into())
}

/// SGR mouse body after `ESC [ <`: `Pb ; Px ; Py (M|m)`.
///
/// Coordinates arrive 1-indexed and are converted to 0-indexed cells.
fn decode_sgr_mouse(body: &[u8]) -> Option<Event> {
    let term_pos = body.iter().position(|&b| b == b'M' || b == b'm')?;
    let is_release = body[term_pos] == b'm';

    let params = std::str::from_utf8(&body[..term_pos]).ok()?;
    let mut parts = params.split(';');
    let cb: u16 = parts.next()?.parse().ok()?;
    let cx: u16 = parts.next()?.parse().ok()?;
    let cy: u16 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let button = if is_release {
        MouseButton::Release
    } else {
        match cb & 0b11 {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            _ => MouseButton::Release,
        }
    };

    Some(MouseEvent::new(cx.saturating_sub(1), cy.saturating_sub(1), button).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(input: &[u8]) -> KeyEvent {
        decode(input)
            .and_then(|e| e.key().copied())
            .expect("expected key event")
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode(b""), None);
    }

    #[test]
    fn test_lone_escape() {
        assert_eq!(key(b"\x1b").code, KeyCode::Esc);
    }

    #[test]
    fn test_arrows_and_home_end() {
        assert_eq!(key(b"\x1b[A").code, KeyCode::Up);
        assert_eq!(key(b"\x1b[B").code, KeyCode::Down);
        assert_eq!(key(b"\x1b[C").code, KeyCode::Right);
        assert_eq!(key(b"\x1b[D").code, KeyCode::Left);
        assert_eq!(key(b"\x1b[H").code, KeyCode::Home);
        assert_eq!(key(b"\x1b[F").code, KeyCode::End);
    }

    #[test]
    fn test_tilde_function_keys() {
        assert_eq!(key(b"\x1b[5~").code, KeyCode::F(5));
        assert_eq!(key(b"\x1b[7~").code, KeyCode::F(6));
        assert_eq!(key(b"\x1b[8~").code, KeyCode::F(7));
        assert_eq!(key(b"\x1b[9~").code, KeyCode::F(8));
    }

    #[test]
    fn test_tilde_unmapped_digits() {
        assert_eq!(decode(b"\x1b[3~"), None);
        assert_eq!(decode(b"\x1b[6~"), None);
        assert_eq!(decode(b"\x1b[15~"), None);
        assert_eq!(decode(b"\x1b[5"), None);
    }

    #[test]
    fn test_ss3_function_keys() {
        assert_eq!(key(b"\x1bOP").code, KeyCode::F(1));
        assert_eq!(key(b"\x1bOQ").code, KeyCode::F(2));
        assert_eq!(key(b"\x1bOR").code, KeyCode::F(3));
        assert_eq!(key(b"\x1bOS").code, KeyCode::F(4));
        assert_eq!(decode(b"\x1bOT"), None);
        assert_eq!(decode(b"\x1bO"), None);
    }

    #[test]
    fn test_unrecognized_escapes() {
        assert_eq!(decode(b"\x1bx"), None);
        assert_eq!(decode(b"\x1b[Z"), None);
        assert_eq!(decode(b"\x1b["), None);
        assert_eq!(decode(b"\x1b\x1b"), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key(b"\n").code, KeyCode::Enter);
        assert_eq!(key(b"\r").code, KeyCode::Enter);
        assert_eq!(key(b"\t").code, KeyCode::Tab);
        assert_eq!(key(&[0x7f]).code, KeyCode::Backspace);
        assert_eq!(key(&[0x08]).code, KeyCode::Backspace);
    }

    #[test]
    fn test_ctrl_letters() {
        let ctrl_c = key(&[0x03]);
        assert!(ctrl_c.is_ctrl_c());

        let ctrl_a = key(&[0x01]);
        assert_eq!(ctrl_a.code, KeyCode::Char('a'));
        assert_eq!(ctrl_a.modifiers, KeyModifiers::CTRL);

        let ctrl_z = key(&[0x1a]);
        assert_eq!(ctrl_z.code, KeyCode::Char('z'));

        // Ctrl+S and Ctrl+Q arrive as ordinary input with IXON disabled.
        assert_eq!(key(&[0x13]).code, KeyCode::Char('s'));
        assert_eq!(key(&[0x11]).code, KeyCode::Char('q'));
    }

    #[test]
    fn test_printable_ascii() {
        assert_eq!(key(b" "), KeyEvent::char(' '));
        assert_eq!(key(b"a"), KeyEvent::char('a'));
        assert_eq!(key(b"~"), KeyEvent::char('~'));
        assert_eq!(key(b"ab"), KeyEvent::char('a'));
    }

    #[test]
    fn test_other_bytes_dropped() {
        assert_eq!(decode(&[0x00]), None);
        assert_eq!(decode(&[0x1c]), None);
        assert_eq!(decode(&[0x80]), None);
        assert_eq!(decode("é".as_bytes()), None);
    }

    #[test]
    fn test_sgr_mouse() {
        let event = decode(b"\x1b[<0;11;6M").expect("mouse");
        assert_eq!(
            event.mouse(),
            Some(&MouseEvent::new(10, 5, MouseButton::Left))
        );

        let event = decode(b"\x1b[<2;1;1m").expect("mouse");
        assert_eq!(event.mouse().map(|m| m.button), Some(MouseButton::Release));

        assert_eq!(decode(b"\x1b[<0;1M"), None);
        assert_eq!(decode(b"\x1b[<0;1;1"), None);
    }
}
