//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use std::io::{self, Write};

/// Write an absolute cursor position (`ESC [ row ; col H`).
///
/// `x` and `y` are 0-indexed cell coordinates; the sequence is 1-indexed.
pub fn write_cursor_position(w: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1)
}

/// Render escape bytes printable, for logs and snapshot tests.
///
/// `ESC` becomes `␛`; everything else passes through lossily as UTF-8.
#[must_use]
pub fn escape_for_display(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\x1b', "␛")
}
