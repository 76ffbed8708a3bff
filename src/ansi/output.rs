//! Buffered ANSI output writer with cursor and attribute tracking.
//!
//! The writer accumulates one frame's worth of bytes and remembers what it
//! believes the terminal's cursor position and active SGR state are, so it
//! only emits the sequences a cell actually needs.

use crate::ansi::{self, sequences};
use crate::cell::Cell;
use crate::color::Color;

/// SGR state the writer believes is active on the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveAttributes {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl ActiveAttributes {
    /// Nothing active: the state right after `ESC [ 0 m`.
    pub const OFF: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        bold: false,
        dim: false,
    };

    #[must_use]
    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }

    /// Whether moving to `cell` requires turning something off.
    fn needs_reset_for(&self, cell: &Cell) -> bool {
        (self.bold && !cell.bold())
            || (self.dim && !cell.dim())
            || (!self.fg.is_default() && cell.fg.is_default())
            || (!self.bg.is_default() && cell.bg.is_default())
    }
}

/// Frame writer that tracks terminal state to minimize escape sequences.
#[derive(Debug)]
pub struct AnsiWriter {
    buffer: Vec<u8>,
    cursor: Option<(u16, u16)>,
    active: ActiveAttributes,
}

impl Default for AnsiWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiWriter {
    /// Create a writer with an unknown cursor position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(8192),
            cursor: None,
            active: ActiveAttributes::OFF,
        }
    }

    /// Bytes accumulated since the last [`take`](Self::take) / [`clear`](Self::clear).
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Discard accumulated bytes, keeping tracked state.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Where the writer believes the terminal cursor is.
    #[must_use]
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Forget the cursor position so the next cell is addressed absolutely.
    pub fn invalidate_cursor(&mut self) {
        self.cursor = None;
    }

    /// Currently tracked attribute state.
    #[must_use]
    pub fn active(&self) -> ActiveAttributes {
        self.active
    }

    /// Write a raw string.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Emit `ESC [ 0 m` and mark every attribute off.
    pub fn reset(&mut self) {
        self.write_str(sequences::RESET);
        self.active = ActiveAttributes::OFF;
    }

    /// Position the cursor at `(x, y)` unless it is already there.
    ///
    /// A jump leaves the tracked attribute state off: anything still active
    /// is reset first so the following cell re-emits what it needs.
    pub fn move_to(&mut self, x: u16, y: u16) {
        if self.cursor == Some((x, y)) {
            return;
        }
        if !self.active.is_off() {
            self.reset();
        }
        let _ = ansi::write_cursor_position(&mut self.buffer, x, y);
        self.cursor = Some((x, y));
    }

    /// Write a cell at the current cursor position.
    pub fn write_cell(&mut self, cell: &Cell) {
        if self.active.needs_reset_for(cell) {
            self.reset();
        }

        if cell.bold() && !self.active.bold {
            self.write_str(sequences::BOLD);
            self.active.bold = true;
        }
        if cell.dim() && !self.active.dim {
            self.write_str(sequences::DIM);
            self.active.dim = true;
        }
        if !cell.fg.is_default() && cell.fg != self.active.fg {
            let _ = cell.fg.write_fg(&mut self.buffer);
            self.active.fg = cell.fg;
        }
        if !cell.bg.is_default() && cell.bg != self.active.bg {
            let _ = cell.bg.write_bg(&mut self.buffer);
            self.active.bg = cell.bg;
        }

        let mut utf8 = [0u8; 4];
        self.buffer
            .extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());

        if let Some((x, y)) = self.cursor {
            self.cursor = Some((x.saturating_add(1), y));
        }
    }

    /// Write a cell at a specific position.
    pub fn write_cell_at(&mut self, x: u16, y: u16, cell: &Cell) {
        self.move_to(x, y);
        self.write_cell(cell);
    }

    /// Leave the terminal with no attributes active.
    pub fn finish(&mut self) {
        if !self.active.is_off() {
            self.reset();
        }
    }
}
