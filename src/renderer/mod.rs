//! Double-buffered screen with differential flushing.
//!
//! [`Screen`] owns two equal-sized [`CellGrid`]s:
//! - **buffer**: the frame being painted
//! - **prev_buffer**: what the terminal showed after the last flush
//!
//! [`Screen::flush`] compares them cell by cell and writes only what
//! changed, tracking the terminal cursor and SGR state across cells so that
//! adjacent changes share one cursor move and one set of attribute codes.
//! The whole frame goes out in a single write.
//!
//! # Examples
//!
//! ```
//! use shellcfg_tui::{Cell, Screen, Style};
//!
//! let mut screen = Screen::new(20, 5);
//! let mut out = Vec::new();
//!
//! screen.set_cell(2, 1, Cell::new('x', Style::bold()));
//! let written = screen.flush(&mut out, false).unwrap();
//! assert!(written > 0);
//!
//! // Nothing changed: nothing written.
//! out.clear();
//! assert_eq!(screen.flush(&mut out, false).unwrap(), 0);
//! assert!(out.is_empty());
//! ```

use crate::ansi::AnsiWriter;
use crate::buffer::CellGrid;
use crate::cell::Cell;
use std::io::{self, Write};

/// Output statistics for the most recent flush.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Flushes performed so far.
    pub frames: u64,
    /// Cells written by the last flush.
    pub cells_written: usize,
    /// Bytes emitted by the last flush.
    pub bytes_written: usize,
}

/// Double-buffered screen.
#[derive(Debug)]
pub struct Screen {
    buffer: CellGrid,
    prev_buffer: CellGrid,
    writer: AnsiWriter,
    stats: FrameStats,
}

impl Screen {
    /// Create a screen with blank current and previous frames.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: CellGrid::new(width, height),
            prev_buffer: CellGrid::new(width, height),
            writer: AnsiWriter::new(),
            stats: FrameStats::default(),
        }
    }

    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        self.buffer.size()
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The frame being painted.
    #[must_use]
    pub fn buffer(&self) -> &CellGrid {
        &self.buffer
    }

    /// Mutable access to the frame being painted.
    pub fn buffer_mut(&mut self) -> &mut CellGrid {
        &mut self.buffer
    }

    /// The diff baseline: the frame as of the last flush.
    #[must_use]
    pub fn prev_buffer(&self) -> &CellGrid {
        &self.prev_buffer
    }

    /// Set one cell of the current frame. Out of bounds is a no-op.
    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        self.buffer.set(x, y, cell);
    }

    /// Blank the current frame. The previous frame is untouched.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Resize both frames, preserving their overlapping region.
    ///
    /// The terminal cursor position becomes unknown.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);
        self.prev_buffer.resize(width, height);
        self.writer.invalidate_cursor();
    }

    /// Last known terminal cursor position, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.writer.cursor()
    }

    /// Statistics for the last flush.
    #[must_use]
    pub fn last_frame_stats(&self) -> FrameStats {
        self.stats
    }

    /// Write the changes since the last flush to `out`.
    ///
    /// With `force_full_render` every cell is written regardless of the
    /// previous frame. Returns the number of bytes written; zero bytes are
    /// written (and `out` is not touched) when nothing changed.
    ///
    /// The first changed cell of every frame is addressed absolutely: other
    /// output may have moved the terminal cursor since the last flush.
    pub fn flush<W: Write>(&mut self, out: &mut W, force_full_render: bool) -> io::Result<usize> {
        self.writer.invalidate_cursor();
        self.writer.clear();

        let (width, height) = self.buffer.size();
        let mut cells_written = 0;
        for y in 0..height {
            let current = self.buffer.row(y);
            let previous = self.prev_buffer.row(y);
            for x in 0..width {
                let idx = usize::from(x);
                let cell = &current[idx];
                if !force_full_render && *cell == previous[idx] {
                    continue;
                }
                self.writer.write_cell_at(x, y, cell);
                cells_written += 1;
            }
        }
        self.writer.finish();

        let bytes = self.writer.bytes();
        if !bytes.is_empty() {
            out.write_all(bytes)?;
            out.flush()?;
        }
        let bytes_written = bytes.len();

        self.prev_buffer.copy_from(&self.buffer);
        self.stats = FrameStats {
            frames: self.stats.frames + 1,
            cells_written,
            bytes_written,
        };

        Ok(bytes_written)
    }
}
