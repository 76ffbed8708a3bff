//! Terminal lifecycle: raw mode, alternate screen, cursor visibility and
//! resize notification, all restored when the session is dropped.

mod raw;
mod resize;

pub use raw::{
    DEFAULT_SIZE, RawModeGuard, enable_raw_mode, is_tty, poll_readable, read_available,
    terminal_size, terminal_size_or_default,
};
pub use resize::ResizeFlag;

use crate::ansi::sequences;
use crate::error::{Error, Result, Stream};
use crate::input::READ_CHUNK;
use std::io::{self, Write};
use std::time::Duration;

/// Options controlling what a [`TerminalSession`] changes on start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Switch to the alternate screen buffer.
    pub alt_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { alt_screen: true }
    }
}

/// A live interactive terminal.
///
/// Owning a session means stdin is in raw mode, the cursor is hidden and
/// (optionally) the alternate screen is active. Dropping it undoes all of
/// that, including on early `?` returns and panics that unwind.
pub struct TerminalSession {
    stdin: io::Stdin,
    stdout: io::Stdout,
    raw_mode: Option<RawModeGuard>,
    resize: ResizeFlag,
    alt_screen: bool,
    cursor_hidden: bool,
}

impl TerminalSession {
    /// Take over the controlling terminal.
    ///
    /// Both stdin and stdout must be terminals. Raw mode is entered before
    /// any escape sequence is written, so a failure at that point leaves the
    /// terminal untouched.
    pub fn start(options: SessionOptions) -> Result<Self> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if !is_tty(&stdin) {
            return Err(Error::NotATty {
                stream: Stream::Stdin,
            });
        }
        if !is_tty(&stdout) {
            return Err(Error::NotATty {
                stream: Stream::Stdout,
            });
        }

        let raw_mode = RawModeGuard::new(&stdin).map_err(Error::RawMode)?;
        let mut session = Self {
            stdin,
            stdout,
            raw_mode: Some(raw_mode),
            resize: ResizeFlag::detached(),
            alt_screen: false,
            cursor_hidden: false,
        };

        if options.alt_screen {
            session.stdout.write_all(sequences::ALT_SCREEN_ON.as_bytes())?;
            session.alt_screen = true;
        }
        session.stdout.write_all(sequences::CURSOR_HIDE.as_bytes())?;
        session.cursor_hidden = true;
        session.stdout.write_all(sequences::CLEAR_SCREEN.as_bytes())?;
        session.stdout.flush()?;

        session.resize = ResizeFlag::install().map_err(Error::SignalHandler)?;

        tracing::debug!(alt_screen = options.alt_screen, "terminal session started");
        Ok(session)
    }

    /// Current terminal size, falling back to 80×24.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        terminal_size_or_default()
    }

    /// Consume a pending resize notification.
    pub fn take_resize(&self) -> bool {
        self.resize.take()
    }

    /// Wait up to `timeout` for input and read one chunk.
    ///
    /// Returns the number of bytes placed in `buf`. Zero means nothing
    /// arrived this tick; read errors are treated the same way.
    pub fn read_input(&self, buf: &mut [u8; READ_CHUNK], timeout: Duration) -> usize {
        match poll_readable(&self.stdin, timeout) {
            Ok(true) => read_available(&self.stdin, buf).unwrap_or(0),
            Ok(false) => 0,
            Err(err) => {
                tracing::debug!(error = %err, "input poll failed");
                0
            }
        }
    }

    /// The terminal's output stream.
    pub fn output(&mut self) -> &mut io::Stdout {
        &mut self.stdout
    }

    /// Restore the terminal. Idempotent; also run on drop.
    ///
    /// Order: resize handler, cursor, alternate screen, termios.
    pub fn restore(&mut self) -> io::Result<()> {
        self.resize.uninstall();
        if self.raw_mode.is_none() {
            return Ok(());
        }

        let mut tail = String::new();
        tail.push_str(sequences::RESET);
        if self.cursor_hidden {
            tail.push_str(sequences::CURSOR_SHOW);
            self.cursor_hidden = false;
        }
        if self.alt_screen {
            tail.push_str(sequences::ALT_SCREEN_OFF);
            self.alt_screen = false;
        }
        let written = self
            .stdout
            .write_all(tail.as_bytes())
            .and_then(|()| self.stdout.flush());

        let restored = match self.raw_mode.take() {
            Some(guard) => guard.restore(),
            None => Ok(()),
        };

        tracing::debug!("terminal session restored");
        written.and(restored)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
