//! Error types for the TUI engine.
//!
//! Only environment and I/O failures are errors. Malformed input decodes to
//! "no event" and bridge failures become on-screen notifications, so neither
//! appears here.

use std::fmt;
use std::io;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which standard stream failed the TTY check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdin,
    Stdout,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::Stdout => f.write_str("stdout"),
        }
    }
}

/// Error type for engine operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing frames or reading input.
    Io(io::Error),
    /// A standard stream is not an interactive terminal.
    NotATty { stream: Stream },
    /// Switching the terminal into raw mode failed.
    RawMode(io::Error),
    /// Installing the resize signal handler failed.
    SignalHandler(io::Error),
    /// Bad command-line argument or configuration value.
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::NotATty { stream } => write!(f, "{stream} is not a terminal"),
            Self::RawMode(e) => write!(f, "failed to enable raw mode: {e}"),
            Self::SignalHandler(e) => write!(f, "failed to install resize handler: {e}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::RawMode(e) | Self::SignalHandler(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
