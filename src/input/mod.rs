//! Input decoding for terminal events.
//!
//! Turns the bytes of a single non-blocking terminal read into at most one
//! typed event. Covers the legacy VT sequences the application binds to and
//! SGR mouse reports.

mod event;
mod keyboard;
mod parser;

pub use event::{Event, MouseButton, MouseEvent, ResizeEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{READ_CHUNK, decode};
