//! `shellcfg_tui` - terminal UI engine for a shell-configuration manager.
//!
//! Three layers do the work:
//!
//! - [`input`]: decodes the bytes of one terminal read into a typed [`Event`]
//! - [`renderer`]: a double-buffered [`Screen`] that writes only changed cells
//! - [`app`]: an event → state → repaint loop with lists, filtering, modal
//!   detail/confirm/add overlays and timed notifications
//!
//! The host application plugs in through [`bridge::Bridge`]; the engine never
//! reads or writes configuration files itself.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow app::AppState style names
#![allow(clippy::struct_excessive_bools)] // Terminal state needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod app;
pub mod bridge;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod style;
pub mod terminal;

// Re-export core types at crate root
pub use cell::Cell;
pub use color::Color;
pub use error::{Error, Result};
pub use style::{Style, TextAttributes};

// Re-export input types
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, ResizeEvent, decode};

// Re-export commonly used types
pub use app::{App, DefaultPainter, Painter, Theme, TuiState, View};
pub use bridge::{Bridge, MemoryBridge};
pub use buffer::CellGrid;
pub use renderer::{FrameStats, Screen};
pub use terminal::{SessionOptions, TerminalSession};
