//! Application layer: state, event handling, painting and the main loop.
//!
//! The flow is event in, state transition, repaint:
//!
//! ```
//! use shellcfg_tui::app::{App, View};
//! use shellcfg_tui::bridge::MemoryBridge;
//!
//! let mut app = App::with_default_painter(MemoryBridge::with_sample_data(), 80, 24);
//! let mut frame = Vec::new();
//!
//! // Down, Down, Enter on the main menu opens the PATH list.
//! for keys in [&b"\x1b[B"[..], b"\x1b[B", b"\r"] {
//!     app.step(Some(keys), &mut frame).unwrap();
//! }
//! assert_eq!(app.state().current_view(), View::PathView);
//! ```

pub mod detail;
pub mod filter;
pub mod form;
pub mod notification;
pub mod render;
pub mod runner;
pub mod state;
pub mod update;
pub mod view;

pub use detail::{ConfirmDialog, ConfirmFocus, DetailOverlay};
pub use filter::{Filter, filter_indices};
pub use form::{AddForm, FormAction, FormField};
pub use notification::{ERROR_FRAMES, Notification, NotificationKind, SUCCESS_FRAMES};
pub use render::{DefaultPainter, Painter, Theme};
pub use runner::{App, DEFAULT_TICK};
pub use state::{Cursor, TuiState};
pub use update::handle_event;
pub use view::{MENU, MenuEntry, View, ViewCache};
