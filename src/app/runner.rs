//! The main loop.
//!
//! One iteration: pick up a pending resize, lazily load the current view's
//! list, paint and flush if dirty, read at most one input chunk, dispatch
//! it, and count down the notification.

use crate::app::render::{DefaultPainter, Painter};
use crate::app::state::TuiState;
use crate::app::update;
use crate::bridge::Bridge;
use crate::error::Result;
use crate::input::{Event, READ_CHUNK, ResizeEvent, decode};
use crate::renderer::Screen;
use crate::terminal::TerminalSession;
use std::io::{self, Write};
use std::time::Duration;

/// Default loop tick: 20 ms, i.e. 50 iterations per second.
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);

/// Application: state, screen, host bridge and painter.
pub struct App<B: Bridge, P: Painter = DefaultPainter> {
    state: TuiState,
    screen: Screen,
    bridge: B,
    painter: P,
    force_redraw: bool,
    tick: Duration,
}

impl<B: Bridge> App<B, DefaultPainter> {
    /// App with the stock painter and theme.
    #[must_use]
    pub fn with_default_painter(bridge: B, width: u16, height: u16) -> Self {
        Self::new(bridge, DefaultPainter::default(), width, height)
    }
}

impl<B: Bridge, P: Painter> App<B, P> {
    /// Create an app for a `width × height` screen.
    pub fn new(bridge: B, painter: P, width: u16, height: u16) -> Self {
        let mut state = TuiState::new();
        state.set_visible_height(painter.list_height(height));
        Self {
            state,
            screen: Screen::new(width, height),
            bridge,
            painter,
            force_redraw: true,
            tick: DEFAULT_TICK,
        }
    }

    /// Set the input poll timeout used by [`run`](Self::run).
    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    #[must_use]
    pub fn state(&self) -> &TuiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TuiState {
        &mut self.state
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Resize the screen and schedule a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "screen resized");
        self.screen.resize(width, height);
        self.state
            .set_visible_height(self.painter.list_height(height));
        self.force_redraw = true;
    }

    /// Dispatch one event.
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Resize(ResizeEvent { width, height }) = event {
            self.resize(width, height);
        }
        update::handle_event(&mut self.state, &mut self.bridge, event);
    }

    /// Load the current view's list if it is not cached.
    pub fn ensure_loaded(&mut self) {
        let view = self.state.current_view();
        if view.is_list() && !self.state.cache().is_loaded(view) {
            let items = view.load(&mut self.bridge);
            self.state.store_items(view, items);
        }
    }

    /// Paint and flush if the state is dirty. Returns bytes written.
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<usize> {
        if !self.state.needs_refresh() && !self.force_redraw {
            return Ok(0);
        }
        self.screen.clear();
        self.painter.paint(&self.state, self.screen.buffer_mut());
        let written = self.screen.flush(out, self.force_redraw)?;
        self.force_redraw = false;
        self.state.mark_clean();
        Ok(written)
    }

    /// Everything before input: load and render.
    fn prepare<W: Write>(&mut self, out: &mut W) -> io::Result<usize> {
        self.ensure_loaded();
        self.render(out)
    }

    /// Everything after input: dispatch and tick.
    fn finish_iteration(&mut self, input: Option<&[u8]>) {
        if let Some(event) = input.and_then(decode) {
            self.handle_event(event);
        }
        self.state.tick_notification();
    }

    /// One loop iteration against arbitrary output, with the bytes of one
    /// read (or `None` when nothing arrived).
    ///
    /// Returns the number of bytes the frame wrote.
    pub fn step<W: Write>(&mut self, input: Option<&[u8]>, out: &mut W) -> Result<usize> {
        let written = self.prepare(out)?;
        self.finish_iteration(input);
        Ok(written)
    }

    /// Run until quit against a live terminal.
    pub fn run(&mut self, session: &mut TerminalSession) -> Result<()> {
        let (width, height) = session.size();
        if (width, height) != self.screen.size() {
            self.resize(width, height);
        }

        let mut buf = [0u8; READ_CHUNK];
        while self.state.is_running() {
            if session.take_resize() {
                let (width, height) = session.size();
                self.handle_event(Event::Resize(ResizeEvent::new(width, height)));
            }

            self.prepare(session.output())?;

            let n = session.read_input(&mut buf, self.tick);
            self.finish_iteration((n > 0).then(|| &buf[..n]));
        }
        tracing::info!("main loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::View;
    use crate::bridge::MemoryBridge;

    fn app() -> App<MemoryBridge> {
        App::with_default_painter(MemoryBridge::with_sample_data(), 60, 16)
    }

    #[test]
    fn test_first_step_paints_everything() {
        let mut app = app();
        let mut out = Vec::new();
        let written = app.step(None, &mut out).unwrap();
        assert_eq!(written, out.len());
        assert_eq!(app.screen().last_frame_stats().cells_written, 60 * 16);
    }

    #[test]
    fn test_idle_steps_write_nothing() {
        let mut app = app();
        let mut out = Vec::new();
        app.step(None, &mut out).unwrap();
        out.clear();
        assert_eq!(app.step(None, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_input_applies_before_next_frame() {
        let mut app = app();
        let mut out = Vec::new();
        app.step(Some(b"\x1b[B"), &mut out).unwrap();
        assert_eq!(app.state().selected_index(), 1);
        out.clear();
        let written = app.step(None, &mut out).unwrap();
        assert!(written > 0);
        assert!(written < 60 * 16);
    }

    #[test]
    fn test_lazy_load_once() {
        let mut app = app();
        let mut out = Vec::new();
        app.step(Some(b"\r"), &mut out).unwrap();
        assert_eq!(app.state().current_view(), View::AliasView);
        assert_eq!(app.bridge().loads, 0);
        app.step(None, &mut out).unwrap();
        app.step(None, &mut out).unwrap();
        assert_eq!(app.bridge().loads, 1);
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let mut app = app();
        let mut out = Vec::new();
        app.step(None, &mut out).unwrap();
        app.handle_event(Event::Resize(ResizeEvent::new(40, 10)));
        assert_eq!(app.screen().size(), (40, 10));
        assert_eq!(app.state().visible_height(), 6);
        app.step(None, &mut out).unwrap();
        assert_eq!(app.screen().last_frame_stats().cells_written, 40 * 10);
    }

    #[test]
    fn test_undecodable_input_is_ignored() {
        let mut app = app();
        let mut out = Vec::new();
        app.step(Some(&[0xff, 0xfe]), &mut out).unwrap();
        assert_eq!(app.state().selected_index(), 0);
        assert!(app.is_running());
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = app();
        let mut out = Vec::new();
        app.step(Some(b"q"), &mut out).unwrap();
        assert!(!app.is_running());
    }
}
