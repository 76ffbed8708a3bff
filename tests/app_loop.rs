//! Whole-loop runs: bytes in, ANSI out, replayed through a terminal emulator.

use shellcfg_tui::app::View;
use shellcfg_tui::{App, Event, MemoryBridge, ResizeEvent};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 12;

struct Harness {
    app: App<MemoryBridge>,
    term: vt100::Parser,
}

impl Harness {
    fn new() -> Self {
        Self {
            app: App::with_default_painter(MemoryBridge::with_sample_data(), WIDTH, HEIGHT),
            term: vt100::Parser::new(HEIGHT, WIDTH, 0),
        }
    }

    fn step(&mut self, input: Option<&[u8]>) -> usize {
        let mut out = Vec::new();
        let written = self.app.step(input, &mut out).unwrap();
        assert_eq!(written, out.len());
        self.term.process(&out);
        written
    }

    /// Feed each read followed by an idle iteration to repaint.
    fn keys(&mut self, reads: &[&[u8]]) {
        for read in reads {
            self.step(Some(read));
            self.step(None);
        }
    }

    fn row(&self, y: u16) -> String {
        let (_, width) = self.term.screen().size();
        let text: String = (0..width)
            .map(|x| {
                let contents = self
                    .term
                    .screen()
                    .cell(y, x)
                    .map(vt100::Cell::contents)
                    .unwrap_or_default();
                if contents.is_empty() {
                    " ".to_string()
                } else {
                    contents
                }
            })
            .collect();
        text.trim_end().to_string()
    }

    /// Every emulated row, prefixed with `|` so blank rows stay visible.
    fn frame(&self) -> String {
        let (height, _) = self.term.screen().size();
        (0..height)
            .map(|y| format!("|{}", self.row(y)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[test]
fn main_menu_frame() {
    let mut h = Harness::new();
    h.step(None);
    insta::assert_snapshot!(h.frame(), @r"
    | shellcfg - Main Menu
    |
    | > Aliases      Shell command shortcuts
    |   Constants    Exported environment variables
    |   PATH         Executable search directories
    |   Completions  Tab completion scripts
    |   Plugins      Installed shell plugins
    |   Backups      Configuration snapshots
    |   Settings     Manager preferences
    |
    |
    | Up/Down move  Enter open  ? help  q quit
    ");
}

#[test]
fn selection_highlight_follows_cursor() {
    let mut h = Harness::new();
    h.step(None);
    h.keys(&[b"\x1b[B"]);
    assert!(h.row(3).starts_with(" > Constants"));
    assert!(h.row(2).starts_with("   Aliases"));
    let selected = h.term.screen().cell(3, 0).unwrap();
    assert_eq!(selected.bgcolor(), vt100::Color::Idx(6));
}

#[test]
fn path_list_after_lazy_load() {
    let mut h = Harness::new();
    h.step(None);
    h.keys(&[b"\x1b[B", b"\x1b[B", b"\r"]);

    assert_eq!(h.app.state().current_view(), View::PathView);
    let title = h.row(0);
    assert!(title.starts_with(" shellcfg - PATH"));
    assert!(title.ends_with("6 items"));
    assert_eq!(h.row(2), " > /usr/local/bin");
    assert_eq!(h.row(7), "   ~/.local/bin");
    assert!(h.row(HEIGHT - 1).contains("a add"));
}

#[test]
fn filter_bar_and_matches_on_screen() {
    let mut h = Harness::new();
    h.step(None);
    h.keys(&[b"\x1b[B", b"\x1b[B", b"\r", b"/", b"/", b"g", b"o"]);

    assert_eq!(h.row(HEIGHT - 2), " //go_");
    assert_eq!(h.row(2), " > /usr/local/go/bin");
    assert_eq!(h.row(3), "");
    assert!(h.row(0).ends_with("1/6"));

    h.keys(&[b"z"]);
    assert_eq!(h.row(2), "   No matches");
}

#[test]
fn delete_shows_toast_then_expires() {
    let mut h = Harness::new();
    h.step(None);
    // Aliases, select `gs`, confirm delete with Tab + Enter.
    h.keys(&[b"\r", b"j", b"d", b"\t", b"\r"]);

    assert!(!h.app.bridge().aliases.iter().any(|(name, _)| name == "gs"));
    assert!(h.row(1).ends_with("Deleted gs=git status"));

    for _ in 0..shellcfg_tui::app::SUCCESS_FRAMES {
        h.step(None);
    }
    assert_eq!(h.row(1), "");
}

#[test]
fn help_overlay_opens_and_closes() {
    let mut h = Harness::new();
    h.step(None);
    h.keys(&[b"\x1bOP"]);
    assert!(h.app.state().detail().is_some());
    assert!(h.frame().contains("Keys"));
    assert!(h.row(HEIGHT - 1).contains("Esc close"));

    h.keys(&[b"\x1b"]);
    assert!(h.app.state().detail().is_none());
    assert!(!h.frame().contains("Keys"));
}

#[test]
fn resize_repaints_at_new_size() {
    let mut h = Harness::new();
    h.step(None);

    h.app.handle_event(Event::Resize(ResizeEvent::new(50, 10)));
    // A forced redraw repaints every cell, so a fresh emulator suffices.
    h.term = vt100::Parser::new(10, 50, 0);
    h.step(None);

    assert_eq!(h.app.screen().size(), (50, 10));
    assert_eq!(h.row(9), " Up/Down move  Enter open  ? help  q quit");
    assert_eq!(h.row(2), " > Aliases      Shell command shortcuts");
}

#[test]
fn quit_from_menu() {
    let mut h = Harness::new();
    h.step(None);
    h.step(Some(b"q"));
    assert!(!h.app.is_running());
}
