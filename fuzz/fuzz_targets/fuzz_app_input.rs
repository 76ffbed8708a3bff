//! Fuzz target for the full event loop.
//!
//! Feeds arbitrary reads into the application and checks that the
//! selection never leaves the list.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shellcfg_tui::{App, MemoryBridge};

#[derive(Arbitrary, Debug)]
struct Session {
    width: u8,
    height: u8,
    failing: bool,
    reads: Vec<Vec<u8>>,
}

fuzz_target!(|session: Session| {
    let width = u16::from(session.width).max(1);
    let height = u16::from(session.height).max(1);
    let mut bridge = MemoryBridge::with_sample_data();
    bridge.fail_mutations = session.failing;

    let mut app = App::with_default_painter(bridge, width, height);
    let mut out = Vec::new();

    for read in session.reads.iter().take(256) {
        if !app.is_running() {
            break;
        }
        let read = &read[..read.len().min(shellcfg_tui::input::READ_CHUNK)];
        app.step(Some(read), &mut out).expect("writes to a Vec cannot fail");
        app.step(None, &mut out).expect("writes to a Vec cannot fail");

        let state = app.state();
        let count = state.item_count();
        assert!(count == 0 || state.selected_index() < count);
    }
});
