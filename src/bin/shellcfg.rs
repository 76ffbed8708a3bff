//! shellcfg - terminal front end for managing shell configuration.
//!
//! Runs against the in-memory demo host. `--headless-smoke` drives a scripted
//! session into a byte sink and prints per-frame statistics, so it works
//! without a TTY.

use shellcfg_tui::config::{Config, HELP_TEXT, ParseResult};
use shellcfg_tui::terminal::{SessionOptions, TerminalSession};
use shellcfg_tui::{App, MemoryBridge, Result, logging};
use std::process::ExitCode;

/// Keystrokes for the headless smoke run, one read per entry.
const SMOKE_SCRIPT: &[&[u8]] = &[
    b"\x1b[B", // Down
    b"\x1b[B", // Down
    b"\r",     // open PATH
    b"j",
    b"\r", // detail
    b"\x1b",
    b"/",
    b"b",
    b"i",
    b"n",
    b"\x7f",
    b"\x1b",
    b"a", // add form
    b"/",
    b"o",
    b"p",
    b"t",
    b"\r",
    b"d", // delete confirmation
    b"\t",
    b"\r",
    b"h", // back to the menu
    b"\x1bOP",
    b"\x1b",
    b"q",
];

/// Idle iterations between keystrokes, enough to load lists and repaint.
const IDLE_STEPS: usize = 2;

fn main() -> ExitCode {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => match run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("shellcfg: {err}");
                ExitCode::FAILURE
            }
        },
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            ExitCode::SUCCESS
        }
        ParseResult::Error(err) => {
            eprintln!("Error: {err}");
            eprintln!("Run with --help for usage information.");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    if let Some(path) = &config.log_file {
        logging::init_file_logging(path)?;
    }

    let mut bridge = MemoryBridge::with_sample_data();
    bridge.fail_mutations = config.fail_bridge;

    if config.headless_smoke {
        run_headless_smoke(config, bridge)
    } else {
        run_interactive(config, bridge)
    }
}

fn run_interactive(config: &Config, bridge: MemoryBridge) -> Result<()> {
    let mut session = TerminalSession::start(SessionOptions {
        alt_screen: config.use_alt_screen,
    })?;
    let (width, height) = session.size();
    let mut app = App::with_default_painter(bridge, width, height).with_tick(config.tick);
    app.run(&mut session)
}

fn run_headless_smoke(config: &Config, bridge: MemoryBridge) -> Result<()> {
    let (width, height) = config.headless_size;
    eprintln!("Running headless smoke test ({width}x{height})...");

    let mut app = App::with_default_painter(bridge, width, height);
    let mut sink = Vec::new();
    let mut total_bytes = 0;

    for (idx, keys) in SMOKE_SCRIPT.iter().enumerate() {
        for _ in 0..IDLE_STEPS {
            total_bytes += app.step(None, &mut sink)?;
        }
        let written = app.step(Some(keys), &mut sink)?;
        total_bytes += written;

        let stats = app.screen().last_frame_stats();
        println!(
            "step {idx:2}: view={:?} frame={} cells={} bytes={}",
            app.state().current_view(),
            stats.frames,
            stats.cells_written,
            stats.bytes_written,
        );
        if !app.is_running() {
            break;
        }
    }

    println!(
        "done: frames={} total_bytes={} running={}",
        app.screen().last_frame_stats().frames,
        total_bytes,
        app.is_running()
    );
    Ok(())
}
