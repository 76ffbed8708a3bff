//! Fuzz target for the read decoder.
//!
//! Terminal input is untrusted: any read, of any length, must decode to an
//! event or to nothing without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shellcfg_tui::input::{Event, READ_CHUNK, decode};

fuzz_target!(|data: &[u8]| {
    let whole = decode(data);
    assert_eq!(whole, decode(data), "decoding must be deterministic");

    // The loop never hands the decoder more than one chunk.
    for read in data.chunks(READ_CHUNK) {
        if let Some(Event::Resize(_)) = decode(read) {
            panic!("resize events never come from input bytes");
        }
    }
});
