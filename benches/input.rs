//! Input decoding benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use shellcfg_tui::decode;
use std::hint::black_box;

/// One read per sequence, the way the main loop sees them.
fn bench_key_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_decoding");

    let key_sequences: &[(&[u8], &str)] = &[
        (b"a", "single_char"),
        (b"A", "single_uppercase"),
        (b"\x1b[A", "arrow_up"),
        (b"\x1b[B", "arrow_down"),
        (b"\x1b[H", "home"),
        (b"\x1b[F", "end"),
        (b"\x1bOP", "f1"),
        (b"\x1b[5~", "f5"),
        (b"\x1b[9~", "f8"),
        (b"\r", "enter"),
        (b"\t", "tab"),
        (b"\x7f", "backspace"),
        (b"\x03", "ctrl_c"),
        (b"\x1b", "escape"),
        (b"\x1b[Z", "unbound_csi"),
    ];

    for (seq, name) in key_sequences {
        group.bench_function(*name, |b| b.iter(|| decode(black_box(*seq))));
    }

    group.finish();
}

fn bench_mouse_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("mouse_decoding");

    let mouse_sequences: &[(&[u8], &str)] = &[
        (b"\x1b[<0;10;20M", "left_press"),
        (b"\x1b[<0;10;20m", "release"),
        (b"\x1b[<2;100;50M", "right_press"),
        (b"\x1b[<64;10;20M", "wheel"),
    ];

    for (seq, name) in mouse_sequences {
        group.bench_function(*name, |b| b.iter(|| decode(black_box(*seq))));
    }

    group.finish();
}

/// A typed burst split into reads, as a fast typist produces it.
fn bench_typing_burst(c: &mut Criterion) {
    let text = b"/usr/local/share/applications/bin";
    c.bench_function("typing_burst_34_reads", |b| {
        b.iter(|| {
            text.chunks(1)
                .filter_map(|read| decode(black_box(read)))
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_key_decoding,
    bench_mouse_decoding,
    bench_typing_burst
);
criterion_main!(benches);
