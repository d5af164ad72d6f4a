//! Benchmarks for note resolution and tone rendering.
//!
//! Run with: cargo bench
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - pitch/*  Spelling resolution on the UI thread
//!   - synth/*  Mixer block rendering on the audio thread

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tonal_keys::{
    pitch::{canonical_pitch_class_label, frequency_of, resolve_pitch_value},
    playback::{plan_tone_stack, PlaybackConfig, ToneRequest},
    synth::mixer::ToneMixer,
};

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

const SPELLINGS: &[&str] = &["C", "F#", "Bb3", "Cbb", "E##7", "c-1", "H", ""];

fn bench_pitch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pitch");

    group.bench_function("resolve_pitch_value", |b| {
        b.iter(|| {
            for s in SPELLINGS {
                black_box(resolve_pitch_value(black_box(s)));
            }
        })
    });

    group.bench_function("canonical_pitch_class_label", |b| {
        b.iter(|| {
            for s in SPELLINGS {
                black_box(canonical_pitch_class_label(black_box(s)));
            }
        })
    });

    group.bench_function("frequency_of", |b| {
        b.iter(|| {
            for s in SPELLINGS {
                black_box(frequency_of(black_box(s)));
            }
        })
    });

    group.finish();
}

fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth/mixer");
    let config = PlaybackConfig::default();

    // Triad and a dense 8-note cluster, strummed
    let triad = plan_tone_stack(&["C", "E", "G"], &config);
    let cluster = plan_tone_stack(&["C", "D", "E", "F", "G", "A", "B", "C5"], &config);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, stack) in [("triad", &triad), ("cluster", &cluster)] {
            let mut mixer = ToneMixer::new(48_000.0, VecDeque::<ToneRequest>::new());
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    if mixer.active_voices() == 0 {
                        for request in stack.iter() {
                            mixer.schedule(request);
                        }
                    }
                    mixer.render_block(black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pitch, bench_mixer);
criterion_main!(benches);
