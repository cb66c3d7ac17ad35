// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for tonelens
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Pitch to note conversion over a full keyboard
//! - Key signature lookups and range filtering
//! - Chord building across the catalog
//! - Staff placement and tone rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tonelens::audio::{render_chord, render_tone, ToneRequest};
use tonelens::music::{
    all_chord_types, all_key_signatures, build_chord_pitches, chromatic_class_of_spelled_note,
    ledger_lines, note_from_pitch, parse_pitch, place_pitch,
};

/// Benchmark note derivation for every MIDI pitch
fn bench_note_from_pitch(c: &mut Criterion) {
    c.bench_function("note_from_pitch", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for pitch in 0..128 {
                sum += note_from_pitch(black_box(pitch)).frequency;
            }
            black_box(sum)
        })
    });

    c.bench_function("parse_pitch", |b| {
        b.iter(|| {
            for name in ["C4", "F#3", "Bb5", "C-1", "61"] {
                black_box(parse_pitch(black_box(name)).ok());
            }
        })
    });
}

/// Benchmark key signature operations (key view core)
fn bench_key_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_signature");

    group.bench_function("spelled_classes", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for key in all_key_signatures() {
                for degree in key.scale_degrees {
                    sum += chromatic_class_of_spelled_note(black_box(degree)) as u32;
                }
            }
            black_box(sum)
        })
    });

    for octaves in [2, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("pitches_in_range", octaves),
            octaves,
            |b, &octaves| {
                b.iter(|| {
                    let mut total = 0;
                    for key in all_key_signatures() {
                        total += key.pitches_in_range(0..octaves * 12).len();
                    }
                    black_box(total)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark chord building across the catalog
fn bench_chords(c: &mut Criterion) {
    c.bench_function("build_chord_pitches", |b| {
        b.iter(|| {
            let mut count = 0;
            for chord_type in all_chord_types() {
                for root in 48..60 {
                    count += build_chord_pitches(black_box(root), chord_type).len();
                }
            }
            black_box(count)
        })
    });
}

/// Benchmark staff placement (runs once per drawn notehead)
fn bench_staff(c: &mut Criterion) {
    let mut group = c.benchmark_group("staff");

    group.bench_function("ledger_lines", |b| {
        b.iter(|| {
            let mut count = 0;
            for step in -14..=24 {
                count += ledger_lines(black_box(step)).len();
            }
            black_box(count)
        })
    });

    group.bench_function("place_pitch", |b| {
        b.iter(|| {
            let mut sum = 0;
            for pitch in 36..97 {
                sum += place_pitch(black_box(pitch)).step;
            }
            black_box(sum)
        })
    });

    group.finish();
}

/// Benchmark tone rendering at the default sample rate
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    group.bench_function("note", |b| {
        let tone = ToneRequest::new(440.0, 0.5);
        b.iter(|| black_box(render_tone(black_box(&tone), 44100).map(|s| s.len())))
    });

    group.bench_function("seventh_chord", |b| {
        let frequencies = [261.63, 329.63, 392.0, 493.88];
        b.iter(|| black_box(render_chord(black_box(&frequencies), 1.0, 44100).map(|s| s.len())))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_note_from_pitch,
    bench_key_signatures,
    bench_chords,
    bench_staff,
    bench_rendering,
);

criterion_main!(benches);
