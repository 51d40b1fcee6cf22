//! Session hot-path benchmarks.
//!
//! Covers the work a renderer repeats on every store change: deriving display
//! order from the rank map, computing geometry, and re-encoding the share link.
//!
//! Run with: cargo bench --bench session_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multiview::codec::{decode, encode_session};
use multiview::layout::geometry_for;
use multiview::model::{EntryDraft, LayoutMode};
use multiview::state::SessionStore;

/// Build a session of `count` mixed entries with a shuffled rank order.
fn generate_session(count: usize) -> SessionStore {
    let mut store = SessionStore::new();
    let ids: Vec<_> = (0..count)
        .map(|i| {
            let draft = match i % 3 {
                0 => EntryDraft::youtube(format!("video{i:05}"), i % 2 == 0),
                1 => EntryDraft::twitch_channel(format!("channel{i:05}")),
                _ => EntryDraft::twitch_vod(format!("{}", 100_000 + i)),
            }
            .expect("non-empty id");
            store.add_entry(draft)
        })
        .collect();

    for i in (1..count).step_by(2) {
        store.reorder(&ids[i], &ids[count - i]);
    }
    store
}

fn benchmark_ordered_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_entries");
    for count in [4, 16, 256, 4_096] {
        let store = generate_session(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| black_box(store.ordered_entries().len()))
        });
    }
    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for count in [4, 16, 256] {
        let store = generate_session(count);
        let encoded = encode_session(&store);

        group.bench_with_input(BenchmarkId::new("encode", count), &store, |b, store| {
            b.iter(|| encode_session(black_box(store)))
        });
        group.bench_with_input(BenchmarkId::new("decode", count), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)))
        });
    }
    group.finish();
}

fn benchmark_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    for mode in LayoutMode::ALL {
        group.bench_with_input(BenchmarkId::new(mode.as_str(), 64), &mode, |b, &mode| {
            b.iter(|| geometry_for(black_box(mode), black_box(64)).placements(64))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_ordered_entries,
    benchmark_codec,
    benchmark_geometry
);
criterion_main!(benches);
