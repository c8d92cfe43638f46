//! Layout cost under scroll-driven re-layout
//!
//! The layout pass runs on every scroll event, so it has to stay well
//! inside a frame budget for realistic range counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ribbon_core::{layout, ChangeRange, LayoutConfig};

/// Alternating changed/unchanged ranges, three lines each side
fn ranges(count: usize) -> Vec<ChangeRange> {
    (0..count)
        .map(|i| {
            let start = i * 4;
            if i % 2 == 0 {
                ChangeRange::changed(start..start + 3, start..start + 3)
            } else {
                ChangeRange::unchanged(start..start + 3, start..start + 3)
            }
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();

    let small = ranges(50);
    c.bench_function("layout_50_ranges", |b| {
        b.iter(|| layout(black_box(&small), 0.0, 0.0, 800.0, &config))
    });

    let large = ranges(500);
    c.bench_function("layout_500_ranges", |b| {
        b.iter(|| layout(black_box(&large), 0.0, 0.0, 800.0, &config))
    });

    // Mostly culled: viewport covers a small window of a long file.
    c.bench_function("layout_500_ranges_scrolled", |b| {
        b.iter(|| layout(black_box(&large), 20_000.0, 20_000.0, 800.0, &config))
    });
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
