// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use funroad_layout::{ResponsiveRow, RowLayout, ShadowList, fit};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Pill widths between 60 and 160 pixels.
fn gen_widths(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Rng::new(seed);
    (0..n).map(|_| 60.0 + rng.next_f64() * 100.0).collect()
}

fn bench_visible_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_count");
    for &n in &[16usize, 64, 512] {
        let widths = gen_widths(n, 0x5eed);
        let total: f64 = widths.iter().sum();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("half_fits_n{n}"), |b| {
            b.iter(|| black_box(fit::visible_count(total / 2.0, widths.iter().copied())));
        });
        group.bench_function(format!("all_fit_n{n}"), |b| {
            b.iter(|| black_box(fit::fit(total + 200.0, 100.0, widths.iter().copied())));
        });
    }
    group.finish();
}

fn bench_resize_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("responsive_row");
    for &n in &[16usize, 64] {
        let widths = gen_widths(n, 0xf00d);
        let steps: Vec<f64> = (0..200).map(|i| 320.0 + f64::from(i) * 8.0).collect();
        group.throughput(Throughput::Elements(steps.len() as u64));
        group.bench_function(format!("resize_sweep_n{n}"), |b| {
            b.iter_batched(
                || ResponsiveRow::new(ShadowList::from_widths(widths.iter().copied()), 100.0),
                |mut row| {
                    let mut changes = 0_usize;
                    for &w in &steps {
                        if row.observe_resize(w).is_changed() {
                            changes += 1;
                        }
                    }
                    black_box(changes);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_arrange_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_layout");
    let widths = gen_widths(64, 0xbeef);
    let mut row = ResponsiveRow::new(ShadowList::from_widths(widths), 100.0);
    let _ = row.observe_resize(1600.0);
    group.bench_function("arrange", |b| {
        b.iter(|| black_box(RowLayout::arrange(&row, Point::ORIGIN, 44.0)));
    });
    let layout = RowLayout::arrange(&row, Point::ORIGIN, 44.0);
    let probes: Vec<Point> = {
        let mut rng = Rng::new(7);
        (0..256)
            .map(|_| Point::new(rng.next_f64() * 1600.0, rng.next_f64() * 44.0))
            .collect()
    };
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("hit_test", |b| {
        b.iter(|| {
            let hits = probes.iter().filter(|p| layout.hit_test(**p).is_some()).count();
            black_box(hits)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_visible_count,
    bench_resize_sweep,
    bench_arrange_hit_test,
);
criterion_main!(benches);
