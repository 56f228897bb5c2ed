// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use funroad_catalog::{CategoryTree, parse_get_many};
use funroad_layout::TextMetrics;
use funroad_nav::CategoryStrip;

/// A "get many" document with `roots` roots of `children` subcategories each.
fn gen_document(roots: usize, children: usize) -> Vec<u8> {
    let mut out = String::from("[");
    for r in 0..roots {
        if r > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            r##"{{"id":"{r}","name":"Category {r}","slug":"category-{r}","color":"#FFB347","subcategories":["##
        ));
        for s in 0..children {
            if s > 0 {
                out.push(',');
            }
            out.push_str(&format!(
                r#"{{"id":"{r}-{s}","name":"Sub {s}","slug":"sub-{s}","subcategories":null}}"#
            ));
        }
        out.push_str("]}");
    }
    out.push(']');
    out.into_bytes()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    for &(roots, children) in &[(12usize, 8usize), (64, 16)] {
        let document = gen_document(roots, children);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_function(format!("decode_validate_{roots}x{children}"), |b| {
            b.iter(|| {
                let roots = parse_get_many(&document).unwrap();
                black_box(CategoryTree::from_roots(roots).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_strip_build(c: &mut Criterion) {
    let metrics = TextMetrics {
        advance: 8.0,
        padding: 16.0,
        height: 44.0,
    };
    let tree = CategoryTree::from_roots(parse_get_many(&gen_document(64, 4)).unwrap()).unwrap();
    c.bench_function("strip_measure_and_resize", |b| {
        b.iter(|| {
            let mut strip = CategoryStrip::measured(tree.clone(), &metrics);
            black_box(strip.resize(1280.0))
        });
    });
}

criterion_group!(benches, bench_decode, bench_strip_build);
criterion_main!(benches);
