// Copyright 2025 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of solving open and cyclic knot lists.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::TAU;
use std::hint::black_box;

use knotwork::{Knot, KnotList, Point, Specifier};

/// Points on a wobbly circle, so no section is straight.
fn wobble(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let th = i as f64 * TAU / n as f64;
            let r = 100.0 + 10.0 * (5.0 * th).sin();
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

fn bench_solve_open(cc: &mut Criterion) {
    for n in [4, 16, 64, 256] {
        let list = KnotList::from_points(wobble(n), false).unwrap();
        cc.bench_with_input(BenchmarkId::new("open solve", n), &list, |bb, list| {
            bb.iter(|| black_box(list.clone()).solve());
        });
    }
}

fn bench_solve_cyclic(cc: &mut Criterion) {
    for n in [4, 16, 64, 256] {
        let list = KnotList::from_points(wobble(n), true).unwrap();
        cc.bench_with_input(BenchmarkId::new("cyclic solve", n), &list, |bb, list| {
            bb.iter(|| black_box(list.clone()).solve());
        });
    }
}

fn bench_solve_sections(cc: &mut Criterion) {
    // Every fourth knot fixes its direction, cutting the cycle into sections.
    let knots: Vec<Knot> = wobble(64)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let k = Knot::new(p);
            if i % 4 == 0 {
                let tangent = p.to_vec2().rotate(TAU / 4.0);
                k.with_in(Specifier::Direction(tangent))
                    .with_out(Specifier::Direction(tangent))
            } else {
                k
            }
        })
        .collect();
    let list = KnotList::new(knots, true).unwrap();
    cc.bench_function("sectioned cyclic solve 64", |bb| {
        bb.iter(|| black_box(list.clone()).solve());
    });
}

criterion_group!(
    benches,
    bench_solve_open,
    bench_solve_cyclic,
    bench_solve_sections
);
criterion_main!(benches);
