//! Performance measurement for square reconstruction and witness verification

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use squarepack::algorithm::{SizeSet, search, verify};
use squarepack::io::image::render_tiling;
use std::hint::black_box;

/// Measures full verification of a found witness
fn bench_verify_witness(c: &mut Criterion) {
    let Ok(sizes) = SizeSet::new(vec![2, 3, 5, 7]) else {
        return;
    };
    let Some(tiling) = search(12, 12, &sizes).tiling() else {
        return;
    };

    c.bench_function("verify_12x12_witness", |b| {
        b.iter(|| verify(black_box(&tiling), &sizes));
    });
}

/// Measures rendering a witness to an RGBA image
fn bench_render_witness(c: &mut Criterion) {
    let Ok(sizes) = SizeSet::new(vec![2, 3, 5, 7]) else {
        return;
    };
    let Some(tiling) = search(12, 12, &sizes).tiling() else {
        return;
    };

    c.bench_function("render_12x12_witness", |b| {
        b.iter(|| render_tiling(black_box(&tiling)));
    });
}

criterion_group!(benches, bench_verify_witness, bench_render_witness);
criterion_main!(benches);
