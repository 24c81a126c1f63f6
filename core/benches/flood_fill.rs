use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mineboard_core::*;

fn bench_flood_fill(c: &mut Criterion) {
    c.bench_function("expose clear board", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.expose(black_box((4, 4))).unwrap()
        })
    });

    c.bench_function("expose seeded board", |b| {
        let mut seeded = Board::new();
        seeded.place_mines(7).unwrap();
        b.iter(|| {
            let mut board = seeded.clone();
            board.expose(black_box((0, 0))).unwrap();
            board.game_status()
        })
    });
}

fn bench_placement(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("place mines", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut board = Board::new();
            board.place_mines(black_box(seed)).unwrap()
        })
    });
}

criterion_group!(benches, bench_flood_fill, bench_placement);
criterion_main!(benches);
