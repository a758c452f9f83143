use atelier_core::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        group.bench_function(format!("{difficulty:?}"), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                RandomMineGenerator::new(black_box(seed))
                    .generate(difficulty.config())
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    // a single mine in the corner, so the first click opens the whole board
    let config = GameConfig::square(64, 1).unwrap();
    let board = FixedMineGenerator::new([(63, 63)]).generate(config).unwrap();
    c.bench_function("flood_fill_64x64", |b| {
        b.iter(|| {
            let mut engine = PlayEngine::new(board.clone());
            engine.reveal(black_box((0, 0))).unwrap()
        })
    });
}

criterion_group!(benches, generate, flood_fill);
criterion_main!(benches);
