use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tetrohash::core::{Board, GridEngine};
use tetrohash::types::{GameCommand, GameMode, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = GridEngine::new(12345);
    engine.start(GameMode::Normal);

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.start(GameMode::Normal);
            }
            engine.apply(GameCommand::Tick(black_box(16)));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut engine = GridEngine::new(12345);
    engine.start(GameMode::Normal);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.start(GameMode::Normal);
            }
            engine.apply(GameCommand::HardDrop);
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = GridEngine::new(12345);
    engine.start(GameMode::Puzzle);

    c.bench_function("snapshot", |b| b.iter(|| black_box(engine.snapshot())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop,
    bench_clear_four_rows,
    bench_snapshot
);
criterion_main!(benches);
