use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_arcade::core::{Board, FlappySim, IntentQueue, SnakeSim, TetrisSim};
use tui_arcade::term::{FrameBuffer, PixelSurface, SnakeView, TetrisView, Viewport};
use tui_arcade::types::Intent;

fn bench_snake_tick(c: &mut Criterion) {
    let mut sim = SnakeSim::new(12345, 0);
    let mut intents = IntentQueue::new();

    c.bench_function("snake_tick_16ms", |b| {
        b.iter(|| {
            sim.tick(black_box(16.0), &mut intents);
        })
    });
}

fn bench_tetris_tick(c: &mut Criterion) {
    let mut sim = TetrisSim::new(12345);
    let mut intents = IntentQueue::new();

    c.bench_function("tetris_tick_16ms", |b| {
        b.iter(|| {
            intents.push(Intent::MoveLeft);
            intents.push(Intent::MoveRight);
            sim.tick(black_box(16.0), &mut intents);
        })
    });
}

fn bench_flappy_tick(c: &mut Criterion) {
    c.bench_function("flappy_tick", |b| {
        b.iter(|| {
            let mut sim = FlappySim::new(12345);
            let mut intents = IntentQueue::new();
            intents.push(Intent::Flap);
            sim.tick(16.0, &mut intents);
            for _ in 0..60 {
                sim.tick(black_box(16.0), &mut intents);
            }
        })
    });
}

fn bench_sweep_four_rows(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            board.sweep()
        })
    });
}

fn bench_compose_snake_frame(c: &mut Criterion) {
    let sim = SnakeSim::new(12345, 0);
    let mut surface = PixelSurface::new(0, 0);
    let mut fb = FrameBuffer::new(0, 0);
    let viewport = Viewport::new(120, 40);

    c.bench_function("compose_snake_120x40", |b| {
        b.iter(|| {
            SnakeView.render_into(black_box(&sim), &mut surface, viewport, &mut fb);
        })
    });
}

fn bench_compose_tetris_frame(c: &mut Criterion) {
    let sim = TetrisSim::new(12345);
    let mut surface = PixelSurface::new(0, 0);
    let mut fb = FrameBuffer::new(0, 0);
    let viewport = Viewport::new(120, 40);

    c.bench_function("compose_tetris_120x40", |b| {
        b.iter(|| {
            TetrisView.render_into(black_box(&sim), &mut surface, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_snake_tick,
    bench_tetris_tick,
    bench_flappy_tick,
    bench_sweep_four_rows,
    bench_compose_snake_frame,
    bench_compose_tetris_frame
);
criterion_main!(benches);
