use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_tetris::core::{collides, create_piece, sweep, GameState, Matrix};
use matrix_tetris::term::{FrameBuffer, GameView, Viewport};
use matrix_tetris::types::{HorizontalDirection, PieceKind, Position, RotationDir};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut arena = Matrix::new(12, 20);
            for y in 16..20 {
                arena.row_mut(y).fill(5);
            }
            sweep(black_box(&mut arena))
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut arena = Matrix::new(12, 20);
    for y in 10..20 {
        for x in 0..11 {
            arena.set(x, y, 1);
        }
    }
    let shape = create_piece(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(&arena, black_box(&shape), black_box(Position::new(4, 8))))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| {
            state.rotate(black_box(RotationDir::Clockwise));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dir = HorizontalDirection::Right;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(dir) {
                dir = HorizontalDirection::from_sign(-dir.dx());
            }
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            state.hard_drop()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render_into(&state, black_box(Viewport::new(80, 24)), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_collides,
    bench_rotate,
    bench_move,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
