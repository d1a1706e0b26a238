use criterion::{black_box, criterion_group, criterion_main, Criterion};

use goban::game_state::{GameState, Move};
use goban::point::Point;

// Greedily fill the board in scan order, checking full legality (including
// the superko history walk) before every play, then pass twice. Deterministic
// and capture-heavy, which is what the legality path costs in practice.
fn play_scripted_game(size: usize) -> bool {
    let mut game = GameState::new_game(size);
    for row in 1..=size {
        for col in 1..=size {
            let mv = Move::Play(Point::new(row, col));
            if game.is_valid_move(mv) {
                game = game.apply_move(mv);
            }
        }
    }
    game = game.apply_move(Move::Pass);
    game = game.apply_move(Move::Pass);
    game.is_over()
}

fn legal_move_count(size: usize) -> usize {
    let game = GameState::new_game(size);
    let game = game.apply_move(Move::Play(Point::new(3, 3)));
    let game = game.apply_move(Move::Play(Point::new(3, 4)));
    game.legal_moves().len()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("scripted 9x9 game", |b| b.iter(|| play_scripted_game(black_box(9))));
    c.bench_function("legal moves after an opening", |b| b.iter(|| legal_move_count(black_box(9))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
