use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tenpin::core::{Game, ScoreCard};

const MIXED: [u8; 17] = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

fn bench_perfect_game(c: &mut Criterion) {
    c.bench_function("roll_perfect_game", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for _ in 0..12 {
                let _ = game.roll(black_box(10));
            }
            game
        })
    });
}

fn bench_score(c: &mut Criterion) {
    let game = Game::from_rolls(MIXED).unwrap();

    c.bench_function("score_complete_game", |b| {
        b.iter(|| black_box(&game).score())
    });
}

fn bench_scorecard(c: &mut Criterion) {
    let game = Game::from_rolls(MIXED).unwrap();
    let mut card = ScoreCard::default();

    c.bench_function("scorecard_into", |b| {
        b.iter(|| black_box(&game).scorecard_into(&mut card))
    });
}

criterion_group!(benches, bench_perfect_game, bench_score, bench_scorecard);
criterion_main!(benches);
