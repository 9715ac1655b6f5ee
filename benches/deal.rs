use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use memory_match::core::{Difficulty, GameConfig, GameRng};
use memory_match::engine::{handle_flip, GameSession};
use memory_match::theme::ThemeRegistry;

fn hard_session() -> GameSession {
    let config = GameConfig::new(4).with_difficulty(Difficulty::Hard);
    GameSession::new(&config, &ThemeRegistry::new(), GameRng::new(42), 1).unwrap()
}

fn bench_deal(c: &mut Criterion) {
    let config = GameConfig::new(4).with_difficulty(Difficulty::Hard);
    let themes = ThemeRegistry::new();
    let mut seed = 0;
    c.bench_function("deal 6x6", |b| {
        b.iter(|| {
            seed += 1;
            black_box(GameSession::new(&config, &themes, GameRng::new(seed), 1))
        })
    });
}

fn bench_clone(c: &mut Criterion) {
    let session = hard_session();
    c.bench_function("clone session", |b| b.iter(|| black_box(session.clone())));
}

fn bench_flip(c: &mut Criterion) {
    let session = hard_session();
    c.bench_function("flip reducer", |b| b.iter(|| black_box(handle_flip(session.clone(), 17))));
}

criterion_group!(benches, bench_deal, bench_clone, bench_flip);
criterion_main!(benches);
