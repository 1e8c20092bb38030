//! Benchmarks for playing complete games.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dare_or_dodge::cards::{CardPattern, Catalog, FallbackMode, PatternStep};
use dare_or_dodge::core::{GameSettings, Player};
use dare_or_dodge::rules::TurnEngine;

fn settings(players: usize, rounds: u32) -> GameSettings {
    let players = (0..players)
        .map(|i| Player::new(format!("p{i}"), format!("Player {i}"), i))
        .collect();
    GameSettings::new(players, rounds).with_pattern("p0", "warmup").with_seed(42)
}

fn play(engine: &TurnEngine<'_, Catalog>, settings: GameSettings) -> i32 {
    let state = engine.create_initial_game_state(settings).unwrap();
    let mut state = engine.start_first_turn(&state).unwrap();
    let mut i = 0usize;
    while !state.is_game_over() {
        let legal = engine.legal_actions(&state);
        state = engine.apply(&state, legal[i % legal.len()]).unwrap();
        i += 1;
    }
    state.standings()[0].score
}

fn bench_full_game(c: &mut Criterion) {
    let mut catalog = Catalog::seeded();
    catalog.upsert_pattern(
        CardPattern::new("warmup", "Warm Up")
            .with_step(PatternStep::new("s1", "d1").with_dodge("do1"))
            .with_step(PatternStep::new("s2", "d4"))
            .with_fallback(FallbackMode::Loop),
    );
    let engine = TurnEngine::new(&catalog);

    let mut group = c.benchmark_group("full_game");
    for (players, rounds) in [(2usize, 5u32), (6, 10), (10, 20)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{players}x{rounds}")),
            &(players, rounds),
            |b, &(players, rounds)| {
                b.iter(|| play(&engine, black_box(settings(players, rounds))))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_full_game);
criterion_main!(benches);
