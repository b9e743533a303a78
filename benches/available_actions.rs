//! Benchmarks for the action-eligibility engine.
//!
//! Hosts call `available_actions` for every player after every intent, so it
//! sits on the hot path of any bot or UI loop.

use std::hint::black_box;
use std::sync::Arc;

use ares_rules::cards::catalog;
use ares_rules::core::{GameConfig, Phase, PlayerColor, PlayerId, PlayerIntent};
use ares_rules::game::{Game, GameBuilder};
use criterion::{criterion_group, criterion_main, Criterion};

fn game_in(phase: Phase) -> Game {
    let mut game = GameBuilder::new(Arc::new(catalog::standard_registry()))
        .config(GameConfig::default().with_seed(42))
        .player("Ada", PlayerColor::Green)
        .player("Grace", PlayerColor::Red)
        .player("Linus", PlayerColor::Blue)
        .build()
        .expect("valid game");

    for seat in 0..3 {
        let id = PlayerId::new(seat);
        let corp = game.player(id).expect("seated").starting_corporations()[0];
        game.apply(id, PlayerIntent::ChooseCorporation(corp))
            .expect("corporation offered");
    }
    game.advance().expect("leave game start");
    game.set_phases(vec![phase]).expect("valid phases");
    game.advance().expect("enter phase");
    game
}

fn bench_available_actions(c: &mut Criterion) {
    for phase in [Phase::Development, Phase::Construction, Phase::Action] {
        let game = game_in(phase);
        c.bench_function(&format!("available_actions_{phase:?}"), |b| {
            b.iter(|| {
                for seat in 0..3 {
                    black_box(game.available_actions(black_box(PlayerId::new(seat))))
                        .ok();
                }
            });
        });
    }
}

fn bench_snapshot(c: &mut Criterion) {
    let game = game_in(Phase::Action);
    c.bench_function("snapshot_3p", |b| b.iter(|| black_box(game.snapshot())));
}

criterion_group!(benches, bench_available_actions, bench_snapshot);
criterion_main!(benches);
