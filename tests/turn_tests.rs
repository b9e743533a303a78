//! Round, phase and step progression.

use std::sync::Arc;

use ares_rules::cards::catalog;
use ares_rules::core::{
    GameConfig, IllegalAction, Phase, PlayerColor, PlayerId, PlayerIntent, RoundStep, TurnManager,
};
use ares_rules::game::{Game, GameBuilder};
use proptest::prelude::*;

fn started_game(players: &[(&str, PlayerColor)]) -> Game {
    let mut builder = GameBuilder::new(Arc::new(catalog::standard_registry()))
        .config(GameConfig::default().with_seed(21));
    for &(name, color) in players {
        builder = builder.player(name, color);
    }
    let mut game = builder.build().unwrap();

    for seat in 0..players.len() as u8 {
        let id = PlayerId::new(seat);
        let corp = game.player(id).unwrap().starting_corporations()[0];
        game.apply(id, PlayerIntent::ChooseCorporation(corp)).unwrap();
    }
    game.advance().unwrap();
    game
}

/// The first advance leaves the game-start turn without moving the clock.
#[test]
fn test_game_start_turn() {
    let mut turns = TurnManager::new();
    assert!(turns.is_game_start());

    let turn = turns.next_turn().unwrap();
    assert!(!turns.is_game_start());
    assert_eq!(turn.round, 1);
    assert_eq!(turn.step, RoundStep::Planning);
    assert_eq!(turn.phase, None);
}

/// Leaving Planning without phases is refused and nothing changes.
#[test]
fn test_planning_requires_phases() {
    let mut turns = TurnManager::new();
    turns.next_turn().unwrap();

    assert_eq!(
        turns.next_turn(),
        Err(IllegalAction::PhasesNotChosen.into())
    );
    assert_eq!(turns.turn().step, RoundStep::Planning);
}

/// Phase order cannot be changed mid-resolution or contain duplicates.
#[test]
fn test_phase_order_validation() {
    let mut turns = TurnManager::new();
    turns.next_turn().unwrap();

    assert_eq!(turns.set_phases(vec![]), Err(IllegalAction::InvalidPhaseOrder));
    assert_eq!(
        turns.set_phases(vec![Phase::Action, Phase::Action]),
        Err(IllegalAction::InvalidPhaseOrder)
    );

    turns.set_phases(vec![Phase::Action]).unwrap();
    turns.next_turn().unwrap();
    assert_eq!(
        turns.set_phases(vec![Phase::Research]),
        Err(IllegalAction::PhasesOutsidePlanning(RoundStep::ResolvePhases))
    );
}

/// A phase order supplied during End would be cleared, so it is refused.
#[test]
fn test_phase_order_refused_at_end() {
    let mut turns = TurnManager::new();
    turns.next_turn().unwrap();
    turns.set_phases(vec![Phase::Action]).unwrap();
    turns.next_turn().unwrap();
    turns.next_turn().unwrap();
    assert_eq!(turns.turn().step, RoundStep::End);

    assert_eq!(
        turns.set_phases(vec![Phase::Research]),
        Err(IllegalAction::PhasesOutsidePlanning(RoundStep::End))
    );

    let planning = turns.next_turn().unwrap();
    assert_eq!((planning.round, planning.step), (2, RoundStep::Planning));
    assert!(turns.chosen_phases().is_empty());
    assert_eq!(
        turns.next_turn(),
        Err(IllegalAction::PhasesNotChosen.into())
    );
}

/// The game rejects a phase order outside Planning and keeps the one in use.
#[test]
fn test_game_phase_order_only_in_planning() {
    let mut game = started_game(&[("Ada", PlayerColor::Green)]);
    let ada = PlayerId::new(0);

    game.set_phases(vec![Phase::Action, Phase::Production]).unwrap();
    game.advance().unwrap();
    assert_eq!(
        game.set_phases(vec![Phase::Research]),
        Err(IllegalAction::PhasesOutsidePlanning(RoundStep::ResolvePhases).into())
    );
    assert_eq!(
        game.table().turns().chosen_phases(),
        &[Phase::Action, Phase::Production]
    );

    game.advance().unwrap();
    game.apply(ada, PlayerIntent::Produce).unwrap();
    assert_eq!(game.advance().unwrap().step, RoundStep::End);
    assert_eq!(
        game.set_phases(vec![Phase::Research]),
        Err(IllegalAction::PhasesOutsidePlanning(RoundStep::End).into())
    );

    assert_eq!(game.advance().unwrap().round, 2);
    game.set_phases(vec![Phase::Research]).unwrap();
    assert_eq!(game.advance().unwrap().phase, Some(Phase::Research));
}

/// Choosing the same phase card two rounds running is illegal; another card
/// is fine.
#[test]
fn test_no_repeat_phase_card() {
    let mut game = started_game(&[("Ada", PlayerColor::Green)]);
    let ada = PlayerId::new(0);

    game.apply(ada, PlayerIntent::ChoosePhaseCard(Phase::Production))
        .unwrap();
    game.advance().unwrap(); // Production
    game.apply(ada, PlayerIntent::Produce).unwrap();
    game.advance().unwrap(); // End
    game.advance().unwrap(); // Planning, round 2
    assert_eq!(game.current_round(), 2);

    assert_eq!(
        game.apply(ada, PlayerIntent::ChoosePhaseCard(Phase::Production)),
        Err(IllegalAction::SamePhaseCardTwice(Phase::Production).into())
    );
    game.apply(ada, PlayerIntent::ChoosePhaseCard(Phase::Action))
        .unwrap();
}

/// Each player's phase card runs once, in printed order, whoever chose it.
#[test]
fn test_phase_cards_resolve_in_printed_order() {
    let mut game = started_game(&[
        ("Ada", PlayerColor::Green),
        ("Grace", PlayerColor::Red),
        ("Linus", PlayerColor::Blue),
    ]);

    let picks = [Phase::Research, Phase::Development, Phase::Research];
    for (seat, phase) in picks.into_iter().enumerate() {
        game.apply(PlayerId::new(seat as u8), PlayerIntent::ChoosePhaseCard(phase))
            .unwrap();
    }

    assert_eq!(game.advance().unwrap().phase, Some(Phase::Development));
    assert_eq!(game.advance().unwrap().phase, Some(Phase::Research));
}

/// A new round clears per-round flags.
#[test]
fn test_new_round_resets_flags() {
    let mut game = started_game(&[("Ada", PlayerColor::Yellow)]);
    let ada = PlayerId::new(0);

    game.apply(ada, PlayerIntent::ChoosePhaseCard(Phase::Production))
        .unwrap();
    game.advance().unwrap();
    game.apply(ada, PlayerIntent::Produce).unwrap();
    assert!(game.player(ada).unwrap().flags().produced);

    game.advance().unwrap();
    game.advance().unwrap();

    let player = game.player(ada).unwrap();
    assert!(!player.flags().produced);
    assert!(!player.flags().picked_phase_card);
    assert_eq!(player.last_phase_card(), Some(Phase::Production));
    assert_eq!(player.phase_card(), None);
}

fn phase_order() -> impl Strategy<Value = Vec<Phase>> {
    Just(Phase::ALL.to_vec())
        .prop_shuffle()
        .prop_flat_map(|phases| (1..=phases.len()).prop_map(move |n| phases[..n].to_vec()))
}

proptest! {
    /// Rounds never go backwards and each round visits exactly the chosen
    /// phases, once each, in the chosen order.
    #[test]
    fn prop_turn_monotonicity(rounds in prop::collection::vec(phase_order(), 1..6)) {
        let mut turns = TurnManager::new();
        let mut last_round = turns.next_turn().unwrap().round;

        for phases in rounds {
            turns.set_phases(phases.clone()).unwrap();

            let mut visited = Vec::new();
            loop {
                let turn = turns.next_turn().unwrap();
                prop_assert!(turn.round >= last_round);
                last_round = turn.round;
                match turn.step {
                    RoundStep::ResolvePhases => visited.push(turn.phase.unwrap()),
                    RoundStep::End => break,
                    RoundStep::Planning => prop_assert!(false, "skipped End"),
                }
            }
            prop_assert_eq!(&visited, &phases);

            let next = turns.next_turn().unwrap();
            prop_assert_eq!(next.step, RoundStep::Planning);
            prop_assert_eq!(next.round, last_round + 1);
            last_round = next.round;
        }
    }
}
