//! Which actions a player may take right now.
//!
//! A pure function of the turn, the global parameters and the player's own
//! state. The game checks every intent against this set before dispatching
//! it, so an action missing here is never applied.

use smallvec::SmallVec;

use crate::core::{ActionKind, InvariantViolation, Phase, RoundStep};
use crate::game::Table;
use crate::player::Player;

/// Available actions. The Action phase has the most, six.
pub type ActionSet = SmallVec<[ActionKind; 6]>;

/// Legal actions for `player`.
///
/// - Once the end condition is met nobody can act.
/// - On the game-start turn only corporation choice and the starting redraw
///   exist, and both vanish once a corporation is chosen.
/// - Otherwise selling cards is always possible with a non-empty hand, plus
///   whatever the current step and phase offer.
///
/// Fails only on a turn the state machine never produces.
pub fn available_actions(player: &Player, table: &Table) -> Result<ActionSet, InvariantViolation> {
    let mut actions = ActionSet::new();

    if table.globals().end_game_condition_met() {
        return Ok(actions);
    }

    if table.turns().is_game_start() {
        if player.corporation().is_none() {
            actions.push(ActionKind::ChooseCorporation);
            if !player.redraw_used() {
                actions.push(ActionKind::RedrawProjectCards);
            }
        }
        return Ok(actions);
    }

    if !player.hand().is_empty() {
        actions.push(ActionKind::SellProjectCards);
    }

    let flags = player.flags();
    let board = player.board();
    let config = table.config();
    let turn = table.turn();

    match (turn.step, turn.phase) {
        (RoundStep::Planning, None) => {
            if !flags.picked_phase_card {
                actions.push(ActionKind::ChoosePhaseCard);
            }
        }
        (RoundStep::ResolvePhases, Some(Phase::Development)) => {
            if !player.playable_cards(table).is_empty() {
                actions.push(ActionKind::PlayGreenCard);
            }
        }
        (RoundStep::ResolvePhases, Some(Phase::Construction)) => {
            if !player.playable_cards(table).is_empty() {
                actions.push(ActionKind::PlayRedOrBlueCard);
            }
            if player.has_phase_bonus(Phase::Construction) {
                actions.push(ActionKind::DrawProjectCard);
            }
        }
        (RoundStep::ResolvePhases, Some(Phase::Action)) => {
            if !player.playable_card_actions(table).is_empty() {
                actions.push(ActionKind::ResolveActionAbilities);
            }
            if board.plants >= player.greenery_plant_cost() {
                actions.push(ActionKind::BuildGreenery);
            }
            if board.heat >= player.temperature_heat_cost() {
                actions.push(ActionKind::RaiseTemperature);
            }
            if board.megacredits >= config.standard_greenery_cost {
                actions.push(ActionKind::StandardProjectGreenery);
            }
            if board.megacredits >= config.standard_temperature_cost {
                actions.push(ActionKind::StandardProjectTemperature);
            }
        }
        (RoundStep::ResolvePhases, Some(Phase::Production)) => {
            if !flags.produced {
                actions.push(ActionKind::Produce);
            }
        }
        (RoundStep::ResolvePhases, Some(Phase::Research)) => {
            if !flags.researched {
                actions.push(ActionKind::Research);
            }
            if player.pending_research().is_some() {
                actions.push(ActionKind::KeepResearchCards);
            }
        }
        (RoundStep::End, None) => {
            if player.hand().len() > config.hand_limit {
                actions.push(ActionKind::DiscardDownTo10Cards);
            }
        }
        (step, phase) => return Err(InvariantViolation::UnexpectedTurn { step, phase }),
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;
    use crate::core::GameConfig;
    use crate::core::PlayerColor;
    use std::sync::Arc;

    fn table() -> Table {
        Table::new(GameConfig::default(), Arc::new(catalog::standard_registry()))
    }

    fn player() -> Player {
        Player::new("Ada", PlayerColor::Blue, &GameConfig::default())
    }

    #[test]
    fn test_game_start_actions() {
        let mut table = table();
        let mut player = player();
        player.deal_starting_cards(vec![catalog::HELION], vec![catalog::MINE]);

        let actions = available_actions(&player, &table).unwrap();
        assert_eq!(
            actions.as_slice(),
            &[ActionKind::ChooseCorporation, ActionKind::RedrawProjectCards]
        );

        player.choose_corporation(catalog::HELION, &mut table).unwrap();
        assert!(available_actions(&player, &table).unwrap().is_empty());
    }

    #[test]
    fn test_planning_actions() {
        let mut table = table();
        table.turns_mut().next_turn().unwrap();
        let player = player();

        let actions = available_actions(&player, &table).unwrap();
        assert_eq!(actions.as_slice(), &[ActionKind::ChoosePhaseCard]);
    }

    #[test]
    fn test_sell_needs_cards() {
        let mut table = table();
        table.turns_mut().next_turn().unwrap();
        let mut player = player();
        player.deal_starting_cards(vec![], vec![catalog::COMET]);

        let actions = available_actions(&player, &table).unwrap();
        assert!(actions.contains(&ActionKind::SellProjectCards));
    }

    #[test]
    fn test_production_actions() {
        let mut table = table();
        table.turns_mut().next_turn().unwrap();
        table.turns_mut().set_phases(vec![Phase::Production]).unwrap();
        table.turns_mut().next_turn().unwrap();
        let mut player = player();

        assert_eq!(
            available_actions(&player, &table).unwrap().as_slice(),
            &[ActionKind::Produce]
        );
        player.produce(&mut table).unwrap();
        assert!(available_actions(&player, &table).unwrap().is_empty());
    }
}
