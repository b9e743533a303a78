//! The game: table, players and history, behind one dispatch boundary.

use im::Vector;
use tracing::{debug, info, warn};

use super::snapshot::GameSnapshot;
use super::table::Table;
use crate::cards::CardId;
use crate::core::{
    ActionRecord, GameConfig, GameError, IllegalAction, Phase, PlayerId, PlayerIntent, PlayerMap,
    RoundStep, Turn,
};
use crate::globals::ParameterKind;
use crate::player::Player;
use crate::rules::{self, ActionSet, FinalScore, GameResult};

/// A game in progress.
///
/// Created by [`GameBuilder`](super::GameBuilder). Every mutation goes
/// through [`Game::apply`] or [`Game::advance`]; both leave the game
/// untouched when they return an error.
#[derive(Clone, Debug)]
pub struct Game {
    table: Table,
    players: PlayerMap<Player>,
    history: Vector<ActionRecord>,
}

impl Game {
    pub(super) fn new(table: Table, players: PlayerMap<Player>) -> Self {
        Self {
            table,
            players,
            history: Vector::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.table.config()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    /// Every applied intent, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn current_turn(&self) -> Turn {
        self.table.turn()
    }

    #[must_use]
    pub fn current_phase(&self) -> Option<Phase> {
        self.table.turn().phase
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.table.turn().round
    }

    #[must_use]
    pub fn current_step(&self) -> RoundStep {
        self.table.turn().step
    }

    /// All three global parameters are maxed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.table.globals().end_game_condition_met()
    }

    pub fn available_actions(&self, player: PlayerId) -> Result<ActionSet, GameError> {
        Ok(rules::available_actions(self.seat(player)?, &self.table)?)
    }

    pub fn playable_cards(&self, player: PlayerId) -> Result<Vec<CardId>, GameError> {
        Ok(self.seat(player)?.playable_cards(&self.table))
    }

    pub fn total_vp(&self, player: PlayerId) -> Result<i32, GameError> {
        Ok(self.seat(player)?.total_vp(self.table.registry())?)
    }

    /// The winner, once the game is finished.
    pub fn result(&self) -> Result<Option<GameResult>, GameError> {
        if !self.is_finished() {
            return Ok(None);
        }
        let mut scores = Vec::with_capacity(self.players.len());
        for (id, player) in self.players.iter() {
            scores.push(FinalScore {
                player: id,
                victory_points: player.total_vp(self.table.registry())?,
                megacredits: player.board().megacredits,
            });
        }
        Ok(Some(rules::decide_winner(&scores)))
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let globals = self.table.globals();
        GameSnapshot {
            turn: self.table.turn(),
            chosen_phases: self.table.turns().chosen_phases().to_vec(),
            finished: self.is_finished(),
            parameters: ParameterKind::ALL
                .iter()
                .map(|&kind| globals.parameter(kind).clone())
                .collect(),
            players: self.players.values().cloned().collect(),
            project_deck_size: self.table.project_deck().len(),
            project_discard_size: self.table.project_deck().discard_len(),
            corporation_deck_size: self.table.corporation_deck().len(),
            last_action: self.history.last().cloned(),
        }
    }

    // === Mutation ===

    /// Apply a player's intent.
    ///
    /// The intent's kind must be in the player's available actions; the
    /// matching player operation then runs with the table in context.
    pub fn apply(&mut self, player: PlayerId, intent: PlayerIntent) -> Result<(), GameError> {
        match self.dispatch(player, &intent) {
            Ok(()) => {
                let sequence = self.history.len() as u32;
                debug!(%player, ?intent, sequence, "intent applied");
                self.history
                    .push_back(ActionRecord::new(player, intent, self.table.turn(), sequence));
                Ok(())
            }
            Err(err) => {
                warn!(%player, ?intent, %err, "intent rejected");
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, player_id: PlayerId, intent: &PlayerIntent) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(IllegalAction::GameFinished.into());
        }

        let Game { table, players, .. } = self;
        let player = players
            .get_mut(player_id)
            .ok_or(IllegalAction::UnknownPlayer(player_id))?;

        let kind = intent.kind();
        if !rules::available_actions(player, table)?.contains(&kind) {
            return Err(IllegalAction::ActionUnavailable(kind).into());
        }

        match intent {
            PlayerIntent::ChooseCorporation(card) => player.choose_corporation(*card, table),
            PlayerIntent::RedrawProjectCards(cards) => {
                player.redraw_starting_project_cards(cards, table).map(drop)
            }
            PlayerIntent::SellProjectCards(cards) => {
                player.sell_project_cards(cards, table).map(drop)
            }
            PlayerIntent::ChoosePhaseCard(phase) => player
                .choose_phase_card(*phase, table)
                .map(drop)
                .map_err(GameError::from),
            PlayerIntent::PlayGreenCard(card) => player.play_green_card(*card, table),
            PlayerIntent::PlayRedOrBlueCard(card) => player.play_red_or_blue_card(*card, table),
            PlayerIntent::DrawProjectCard => player.draw_bonus_project_card(table).map(drop),
            PlayerIntent::UseCardAction(card) => player.use_card_action(*card, table),
            PlayerIntent::BuildGreenery => player.build_greenery(table).map(drop),
            PlayerIntent::RaiseTemperature => player.raise_temperature(table).map(drop),
            PlayerIntent::StandardProjectGreenery => {
                player.standard_project_greenery(table).map(drop)
            }
            PlayerIntent::StandardProjectTemperature => {
                player.standard_project_temperature(table).map(drop)
            }
            PlayerIntent::Produce => player.produce(table),
            PlayerIntent::Research => player.research(table).map(drop),
            PlayerIntent::KeepResearchCards(cards) => player.keep_research_cards(cards, table),
            PlayerIntent::DiscardDownToHandLimit(cards) => {
                player.discard_down_to_hand_limit(cards, table)
            }
        }
    }

    /// Override this round's phase order. Without a call, leaving Planning
    /// resolves the players' phase cards in canonical order.
    pub fn set_phases(&mut self, phases: Vec<Phase>) -> Result<(), GameError> {
        Ok(self.table.turns_mut().set_phases(phases)?)
    }

    /// Move to the next turn once every player has finished the current one.
    ///
    /// - Game start: everyone has chosen a corporation.
    /// - Planning: everyone has chosen a phase card, unless phases were set.
    /// - ResolvePhases: nobody has an unanswered research draw.
    /// - End: every hand is within the limit.
    pub fn advance(&mut self) -> Result<Turn, GameError> {
        if self.is_finished() {
            return Err(IllegalAction::GameFinished.into());
        }

        let previous = self.table.turn();
        if self.table.turns().is_game_start() {
            self.require_all(|p| p.corporation().is_some())?;
        } else {
            match previous.step {
                RoundStep::Planning if self.table.turns().chosen_phases().is_empty() => {
                    let phases = self.phases_from_players()?;
                    self.table.turns_mut().set_phases(phases)?;
                }
                RoundStep::Planning => {}
                RoundStep::ResolvePhases => {
                    self.require_all(|p| p.pending_research().is_none())?;
                }
                RoundStep::End => {
                    let limit = self.table.config().hand_limit;
                    self.require_all(|p| p.hand().len() <= limit)?;
                }
            }
        }

        let turn = self.table.turns_mut().next_turn()?;
        if turn.round > previous.round {
            for (_, player) in self.players.iter_mut() {
                player.start_round();
            }
        }

        info!(%turn, "turn advanced");
        Ok(turn)
    }

    fn phases_from_players(&self) -> Result<Vec<Phase>, IllegalAction> {
        let mut phases = Vec::with_capacity(self.players.len());
        for (id, player) in self.players.iter() {
            phases.push(player.phase_card().ok_or(IllegalAction::PlayerNotReady(id))?);
        }
        phases.sort_unstable();
        phases.dedup();
        Ok(phases)
    }

    fn require_all(&self, ready: impl Fn(&Player) -> bool) -> Result<(), IllegalAction> {
        match self.players.iter().find(|(_, p)| !ready(p)) {
            Some((id, _)) => Err(IllegalAction::PlayerNotReady(id)),
            None => Ok(()),
        }
    }

    fn seat(&self, player: PlayerId) -> Result<&Player, IllegalAction> {
        self.players
            .get(player)
            .ok_or(IllegalAction::UnknownPlayer(player))
    }
}
