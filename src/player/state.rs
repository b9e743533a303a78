//! Player state and the operations a player can perform.
//!
//! Every operation validates first and mutates afterwards: an `Err` means the
//! player and the table are exactly as before the call.
//!
//! ## Phase bonuses
//!
//! The holder of a phase card gets that phase's bonus once per round:
//!
//! | Phase        | Bonus                                             |
//! |--------------|---------------------------------------------------|
//! | Development  | green card costs less                             |
//! | Construction | second red/blue card, or draw a project card      |
//! | Action       | reuse one card action                             |
//! | Production   | extra megacredits                                 |
//! | Research     | draw and keep more cards                          |

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{PlayerBoard, Resource};
use crate::cards::{Card, CardColor, CardId, CardRegistry, PlayedCard, ProjectCard, Tag};
use crate::core::{
    GameConfig, GameError, IllegalAction, InvariantViolation, Phase, PlayerColor, RoundStep,
};
use crate::effects::{EffectResolver, ResolverContext};
use crate::game::Table;
use crate::globals::{GlobalParameterPrize, ParameterKind};
use crate::rules::{self, ActionSet};

/// What the player already did this round. Reset when a new round starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundFlags {
    pub picked_phase_card: bool,
    pub played_green_card: bool,
    pub played_red_or_blue_card: bool,
    pub used_phase_bonus: bool,
    pub produced: bool,
    pub researched: bool,
}

/// Cards drawn by research, waiting for the player to pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResearch {
    pub cards: Vec<CardId>,
    /// How many of `cards` go to the hand.
    pub keep: usize,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: PlayerColor,
    terraforming_rating: u32,
    greenery_tokens: u32,
    greenery_plant_cost: u32,
    temperature_heat_cost: u32,
    board: PlayerBoard,
    hand: Vec<CardId>,
    played_cards: Vec<PlayedCard>,
    starting_corporations: Vec<CardId>,
    corporation: Option<PlayedCard>,
    phase_card: Option<Phase>,
    last_phase_card: Option<Phase>,
    flags: RoundFlags,
    redraw_used: bool,
    pending_research: Option<PendingResearch>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, color: PlayerColor, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            color,
            terraforming_rating: config.starting_terraforming_rating,
            greenery_tokens: 0,
            greenery_plant_cost: config.greenery_plant_cost,
            temperature_heat_cost: config.temperature_heat_cost,
            board: PlayerBoard::new(),
            hand: Vec::new(),
            played_cards: Vec::new(),
            starting_corporations: Vec::new(),
            corporation: None,
            phase_card: None,
            last_phase_card: None,
            flags: RoundFlags::default(),
            redraw_used: false,
            pending_research: None,
        }
    }

    /// Hand out the corporation offers and the starting project cards.
    pub fn deal_starting_cards(&mut self, corporations: Vec<CardId>, projects: Vec<CardId>) {
        self.starting_corporations = corporations;
        self.hand.extend(projects);
    }

    // === Queries ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn terraforming_rating(&self) -> u32 {
        self.terraforming_rating
    }

    #[must_use]
    pub fn greenery_tokens(&self) -> u32 {
        self.greenery_tokens
    }

    #[must_use]
    pub fn greenery_plant_cost(&self) -> u32 {
        self.greenery_plant_cost
    }

    #[must_use]
    pub fn temperature_heat_cost(&self) -> u32 {
        self.temperature_heat_cost
    }

    #[must_use]
    pub fn board(&self) -> &PlayerBoard {
        &self.board
    }

    /// Project cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Played project cards, in play order.
    #[must_use]
    pub fn played_cards(&self) -> &[PlayedCard] {
        &self.played_cards
    }

    /// Corporations offered at setup, until one is chosen.
    #[must_use]
    pub fn starting_corporations(&self) -> &[CardId] {
        &self.starting_corporations
    }

    #[must_use]
    pub fn corporation(&self) -> Option<&PlayedCard> {
        self.corporation.as_ref()
    }

    /// Phase card chosen this round.
    #[must_use]
    pub fn phase_card(&self) -> Option<Phase> {
        self.phase_card
    }

    /// Phase card chosen last round; cannot be chosen again this round.
    #[must_use]
    pub fn last_phase_card(&self) -> Option<Phase> {
        self.last_phase_card
    }

    #[must_use]
    pub fn flags(&self) -> &RoundFlags {
        &self.flags
    }

    #[must_use]
    pub fn redraw_used(&self) -> bool {
        self.redraw_used
    }

    #[must_use]
    pub fn pending_research(&self) -> Option<&PendingResearch> {
        self.pending_research.as_ref()
    }

    /// Holds the bonus of `phase`: chose its card this round and has not used
    /// the bonus yet.
    #[must_use]
    pub fn has_phase_bonus(&self, phase: Phase) -> bool {
        self.phase_card == Some(phase) && !self.flags.used_phase_bonus
    }

    /// Tags on the corporation and the played projects.
    #[must_use]
    pub fn tag_count(&self, tag: Tag) -> usize {
        self.corporation
            .iter()
            .chain(&self.played_cards)
            .flat_map(|card| card.tags.iter())
            .filter(|&&t| t == tag)
            .count()
    }

    /// A card in the tableau: the corporation or a played project.
    #[must_use]
    pub fn played_card(&self, card: CardId) -> Option<&PlayedCard> {
        self.corporation
            .iter()
            .chain(&self.played_cards)
            .find(|played| played.card_id == card)
    }

    /// Cost of `card` after tag discounts and the Development bonus.
    #[must_use]
    pub fn card_cost(&self, card: &ProjectCard, table: &Table) -> u32 {
        let mut discount = 0;
        if card.has_tag(Tag::Building) {
            discount += self.board.building_tag_discount();
        }
        if card.has_tag(Tag::Space) {
            discount += self.board.space_tag_discount();
        }
        if card.color == CardColor::Green && self.has_phase_bonus(Phase::Development) {
            discount += table.config().development_discount;
        }
        card.cost.saturating_sub(discount)
    }

    /// Requirements hold and the player can pay for it.
    #[must_use]
    pub fn can_play_project_card(&self, card: &ProjectCard, table: &Table) -> bool {
        card.requirements.meets_conditions(self, table)
            && self.board.megacredits >= self.card_cost(card, table)
    }

    /// Hand cards that can be played right now.
    #[must_use]
    pub fn playable_cards(&self, table: &Table) -> Vec<CardId> {
        let registry = table.registry();
        self.hand
            .iter()
            .copied()
            .filter(|&id| {
                registry
                    .project(id)
                    .is_ok_and(|card| self.can_play_project_card(card, table))
            })
            .collect()
    }

    /// The card is in the tableau, has an action whose condition holds, and
    /// the action is unused this round or the Action bonus is available.
    #[must_use]
    pub fn card_action_playable(&self, card: CardId, table: &Table) -> bool {
        let Some(played) = self.played_card(card) else {
            return false;
        };
        let Some(action) = table.registry().get(card).and_then(Card::action) else {
            return false;
        };
        action.player_meets_conditions(self, table)
            && (!played.action_used || self.has_phase_bonus(Phase::Action))
    }

    /// Tableau cards whose action can be used right now.
    #[must_use]
    pub fn playable_card_actions(&self, table: &Table) -> Vec<CardId> {
        self.corporation
            .iter()
            .chain(&self.played_cards)
            .map(|played| played.card_id)
            .filter(|&id| self.card_action_playable(id, table))
            .collect()
    }

    /// See [`rules::available_actions`].
    pub fn available_actions(&self, table: &Table) -> Result<ActionSet, InvariantViolation> {
        rules::available_actions(self, table)
    }

    /// TR, greenery tokens and points on played projects.
    pub fn total_vp(&self, registry: &CardRegistry) -> Result<i32, InvariantViolation> {
        let mut total = self.terraforming_rating as i32 + self.greenery_tokens as i32;
        for played in &self.played_cards {
            total += registry.project(played.card_id)?.points.score(played.resources);
        }
        Ok(total)
    }

    // === Setup ===

    /// Keep one of the offered corporations and receive its starting
    /// resources. The other offers are discarded.
    pub fn choose_corporation(&mut self, card: CardId, table: &mut Table) -> Result<(), GameError> {
        if self.corporation.is_some() {
            return Err(IllegalAction::CorporationAlreadyChosen.into());
        }
        if !self.starting_corporations.contains(&card) {
            return Err(IllegalAction::CorporationNotOffered(card).into());
        }
        let registry = table.registry_handle();
        let corporation = registry.corporation(card)?;

        let rejected: Vec<CardId> = self
            .starting_corporations
            .drain(..)
            .filter(|&offer| offer != card)
            .collect();
        table.corporation_deck_mut().discard(rejected);
        self.corporation = Some(PlayedCard::new(card, &corporation.tags));
        debug!(player = %self.name, corporation = %corporation.name, "corporation chosen");

        let mut ctx = ResolverContext::new(self, table).with_source(card);
        EffectResolver::resolve(&corporation.starting_resources, &mut ctx);
        Ok(())
    }

    /// Swap starting project cards for new ones. Once per game, before the
    /// corporation is chosen.
    pub fn redraw_starting_project_cards(
        &mut self,
        cards: &[CardId],
        table: &mut Table,
    ) -> Result<usize, GameError> {
        if self.corporation.is_some() {
            return Err(IllegalAction::RedrawAfterCorporation.into());
        }
        if self.redraw_used {
            return Err(IllegalAction::RedrawAlreadyUsed.into());
        }
        self.check_in_hand(cards)?;

        self.discard_from_hand(cards, table);
        self.redraw_used = true;
        Ok(self.draw_project_cards(cards.len(), table))
    }

    // === Any time ===

    /// Discard cards from hand for megacredits. Returns the income.
    pub fn sell_project_cards(&mut self, cards: &[CardId], table: &mut Table) -> Result<u32, GameError> {
        self.check_in_hand(cards)?;

        self.discard_from_hand(cards, table);
        let income = table.config().card_sell_price * cards.len() as u32;
        self.board.add_megacredits(income);
        Ok(income)
    }

    // === Planning ===

    pub fn choose_phase_card(&mut self, phase: Phase, table: &Table) -> Result<Phase, IllegalAction> {
        require_step(table, RoundStep::Planning)?;
        if self.flags.picked_phase_card {
            return Err(IllegalAction::PhaseCardAlreadyChosen);
        }
        if self.last_phase_card == Some(phase) {
            return Err(IllegalAction::SamePhaseCardTwice(phase));
        }
        self.phase_card = Some(phase);
        self.flags.picked_phase_card = true;
        Ok(phase)
    }

    // === Development / Construction ===

    pub fn play_green_card(&mut self, card: CardId, table: &mut Table) -> Result<(), GameError> {
        self.play_project_card(card, false, table)
    }

    pub fn play_red_or_blue_card(&mut self, card: CardId, table: &mut Table) -> Result<(), GameError> {
        self.play_project_card(card, true, table)
    }

    fn play_project_card(
        &mut self,
        card: CardId,
        red_or_blue: bool,
        table: &mut Table,
    ) -> Result<(), GameError> {
        self.check_in_hand(&[card])?;
        let registry = table.registry_handle();
        let project = registry.project(card)?;
        if project.is_red_or_blue() != red_or_blue {
            return Err(IllegalAction::WrongCardColor {
                card,
                color: project.color,
            }
            .into());
        }
        if !project.requirements.meets_conditions(self, table) {
            return Err(IllegalAction::RequirementsNotMet(card).into());
        }
        let cost = self.card_cost(project, table);
        self.require(Resource::Megacredits, cost)?;

        self.board.remove_megacredits(cost);
        if red_or_blue {
            if self.flags.played_red_or_blue_card {
                self.flags.used_phase_bonus = true;
            }
            self.flags.played_red_or_blue_card = true;
        } else {
            if self.has_phase_bonus(Phase::Development) {
                self.flags.used_phase_bonus = true;
            }
            self.flags.played_green_card = true;
        }
        self.remove_from_hand(&[card]);
        self.played_cards.push(PlayedCard::new(card, &project.tags));
        debug!(player = %self.name, card = %project.name, cost, "project card played");

        if let Some(effect) = &project.effect {
            let mut ctx = ResolverContext::new(self, table).with_source(card);
            EffectResolver::resolve(effect, &mut ctx);
        }
        Ok(())
    }

    /// Construction bonus taken as a card instead of a second play.
    pub fn draw_bonus_project_card(&mut self, table: &mut Table) -> Result<usize, GameError> {
        require_phase(table, Phase::Construction)?;
        if !self.has_phase_bonus(Phase::Construction) {
            return Err(IllegalAction::BonusUnavailable(Phase::Construction).into());
        }
        self.flags.used_phase_bonus = true;
        Ok(self.draw_project_cards(1, table))
    }

    // === Action ===

    /// Use the action of a played blue card or of the corporation.
    pub fn use_card_action(&mut self, card: CardId, table: &mut Table) -> Result<(), GameError> {
        require_phase(table, Phase::Action)?;
        let already_used = self
            .played_card(card)
            .map(|played| played.action_used)
            .ok_or(IllegalAction::CardNotPlayed(card))?;
        if !self.card_action_playable(card, table) {
            return Err(IllegalAction::CardActionUnavailable(card).into());
        }
        let registry = table.registry_handle();
        let action = registry
            .get(card)
            .and_then(Card::action)
            .ok_or(IllegalAction::CardActionUnavailable(card))?;

        if already_used {
            self.flags.used_phase_bonus = true;
        }
        if let Some(played) = self.played_card_mut(card) {
            played.action_used = true;
        }
        debug!(player = %self.name, %card, reuse = already_used, "card action used");

        action.play(&mut ResolverContext::new(self, table).with_source(card));
        Ok(())
    }

    /// Convert plants into a greenery: a token plus one Oxygen step.
    pub fn build_greenery(&mut self, table: &mut Table) -> Result<GlobalParameterPrize, GameError> {
        require_phase(table, Phase::Action)?;
        self.require(Resource::Plants, self.greenery_plant_cost)?;

        self.board.remove_plants(self.greenery_plant_cost);
        self.add_greenery_token();
        Ok(self.increase_global_parameter(ParameterKind::Oxygen, table))
    }

    /// Convert heat into one Temperature step.
    pub fn raise_temperature(&mut self, table: &mut Table) -> Result<GlobalParameterPrize, GameError> {
        require_phase(table, Phase::Action)?;
        self.require(Resource::Heat, self.temperature_heat_cost)?;

        self.board.remove_heat(self.temperature_heat_cost);
        Ok(self.increase_global_parameter(ParameterKind::Temperature, table))
    }

    /// Buy a greenery with megacredits.
    pub fn standard_project_greenery(
        &mut self,
        table: &mut Table,
    ) -> Result<GlobalParameterPrize, GameError> {
        require_phase(table, Phase::Action)?;
        let cost = table.config().standard_greenery_cost;
        self.require(Resource::Megacredits, cost)?;

        self.board.remove_megacredits(cost);
        self.add_greenery_token();
        Ok(self.increase_global_parameter(ParameterKind::Oxygen, table))
    }

    /// Buy a Temperature step with megacredits.
    pub fn standard_project_temperature(
        &mut self,
        table: &mut Table,
    ) -> Result<GlobalParameterPrize, GameError> {
        require_phase(table, Phase::Action)?;
        let cost = table.config().standard_temperature_cost;
        self.require(Resource::Megacredits, cost)?;

        self.board.remove_megacredits(cost);
        Ok(self.increase_global_parameter(ParameterKind::Temperature, table))
    }

    // === Production ===

    pub fn produce(&mut self, table: &mut Table) -> Result<(), GameError> {
        require_phase(table, Phase::Production)?;
        if self.flags.produced {
            return Err(IllegalAction::AlreadyProduced.into());
        }

        let PlayerBoard {
            production_megacredits,
            production_heat,
            production_plants,
            production_cards,
            ..
        } = self.board;
        self.board.add_megacredits(production_megacredits);
        self.board.add_heat(production_heat);
        self.board.add_plants(production_plants);
        if self.has_phase_bonus(Phase::Production) {
            self.board
                .add_megacredits(table.config().production_bonus_megacredits);
            self.flags.used_phase_bonus = true;
        }
        self.flags.produced = true;
        self.draw_project_cards(production_cards as usize, table);
        Ok(())
    }

    // === Research ===

    /// Draw research cards into a pending selection. Returns how many were
    /// drawn.
    pub fn research(&mut self, table: &mut Table) -> Result<usize, GameError> {
        require_phase(table, Phase::Research)?;
        if self.flags.researched {
            return Err(IllegalAction::AlreadyResearched.into());
        }

        let config = table.config();
        let bonus = self.has_phase_bonus(Phase::Research);
        let (draw, keep) = if bonus {
            (config.research_bonus_draw, config.research_bonus_keep)
        } else {
            (config.research_draw, config.research_keep)
        };
        let cards = table.project_deck_mut().draw(draw);
        let drawn = cards.len();
        self.flags.researched = true;
        // An empty deck leaves the bonus unused.
        if drawn > 0 {
            self.flags.used_phase_bonus |= bonus;
            self.pending_research = Some(PendingResearch {
                keep: keep.min(drawn),
                cards,
            });
        }
        Ok(drawn)
    }

    /// Keep some of the research cards; the rest are discarded.
    pub fn keep_research_cards(&mut self, cards: &[CardId], table: &mut Table) -> Result<(), GameError> {
        let pending = self
            .pending_research
            .as_ref()
            .ok_or(IllegalAction::NoPendingResearch)?;
        if cards.len() != pending.keep {
            return Err(IllegalAction::WrongKeepCount {
                expected: pending.keep,
                actual: cards.len(),
            }
            .into());
        }
        let mut rejected = pending.cards.clone();
        for card in cards {
            let position = rejected
                .iter()
                .position(|c| c == card)
                .ok_or(IllegalAction::CardNotResearched(*card))?;
            rejected.remove(position);
        }

        self.pending_research = None;
        self.hand.extend_from_slice(cards);
        table.project_deck_mut().discard(rejected);
        Ok(())
    }

    // === End ===

    /// Discard exactly enough cards to get down to the hand limit.
    pub fn discard_down_to_hand_limit(
        &mut self,
        cards: &[CardId],
        table: &mut Table,
    ) -> Result<(), GameError> {
        require_step(table, RoundStep::End)?;
        let expected = self.hand.len().saturating_sub(table.config().hand_limit);
        if cards.len() != expected {
            return Err(IllegalAction::WrongDiscardCount {
                expected,
                actual: cards.len(),
            }
            .into());
        }
        self.check_in_hand(cards)?;

        self.discard_from_hand(cards, table);
        Ok(())
    }

    /// Clear per-round state. Called when a new round's Planning starts.
    pub fn start_round(&mut self) {
        self.flags = RoundFlags::default();
        self.last_phase_card = self.phase_card.take();
        for card in self.corporation.iter_mut().chain(&mut self.played_cards) {
            card.start_round();
        }
    }

    // === Resources and terraforming ===

    pub fn board_mut(&mut self) -> &mut PlayerBoard {
        &mut self.board
    }

    pub fn add_terraforming_rating(&mut self, points: u32) -> u32 {
        self.terraforming_rating = self.terraforming_rating.saturating_add(points);
        self.terraforming_rating
    }

    pub fn add_greenery_token(&mut self) -> u32 {
        self.greenery_tokens += 1;
        self.greenery_tokens
    }

    pub fn set_greenery_plant_cost(&mut self, plants: u32) {
        self.greenery_plant_cost = plants;
    }

    /// Put a card into the tableau without paying for it.
    pub fn add_played_card(&mut self, card: PlayedCard) {
        self.played_cards.push(card);
    }

    pub fn played_card_mut(&mut self, card: CardId) -> Option<&mut PlayedCard> {
        self.corporation
            .iter_mut()
            .chain(&mut self.played_cards)
            .find(|played| played.card_id == card)
    }

    /// Draw from the project deck into hand. Returns how many were drawn,
    /// which is short when both piles run out.
    pub fn draw_project_cards(&mut self, amount: usize, table: &mut Table) -> usize {
        let drawn = table.project_deck_mut().draw(amount);
        let count = drawn.len();
        self.hand.extend(drawn);
        count
    }

    /// Advance a global parameter and take the prize.
    pub fn increase_global_parameter(
        &mut self,
        kind: ParameterKind,
        table: &mut Table,
    ) -> GlobalParameterPrize {
        let turn = table.turn();
        let prize = table.globals_mut().increase(kind, turn);
        self.award_prize(prize, table);
        debug!(player = %self.name, ?kind, ?prize, "global parameter increased");
        prize
    }

    fn award_prize(&mut self, prize: GlobalParameterPrize, table: &mut Table) {
        if prize.award_tr {
            self.add_terraforming_rating(1);
        }
        self.board.add_megacredits(prize.megacredits);
        self.board.add_plants(prize.plants);
        self.draw_project_cards(prize.cards as usize, table);
    }

    // === Helpers ===

    fn require(&self, resource: Resource, needed: u32) -> Result<(), IllegalAction> {
        let available = self.board.amount(resource);
        if available < needed {
            return Err(IllegalAction::InsufficientResources {
                resource,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Every card is in hand, counting duplicates.
    fn check_in_hand(&self, cards: &[CardId]) -> Result<(), IllegalAction> {
        let mut remaining = self.hand.clone();
        for card in cards {
            let position = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(IllegalAction::CardNotInHand(*card))?;
            remaining.swap_remove(position);
        }
        Ok(())
    }

    fn remove_from_hand(&mut self, cards: &[CardId]) {
        for card in cards {
            if let Some(position) = self.hand.iter().position(|c| c == card) {
                self.hand.remove(position);
            }
        }
    }

    fn discard_from_hand(&mut self, cards: &[CardId], table: &mut Table) {
        self.remove_from_hand(cards);
        table.project_deck_mut().discard(cards.iter().copied());
    }
}

fn require_phase(table: &Table, phase: Phase) -> Result<(), IllegalAction> {
    let actual = table.turn().phase;
    if actual != Some(phase) {
        return Err(IllegalAction::WrongPhase {
            expected: phase,
            actual,
        });
    }
    Ok(())
}

fn require_step(table: &Table, step: RoundStep) -> Result<(), IllegalAction> {
    let actual = table.turn().step;
    if actual != step {
        return Err(IllegalAction::WrongStep {
            expected: step,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::{self, COMET, HELION, MINE, STEELWORKS, TITANIUM_MINE};
    use crate::effects::Production;
    use std::sync::Arc;

    fn table() -> Table {
        let mut table = Table::new(GameConfig::default(), Arc::new(catalog::standard_registry()));
        table.turns_mut().next_turn().unwrap();
        table
    }

    fn table_at(phase: Phase) -> Table {
        let mut table = table();
        table.turns_mut().set_phases(vec![phase]).unwrap();
        table.turns_mut().next_turn().unwrap();
        table
    }

    fn table_at_end() -> Table {
        let mut table = table_at(Phase::Action);
        table.turns_mut().next_turn().unwrap();
        table
    }

    fn player() -> Player {
        Player::new("Ada", PlayerColor::Red, &GameConfig::default())
    }

    #[test]
    fn test_new_player() {
        let player = player();
        assert_eq!(player.terraforming_rating(), 5);
        assert_eq!(player.greenery_plant_cost(), 8);
        assert!(player.hand().is_empty());
        assert!(player.corporation().is_none());
    }

    #[test]
    fn test_phase_card_rules() {
        let table = table();
        let mut player = player();

        assert_eq!(player.choose_phase_card(Phase::Action, &table), Ok(Phase::Action));
        assert_eq!(
            player.choose_phase_card(Phase::Research, &table),
            Err(IllegalAction::PhaseCardAlreadyChosen)
        );

        player.start_round();
        assert_eq!(player.last_phase_card(), Some(Phase::Action));
        assert_eq!(
            player.choose_phase_card(Phase::Action, &table),
            Err(IllegalAction::SamePhaseCardTwice(Phase::Action))
        );
        assert_eq!(player.choose_phase_card(Phase::Research, &table), Ok(Phase::Research));
    }

    #[test]
    fn test_phase_card_only_in_planning() {
        let table = table_at(Phase::Action);
        let mut player = player();
        assert!(matches!(
            player.choose_phase_card(Phase::Production, &table),
            Err(IllegalAction::WrongStep { .. })
        ));
    }

    #[test]
    fn test_play_green_card() {
        let mut table = table_at(Phase::Development);
        let mut player = player();
        player.deal_starting_cards(vec![], vec![MINE, TITANIUM_MINE]);
        player.board.megacredits = 20;

        assert_eq!(player.playable_cards(&table), vec![MINE, TITANIUM_MINE]);
        player.play_green_card(MINE, &mut table).unwrap();

        assert_eq!(player.board().megacredits, 7);
        assert_eq!(player.board().production_steel, 1);
        assert_eq!(player.hand(), &[TITANIUM_MINE]);
        assert_eq!(player.played_cards()[0].card_id, MINE);
        assert_eq!(player.tag_count(Tag::Building), 1);

        // One green card per round.
        assert!(player.playable_cards(&table).is_empty());
        assert_eq!(
            player.play_green_card(TITANIUM_MINE, &mut table),
            Err(IllegalAction::RequirementsNotMet(TITANIUM_MINE).into())
        );
    }

    #[test]
    fn test_wrong_color_is_rejected() {
        let mut table = table_at(Phase::Development);
        let mut player = player();
        player.deal_starting_cards(vec![], vec![STEELWORKS]);
        player.board.megacredits = 50;

        assert_eq!(
            player.play_green_card(STEELWORKS, &mut table),
            Err(IllegalAction::WrongCardColor {
                card: STEELWORKS,
                color: CardColor::Blue
            }
            .into())
        );
        assert_eq!(player.hand(), &[STEELWORKS]);
        assert_eq!(player.board().megacredits, 50);
    }

    #[test]
    fn test_discounts() {
        let table = table_at(Phase::Development);
        let registry = catalog::standard_registry();
        let mine = registry.project(MINE).unwrap();
        let mut player = player();

        assert_eq!(player.card_cost(mine, &table), 13);
        player.board.increase_production(Production::Steel, 2);
        assert_eq!(player.card_cost(mine, &table), 9);
        player.phase_card = Some(Phase::Development);
        assert_eq!(player.card_cost(mine, &table), 6);
    }

    #[test]
    fn test_development_bonus_is_consumed() {
        let mut table = table_at(Phase::Development);
        let mut player = player();
        player.deal_starting_cards(vec![], vec![MINE]);
        player.board.megacredits = 10;
        player.phase_card = Some(Phase::Development);

        player.play_green_card(MINE, &mut table).unwrap();
        assert_eq!(player.board().megacredits, 0);
        assert!(player.flags().used_phase_bonus);
    }

    #[test]
    fn test_insufficient_megacredits() {
        let mut table = table_at(Phase::Development);
        let mut player = player();
        player.deal_starting_cards(vec![], vec![MINE]);
        player.board.megacredits = 5;

        assert!(player.playable_cards(&table).is_empty());
        assert_eq!(
            player.play_green_card(MINE, &mut table),
            Err(IllegalAction::InsufficientResources {
                resource: Resource::Megacredits,
                needed: 13,
                available: 5
            }
            .into())
        );
    }

    #[test]
    fn test_construction_bonus_allows_second_card() {
        let mut table = table_at(Phase::Construction);
        let mut player = player();
        player.deal_starting_cards(vec![], vec![STEELWORKS, COMET, catalog::BUSINESS_CONTACTS]);
        player.board.megacredits = 100;
        player.phase_card = Some(Phase::Construction);

        player.play_red_or_blue_card(STEELWORKS, &mut table).unwrap();
        assert!(!player.flags().used_phase_bonus);

        player.play_red_or_blue_card(COMET, &mut table).unwrap();
        assert!(player.flags().used_phase_bonus);

        assert_eq!(
            player.play_red_or_blue_card(catalog::BUSINESS_CONTACTS, &mut table),
            Err(IllegalAction::RequirementsNotMet(catalog::BUSINESS_CONTACTS).into())
        );
    }

    #[test]
    fn test_comet_raises_two_parameters() {
        let mut table = table_at(Phase::Construction);
        let mut player = player();
        player.deal_starting_cards(vec![], vec![COMET]);
        player.board.megacredits = 21;

        player.play_red_or_blue_card(COMET, &mut table).unwrap();
        assert_eq!(table.globals().parameter(ParameterKind::Temperature).value(), -28);
        assert_eq!(table.globals().parameter(ParameterKind::Oceans).value(), 1);
        assert_eq!(player.terraforming_rating(), 7);
    }

    #[test]
    fn test_draw_bonus_card() {
        let mut table = table_at(Phase::Construction);
        let mut player = player();

        assert_eq!(
            player.draw_bonus_project_card(&mut table),
            Err(IllegalAction::BonusUnavailable(Phase::Construction).into())
        );

        player.phase_card = Some(Phase::Construction);
        assert_eq!(player.draw_bonus_project_card(&mut table), Ok(1));
        assert_eq!(player.hand().len(), 1);
        assert!(!player.has_phase_bonus(Phase::Construction));
    }

    #[test]
    fn test_steelworks_action() {
        let mut table = table_at(Phase::Action);
        let mut player = player();
        player.add_played_card(PlayedCard::new(STEELWORKS, &[Tag::Building]));
        player.board.heat = 12;

        player.use_card_action(STEELWORKS, &mut table).unwrap();
        assert_eq!(player.board().heat, 6);
        assert_eq!(player.board().megacredits, 2);
        assert_eq!(table.globals().parameter(ParameterKind::Oxygen).value(), 1);
        assert_eq!(player.terraforming_rating(), 6);

        // Used this round and no Action bonus.
        assert_eq!(
            player.use_card_action(STEELWORKS, &mut table),
            Err(IllegalAction::CardActionUnavailable(STEELWORKS).into())
        );
    }

    #[test]
    fn test_action_bonus_allows_one_reuse() {
        let mut table = table_at(Phase::Action);
        let mut player = player();
        player.add_played_card(PlayedCard::new(STEELWORKS, &[Tag::Building]));
        player.board.heat = 18;
        player.phase_card = Some(Phase::Action);

        player.use_card_action(STEELWORKS, &mut table).unwrap();
        player.use_card_action(STEELWORKS, &mut table).unwrap();
        assert!(player.flags().used_phase_bonus);
        assert!(!player.card_action_playable(STEELWORKS, &table));
    }

    #[test]
    fn test_card_action_needs_played_card() {
        let mut table = table_at(Phase::Action);
        let mut player = player();
        assert_eq!(
            player.use_card_action(STEELWORKS, &mut table),
            Err(IllegalAction::CardNotPlayed(STEELWORKS).into())
        );
    }

    #[test]
    fn test_corporation_flow() {
        let mut table = table();
        let mut player = player();
        player.deal_starting_cards(vec![HELION, catalog::CREDICOR], vec![]);

        assert_eq!(
            player.choose_corporation(catalog::ECOLINE, &mut table),
            Err(IllegalAction::CorporationNotOffered(catalog::ECOLINE).into())
        );

        let discarded = table.corporation_deck().discard_len();
        player.choose_corporation(HELION, &mut table).unwrap();
        assert_eq!(player.board().megacredits, 28);
        assert_eq!(player.board().production_heat, 3);
        assert_eq!(player.tag_count(Tag::Space), 1);
        assert!(player.starting_corporations().is_empty());
        assert_eq!(table.corporation_deck().discard_len(), discarded + 1);

        assert_eq!(
            player.choose_corporation(HELION, &mut table),
            Err(IllegalAction::CorporationAlreadyChosen.into())
        );
    }

    #[test]
    fn test_redraw_rules() {
        let mut table = table();
        let mut player = player();
        let dealt = table.project_deck_mut().draw(3);
        player.deal_starting_cards(vec![HELION], dealt.clone());

        assert_eq!(player.redraw_starting_project_cards(&dealt[..2], &mut table), Ok(2));
        assert_eq!(player.hand().len(), 3);
        assert_eq!(
            player.redraw_starting_project_cards(&[], &mut table),
            Err(IllegalAction::RedrawAlreadyUsed.into())
        );

        let mut fresh = self::player();
        fresh.deal_starting_cards(vec![HELION], vec![MINE]);
        fresh.choose_corporation(HELION, &mut table).unwrap();
        assert_eq!(
            fresh.redraw_starting_project_cards(&[MINE], &mut table),
            Err(IllegalAction::RedrawAfterCorporation.into())
        );
    }

    #[test]
    fn test_sell_project_cards() {
        let mut table = table();
        let mut player = player();
        player.deal_starting_cards(vec![], vec![MINE, COMET, MINE]);

        assert_eq!(
            player.sell_project_cards(&[COMET, COMET], &mut table),
            Err(IllegalAction::CardNotInHand(COMET).into())
        );
        assert_eq!(player.sell_project_cards(&[MINE, MINE], &mut table), Ok(6));
        assert_eq!(player.hand(), &[COMET]);
        assert_eq!(player.board().megacredits, 6);
        assert_eq!(table.project_deck().discard_pile(), &[MINE, MINE]);
    }

    #[test]
    fn test_standard_actions() {
        let mut table = table_at(Phase::Action);
        let mut player = player();
        player.board.plants = 9;
        player.board.heat = 8;
        player.board.megacredits = 37;

        player.build_greenery(&mut table).unwrap();
        player.raise_temperature(&mut table).unwrap();
        player.standard_project_greenery(&mut table).unwrap();
        player.standard_project_temperature(&mut table).unwrap();

        assert_eq!(player.board().plants, 1);
        assert_eq!(player.board().heat, 0);
        assert_eq!(player.board().megacredits, 0);
        assert_eq!(player.greenery_tokens(), 2);
        assert_eq!(player.terraforming_rating(), 9);
        assert_eq!(table.globals().parameter(ParameterKind::Oxygen).value(), 2);
        assert_eq!(table.globals().parameter(ParameterKind::Temperature).value(), -26);

        assert_eq!(
            player.build_greenery(&mut table),
            Err(IllegalAction::InsufficientResources {
                resource: Resource::Plants,
                needed: 8,
                available: 1
            }
            .into())
        );
    }

    #[test]
    fn test_produce() {
        let mut table = table_at(Phase::Production);
        let mut player = player();
        player.board.increase_production(Production::Megacredits, 3);
        player.board.increase_production(Production::Heat, 2);
        player.board.increase_production(Production::Plants, 1);
        player.board.increase_production(Production::Cards, 2);
        player.phase_card = Some(Phase::Production);

        player.produce(&mut table).unwrap();
        assert_eq!(player.board().megacredits, 7);
        assert_eq!(player.board().heat, 2);
        assert_eq!(player.board().plants, 1);
        assert_eq!(player.hand().len(), 2);

        assert_eq!(
            player.produce(&mut table),
            Err(IllegalAction::AlreadyProduced.into())
        );
    }

    #[test]
    fn test_produce_outside_production() {
        let mut table = table_at(Phase::Action);
        let mut player = player();
        assert_eq!(
            player.produce(&mut table),
            Err(IllegalAction::WrongPhase {
                expected: Phase::Production,
                actual: Some(Phase::Action)
            }
            .into())
        );
    }

    #[test]
    fn test_research_with_bonus() {
        let mut table = table_at(Phase::Research);
        let mut player = player();
        player.phase_card = Some(Phase::Research);

        assert_eq!(player.research(&mut table), Ok(5));
        assert!(!player.has_phase_bonus(Phase::Research));
        let drawn = player.pending_research().unwrap().cards.clone();
        assert_eq!(player.pending_research().unwrap().keep, 2);

        assert_eq!(
            player.keep_research_cards(&drawn[..1], &mut table),
            Err(IllegalAction::WrongKeepCount {
                expected: 2,
                actual: 1
            }
            .into())
        );
        // Only one Mine exists, so at most one can have been drawn.
        assert!(player.keep_research_cards(&[MINE, MINE], &mut table).is_err());

        let discarded = table.project_deck().discard_len();
        player.keep_research_cards(&drawn[..2], &mut table).unwrap();
        assert_eq!(player.hand(), &drawn[..2]);
        assert_eq!(table.project_deck().discard_len(), discarded + 3);
        assert!(player.pending_research().is_none());
        assert_eq!(
            player.research(&mut table),
            Err(IllegalAction::AlreadyResearched.into())
        );
    }

    #[test]
    fn test_research_on_empty_deck_keeps_bonus() {
        let mut table = Table::new(GameConfig::default(), Arc::new(CardRegistry::new()));
        table.turns_mut().next_turn().unwrap();
        table.turns_mut().set_phases(vec![Phase::Research]).unwrap();
        table.turns_mut().next_turn().unwrap();
        let mut player = player();
        player.phase_card = Some(Phase::Research);

        assert_eq!(player.research(&mut table), Ok(0));
        assert!(player.pending_research().is_none());
        assert!(player.flags().researched);
        assert!(player.has_phase_bonus(Phase::Research));
    }

    #[test]
    fn test_discard_down_to_hand_limit() {
        let mut table = table_at_end();
        let mut player = player();
        let dealt = table.project_deck_mut().draw(11);
        player.deal_starting_cards(vec![], dealt.clone());

        assert_eq!(
            player.discard_down_to_hand_limit(&dealt[..2], &mut table),
            Err(IllegalAction::WrongDiscardCount {
                expected: 1,
                actual: 2
            }
            .into())
        );
        player.discard_down_to_hand_limit(&dealt[..1], &mut table).unwrap();
        assert_eq!(player.hand().len(), 10);
    }

    #[test]
    fn test_start_round_resets_flags() {
        let mut player = player();
        player.flags.produced = true;
        player.flags.used_phase_bonus = true;
        player.phase_card = Some(Phase::Production);
        player.add_played_card(PlayedCard::new(STEELWORKS, &[]));
        player.played_cards[0].action_used = true;

        player.start_round();
        assert_eq!(player.flags(), &RoundFlags::default());
        assert_eq!(player.phase_card(), None);
        assert_eq!(player.last_phase_card(), Some(Phase::Production));
        assert!(!player.played_cards()[0].action_used);
    }

    #[test]
    fn test_terraforming_rating_clamps() {
        let mut player = player();
        assert_eq!(player.add_terraforming_rating(2), 7);
        assert_eq!(player.add_terraforming_rating(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_total_vp() {
        let registry = catalog::standard_registry();
        let mut player = player();
        player.add_greenery_token();
        player.add_played_card(PlayedCard::new(STEELWORKS, &[Tag::Building]));
        let mut birds = PlayedCard::new(catalog::BIRDS, &[Tag::Animal]);
        birds.add_resources(3);
        player.add_played_card(birds);

        // 5 TR + 1 greenery + 1 Steelworks + 3 Birds
        assert_eq!(player.total_vp(&registry), Ok(10));
    }
}
