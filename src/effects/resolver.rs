//! Effect resolution - applying effects to a player.
//!
//! The `EffectResolver` applies an [`Effect`] to one player with the shared
//! table in context: drawing cards needs the project deck, raising a
//! parameter needs the global requirements and the current turn.

use tracing::trace;

use super::Effect;
use crate::cards::CardId;
use crate::game::Table;
use crate::player::Player;

/// Context for resolving effects.
pub struct ResolverContext<'a> {
    /// The player the effect applies to.
    pub player: &'a mut Player,
    /// Decks, globals and turn.
    pub table: &'a mut Table,
    /// The card whose effect is resolving, if any. `AddResourcesToCard`
    /// targets it.
    pub source: Option<CardId>,
}

impl<'a> ResolverContext<'a> {
    pub fn new(player: &'a mut Player, table: &'a mut Table) -> Self {
        Self {
            player,
            table,
            source: None,
        }
    }

    /// Set the source card.
    #[must_use]
    pub fn with_source(mut self, card: CardId) -> Self {
        self.source = Some(card);
        self
    }
}

/// Result of resolving an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect resolved.
    Success,
    /// Effect did not apply (phase card not held, no source card, ...).
    Skipped,
}

/// Resolves effects on a player.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a single effect. Composite effects resolve their parts in
    /// order.
    pub fn resolve(effect: &Effect, ctx: &mut ResolverContext<'_>) -> ResolveResult {
        trace!(?effect, source = ?ctx.source, "resolving effect");

        match effect {
            Effect::GainMegacredits(n) => ctx.player.board_mut().add_megacredits(*n),
            Effect::SpendMegacredits(n) => ctx.player.board_mut().remove_megacredits(*n),
            Effect::GainHeat(n) => ctx.player.board_mut().add_heat(*n),
            Effect::SpendHeat(n) => ctx.player.board_mut().remove_heat(*n),
            Effect::GainPlants(n) => ctx.player.board_mut().add_plants(*n),
            Effect::SpendPlants(n) => ctx.player.board_mut().remove_plants(*n),

            Effect::IncreaseProduction { production, amount } => {
                ctx.player.board_mut().increase_production(*production, *amount);
            }
            Effect::GainTerraformingRating(n) => {
                ctx.player.add_terraforming_rating(*n);
            }
            Effect::SetGreeneryPlantCost(n) => ctx.player.set_greenery_plant_cost(*n),

            Effect::DrawCards(n) => {
                ctx.player.draw_project_cards(*n as usize, ctx.table);
            }
            Effect::AddResourcesToCard(n) => {
                let card = match ctx.source {
                    Some(source) => ctx.player.played_card_mut(source),
                    None => None,
                };
                let Some(card) = card else {
                    return ResolveResult::Skipped;
                };
                card.add_resources(*n);
            }

            Effect::RaiseParameter(kind) => {
                ctx.player.increase_global_parameter(*kind, ctx.table);
            }

            Effect::IfPhaseCard { phase, effect } => {
                if ctx.player.phase_card() != Some(*phase) {
                    return ResolveResult::Skipped;
                }
                return Self::resolve(effect, ctx);
            }
            Effect::Batch(effects) => {
                let results: Vec<_> = effects.iter().map(|e| Self::resolve(e, ctx)).collect();
                if !results.contains(&ResolveResult::Success) {
                    return ResolveResult::Skipped;
                }
            }
        }

        ResolveResult::Success
    }
}
