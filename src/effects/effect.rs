//! Effect definitions.
//!
//! Effects are the mutations a card body can perform on the player who plays
//! it. They are plain data; [`EffectResolver`](super::EffectResolver) gives
//! them meaning.

use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::resolver::{EffectResolver, ResolveResult, ResolverContext};
use crate::core::Phase;
use crate::game::Table;
use crate::globals::ParameterKind;
use crate::player::Player;

/// A production track on the player board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Production {
    Megacredits,
    Heat,
    Plants,
    Cards,
    Steel,
    Titanium,
}

/// An atomic card effect.
///
/// ## Resources
///
/// `Gain*` adds, `Spend*` subtracts (clamped at zero).
///
/// ## Terraforming
///
/// `RaiseParameter` advances a global parameter and awards the resulting
/// prize to the player.
///
/// ## Composite Effects
///
/// - `Batch`: resolve several effects in order
/// - `IfPhaseCard`: resolve an effect only for the holder of a phase card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    // === Resources ===
    GainMegacredits(u32),
    SpendMegacredits(u32),
    GainHeat(u32),
    SpendHeat(u32),
    GainPlants(u32),
    SpendPlants(u32),

    // === Board ===
    IncreaseProduction { production: Production, amount: u32 },
    GainTerraformingRating(u32),
    /// Plants needed per greenery from now on.
    SetGreeneryPlantCost(u32),

    // === Cards ===
    /// Draw from the project deck into hand.
    DrawCards(u32),
    /// Place resources on the card that carries this effect.
    AddResourcesToCard(u32),

    // === Terraforming ===
    RaiseParameter(ParameterKind),

    // === Composite ===
    IfPhaseCard { phase: Phase, effect: Box<Effect> },
    Batch(Vec<Effect>),
}

impl Effect {
    /// Create a batch effect.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    /// Create a production increase.
    #[must_use]
    pub fn production(production: Production, amount: u32) -> Self {
        Self::IncreaseProduction { production, amount }
    }

    /// Create an effect that only applies to the holder of `phase`.
    #[must_use]
    pub fn if_phase_card(phase: Phase, effect: Effect) -> Self {
        Self::IfPhaseCard {
            phase,
            effect: Box::new(effect),
        }
    }
}

/// A repeatable card action: a condition to use it and what it does.
///
/// Each resolution counts as exactly one use; the caller tracks uses per
/// round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAction {
    pub condition: Condition,
    pub effect: Effect,
}

impl CardAction {
    #[must_use]
    pub fn new(condition: Condition, effect: Effect) -> Self {
        Self { condition, effect }
    }

    /// An action that can always be used.
    #[must_use]
    pub fn always(effect: Effect) -> Self {
        Self::new(Condition::Always, effect)
    }

    /// The printed condition holds. Per-round use limits are not checked
    /// here.
    #[must_use]
    pub fn player_meets_conditions(&self, player: &Player, table: &Table) -> bool {
        self.condition.evaluate(player, table)
    }

    /// Resolve the action once.
    pub fn play(&self, ctx: &mut ResolverContext<'_>) -> ResolveResult {
        EffectResolver::resolve(&self.effect, ctx)
    }
}
