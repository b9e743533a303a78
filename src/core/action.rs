//! Player actions.
//!
//! Two views of the same thing:
//! - [`ActionKind`]: what a player *may* do now, as reported by
//!   `available_actions`. No payload.
//! - [`PlayerIntent`]: what a player *wants* to do, with the cards or phase
//!   it concerns. Every intent maps to exactly one `ActionKind`, which the game
//!   checks against the available set before dispatching.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::turn::{Phase, Turn};
use crate::cards::CardId;

/// A kind of action, as listed by the eligibility engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    ChooseCorporation,
    RedrawProjectCards,
    SellProjectCards,
    ChoosePhaseCard,
    PlayGreenCard,
    PlayRedOrBlueCard,
    DrawProjectCard,
    ResolveActionAbilities,
    BuildGreenery,
    RaiseTemperature,
    StandardProjectGreenery,
    StandardProjectTemperature,
    Produce,
    Research,
    KeepResearchCards,
    DiscardDownTo10Cards,
}

/// A concrete request from a player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerIntent {
    ChooseCorporation(CardId),
    RedrawProjectCards(Vec<CardId>),
    SellProjectCards(Vec<CardId>),
    ChoosePhaseCard(Phase),
    PlayGreenCard(CardId),
    PlayRedOrBlueCard(CardId),
    /// Construction bonus: draw a project card instead of playing another.
    DrawProjectCard,
    /// Use the action of a played blue card (or the corporation).
    UseCardAction(CardId),
    BuildGreenery,
    RaiseTemperature,
    StandardProjectGreenery,
    StandardProjectTemperature,
    Produce,
    Research,
    KeepResearchCards(Vec<CardId>),
    DiscardDownToHandLimit(Vec<CardId>),
}

impl PlayerIntent {
    /// The action kind this intent exercises.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerIntent::ChooseCorporation(_) => ActionKind::ChooseCorporation,
            PlayerIntent::RedrawProjectCards(_) => ActionKind::RedrawProjectCards,
            PlayerIntent::SellProjectCards(_) => ActionKind::SellProjectCards,
            PlayerIntent::ChoosePhaseCard(_) => ActionKind::ChoosePhaseCard,
            PlayerIntent::PlayGreenCard(_) => ActionKind::PlayGreenCard,
            PlayerIntent::PlayRedOrBlueCard(_) => ActionKind::PlayRedOrBlueCard,
            PlayerIntent::DrawProjectCard => ActionKind::DrawProjectCard,
            PlayerIntent::UseCardAction(_) => ActionKind::ResolveActionAbilities,
            PlayerIntent::BuildGreenery => ActionKind::BuildGreenery,
            PlayerIntent::RaiseTemperature => ActionKind::RaiseTemperature,
            PlayerIntent::StandardProjectGreenery => ActionKind::StandardProjectGreenery,
            PlayerIntent::StandardProjectTemperature => ActionKind::StandardProjectTemperature,
            PlayerIntent::Produce => ActionKind::Produce,
            PlayerIntent::Research => ActionKind::Research,
            PlayerIntent::KeepResearchCards(_) => ActionKind::KeepResearchCards,
            PlayerIntent::DiscardDownToHandLimit(_) => ActionKind::DiscardDownTo10Cards,
        }
    }
}

/// An applied intent, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// What they did.
    pub intent: PlayerIntent,

    /// When they did it.
    pub turn: Turn,

    /// Position in the game-wide history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, intent: PlayerIntent, turn: Turn, sequence: u32) -> Self {
        Self {
            player,
            intent,
            turn,
            sequence,
        }
    }
}
