//! Error taxonomy.
//!
//! - [`IllegalAction`]: the request breaks a game rule. Nothing was mutated;
//!   the caller can query `available_actions` and try something else.
//! - [`InvariantViolation`]: the engine reached a state its rules never
//!   produce. Treat as fatal for the game instance.
//! - [`ConfigError`]: the game could not be created as described.
//!
//! [`GameError`] wraps all three at the `Game` boundary.
//!
//! Running out of resources or cards is never an error: subtraction clamps at
//! zero and decks return short draws.

use thiserror::Error;

use super::action::ActionKind;
use super::player::PlayerId;
use super::turn::{Phase, RoundStep};
use crate::cards::{CardColor, CardId};
use crate::player::Resource;

/// A rule-breaking request, rejected before any state changed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("{0:?} is not available right now")]
    ActionUnavailable(ActionKind),
    #[error("no player sits at {0}")]
    UnknownPlayer(PlayerId),
    #[error("the game is finished")]
    GameFinished,

    // === Setup ===
    #[error("a corporation has already been chosen")]
    CorporationAlreadyChosen,
    #[error("{0} was not offered as a starting corporation")]
    CorporationNotOffered(CardId),
    #[error("cannot redraw project cards after choosing the starting corporation")]
    RedrawAfterCorporation,
    #[error("starting project cards can only be redrawn once")]
    RedrawAlreadyUsed,

    // === Cards ===
    #[error("{0} is not in the player's hand")]
    CardNotInHand(CardId),
    #[error("{0} is not among the player's played cards")]
    CardNotPlayed(CardId),
    #[error("{card} is a {color:?} card and cannot be played this way")]
    WrongCardColor { card: CardId, color: CardColor },
    #[error("requirements for playing {0} are not met")]
    RequirementsNotMet(CardId),
    #[error("the action of {0} cannot be used right now")]
    CardActionUnavailable(CardId),
    #[error("the {0:?} phase bonus is not available")]
    BonusUnavailable(Phase),
    #[error("need {needed} {resource:?}, have {available}")]
    InsufficientResources {
        resource: Resource,
        needed: u32,
        available: u32,
    },

    // === Phases ===
    #[error("the phase card was already chosen this round")]
    PhaseCardAlreadyChosen,
    #[error("cannot play the {0:?} phase card twice in a row")]
    SamePhaseCardTwice(Phase),
    #[error("only allowed during the {expected:?} phase (current: {actual:?})")]
    WrongPhase {
        expected: Phase,
        actual: Option<Phase>,
    },
    #[error("only allowed during the {expected:?} step (current: {actual:?})")]
    WrongStep {
        expected: RoundStep,
        actual: RoundStep,
    },
    #[error("production was already resolved this round")]
    AlreadyProduced,
    #[error("research was already resolved this round")]
    AlreadyResearched,
    #[error("there is no pending research draw")]
    NoPendingResearch,
    #[error("{0} was not drawn by research")]
    CardNotResearched(CardId),
    #[error("must keep exactly {expected} research cards, got {actual}")]
    WrongKeepCount { expected: usize, actual: usize },
    #[error("must discard exactly {expected} cards, got {actual}")]
    WrongDiscardCount { expected: usize, actual: usize },

    // === Turn progression ===
    #[error("no phases were chosen for this round")]
    PhasesNotChosen,
    #[error("phase order must be non-empty and free of duplicates")]
    InvalidPhaseOrder,
    #[error("phases can only be chosen during Planning (current: {0:?})")]
    PhasesOutsidePlanning(RoundStep),
    #[error("{0} has not finished the current step")]
    PlayerNotReady(PlayerId),
}

/// A state the rules never produce; signals a defect in the engine or its
/// card configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("unexpected turn state: step {step:?} with phase {phase:?}")]
    UnexpectedTurn {
        step: RoundStep,
        phase: Option<Phase>,
    },
    #[error("current phase {0:?} is not part of the chosen phase order")]
    PhaseNotInOrder(Phase),
    #[error("cannot reshuffle the discard pile while {remaining} cards remain in the deck")]
    ReshuffleWithCardsRemaining { remaining: usize },
    #[error("{0} is not registered")]
    UnknownCard(CardId),
    #[error("invalid global parameter type: {0}")]
    UnknownParameter(String),
}

/// A game could not be created from the given configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs between 1 and 4 players, got {0}")]
    PlayerCount(usize),
    #[error("color {0:?} was chosen by more than one player")]
    DuplicateColor(crate::core::PlayerColor),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Umbrella error returned by [`crate::game::Game`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Illegal(#[from] IllegalAction),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError {
    /// True for errors the caller can recover from by choosing another action.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Illegal(_))
    }
}
