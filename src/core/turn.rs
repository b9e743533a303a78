//! Round / phase / step progression.
//!
//! A round is: `Planning` (players pick phase cards), `ResolvePhases` (each
//! chosen phase once, in the chosen order), `End` (cleanup). `TurnManager` is
//! the only place a [`Turn`] is produced.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{IllegalAction, InvariantViolation};

/// The five phases, in their printed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Development,
    Construction,
    Action,
    Production,
    Research,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Development,
        Phase::Construction,
        Phase::Action,
        Phase::Production,
        Phase::Research,
    ];
}

/// Sub-state within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoundStep {
    Planning,
    ResolvePhases,
    End,
}

impl RoundStep {
    /// Next step, wrapping End back to Planning.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            RoundStep::Planning => RoundStep::ResolvePhases,
            RoundStep::ResolvePhases => RoundStep::End,
            RoundStep::End => RoundStep::Planning,
        }
    }
}

/// "What time it is" in the game.
///
/// `phase` is `Some` exactly while `step == ResolvePhases`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub round: u32,
    pub phase: Option<Phase>,
    pub step: RoundStep,
}

impl Turn {
    /// The first turn of a game.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            round: 1,
            phase: None,
            step: RoundStep::Planning,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.phase {
            Some(phase) => write!(f, "round {} {:?}/{:?}", self.round, self.step, phase),
            None => write!(f, "round {} {:?}", self.round, self.step),
        }
    }
}

/// Round/phase/step state machine.
///
/// ```
/// use ares_rules::core::{Phase, RoundStep, TurnManager};
///
/// let mut turns = TurnManager::new();
/// turns.next_turn().unwrap(); // the game-start turn is itself playable
/// turns.set_phases(vec![Phase::Action, Phase::Research]).unwrap();
///
/// assert_eq!(turns.next_turn().unwrap().phase, Some(Phase::Action));
/// assert_eq!(turns.next_turn().unwrap().phase, Some(Phase::Research));
/// assert_eq!(turns.next_turn().unwrap().step, RoundStep::End);
/// assert_eq!(turns.next_turn().unwrap().round, 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnManager {
    turn: Turn,
    chosen_phases: Vec<Phase>,
    game_start: bool,
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            turn: Turn::start(),
            chosen_phases: Vec::new(),
            game_start: true,
        }
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// True until the first call to [`TurnManager::next_turn`].
    #[must_use]
    pub fn is_game_start(&self) -> bool {
        self.game_start
    }

    /// Phases to resolve this round, in order.
    #[must_use]
    pub fn chosen_phases(&self) -> &[Phase] {
        &self.chosen_phases
    }

    /// Supply this round's phase order. Only during Planning; the End step
    /// clears whatever was chosen.
    pub fn set_phases(&mut self, phases: Vec<Phase>) -> Result<(), IllegalAction> {
        if self.turn.step != RoundStep::Planning {
            return Err(IllegalAction::PhasesOutsidePlanning(self.turn.step));
        }
        let has_duplicates = phases
            .iter()
            .enumerate()
            .any(|(i, phase)| phases[..i].contains(phase));
        if phases.is_empty() || has_duplicates {
            return Err(IllegalAction::InvalidPhaseOrder);
        }
        self.chosen_phases = phases;
        Ok(())
    }

    /// Advance the state machine by one request and return the new turn.
    ///
    /// On error the state is unchanged.
    pub fn next_turn(&mut self) -> Result<Turn, super::error::GameError> {
        if self.game_start {
            self.game_start = false;
            return Ok(self.turn);
        }

        let Turn { round, phase, step } = self.turn;
        let last_phase = self.chosen_phases.last().copied();

        self.turn = match (step, phase) {
            (RoundStep::Planning, _) => {
                let first = self
                    .chosen_phases
                    .first()
                    .copied()
                    .ok_or(IllegalAction::PhasesNotChosen)?;
                Turn {
                    round,
                    phase: Some(first),
                    step: step.next(),
                }
            }
            (RoundStep::ResolvePhases, Some(current)) if Some(current) == last_phase => Turn {
                round,
                phase: None,
                step: step.next(),
            },
            (RoundStep::ResolvePhases, Some(current)) => {
                let position = self
                    .chosen_phases
                    .iter()
                    .position(|&p| p == current)
                    .ok_or(InvariantViolation::PhaseNotInOrder(current))?;
                Turn {
                    round,
                    phase: Some(self.chosen_phases[position + 1]),
                    step,
                }
            }
            (RoundStep::End, _) => {
                self.chosen_phases.clear();
                Turn {
                    round: round + 1,
                    phase: None,
                    step: RoundStep::Planning,
                }
            }
            (RoundStep::ResolvePhases, None) => {
                return Err(InvariantViolation::UnexpectedTurn { step, phase }.into());
            }
        };

        debug!(turn = %self.turn, "turn advanced");
        Ok(self.turn)
    }
}
