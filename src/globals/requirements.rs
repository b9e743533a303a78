//! The three global parameters and the prizes they hand out.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parameter::{Advancement, GlobalParameter, ParameterColor, ParameterKind};
use super::prize::{GlobalParameterPrize, OceanPrizePool};
use crate::core::{GameRng, Turn};

/// Temperature, Oxygen and Oceans, one of each.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRequirements {
    temperature: GlobalParameter,
    oxygen: GlobalParameter,
    oceans: GlobalParameter,
    ocean_prizes: OceanPrizePool,
}

impl GlobalRequirements {
    /// Standard parameters; the ocean tiles are shuffled with `rng`.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        Self::with_parameters(
            GlobalParameter::temperature(),
            GlobalParameter::oxygen(),
            GlobalParameter::oceans(),
            rng,
        )
    }

    /// Custom ranges, mostly for short games and tests.
    #[must_use]
    pub fn with_parameters(
        temperature: GlobalParameter,
        oxygen: GlobalParameter,
        oceans: GlobalParameter,
        rng: &mut GameRng,
    ) -> Self {
        Self {
            temperature,
            oxygen,
            oceans,
            ocean_prizes: OceanPrizePool::shuffled(rng),
        }
    }

    #[must_use]
    pub fn parameter(&self, kind: ParameterKind) -> &GlobalParameter {
        match kind {
            ParameterKind::Temperature => &self.temperature,
            ParameterKind::Oxygen => &self.oxygen,
            ParameterKind::Oceans => &self.oceans,
        }
    }

    fn parameter_mut(&mut self, kind: ParameterKind) -> &mut GlobalParameter {
        match kind {
            ParameterKind::Temperature => &mut self.temperature,
            ParameterKind::Oxygen => &mut self.oxygen,
            ParameterKind::Oceans => &mut self.oceans,
        }
    }

    /// Advance `kind` one step on `turn` and return the prize it earns.
    ///
    /// Advancing a completed parameter is legal and earns nothing; card
    /// effects raise parameters unconditionally.
    pub fn increase(&mut self, kind: ParameterKind, turn: Turn) -> GlobalParameterPrize {
        let parameter = self.parameter_mut(kind);
        let was_maxed = parameter.is_maxed();
        let advancement = parameter.increase(turn);
        if !was_maxed && parameter.is_maxed() {
            debug!(?kind, %turn, "global parameter maxed");
        }

        match (advancement, kind) {
            (Advancement::Residual, _) => GlobalParameterPrize::RESIDUAL,
            (Advancement::Full, ParameterKind::Oceans) => self.ocean_prizes.next_prize(),
            (Advancement::Full, ParameterKind::Temperature | ParameterKind::Oxygen) => {
                GlobalParameterPrize::TERRAFORMING
            }
        }
    }

    #[must_use]
    pub fn is_complete(&self, kind: ParameterKind, turn: Turn) -> bool {
        self.parameter(kind).is_complete(turn)
    }

    /// All three parameters at their maximum.
    #[must_use]
    pub fn end_game_condition_met(&self) -> bool {
        ParameterKind::ALL
            .iter()
            .all(|&kind| self.parameter(kind).is_maxed())
    }

    /// See [`GlobalParameter::compare_to_color`]. `None` for Oceans.
    #[must_use]
    pub fn compare_to_color(&self, kind: ParameterKind, color: ParameterColor) -> Option<Ordering> {
        self.parameter(kind).compare_to_color(color)
    }

    /// Ocean tiles not flipped yet.
    #[must_use]
    pub fn ocean_prizes_remaining(&self) -> usize {
        self.ocean_prizes.remaining()
    }
}
