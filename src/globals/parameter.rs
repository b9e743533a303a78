//! A single global parameter.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{InvariantViolation, Turn};

/// Which global parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    Temperature,
    Oxygen,
    Oceans,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 3] = [
        ParameterKind::Temperature,
        ParameterKind::Oxygen,
        ParameterKind::Oceans,
    ];
}

impl FromStr for ParameterKind {
    type Err = InvariantViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Temperature" | "temperature" => Ok(ParameterKind::Temperature),
            "Oxygen" | "oxygen" => Ok(ParameterKind::Oxygen),
            "Oceans" | "oceans" => Ok(ParameterKind::Oceans),
            other => Err(InvariantViolation::UnknownParameter(other.to_string())),
        }
    }
}

/// Visual milestones of Temperature and Oxygen, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParameterColor {
    Purple,
    Red,
    Yellow,
    White,
}

/// A monotonically increasing counter with a cap.
///
/// `maxed_on_turn` records the turn the maximum was first reached; it never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalParameter {
    kind: ParameterKind,
    value: i32,
    minimum: i32,
    maximum: i32,
    step: i32,
    maxed_on_turn: Option<Turn>,
}

impl GlobalParameter {
    /// Start a parameter at its minimum.
    #[must_use]
    pub fn new(kind: ParameterKind, minimum: i32, maximum: i32, step: i32) -> Self {
        debug_assert!(minimum <= maximum && step > 0);
        Self {
            kind,
            value: minimum,
            minimum,
            maximum,
            step,
            maxed_on_turn: None,
        }
    }

    /// -30 °C to +8 °C in steps of 2.
    #[must_use]
    pub fn temperature() -> Self {
        Self::new(ParameterKind::Temperature, -30, 8, 2)
    }

    /// 0 % to 14 % in steps of 1.
    #[must_use]
    pub fn oxygen() -> Self {
        Self::new(ParameterKind::Oxygen, 0, 14, 1)
    }

    /// 0 to 9 flipped ocean tiles.
    #[must_use]
    pub fn oceans() -> Self {
        Self::new(ParameterKind::Oceans, 0, 9, 1)
    }

    #[must_use]
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    #[must_use]
    pub fn step(&self) -> i32 {
        self.step
    }

    #[must_use]
    pub fn maxed_on_turn(&self) -> Option<Turn> {
        self.maxed_on_turn
    }

    /// Advance by one step (clamped) and report whether the parameter was
    /// already complete for this advancement.
    pub fn increase(&mut self, turn: Turn) -> Advancement {
        self.value = (self.value + self.step).min(self.maximum);
        if self.is_maxed() && self.maxed_on_turn.is_none() {
            self.maxed_on_turn = Some(turn);
        }
        if self.is_complete(turn) {
            Advancement::Residual
        } else {
            Advancement::Full
        }
    }

    #[must_use]
    pub fn is_maxed(&self) -> bool {
        self.value == self.maximum
    }

    /// Maxed on an earlier turn. Advancements on the turn the maximum was
    /// reached still count in full.
    #[must_use]
    pub fn is_complete(&self, turn: Turn) -> bool {
        self.maxed_on_turn.is_some_and(|maxed| maxed != turn)
    }

    /// Current color band, for Temperature and Oxygen.
    #[must_use]
    pub fn color(&self) -> Option<ParameterColor> {
        let bands = match self.kind {
            ParameterKind::Temperature => [-18, -8, 2],
            ParameterKind::Oxygen => [3, 7, 12],
            ParameterKind::Oceans => return None,
        };
        let color = if self.value < bands[0] {
            ParameterColor::Purple
        } else if self.value < bands[1] {
            ParameterColor::Red
        } else if self.value < bands[2] {
            ParameterColor::Yellow
        } else {
            ParameterColor::White
        };
        Some(color)
    }

    /// Compare the current color band against `color`: `Greater` when the
    /// parameter is past it, `Equal` when inside it, `Less` when below.
    #[must_use]
    pub fn compare_to_color(&self, color: ParameterColor) -> Option<Ordering> {
        self.color().map(|current| current.cmp(&color))
    }
}

/// Outcome of a single advancement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advancement {
    /// Earns the full reward.
    Full,
    /// The parameter was already complete; nothing but the move itself.
    Residual,
}
