//! Play requirements of project cards.
//!
//! Every project card has a color condition (which phase it can be played in,
//! and how many per round) and an optional custom condition printed on the
//! card. Both must hold.

use serde::{Deserialize, Serialize};

use super::definition::CardColor;
use crate::core::Phase;
use crate::effects::Condition;
use crate::game::Table;
use crate::player::Player;

/// Color condition plus custom condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRequirements {
    /// Development phase, one green card per round.
    Green { custom: Condition },
    /// Construction phase, one red or blue card per round, two with the
    /// Construction bonus.
    RedBlue { custom: Condition },
}

impl CardRequirements {
    #[must_use]
    pub fn green() -> Self {
        CardRequirements::Green {
            custom: Condition::Always,
        }
    }

    #[must_use]
    pub fn red_blue() -> Self {
        CardRequirements::RedBlue {
            custom: Condition::Always,
        }
    }

    /// Default requirements of a card of this color.
    #[must_use]
    pub fn for_color(color: CardColor) -> Self {
        match color {
            CardColor::Green => Self::green(),
            CardColor::Blue | CardColor::Red => Self::red_blue(),
        }
    }

    /// Add a custom condition; combines with any existing one.
    #[must_use]
    pub fn with_custom(self, condition: Condition) -> Self {
        let combine = |existing: Condition| match existing {
            Condition::Always => condition,
            other => Condition::All(vec![other, condition]),
        };
        match self {
            CardRequirements::Green { custom } => CardRequirements::Green {
                custom: combine(custom),
            },
            CardRequirements::RedBlue { custom } => CardRequirements::RedBlue {
                custom: combine(custom),
            },
        }
    }

    #[must_use]
    pub fn custom(&self) -> &Condition {
        match self {
            CardRequirements::Green { custom } | CardRequirements::RedBlue { custom } => custom,
        }
    }

    /// Phase and per-round limit only.
    #[must_use]
    pub fn color_condition_met(&self, player: &Player, table: &Table) -> bool {
        let phase = table.turn().phase;
        let flags = player.flags();
        match self {
            CardRequirements::Green { .. } => {
                phase == Some(Phase::Development) && !flags.played_green_card
            }
            CardRequirements::RedBlue { .. } => {
                phase == Some(Phase::Construction)
                    && (!flags.played_red_or_blue_card
                        || player.has_phase_bonus(Phase::Construction))
            }
        }
    }

    #[must_use]
    pub fn meets_conditions(&self, player: &Player, table: &Table) -> bool {
        self.color_condition_met(player, table) && self.custom().evaluate(player, table)
    }
}
