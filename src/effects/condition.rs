//! Conditions on a player and the table.
//!
//! Used for card play requirements and card action availability. The engine
//! provides a fixed vocabulary plus the usual combinators.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Tag;
use crate::core::Phase;
use crate::game::Table;
use crate::globals::{ParameterColor, ParameterKind};
use crate::player::Player;

/// A predicate over a player and the shared table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    // === Resources ===
    MinMegacredits(u32),
    MinHeat(u32),
    MinPlants(u32),

    // === Tableau ===
    /// At least `count` of `tag` among the corporation and played projects.
    MinTags { tag: Tag, count: usize },

    // === Global parameters ===
    /// The parameter's color band is `color` or higher.
    ParameterAtLeast {
        parameter: ParameterKind,
        color: ParameterColor,
    },
    /// The parameter's color band is `color` or lower.
    ParameterAtMost {
        parameter: ParameterKind,
        color: ParameterColor,
    },

    // === Phase ===
    /// The player chose this phase card this round.
    HasPhaseCard(Phase),

    // === Combinators ===
    /// All conditions must be true.
    All(Vec<Condition>),
    /// At least one condition must be true.
    Any(Vec<Condition>),
    /// Condition must be false.
    Not(Box<Condition>),

    // === Special ===
    Always,
    Never,
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Always
    }
}

impl Condition {
    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Create a NOT condition.
    #[must_use]
    pub fn negate(condition: Condition) -> Self {
        Self::Not(Box::new(condition))
    }

    /// Evaluate against `player` with `table` in context.
    ///
    /// Color conditions on Oceans never hold; Oceans has no color.
    #[must_use]
    pub fn evaluate(&self, player: &Player, table: &Table) -> bool {
        let board = player.board();
        match self {
            Condition::MinMegacredits(n) => board.megacredits >= *n,
            Condition::MinHeat(n) => board.heat >= *n,
            Condition::MinPlants(n) => board.plants >= *n,

            Condition::MinTags { tag, count } => player.tag_count(*tag) >= *count,

            Condition::ParameterAtLeast { parameter, color } => table
                .globals()
                .compare_to_color(*parameter, *color)
                .is_some_and(|ordering| ordering != Ordering::Less),
            Condition::ParameterAtMost { parameter, color } => table
                .globals()
                .compare_to_color(*parameter, *color)
                .is_some_and(|ordering| ordering != Ordering::Greater),

            Condition::HasPhaseCard(phase) => player.phase_card() == Some(*phase),

            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(player, table)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(player, table)),
            Condition::Not(condition) => !condition.evaluate(player, table),

            Condition::Always => true,
            Condition::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let cond = Condition::all([Condition::MinHeat(6), Condition::Always]);
        assert!(matches!(cond, Condition::All(ref v) if v.len() == 2));

        let cond = Condition::any([Condition::Never]);
        assert!(matches!(cond, Condition::Any(ref v) if v.len() == 1));

        let cond = Condition::negate(Condition::Always);
        assert_eq!(cond, Condition::Not(Box::new(Condition::Always)));
    }

    #[test]
    fn test_default_is_always() {
        assert_eq!(Condition::default(), Condition::Always);
    }

    #[test]
    fn test_serialization() {
        let cond = Condition::all([
            Condition::MinTags {
                tag: Tag::Plant,
                count: 2,
            },
            Condition::negate(Condition::ParameterAtMost {
                parameter: ParameterKind::Temperature,
                color: ParameterColor::Red,
            }),
        ]);
        let json = serde_json::to_string(&cond).unwrap();
        let deserialized: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(cond, deserialized);
    }
}
