//! Victory points printed on project cards.

use serde::{Deserialize, Serialize};

/// How a played project card scores at the end of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Points {
    Fixed(i32),
    /// One point per `resources_per_point` resources on the card, rounded down.
    PerResource { resources_per_point: u32 },
}

impl Default for Points {
    fn default() -> Self {
        Points::Fixed(0)
    }
}

impl Points {
    /// Score given the number of resources currently on the card.
    #[must_use]
    pub fn score(&self, resources_on_card: u32) -> i32 {
        match *self {
            Points::Fixed(points) => points,
            Points::PerResource { resources_per_point: 0 } => 0,
            Points::PerResource { resources_per_point } => {
                i32::try_from(resources_on_card / resources_per_point).unwrap_or(i32::MAX)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ignores_resources() {
        assert_eq!(Points::Fixed(2).score(9), 2);
        assert_eq!(Points::Fixed(-1).score(0), -1);
    }

    #[test]
    fn test_per_resource_rounds_down() {
        let birds = Points::PerResource { resources_per_point: 2 };
        assert_eq!(birds.score(0), 0);
        assert_eq!(birds.score(1), 0);
        assert_eq!(birds.score(5), 2);
    }

    #[test]
    fn test_zero_divisor_scores_nothing() {
        assert_eq!(Points::PerResource { resources_per_point: 0 }.score(4), 0);
    }
}
