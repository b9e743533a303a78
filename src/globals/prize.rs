//! Rewards for advancing a global parameter.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Reward for one advancement, applied to one player exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalParameterPrize {
    pub award_tr: bool,
    pub megacredits: u32,
    pub cards: u32,
    pub plants: u32,
}

impl GlobalParameterPrize {
    /// One terraforming rating and nothing else.
    pub const TERRAFORMING: Self = Self {
        award_tr: true,
        megacredits: 0,
        cards: 0,
        plants: 0,
    };

    /// What a completed parameter still yields: nothing.
    pub const RESIDUAL: Self = Self {
        award_tr: false,
        megacredits: 0,
        cards: 0,
        plants: 0,
    };

    const fn ocean(megacredits: u32, cards: u32, plants: u32) -> Self {
        Self {
            award_tr: true,
            megacredits,
            cards,
            plants,
        }
    }
}

/// The bonuses printed under the nine ocean tiles.
pub const OCEAN_PRIZES: [GlobalParameterPrize; 9] = [
    GlobalParameterPrize::ocean(2, 0, 1),
    GlobalParameterPrize::ocean(1, 1, 0),
    GlobalParameterPrize::ocean(0, 0, 2),
    GlobalParameterPrize::ocean(0, 0, 2),
    GlobalParameterPrize::ocean(4, 0, 0),
    GlobalParameterPrize::ocean(0, 1, 0),
    GlobalParameterPrize::ocean(0, 1, 0),
    GlobalParameterPrize::ocean(0, 1, 1),
    GlobalParameterPrize::ocean(1, 0, 1),
];

/// Ocean tiles shuffled face down at setup and flipped one by one.
///
/// Once all tiles are flipped the last one keeps being dispensed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OceanPrizePool {
    remaining: Vec<GlobalParameterPrize>,
    last: Option<GlobalParameterPrize>,
}

impl OceanPrizePool {
    /// Shuffle the standard tiles.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut remaining = OCEAN_PRIZES.to_vec();
        rng.shuffle(&mut remaining);
        Self {
            remaining,
            last: None,
        }
    }

    /// Flip the next tile.
    pub fn next_prize(&mut self) -> GlobalParameterPrize {
        let prize = if self.remaining.is_empty() {
            self.last.unwrap_or(GlobalParameterPrize::TERRAFORMING)
        } else {
            self.remaining.remove(0)
        };
        self.last = Some(prize);
        prize
    }

    /// Tiles not flipped yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_dispenses_every_tile_once() {
        let mut pool = OceanPrizePool::shuffled(&mut GameRng::new(5));
        let mut flipped: Vec<_> = (0..9).map(|_| pool.next_prize()).collect();
        let mut expected = OCEAN_PRIZES.to_vec();

        let key = |p: &GlobalParameterPrize| (p.megacredits, p.cards, p.plants);
        flipped.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(flipped, expected);
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn test_exhausted_pool_repeats_last_tile() {
        let mut pool = OceanPrizePool::shuffled(&mut GameRng::new(5));
        let mut last = GlobalParameterPrize::RESIDUAL;
        for _ in 0..9 {
            last = pool.next_prize();
        }
        assert_eq!(pool.next_prize(), last);
        assert_eq!(pool.next_prize(), last);
    }

    #[test]
    fn test_every_ocean_tile_awards_tr() {
        assert!(OCEAN_PRIZES.iter().all(|p| p.award_tr));
    }
}
