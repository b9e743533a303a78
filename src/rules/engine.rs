//! Final scoring.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Nobody played.
    Draw,
    /// Tied on points and on the tiebreaker.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// One player's final standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub player: PlayerId,
    pub victory_points: i32,
    /// Tiebreaker: leftover megacredits.
    pub megacredits: u32,
}

/// Most victory points wins; ties go to the most megacredits. Anything still
/// tied is a shared win.
#[must_use]
pub fn decide_winner(scores: &[FinalScore]) -> GameResult {
    let Some(best) = scores
        .iter()
        .map(|s| (s.victory_points, s.megacredits))
        .max()
    else {
        return GameResult::Draw;
    };

    let mut winners: Vec<PlayerId> = scores
        .iter()
        .filter(|s| (s.victory_points, s.megacredits) == best)
        .map(|s| s.player)
        .collect();

    if winners.len() == 1 {
        GameResult::Winner(winners.remove(0))
    } else {
        GameResult::Winners(winners)
    }
}
