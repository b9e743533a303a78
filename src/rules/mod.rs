//! Game rules that span players: action eligibility and final scoring.
//!
//! Per-player operations live on [`Player`](crate::player::Player); this
//! module answers questions the game asks about them:
//! - which actions a player may take now
//! - who won

pub mod eligibility;
pub mod engine;

pub use eligibility::{available_actions, ActionSet};
pub use engine::{decide_winner, FinalScore, GameResult};
