//! Players: resource board, hand, tableau and per-round state.

mod board;
mod state;

pub use board::{PlayerBoard, Resource};
pub use state::{PendingResearch, Player, RoundFlags};
