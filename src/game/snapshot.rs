//! Serializable view of a game, for renderers and persistence.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, Phase, Turn};
use crate::globals::GlobalParameter;
use crate::player::Player;

/// Everything a renderer needs, without the hidden deck order or the ocean
/// prize order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: Turn,
    pub chosen_phases: Vec<Phase>,
    pub finished: bool,
    /// Temperature, Oxygen, Oceans.
    pub parameters: Vec<GlobalParameter>,
    /// In seat order.
    pub players: Vec<Player>,
    pub project_deck_size: usize,
    pub project_discard_size: usize,
    pub corporation_deck_size: usize,
    pub last_action: Option<ActionRecord>,
}
