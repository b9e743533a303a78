//! Core engine types: players, turns, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod turn;

pub use action::{ActionKind, ActionRecord, PlayerIntent};
pub use config::GameConfig;
pub use error::{ConfigError, GameError, IllegalAction, InvariantViolation};
pub use player::{PlayerColor, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use turn::{Phase, RoundStep, Turn, TurnManager};
