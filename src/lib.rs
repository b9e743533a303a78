//! # ares-rules
//!
//! Rules engine for a simultaneous-phase terraforming board game.
//!
//! ## Design Principles
//!
//! 1. **Rules, not presentation**: The engine owns state and legality.
//!    Rendering, networking and AI live in the host.
//!
//! 2. **Explicit Context**: Player operations receive the shared
//!    [`Table`](game::Table) as an argument. Nothing is global.
//!
//! 3. **Cards as Data**: Conditions and effects are enums resolved by one
//!    resolver. Catalogs are a [`CardRegistry`] handed to the builder.
//!
//! ## Round Structure
//!
//! Each round runs Planning (everyone picks a phase card), then the chosen
//! phases in canonical order, then End (discard to the hand limit). The game
//! ends when Temperature, Oxygen and Oceans are all maxed.
//!
//! ## Modules
//!
//! - `core`: Players, turns, actions, RNG, configuration, errors
//! - `zones`: Draw/discard decks
//! - `cards`: Card definitions, requirements, registry and sample catalog
//! - `effects`: Conditions, effects and their resolver
//! - `globals`: Global parameters and their prizes
//! - `player`: Player state and per-player operations
//! - `rules`: Action eligibility and final scoring
//! - `game`: The game, its table and builder

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod globals;
pub mod player;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, PlayerIntent,
    GameConfig, GameRng,
    ConfigError, GameError, IllegalAction, InvariantViolation,
    PlayerColor, PlayerId, PlayerMap,
    Phase, RoundStep, Turn, TurnManager,
};

pub use crate::zones::Deck;

pub use crate::cards::{
    Card, CardColor, CardId, CardRegistry, CardRequirements,
    CorporationCard, PlayedCard, Points, ProjectCard, Tag,
};

pub use crate::effects::{CardAction, Condition, Effect, EffectResolver, ResolverContext};

pub use crate::globals::{GlobalParameter, GlobalParameterPrize, GlobalRequirements, ParameterKind};

pub use crate::player::{Player, PlayerBoard};

pub use crate::rules::{available_actions, ActionSet, GameResult};

pub use crate::game::{Game, GameBuilder, GameSnapshot, Table};
