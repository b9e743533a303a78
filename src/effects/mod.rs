//! Card bodies as data.
//!
//! ## Key Types
//!
//! - `Condition`: predicate over a player and the table
//! - `Effect`: mutation of a player (and, through it, the table)
//! - `CardAction`: a condition plus an effect, usable once per round
//! - `EffectResolver`: applies effects
//!
//! Conditions and effects are closed sum types; adding a card never needs new
//! engine code unless it needs a new verb.

pub mod condition;
pub mod effect;
pub mod resolver;

pub use condition::Condition;
pub use effect::{CardAction, Effect, Production};
pub use resolver::{EffectResolver, ResolveResult, ResolverContext};
