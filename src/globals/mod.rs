//! Global parameters: Temperature, Oxygen, Oceans.
//!
//! Each parameter only moves up, by a fixed step, until it reaches its cap.
//! The player who moves it takes a [`GlobalParameterPrize`]: one terraforming
//! rating (plus an ocean tile bonus for Oceans) until the parameter is
//! complete, nothing afterwards.
//!
//! A parameter counts as complete from the turn *after* it was maxed, so
//! several players raising it on the same turn are all rewarded in full.

mod parameter;
mod prize;
mod requirements;

pub use parameter::{Advancement, GlobalParameter, ParameterColor, ParameterKind};
pub use prize::{GlobalParameterPrize, OceanPrizePool, OCEAN_PRIZES};
pub use requirements::GlobalRequirements;
