//! Card system: definitions, requirements, played cards, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Corporation or project, static data only
//! - `CardRequirements`: When a project card can be played
//! - `PlayedCard`: Runtime state of a card in a tableau
//! - `CardRegistry`: Card definition lookup
//!
//! ## Content
//!
//! `catalog` holds a ready-made card set. Hosts can build their own registry
//! instead; the engine only ever sees `CardId`s and the registry.

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod points;
pub mod registry;
pub mod requirements;

pub use definition::{Card, CardColor, CardId, CorporationCard, ProjectCard, Tag, Tags};
pub use instance::PlayedCard;
pub use points::Points;
pub use registry::CardRegistry;
pub use requirements::CardRequirements;
