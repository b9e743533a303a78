//! Card definitions - static card data.
//!
//! A card is either a corporation (chosen once, at game start) or a project
//! (drawn, held in hand, played during Development or Construction). The
//! printed properties live here; what happens to a specific copy during a game
//! (resources placed on it, whether its action was used) lives in
//! [`PlayedCard`](super::PlayedCard).
//!
//! Card bodies are data: an optional immediate [`Effect`] and an optional
//! repeatable [`CardAction`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::points::Points;
use super::requirements::CardRequirements;
use crate::effects::{CardAction, Condition, Effect};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Printed tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Science,
    Building,
    Space,
    Power,
    Jovian,
    Earth,
    Plant,
    Microbe,
    Animal,
    Event,
}

/// Tags of one card. Rarely more than two.
pub type Tags = SmallVec<[Tag; 2]>;

/// Project card color: when it can be played and what it does.
///
/// - Green: played in Development, effect resolves once.
/// - Blue: played in Construction, carries a repeatable action.
/// - Red: played in Construction, one-shot event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Green,
    Blue,
    Red,
}

/// A project card.
///
/// ## Example
///
/// ```
/// use ares_rules::cards::{CardColor, CardId, ProjectCard, Tag};
/// use ares_rules::cards::Points;
///
/// let steelworks = ProjectCard::blue(CardId::new(1), "Steelworks", 15)
///     .with_tag(Tag::Building)
///     .with_points(Points::Fixed(1));
///
/// assert_eq!(steelworks.color, CardColor::Blue);
/// assert!(steelworks.has_tag(Tag::Building));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: CardId,
    pub name: String,
    /// Printed cost in megacredits, before discounts.
    pub cost: u32,
    pub color: CardColor,
    pub tags: Tags,
    pub points: Points,
    pub requirements: CardRequirements,
    /// Repeatable action (blue cards).
    pub action: Option<CardAction>,
    /// Resolves once, when the card is played.
    pub effect: Option<Effect>,
}

impl ProjectCard {
    /// Create a project card with no tags, points or body.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, color: CardColor, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            color,
            tags: Tags::new(),
            points: Points::default(),
            requirements: CardRequirements::for_color(color),
            action: None,
            effect: None,
        }
    }

    #[must_use]
    pub fn green(id: CardId, name: impl Into<String>, cost: u32) -> Self {
        Self::new(id, name, CardColor::Green, cost)
    }

    #[must_use]
    pub fn blue(id: CardId, name: impl Into<String>, cost: u32) -> Self {
        Self::new(id, name, CardColor::Blue, cost)
    }

    #[must_use]
    pub fn red(id: CardId, name: impl Into<String>, cost: u32) -> Self {
        Self::new(id, name, CardColor::Red, cost)
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: Points) -> Self {
        self.points = points;
        self
    }

    /// Add a custom play condition on top of the color condition.
    #[must_use]
    pub fn with_requirement(mut self, condition: Condition) -> Self {
        self.requirements = self.requirements.with_custom(condition);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: CardAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Red or blue, i.e. played during Construction.
    #[must_use]
    pub fn is_red_or_blue(&self) -> bool {
        matches!(self.color, CardColor::Red | CardColor::Blue)
    }
}

/// A corporation card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporationCard {
    pub id: CardId,
    pub name: String,
    pub tags: Tags,
    /// Applied once, when the corporation is chosen.
    pub starting_resources: Effect,
    pub action: Option<CardAction>,
}

impl CorporationCard {
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, starting_resources: Effect) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Tags::new(),
            starting_resources,
            action: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: CardAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Any card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Corporation(CorporationCard),
    Project(ProjectCard),
}

impl Card {
    #[must_use]
    pub fn id(&self) -> CardId {
        match self {
            Card::Corporation(card) => card.id,
            Card::Project(card) => card.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Corporation(card) => &card.name,
            Card::Project(card) => &card.name,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match self {
            Card::Corporation(card) => &card.tags,
            Card::Project(card) => &card.tags,
        }
    }

    #[must_use]
    pub fn action(&self) -> Option<&CardAction> {
        match self {
            Card::Corporation(card) => card.action.as_ref(),
            Card::Project(card) => card.action.as_ref(),
        }
    }

    /// The one-shot effect: a project's play effect, or a corporation's
    /// starting resources.
    #[must_use]
    pub fn effect(&self) -> Option<&Effect> {
        match self {
            Card::Corporation(card) => Some(&card.starting_resources),
            Card::Project(card) => card.effect.as_ref(),
        }
    }

    #[must_use]
    pub fn as_project(&self) -> Option<&ProjectCard> {
        match self {
            Card::Project(card) => Some(card),
            Card::Corporation(_) => None,
        }
    }

    #[must_use]
    pub fn as_corporation(&self) -> Option<&CorporationCard> {
        match self {
            Card::Corporation(card) => Some(card),
            Card::Project(_) => None,
        }
    }
}

impl From<ProjectCard> for Card {
    fn from(card: ProjectCard) -> Self {
        Card::Project(card)
    }
}

impl From<CorporationCard> for Card {
    fn from(card: CorporationCard) -> Self {
        Card::Corporation(card)
    }
}
