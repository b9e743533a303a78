//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card a game may use. It is built once by
//! the card-content code (see [`catalog`](super::catalog)), wrapped in an
//! `Arc` and handed to the game builder; the engine never mutates it.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, CorporationCard, ProjectCard};
use crate::core::InvariantViolation;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use ares_rules::cards::{CardId, CardRegistry, ProjectCard};
///
/// let mut registry = CardRegistry::new();
/// registry.register(ProjectCard::green(CardId::new(1), "Lichen", 7));
///
/// let found = registry.project(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Lichen");
/// assert!(registry.corporation(CardId::new(1)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: impl Into<Card>) {
        let card = card.into();
        let id = card.id();
        if self.cards.contains_key(&id) {
            panic!("Card with ID {:?} already registered", id);
        }
        self.cards.insert(id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a project card, or fail if `id` is not a registered project.
    pub fn project(&self, id: CardId) -> Result<&ProjectCard, InvariantViolation> {
        self.get(id)
            .and_then(Card::as_project)
            .ok_or(InvariantViolation::UnknownCard(id))
    }

    /// Get a corporation card, or fail if `id` is not a registered corporation.
    pub fn corporation(&self, id: CardId) -> Result<&CorporationCard, InvariantViolation> {
        self.get(id)
            .and_then(Card::as_corporation)
            .ok_or(InvariantViolation::UnknownCard(id))
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look a card up by its printed name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.values().find(|card| card.name() == name)
    }

    /// All corporation IDs, ascending. Deck order must not depend on hash
    /// order.
    #[must_use]
    pub fn corporation_ids(&self) -> Vec<CardId> {
        self.sorted_ids(|card| card.as_corporation().is_some())
    }

    /// All project IDs, ascending.
    #[must_use]
    pub fn project_ids(&self) -> Vec<CardId> {
        self.sorted_ids(|card| card.as_project().is_some())
    }

    fn sorted_ids(&self, predicate: impl Fn(&Card) -> bool) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self
            .cards
            .values()
            .filter(|card| predicate(card))
            .map(Card::id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
