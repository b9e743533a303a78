//! Played cards - per-copy runtime state.
//!
//! `PlayedCard` is a card in front of a player: a project in the tableau or
//! the chosen corporation. Tags are copied from the definition so tag counts
//! need no registry lookup.

use serde::{Deserialize, Serialize};

use super::definition::{CardId, Tag, Tags};

/// A card in a player's tableau.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    /// Reference to the card definition.
    pub card_id: CardId,

    pub tags: Tags,

    /// Animals, microbes, ... placed on the card.
    pub resources: u32,

    /// The card's action was used this round.
    pub action_used: bool,
}

impl PlayedCard {
    #[must_use]
    pub fn new(card_id: CardId, tags: &[Tag]) -> Self {
        Self {
            card_id,
            tags: tags.iter().copied().collect(),
            resources: 0,
            action_used: false,
        }
    }

    pub fn add_resources(&mut self, amount: u32) {
        self.resources = self.resources.saturating_add(amount);
    }

    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Clear per-round state.
    pub fn start_round(&mut self) {
        self.action_used = false;
    }
}
