//! Shared game state: everything that is not owned by a single player.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cards::{Card, CardId, CardRegistry};
use crate::core::{GameConfig, GameRng, Turn, TurnManager};
use crate::globals::GlobalRequirements;
use crate::zones::Deck;

/// Turn manager, global parameters, both decks, the card registry and the
/// configuration.
///
/// Player operations take the table explicitly; nothing on it refers back to
/// a player.
#[derive(Clone, Debug)]
pub struct Table {
    config: GameConfig,
    registry: Arc<CardRegistry>,
    turns: TurnManager,
    globals: GlobalRequirements,
    corporation_deck: Deck<CardId>,
    project_deck: Deck<CardId>,
}

impl Table {
    /// Set up a fresh table: banned cards removed, decks shuffled, ocean
    /// prizes shuffled. Nothing is dealt.
    #[must_use]
    pub fn new(config: GameConfig, registry: Arc<CardRegistry>) -> Self {
        let rng = GameRng::new(config.seed);

        let banned_corporations = banned_ids(&registry, &config.banned_corporations);
        let banned_projects = banned_ids(&registry, &config.banned_projects);
        let corporations = registry
            .corporation_ids()
            .into_iter()
            .filter(|id| !banned_corporations.contains(id))
            .collect();
        let projects = registry
            .project_ids()
            .into_iter()
            .filter(|id| !banned_projects.contains(id))
            .collect();

        let mut corporation_deck = Deck::new(corporations, rng.for_context("corporation-deck"));
        let mut project_deck = Deck::new(projects, rng.for_context("project-deck"));
        corporation_deck.shuffle();
        project_deck.shuffle();
        debug!(
            registered = registry.len(),
            corporations = corporation_deck.len(),
            projects = project_deck.len(),
            "decks shuffled"
        );

        let globals = GlobalRequirements::new(&mut rng.for_context("ocean-prizes"));

        Self {
            config,
            registry,
            turns: TurnManager::new(),
            globals,
            corporation_deck,
            project_deck,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// A shared handle to the registry, for looking up card bodies while the
    /// table is borrowed mutably.
    #[must_use]
    pub fn registry_handle(&self) -> Arc<CardRegistry> {
        Arc::clone(&self.registry)
    }

    /// The current turn.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turns.turn()
    }

    #[must_use]
    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    pub fn turns_mut(&mut self) -> &mut TurnManager {
        &mut self.turns
    }

    #[must_use]
    pub fn globals(&self) -> &GlobalRequirements {
        &self.globals
    }

    pub fn globals_mut(&mut self) -> &mut GlobalRequirements {
        &mut self.globals
    }

    #[must_use]
    pub fn corporation_deck(&self) -> &Deck<CardId> {
        &self.corporation_deck
    }

    pub fn corporation_deck_mut(&mut self) -> &mut Deck<CardId> {
        &mut self.corporation_deck
    }

    #[must_use]
    pub fn project_deck(&self) -> &Deck<CardId> {
        &self.project_deck
    }

    pub fn project_deck_mut(&mut self) -> &mut Deck<CardId> {
        &mut self.project_deck
    }
}

/// Resolve banned names to IDs. Names matching no card are ignored.
fn banned_ids(registry: &CardRegistry, names: &[String]) -> Vec<CardId> {
    names
        .iter()
        .filter_map(|name| {
            let id = registry.find_by_name(name).map(Card::id);
            if id.is_none() {
                warn!(card = %name, "banned card is not registered");
            }
            id
        })
        .collect()
}
