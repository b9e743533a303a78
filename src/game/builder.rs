//! Game creation.

use std::sync::Arc;

use tracing::info;

use super::state::Game;
use super::table::Table;
use crate::cards::CardRegistry;
use crate::core::{ConfigError, GameConfig, GameError, GameRng, PlayerColor, PlayerMap};
use crate::player::Player;

/// Builder for creating a [`Game`].
///
/// ```
/// use std::sync::Arc;
/// use ares_rules::cards::catalog;
/// use ares_rules::core::{GameConfig, PlayerColor};
/// use ares_rules::game::GameBuilder;
///
/// let game = GameBuilder::new(Arc::new(catalog::standard_registry()))
///     .config(GameConfig::default().with_seed(3))
///     .player("Ada", PlayerColor::Green)
///     .player("Grace", PlayerColor::Red)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.players().len(), 2);
/// assert_eq!(game.current_round(), 1);
/// ```
pub struct GameBuilder {
    registry: Arc<CardRegistry>,
    config: GameConfig,
    seats: Vec<(String, PlayerColor)>,
}

impl GameBuilder {
    #[must_use]
    pub fn new(registry: Arc<CardRegistry>) -> Self {
        Self {
            registry,
            config: GameConfig::default(),
            seats: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a player. Seating order is randomised at build time.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, color: PlayerColor) -> Self {
        self.seats.push((name.into(), color));
        self
    }

    /// Validate, shuffle seats and decks, and deal starting cards.
    pub fn build(self) -> Result<Game, GameError> {
        self.config.validate()?;
        if !(1..=PlayerColor::ALL.len()).contains(&self.seats.len()) {
            return Err(ConfigError::PlayerCount(self.seats.len()).into());
        }
        for (i, (_, color)) in self.seats.iter().enumerate() {
            if self.seats[..i].iter().any(|(_, other)| other == color) {
                return Err(ConfigError::DuplicateColor(*color).into());
            }
        }

        let seed = self.config.seed;
        let mut seats = self.seats;
        GameRng::new(seed).for_context("player-order").shuffle(&mut seats);

        let mut table = Table::new(self.config, self.registry);
        let corporations_dealt = table.config().starting_corporations;
        let projects_dealt = table.config().starting_project_cards;

        let mut players = Vec::with_capacity(seats.len());
        for (name, color) in seats {
            let mut player = Player::new(name, color, table.config());
            let corporations = table.corporation_deck_mut().draw(corporations_dealt);
            let projects = table.project_deck_mut().draw(projects_dealt);
            player.deal_starting_cards(corporations, projects);
            players.push(player);
        }

        info!(players = players.len(), seed, "game created");
        Ok(Game::new(table, PlayerMap::from_vec(players)))
    }
}
