//! Game configuration.
//!
//! Rule constants that a house-rule variant might tweak live here rather than
//! in the code that applies them. Loading the configuration from disk is the
//! host's job; `GameConfig` only needs to deserialize.
//!
//! ```
//! use ares_rules::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_seed(7)
//!     .with_banned_project("Comet");
//! assert_eq!(config.hand_limit, 10);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for every random decision in the game.
    pub seed: u64,

    // === Setup ===
    pub starting_terraforming_rating: u32,
    /// Corporations offered to each player.
    pub starting_corporations: usize,
    /// Project cards dealt to each player.
    pub starting_project_cards: usize,
    /// Corporation names removed from the deck before dealing.
    pub banned_corporations: Vec<String>,
    /// Project names removed from the deck before dealing.
    pub banned_projects: Vec<String>,

    // === Hand ===
    pub hand_limit: usize,
    /// Megacredits received per sold project card.
    pub card_sell_price: u32,

    // === Standard actions ===
    pub greenery_plant_cost: u32,
    pub temperature_heat_cost: u32,
    pub standard_greenery_cost: u32,
    pub standard_temperature_cost: u32,

    // === Phase bonuses ===
    /// Discount on a green card for the holder of the Development card.
    pub development_discount: u32,
    /// Extra megacredits for the holder of the Production card.
    pub production_bonus_megacredits: u32,
    pub research_draw: usize,
    pub research_keep: usize,
    pub research_bonus_draw: usize,
    pub research_bonus_keep: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_terraforming_rating: 5,
            starting_corporations: 2,
            starting_project_cards: 8,
            banned_corporations: Vec::new(),
            banned_projects: Vec::new(),
            hand_limit: 10,
            card_sell_price: 3,
            greenery_plant_cost: 8,
            temperature_heat_cost: 8,
            standard_greenery_cost: 23,
            standard_temperature_cost: 14,
            development_discount: 3,
            production_bonus_megacredits: 4,
            research_draw: 2,
            research_keep: 1,
            research_bonus_draw: 5,
            research_bonus_keep: 2,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    #[must_use]
    pub fn with_starting_project_cards(mut self, count: usize) -> Self {
        self.starting_project_cards = count;
        self
    }

    #[must_use]
    pub fn with_banned_corporation(mut self, name: impl Into<String>) -> Self {
        self.banned_corporations.push(name.into());
        self
    }

    #[must_use]
    pub fn with_banned_project(mut self, name: impl Into<String>) -> Self {
        self.banned_projects.push(name.into());
        self
    }

    /// Check internal consistency without touching any game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_corporations == 0 {
            return Err(ConfigError::Invalid("at least one corporation must be offered"));
        }
        if self.research_keep > self.research_draw
            || self.research_bonus_keep > self.research_bonus_draw
        {
            return Err(ConfigError::Invalid("cannot keep more research cards than drawn"));
        }
        if self.research_keep == 0 || self.research_bonus_keep == 0 {
            return Err(ConfigError::Invalid("research must keep at least one card"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_seed(9)
            .with_hand_limit(7)
            .with_banned_corporation("Helion")
            .with_banned_project("Comet");

        assert_eq!(config.seed, 9);
        assert_eq!(config.hand_limit, 7);
        assert_eq!(config.banned_corporations, vec!["Helion".to_string()]);
        assert_eq!(config.banned_projects, vec!["Comet".to_string()]);
    }

    #[test]
    fn test_invalid_research() {
        let config = GameConfig {
            research_keep: 3,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"seed": 11, "banned_projects": ["Comet"]}"#).unwrap();
        assert_eq!(config.seed, 11);
        assert_eq!(config.starting_project_cards, 8);
        assert_eq!(config.banned_projects, vec!["Comet".to_string()]);
    }
}
