//! The player board: resources and production tracks.

use serde::{Deserialize, Serialize};

use crate::effects::Production;

/// Spendable resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Megacredits,
    Heat,
    Plants,
}

/// Resource stock and production.
///
/// Removing more than is available empties the stock; it never goes negative
/// and never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub megacredits: u32,
    pub heat: u32,
    pub plants: u32,
    pub production_megacredits: u32,
    pub production_heat: u32,
    pub production_plants: u32,
    pub production_cards: u32,
    pub production_steel: u32,
    pub production_titanium: u32,
}

impl PlayerBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stock of `resource`.
    #[must_use]
    pub fn amount(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Megacredits => self.megacredits,
            Resource::Heat => self.heat,
            Resource::Plants => self.plants,
        }
    }

    pub fn add_megacredits(&mut self, amount: u32) {
        self.megacredits = self.megacredits.saturating_add(amount);
    }

    pub fn add_heat(&mut self, amount: u32) {
        self.heat = self.heat.saturating_add(amount);
    }

    pub fn add_plants(&mut self, amount: u32) {
        self.plants = self.plants.saturating_add(amount);
    }

    pub fn remove_megacredits(&mut self, amount: u32) {
        self.megacredits = self.megacredits.saturating_sub(amount);
    }

    pub fn remove_heat(&mut self, amount: u32) {
        self.heat = self.heat.saturating_sub(amount);
    }

    pub fn remove_plants(&mut self, amount: u32) {
        self.plants = self.plants.saturating_sub(amount);
    }

    #[must_use]
    pub fn production(&self, production: Production) -> u32 {
        match production {
            Production::Megacredits => self.production_megacredits,
            Production::Heat => self.production_heat,
            Production::Plants => self.production_plants,
            Production::Cards => self.production_cards,
            Production::Steel => self.production_steel,
            Production::Titanium => self.production_titanium,
        }
    }

    pub fn increase_production(&mut self, production: Production, amount: u32) {
        let track = match production {
            Production::Megacredits => &mut self.production_megacredits,
            Production::Heat => &mut self.production_heat,
            Production::Plants => &mut self.production_plants,
            Production::Cards => &mut self.production_cards,
            Production::Steel => &mut self.production_steel,
            Production::Titanium => &mut self.production_titanium,
        };
        *track = track.saturating_add(amount);
    }

    /// Megacredits saved on a card with a Building tag.
    #[must_use]
    pub fn building_tag_discount(&self) -> u32 {
        2 * self.production_steel
    }

    /// Megacredits saved on a card with a Space tag.
    #[must_use]
    pub fn space_tag_discount(&self) -> u32 {
        3 * self.production_titanium
    }
}
