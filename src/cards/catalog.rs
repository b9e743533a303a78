//! A playable card set.
//!
//! The engine does not need these cards; any [`CardRegistry`] works. This set
//! covers every condition and effect verb so a full game can be played out
//! end to end.
//!
//! Project IDs start at 1, corporation IDs at 101.

use super::definition::{CardId, CorporationCard, ProjectCard, Tag};
use super::points::Points;
use super::registry::CardRegistry;
use crate::core::Phase;
use crate::effects::{CardAction, Condition, Effect, Production};
use crate::globals::{ParameterColor, ParameterKind};

// === Blue projects ===
pub const STEELWORKS: CardId = CardId::new(1);
pub const COMMUNITY_GARDENS: CardId = CardId::new(2);
pub const WATER_IMPORT_FROM_EUROPA: CardId = CardId::new(3);
pub const BIRDS: CardId = CardId::new(4);
pub const TARDIGRADES: CardId = CardId::new(5);
pub const AQUIFER_PUMPING: CardId = CardId::new(6);

// === Green projects ===
pub const LICHEN: CardId = CardId::new(10);
pub const DEEP_WELL_HEATING: CardId = CardId::new(11);
pub const MINE: CardId = CardId::new(12);
pub const TITANIUM_MINE: CardId = CardId::new(13);
pub const DEVELOPMENT_CENTER: CardId = CardId::new(14);
pub const TREES: CardId = CardId::new(15);
pub const GEOTHERMAL_POWER: CardId = CardId::new(16);
pub const ACQUIRED_COMPANY: CardId = CardId::new(17);
pub const FARMING: CardId = CardId::new(18);
pub const ARCTIC_ALGAE: CardId = CardId::new(19);

// === Red projects ===
pub const COMET: CardId = CardId::new(20);
pub const ICE_ASTEROID: CardId = CardId::new(21);
pub const IMPORTED_NITROGEN: CardId = CardId::new(22);
pub const RELEASE_OF_INERT_GASES: CardId = CardId::new(23);
pub const BIG_ASTEROID: CardId = CardId::new(24);
pub const LAKE_MARINERIS: CardId = CardId::new(25);
pub const BUSINESS_CONTACTS: CardId = CardId::new(26);
pub const INVENTION_CONTEST: CardId = CardId::new(27);

// === Corporations ===
pub const ECOLINE: CardId = CardId::new(101);
pub const HELION: CardId = CardId::new(102);
pub const MINING_GUILD: CardId = CardId::new(103);
pub const CREDICOR: CardId = CardId::new(104);
pub const SATURN_SYSTEMS: CardId = CardId::new(105);
pub const TERACTOR: CardId = CardId::new(106);
pub const ARKLIGHT: CardId = CardId::new(107);
pub const THORGATE: CardId = CardId::new(108);

fn at_least(parameter: ParameterKind, color: ParameterColor) -> Condition {
    Condition::ParameterAtLeast { parameter, color }
}

/// Every project card of the set.
#[must_use]
pub fn project_cards() -> Vec<ProjectCard> {
    use Effect::RaiseParameter;
    use ParameterKind::{Oceans, Oxygen, Temperature};

    vec![
        ProjectCard::blue(STEELWORKS, "Steelworks", 15)
            .with_tag(Tag::Building)
            .with_points(Points::Fixed(1))
            .with_action(CardAction::new(
                Condition::MinHeat(6),
                Effect::batch([
                    Effect::SpendHeat(6),
                    Effect::GainMegacredits(2),
                    RaiseParameter(Oxygen),
                ]),
            )),
        ProjectCard::blue(COMMUNITY_GARDENS, "Community Gardens", 20)
            .with_tag(Tag::Plant)
            .with_action(CardAction::always(Effect::batch([
                Effect::GainMegacredits(2),
                Effect::if_phase_card(Phase::Action, Effect::GainPlants(1)),
            ]))),
        ProjectCard::blue(WATER_IMPORT_FROM_EUROPA, "Water Import From Europa", 22)
            .with_tag(Tag::Space)
            .with_tag(Tag::Jovian)
            .with_points(Points::Fixed(1))
            .with_action(CardAction::new(
                Condition::MinMegacredits(12),
                Effect::batch([Effect::SpendMegacredits(12), RaiseParameter(Oceans)]),
            )),
        ProjectCard::blue(BIRDS, "Birds", 15)
            .with_tag(Tag::Animal)
            .with_requirement(at_least(Oxygen, ParameterColor::Yellow))
            .with_points(Points::PerResource {
                resources_per_point: 1,
            })
            .with_action(CardAction::always(Effect::AddResourcesToCard(1))),
        ProjectCard::blue(TARDIGRADES, "Tardigrades", 6)
            .with_tag(Tag::Microbe)
            .with_points(Points::PerResource {
                resources_per_point: 3,
            })
            .with_action(CardAction::always(Effect::AddResourcesToCard(1))),
        ProjectCard::blue(AQUIFER_PUMPING, "Aquifer Pumping", 14)
            .with_tag(Tag::Building)
            .with_action(CardAction::new(
                Condition::MinMegacredits(10),
                Effect::batch([Effect::SpendMegacredits(10), RaiseParameter(Oceans)]),
            )),
        ProjectCard::green(LICHEN, "Lichen", 7)
            .with_tag(Tag::Plant)
            .with_requirement(at_least(Temperature, ParameterColor::Red))
            .with_effect(Effect::production(Production::Plants, 1)),
        ProjectCard::green(DEEP_WELL_HEATING, "Deep Well Heating", 13)
            .with_tag(Tag::Power)
            .with_tag(Tag::Building)
            .with_effect(Effect::batch([
                Effect::production(Production::Heat, 1),
                RaiseParameter(Temperature),
            ])),
        ProjectCard::green(MINE, "Mine", 13)
            .with_tag(Tag::Building)
            .with_effect(Effect::production(Production::Steel, 1)),
        ProjectCard::green(TITANIUM_MINE, "Titanium Mine", 8)
            .with_tag(Tag::Building)
            .with_effect(Effect::production(Production::Titanium, 1)),
        ProjectCard::green(DEVELOPMENT_CENTER, "Development Center", 7)
            .with_tag(Tag::Science)
            .with_tag(Tag::Building)
            .with_effect(Effect::production(Production::Cards, 1)),
        ProjectCard::green(TREES, "Trees", 10)
            .with_tag(Tag::Plant)
            .with_requirement(at_least(Temperature, ParameterColor::Yellow))
            .with_points(Points::Fixed(1))
            .with_effect(Effect::production(Production::Plants, 2)),
        ProjectCard::green(GEOTHERMAL_POWER, "Geothermal Power", 8)
            .with_tag(Tag::Power)
            .with_tag(Tag::Building)
            .with_effect(Effect::production(Production::Heat, 2)),
        ProjectCard::green(ACQUIRED_COMPANY, "Acquired Company", 11)
            .with_tag(Tag::Earth)
            .with_effect(Effect::production(Production::Megacredits, 3)),
        ProjectCard::green(FARMING, "Farming", 16)
            .with_tag(Tag::Plant)
            .with_requirement(at_least(Temperature, ParameterColor::White))
            .with_points(Points::Fixed(2))
            .with_effect(Effect::batch([
                Effect::production(Production::Plants, 2),
                Effect::GainPlants(2),
            ])),
        ProjectCard::green(ARCTIC_ALGAE, "Arctic Algae", 12)
            .with_tag(Tag::Plant)
            .with_requirement(Condition::ParameterAtMost {
                parameter: Temperature,
                color: ParameterColor::Red,
            })
            .with_effect(Effect::batch([
                Effect::production(Production::Plants, 1),
                Effect::GainPlants(1),
            ])),
        ProjectCard::red(COMET, "Comet", 21)
            .with_tag(Tag::Space)
            .with_tag(Tag::Event)
            .with_effect(Effect::batch([
                RaiseParameter(Temperature),
                RaiseParameter(Oceans),
            ])),
        ProjectCard::red(ICE_ASTEROID, "Ice Asteroid", 17)
            .with_tag(Tag::Space)
            .with_tag(Tag::Event)
            .with_effect(Effect::batch([RaiseParameter(Oceans), RaiseParameter(Oceans)])),
        ProjectCard::red(IMPORTED_NITROGEN, "Imported Nitrogen", 18)
            .with_tag(Tag::Space)
            .with_tag(Tag::Event)
            .with_effect(Effect::batch([
                Effect::GainPlants(4),
                Effect::GainTerraformingRating(1),
            ])),
        ProjectCard::red(RELEASE_OF_INERT_GASES, "Release of Inert Gases", 14)
            .with_tag(Tag::Event)
            .with_effect(Effect::GainTerraformingRating(2)),
        ProjectCard::red(BIG_ASTEROID, "Big Asteroid", 24)
            .with_tag(Tag::Space)
            .with_tag(Tag::Event)
            .with_effect(Effect::batch([
                RaiseParameter(Temperature),
                RaiseParameter(Temperature),
            ])),
        ProjectCard::red(LAKE_MARINERIS, "Lake Marineris", 18)
            .with_tag(Tag::Event)
            .with_requirement(at_least(Temperature, ParameterColor::Yellow))
            .with_points(Points::Fixed(2))
            .with_effect(Effect::batch([RaiseParameter(Oceans), RaiseParameter(Oceans)])),
        ProjectCard::red(BUSINESS_CONTACTS, "Business Contacts", 5)
            .with_tag(Tag::Earth)
            .with_tag(Tag::Event)
            .with_effect(Effect::DrawCards(2)),
        ProjectCard::red(INVENTION_CONTEST, "Invention Contest", 2)
            .with_tag(Tag::Science)
            .with_tag(Tag::Event)
            .with_requirement(Condition::MinTags {
                tag: Tag::Science,
                count: 1,
            })
            .with_effect(Effect::DrawCards(1)),
    ]
}

/// Every corporation of the set.
#[must_use]
pub fn corporations() -> Vec<CorporationCard> {
    vec![
        CorporationCard::new(
            ECOLINE,
            "Ecoline",
            Effect::batch([
                Effect::GainMegacredits(27),
                Effect::production(Production::Plants, 2),
                Effect::SetGreeneryPlantCost(7),
            ]),
        )
        .with_tag(Tag::Plant),
        CorporationCard::new(
            HELION,
            "Helion",
            Effect::batch([
                Effect::GainMegacredits(28),
                Effect::production(Production::Heat, 3),
            ]),
        )
        .with_tag(Tag::Space)
        .with_action(CardAction::new(
            Condition::MinHeat(3),
            Effect::batch([Effect::SpendHeat(3), Effect::GainMegacredits(3)]),
        )),
        CorporationCard::new(
            MINING_GUILD,
            "Mining Guild",
            Effect::batch([
                Effect::GainMegacredits(30),
                Effect::production(Production::Steel, 1),
            ]),
        )
        .with_tag(Tag::Building)
        .with_tag(Tag::Building),
        CorporationCard::new(CREDICOR, "Credicor", Effect::GainMegacredits(48)),
        CorporationCard::new(
            SATURN_SYSTEMS,
            "Saturn Systems",
            Effect::batch([
                Effect::GainMegacredits(33),
                Effect::production(Production::Titanium, 1),
            ]),
        )
        .with_tag(Tag::Jovian),
        CorporationCard::new(TERACTOR, "Teractor", Effect::GainMegacredits(60)).with_tag(Tag::Earth),
        CorporationCard::new(ARKLIGHT, "Arklight", Effect::GainMegacredits(45))
            .with_tag(Tag::Animal)
            .with_action(CardAction::always(Effect::AddResourcesToCard(1))),
        CorporationCard::new(
            THORGATE,
            "Thorgate",
            Effect::batch([
                Effect::GainMegacredits(45),
                Effect::production(Production::Heat, 1),
            ]),
        )
        .with_tag(Tag::Power),
    ]
}

/// A registry holding the whole set.
#[must_use]
pub fn standard_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for card in project_cards() {
        registry.register(card);
    }
    for card in corporations() {
        registry.register(card);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardColor;

    #[test]
    fn test_registry_contents() {
        let registry = standard_registry();
        assert_eq!(registry.project_ids().len(), project_cards().len());
        assert_eq!(registry.corporation_ids().len(), corporations().len());
        assert!(registry.corporation_ids().iter().all(|id| id.raw() > 100));
    }

    #[test]
    fn test_blue_cards_have_actions() {
        for card in project_cards() {
            assert_eq!(
                card.color == CardColor::Blue,
                card.action.is_some(),
                "{} action mismatch",
                card.name
            );
        }
    }

    #[test]
    fn test_steelworks() {
        let registry = standard_registry();
        let steelworks = registry.project(STEELWORKS).unwrap();
        assert_eq!(steelworks.cost, 15);
        assert_eq!(steelworks.points, Points::Fixed(1));
        assert!(steelworks.has_tag(Tag::Building));
        assert_eq!(
            steelworks.action.as_ref().map(|a| &a.condition),
            Some(&Condition::MinHeat(6))
        );
    }
}
