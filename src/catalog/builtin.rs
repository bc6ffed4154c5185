use super::models::AttackType::{Melee, Ranged};
use super::models::Attribute::{Agility, Intelligence, Strength};
use super::models::{AttackType, Attribute, Hero, Position, Role, HERO_NAME_PREFIX};
use super::Catalog;
use crate::analysis::matchup::MatchupTable;
use crate::error::AppError;

pub const IMAGE_CDN: &str = "https://cdn.cloudflare.steamstatic.com/apps/dota2/images/dota_react/heroes";

/// (short name, display name, attribute, attack type, role tags, position, image asset)
type HeroRow = (
    &'static str,
    &'static str,
    Attribute,
    AttackType,
    &'static [&'static str],
    Position,
    &'static str,
);

const HEROES: &[HeroRow] = &[
    // Position 1
    ("antimage", "Anti-Mage", Agility, Melee, &["Carry", "Escape", "Nuker"], Position::Carry, "antimage"),
    ("juggernaut", "Juggernaut", Agility, Melee, &["Carry", "Pusher"], Position::Carry, "juggernaut"),
    ("bloodseeker", "Bloodseeker", Agility, Melee, &["Carry", "Iniciador", "Incapacitador"], Position::Carry, "bloodseeker"),
    ("drow_ranger", "Drow Ranger", Agility, Melee, &["Carry", "Incapacitador", "Presionador"], Position::Carry, "drow_ranger"),
    ("chaos_knight", "Chaos Knight", Agility, Melee, &["Carry", "Iniciador", "Presionador"], Position::Carry, "chaos_knight"),
    ("clinkz", "Clinkz", Agility, Melee, &["Carry", "Evasivo", "Presionador"], Position::Carry, "clinkz"),
    // Position 2
    ("invoker", "Invoker", Intelligence, Ranged, &["Carry", "Nuker", "Disabler"], Position::Mid, "invoker"),
    ("ember_spirit", "Ember Spirit", Intelligence, Ranged, &["Carry", "Nuker", "Evasivo"], Position::Mid, "ember_spirit"),
    ("arc_warden", "Arc Warden", Intelligence, Ranged, &["Carry", "Nuker", "Evasivo"], Position::Mid, "arc_warden"),
    ("puck", "Puck", Intelligence, Ranged, &["Initiator", "Disabler", "Escape"], Position::Mid, "puck"),
    ("alchemist", "Alchemist", Intelligence, Melee, &["Carry", "Nuker", "Iniciador"], Position::Mid, "alchemist"),
    ("broodmother", "Broodmother", Intelligence, Melee, &["Carry", "Nuker", "Presionador"], Position::Mid, "broodmother"),
    ("death_prophet", "Death Prophet", Intelligence, Ranged, &["Incapacitador", "Presionador", "Nuker"], Position::Mid, "death_prophet"),
    // Position 3
    ("abaddon", "Abaddon", Strength, Melee, &["Carry", "Apoyo", "Resistente"], Position::Offlane, "abaddon"),
    ("clockwerk", "Clockwerk", Strength, Melee, &["Incapacitador", "Resistente", "Iniciador"], Position::Offlane, "rattletrap"),
    ("dawnbreaker", "Dawnbreaker", Strength, Melee, &["Carry", "Resistente"], Position::Offlane, "dawnbreaker"),
    ("centaur_warrunner", "Centaur Warrunner", Strength, Melee, &["Carry", "Apoyo", "Resistente"], Position::Offlane, "centaur"),
    ("axe", "Axe", Strength, Melee, &["Initiator", "Durable", "Disabler"], Position::Offlane, "axe"),
    ("tidehunter", "Tidehunter", Strength, Melee, &["Initiator", "Durable", "Disabler"], Position::Offlane, "tidehunter"),
    ("batrider", "Batrider", Strength, Melee, &["Incapacitador", "Evasivo", "Iniciador"], Position::Offlane, "batrider"),
    ("beastmaster", "Beastmaster", Strength, Melee, &["Incapacitador", "Evasivo", "Iniciador"], Position::Offlane, "beastmaster"),
    ("brewmaster", "Brewmaster", Strength, Melee, &["Carry", "Nuker", "Resistente"], Position::Offlane, "brewmaster"),
    ("bristleback", "Bristleback", Strength, Melee, &["Carry", "Nuker", "Resistente"], Position::Offlane, "bristleback"),
    ("doom", "Doom", Strength, Melee, &["Carry", "Nuker", "Resistente"], Position::Offlane, "doom_bringer"),
    ("dragon_knight", "Dragon Knight", Strength, Melee, &["Carry", "Nuker", "Resistente"], Position::Offlane, "dragon_knight"),
    ("earthshaker", "Earthshaker", Strength, Melee, &["Apoyo", "Incapacitador", "Iniciador"], Position::Offlane, "earthshaker"),
    // Position 4
    ("rubick", "Rubick", Intelligence, Ranged, &["Support", "Disabler", "Nuker"], Position::SoftSupport, "rubick"),
    ("earth_spirit", "Earth Spirit", Intelligence, Ranged, &["Nuker", "Incapacitador", "Iniciador"], Position::SoftSupport, "earth_spirit"),
    ("enchantress", "Enchantress", Intelligence, Ranged, &["Presionador", "Apoyo", "Resistente"], Position::SoftSupport, "enchantress"),
    ("enigma", "Enigma", Intelligence, Ranged, &["Presionador", "Iniciador", "Incapacitador"], Position::SoftSupport, "enigma"),
    ("elder_titan", "Elder Titan", Intelligence, Ranged, &["Incapacitador", "Resistente", "Iniciador"], Position::SoftSupport, "elder_titan"),
    ("dark_seer", "Dark Seer", Intelligence, Ranged, &["Incapacitador", "Evasivo", "Iniciador"], Position::SoftSupport, "dark_seer"),
    ("bane", "Bane", Intelligence, Ranged, &["Apoyo", "Nuker", "Resistente"], Position::SoftSupport, "bane"),
    ("bounty_hunter", "Bounty Hunter", Intelligence, Ranged, &["Nuker", "Evasivo"], Position::SoftSupport, "bounty_hunter"),
    ("chen", "Chen", Intelligence, Ranged, &["Apoyo", "Presionador"], Position::SoftSupport, "chen"),
    // Position 5
    ("crystal_maiden", "Crystal Maiden", Intelligence, Ranged, &["Support", "Disabler", "Nuker"], Position::HardSupport, "crystal_maiden"),
    ("disruptor", "Disruptor", Intelligence, Ranged, &["Apoyo", "Disabler", "Nuker"], Position::HardSupport, "disruptor"),
    ("dazzle", "Dazzle", Intelligence, Ranged, &["Apoyo", "Incapacitador", "Nuker"], Position::HardSupport, "dazzle"),
    ("dark_willow", "Dark Willow", Intelligence, Ranged, &["Apoyo", "Incapacitador", "Evasivo"], Position::HardSupport, "dark_willow"),
    ("ancient_apparition", "Ancient Apparition", Intelligence, Ranged, &["Apoyo", "Nuker", "Incapacitador"], Position::HardSupport, "ancient_apparition"),
];

const MATCHUPS: &[(&str, &str, f64)] = &[
    ("Anti-Mage", "Axe", 1.71),
    ("Anti-Mage", "Bane", 3.76),
    ("Anti-Mage", "Bloodseeker", 3.7),
    ("Anti-Mage", "Crystal Maiden", -4.18),
    ("Anti-Mage", "Drow Ranger", -4.5),
    ("Anti-Mage", "Earthshaker", -2.0),
    ("Anti-Mage", "Juggernaut", -3.0),
    ("Anti-Mage", "Puck", 2.2),
    ("Anti-Mage", "Tidehunter", 0.4),
    ("Anti-Mage", "Enigma", -1.0),
    ("Anti-Mage", "Beastmaster", 0.2),
    ("Anti-Mage", "Death Prophet", -0.9),
    ("Anti-Mage", "Dragon Knight", -1.1),
    ("Anti-Mage", "Dazzle", 1.0),
    ("Anti-Mage", "Clockwerk", 0.4),
    ("Anti-Mage", "Dark Seer", -0.6),
    ("Anti-Mage", "Clinkz", 2.2),
    ("Anti-Mage", "Enchantress", 1.1),
    ("Anti-Mage", "Broodmother", 1.3),
    ("Anti-Mage", "Bounty Hunter", -1.0),
    ("Anti-Mage", "Batrider", 0.9),
    ("Anti-Mage", "Chen", 2.2),
    ("Anti-Mage", "Ancient Apparition", 1.6),
    ("Anti-Mage", "Doom", -0.7),
    ("Anti-Mage", "Alchemist", 1.3),
    ("Anti-Mage", "Invoker", 2.0),
    ("Anti-Mage", "Brewmaster", -0.4),
    ("Anti-Mage", "Chaos Knight", -1.4),
    ("Anti-Mage", "Rubick", -0.5),
    ("Anti-Mage", "Disruptor", -0.3),
    ("Anti-Mage", "Centaur Warrunner", 1.8),
    ("Anti-Mage", "Bristleback", -3.0),
    ("Anti-Mage", "Abaddon", -0.7),
    ("Anti-Mage", "Elder Titan", 1.8),
    ("Anti-Mage", "Ember Spirit", 0.9),
    ("Anti-Mage", "Earth Spirit", 1.0),
    ("Anti-Mage", "Arc Warden", 1.7),
    ("Anti-Mage", "Dark Willow", 2.5),
    // Axe
    ("Axe", "Anti-Mage", 6.0),
    ("Axe", "Juggernaut", 5.0),
    ("Axe", "Crystal Maiden", -3.0),
    ("Axe", "Invoker", -4.0),
    // Invoker
    ("Invoker", "Anti-Mage", -4.0),
    ("Invoker", "Axe", 3.0),
    ("Invoker", "Rubick", 2.0),
    ("Invoker", "Crystal Maiden", 4.0),
    // Juggernaut
    ("Juggernaut", "Axe", -3.0),
    ("Juggernaut", "Crystal Maiden", 4.0),
    ("Juggernaut", "Invoker", 2.0),
    ("Juggernaut", "Rubick", 1.0),
    // Rubick
    ("Rubick", "Anti-Mage", -4.0),
    ("Rubick", "Invoker", 2.0),
    ("Rubick", "Crystal Maiden", 3.0),
    ("Rubick", "Axe", -2.0),
    // Crystal Maiden
    ("Crystal Maiden", "Anti-Mage", 5.0),
    ("Crystal Maiden", "Juggernaut", -4.0),
    ("Crystal Maiden", "Axe", 3.0),
    ("Crystal Maiden", "Invoker", -2.0),
];

fn to_hero(row: &HeroRow) -> Hero {
    let (short, localized, attr, attack, roles, position, asset) = *row;
    Hero {
        name: format!("{}{}", HERO_NAME_PREFIX, short),
        localized_name: localized.to_string(),
        primary_attr: attr,
        attack_type: attack,
        roles: roles.iter().map(|tag| Role::new(*tag)).collect(),
        position,
        img: format!("{}/{}.png", IMAGE_CDN, asset),
        icon: format!("{}/icons/{}.png", IMAGE_CDN, asset),
    }
}

pub fn builtin_matchups() -> MatchupTable {
    let mut table = MatchupTable::new();
    for (hero, against, score) in MATCHUPS {
        table.insert(hero, against, *score);
    }
    table
}

/// Catalog compiled into the binary.
pub fn builtin_catalog() -> Result<Catalog, AppError> {
    Catalog::new(HEROES.iter().map(to_hero).collect(), builtin_matchups())
}
