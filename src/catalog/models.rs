use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "agi")]
    Agility,
    #[serde(rename = "int")]
    Intelligence,
}

impl Attribute {
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Agility => "Agility",
            Attribute::Intelligence => "Intelligence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackType {
    Melee,
    Ranged,
}

impl AttackType {
    pub fn label(&self) -> &'static str {
        match self {
            AttackType::Melee => "Melee",
            AttackType::Ranged => "Ranged",
        }
    }
}

/// Role tag exactly as authored in the catalog. Tags are open-ended; the
/// Spanish ones older catalogs used also carry an English label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

const ROLE_LABELS: &[(&str, &str)] = &[
    ("Apoyo", "Support"),
    ("Incapacitador", "Disabler"),
    ("Iniciador", "Initiator"),
    ("Resistente", "Durable"),
    ("Evasivo", "Escape"),
    ("Presionador", "Pusher"),
];

impl Role {
    pub fn new(tag: impl Into<String>) -> Self {
        Role(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    /// English label: the translation for a known Spanish tag, the tag itself otherwise.
    pub fn label(&self) -> &str {
        ROLE_LABELS
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(&self.0))
            .map(|(_, label)| *label)
            .unwrap_or(self.0.as_str())
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        Role::new(tag)
    }
}

/// Lane/role slot, serialized as its number (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Carry = 1,
    Mid = 2,
    Offlane = 3,
    SoftSupport = 4,
    HardSupport = 5,
}

impl Position {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::Carry => "Carry",
            Position::Mid => "Mid",
            Position::Offlane => "Offlane",
            Position::SoftSupport => "Soft Support",
            Position::HardSupport => "Hard Support",
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Position::Carry),
            2 => Ok(Position::Mid),
            3 => Ok(Position::Offlane),
            4 => Ok(Position::SoftSupport),
            5 => Ok(Position::HardSupport),
            other => Err(format!("position must be between 1 and 5, got {}", other)),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.number()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Internal name, e.g. `npc_dota_hero_axe`. Identity of the hero.
    pub name: String,
    pub localized_name: String,
    pub primary_attr: Attribute,
    pub attack_type: AttackType,
    pub roles: Vec<Role>,
    pub position: Position,
    pub img: String,
    pub icon: String,
}

impl Hero {
    pub fn is_same(&self, other: &Hero) -> bool {
        self.name == other.name
    }

    /// `npc_dota_hero_axe` -> `axe`.
    pub fn short_name(&self) -> &str {
        self.name
            .strip_prefix(HERO_NAME_PREFIX)
            .unwrap_or(&self.name)
    }

    pub fn roles_label(&self) -> String {
        self.roles
            .iter()
            .map(|r| r.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq for Hero {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Hero {}

pub const HERO_NAME_PREFIX: &str = "npc_dota_hero_";
