// Player module - roster entries and the shapes they take on the wire

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{Position, SkillName};

pub type PlayerId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: SkillName,
    pub level: i32,
}

impl Skill {
    pub fn new(name: SkillName, level: i32) -> Self {
        Self { name, level }
    }
}

/// A roster entry. Skills are unordered and may repeat a name; only the
/// first entry for a given name counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub skills: Vec<Skill>,
}

impl Player {
    /// Create a player with a freshly generated identity
    pub fn new(name: impl Into<String>, position: Position, skills: Vec<Skill>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            skills,
        }
    }

    /// Level of the first skill entry with the given name
    pub fn skill_level(&self, skill: SkillName) -> Option<i32> {
        self.skills
            .iter()
            .find(|entry| entry.name == skill)
            .map(|entry| entry.level)
    }
}

/// Request body for create and update. An `id` sent by the client is
/// accepted but never trusted: creation mints a new one and updates keep
/// the stored one.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPayload {
    #[serde(default)]
    pub id: Option<PlayerId>,
    #[serde(default)]
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl PlayerPayload {
    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            position: self.position,
            skills: self.skills,
        }
    }
}

/// Path segment addressing a player either by identity or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerIdentifier {
    Id(PlayerId),
    Name(String),
}

impl PlayerIdentifier {
    /// Anything that parses as a UUID is an identity; everything else is a name.
    pub fn parse(raw: &str) -> Self {
        match Uuid::parse_str(raw) {
            Ok(id) => PlayerIdentifier::Id(id),
            Err(_) => PlayerIdentifier::Name(raw.to_string()),
        }
    }
}

impl std::fmt::Display for PlayerIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerIdentifier::Id(id) => write!(f, "{}", id),
            PlayerIdentifier::Name(name) => f.write_str(name),
        }
    }
}
