use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Play role a player occupies on the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Position {
    Defender,
    Midfielder,
    Forward,
}

pub const POSITIONS: [Position; 3] = [Position::Defender, Position::Midfielder, Position::Forward];

/// Kind of skill a player can be rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SkillName {
    Strength,
    Defense,
    Attack,
    Speed,
    Stamina,
}

pub const SKILL_NAMES: [SkillName; 5] = [
    SkillName::Strength,
    SkillName::Defense,
    SkillName::Attack,
    SkillName::Speed,
    SkillName::Stamina,
];

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl SkillName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillName::Strength => "Strength",
            SkillName::Defense => "Defense",
            SkillName::Attack => "Attack",
            SkillName::Speed => "Speed",
            SkillName::Stamina => "Stamina",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Input is matched case-insensitively against the symbolic names.
impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POSITIONS
            .iter()
            .copied()
            .find(|position| position.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::InvalidPosition(s.to_string()))
    }
}

impl FromStr for SkillName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SKILL_NAMES
            .iter()
            .copied()
            .find(|skill| skill.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::InvalidSkill(s.to_string()))
    }
}

impl TryFrom<String> for Position {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for SkillName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
