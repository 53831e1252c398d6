use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use super::questerror::QuestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Top,
    Mid,
    Bot
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Mid, Lane::Bot];

    /// Name the built-in config for this lane is registered under.
    pub fn config_name(&self) -> &'static str {
        match self {
            Lane::Top => "top",
            Lane::Mid => "mid",
            Lane::Bot => "bot"
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Lane::Top => "TOP LANE",
            Lane::Mid => "MID LANE",
            Lane::Bot => "BOT LANE"
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config_name())
    }
}

impl FromStr for Lane {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Lane::Top),
            "mid" | "middle" => Ok(Lane::Mid),
            "bot" | "bottom" | "adc" => Ok(Lane::Bot),
            other => Err(QuestError::invalid_input(format!("unknown lane '{}'", other)))
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "ChampionTypeRepr")]
pub enum ChampionType {
    Melee,
    Ranged
}

impl ChampionType {
    pub fn short_code(&self) -> char {
        match self {
            ChampionType::Melee => 'M',
            ChampionType::Ranged => 'R'
        }
    }
}

impl fmt::Display for ChampionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChampionType::Melee => write!(f, "Melee"),
            ChampionType::Ranged => write!(f, "Ranged")
        }
    }
}

impl FromStr for ChampionType {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "melee" | "m" => Ok(ChampionType::Melee),
            "ranged" | "r" => Ok(ChampionType::Ranged),
            _ => match normalized.parse::<u8>() {
                Ok(selector) => ChampionType::try_from(selector),
                Err(_) => Err(QuestError::invalid_input(format!("unknown champion type '{}'", s.trim())))
            }
        }
    }
}

/// Numeric selector as used by radio-button style inputs: 0 is melee, 1 is ranged.
impl TryFrom<u8> for ChampionType {
    type Error = QuestError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(ChampionType::Melee),
            1 => Ok(ChampionType::Ranged),
            other => Err(QuestError::invalid_input(format!("champion type selector {} is out of range", other)))
        }
    }
}

/// Accepted JSON forms: a name as in `FromStr` or the 0/1 selector.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChampionTypeRepr {
    Selector(u8),
    Name(String)
}

impl TryFrom<ChampionTypeRepr> for ChampionType {
    type Error = QuestError;

    fn try_from(repr: ChampionTypeRepr) -> Result<Self, Self::Error> {
        match repr {
            ChampionTypeRepr::Selector(selector) => ChampionType::try_from(selector),
            ChampionTypeRepr::Name(name) => name.parse()
        }
    }
}
