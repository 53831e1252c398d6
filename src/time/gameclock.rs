use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{
    Deserialize,
    Serialize
};

use crate::math::round::minutes_to_seconds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGameTimeError {
    MissingSeparator(String),
    SecondsOutOfRange(u32),
    Parse(ParseIntError)
}

impl fmt::Display for ParseGameTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGameTimeError::MissingSeparator(text) => {
                write!(f, "expected 'm:ss', got '{}'", text)
            },
            ParseGameTimeError::SecondsOutOfRange(seconds) => {
                write!(f, "seconds must be below 60, got {}", seconds)
            },
            ParseGameTimeError::Parse(error) => {
                write!(f, "{}", error)
            }
        }
    }
}

impl std::error::Error for ParseGameTimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseGameTimeError::Parse(e) => Some(e),
            _ => None,
        }
    }
}


/// In-game time held as fractional minutes. Displayed rounded to the nearest
/// second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GameTime {
    minutes: f64
}

impl GameTime {
    pub fn from_minutes(minutes: f64) -> GameTime {
        GameTime { minutes }
    }

    pub fn from_clock(minutes: u32, seconds: u32) -> GameTime {
        GameTime::from_minutes(minutes as f64 + seconds as f64 / 60.0)
    }

    pub fn parse(text: &str) -> Result<GameTime, ParseGameTimeError> {
        let trimmed = text.trim();
        let (minutes_str, seconds_str) = trimmed
            .split_once(':')
            .ok_or_else(|| ParseGameTimeError::MissingSeparator(trimmed.to_owned()))?;
        let minutes = minutes_str.parse::<u32>().map_err(ParseGameTimeError::Parse)?;
        let seconds = seconds_str.parse::<u32>().map_err(ParseGameTimeError::Parse)?;
        if seconds >= 60 {
            return Err(ParseGameTimeError::SecondsOutOfRange(seconds));
        }
        Ok(GameTime::from_clock(minutes, seconds))
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn to_duration(&self) -> TimeDelta {
        TimeDelta::try_seconds(minutes_to_seconds(self.minutes)).unwrap_or(TimeDelta::MAX)
    }

    /// Compact `XmYs` form used in chart legends.
    pub fn label(&self) -> String {
        let (sign, minutes, seconds) = self.clock_parts();
        format!("{}{}m{}s", sign, minutes, seconds)
    }

    fn clock_parts(&self) -> (&'static str, i64, i64) {
        let duration = self.to_duration();
        let sign = if duration < TimeDelta::zero() { "-" } else { "" };
        let total = duration.num_seconds().abs();
        (sign, total / 60, total % 60)
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (sign, minutes, seconds) = self.clock_parts();
        write!(f, "{}{}:{:02}", sign, minutes, seconds)
    }
}

impl FromStr for GameTime {
    type Err = ParseGameTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameTime::parse(s)
    }
}
