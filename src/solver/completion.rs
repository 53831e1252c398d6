use std::fmt;

use serde::Serialize;

use crate::time::gameclock::GameTime;

/// When a quest reaches its threshold. `Never` is a regular outcome, callers
/// branch on it before formatting a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "time", rename_all = "lowercase")]
pub enum Completion {
    At(GameTime),
    Never
}

impl Completion {
    pub fn at_minutes(minutes: f64) -> Completion {
        Completion::At(GameTime::from_minutes(minutes))
    }

    pub fn time(&self) -> Option<GameTime> {
        match self {
            Completion::At(time) => Some(*time),
            Completion::Never => None
        }
    }

    pub fn minutes(&self) -> Option<f64> {
        self.time().map(|time| time.minutes())
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Completion::Never)
    }

    /// Legend form: `12m1s` or `never`.
    pub fn label(&self) -> String {
        match self {
            Completion::At(time) => time.label(),
            Completion::Never => "never".to_owned()
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::At(time) => write!(f, "{}", time),
            Completion::Never => write!(f, "never")
        }
    }
}
