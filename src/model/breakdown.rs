use std::fmt;

use serde::Serialize;

use crate::quest::category::Category;
use crate::solver::completion::Completion;
use crate::time::gameclock::GameTime;

/// How much earlier the quest completes thanks to something.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum TimeSaved {
    Minutes(f64),
    /// Without it the quest never completes.
    Indispensable
}

impl TimeSaved {
    /// `actual` against the completion without the contribution in question.
    /// Nothing is saved when the actual quest never completes either.
    pub fn between(actual: Completion, counterfactual: Completion) -> TimeSaved {
        match (actual.minutes(), counterfactual.minutes()) {
            (Some(actual), Some(counterfactual)) => TimeSaved::Minutes(counterfactual - actual),
            (Some(_), None) => TimeSaved::Indispensable,
            (None, _) => TimeSaved::Minutes(0.0)
        }
    }

    pub fn minutes(&self) -> Option<f64> {
        match self {
            TimeSaved::Minutes(minutes) => Some(*minutes),
            TimeSaved::Indispensable => None
        }
    }
}

impl fmt::Display for TimeSaved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSaved::Minutes(minutes) => write!(f, "{}", GameTime::from_minutes(*minutes)),
            TimeSaved::Indispensable => write!(f, "required to finish")
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryImpact {
    category: Category,
    counterfactual: Completion,
    time_saved: TimeSaved
}

impl CategoryImpact {
    pub fn new(category: Category, actual: Completion, counterfactual: Completion) -> CategoryImpact {
        CategoryImpact {
            category,
            counterfactual,
            time_saved: TimeSaved::between(actual, counterfactual)
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Completion with this category's inputs set to zero.
    pub fn counterfactual(&self) -> Completion {
        self.counterfactual
    }

    pub fn time_saved(&self) -> TimeSaved {
        self.time_saved
    }
}


/// Time saved per input category, each measured with every other input held
/// constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    actual: Completion,
    impacts: Vec<CategoryImpact>,
    without_all: Completion
}

impl CategoryBreakdown {
    pub fn new(actual: Completion, impacts: Vec<CategoryImpact>, without_all: Completion) -> CategoryBreakdown {
        CategoryBreakdown { actual, impacts, without_all }
    }

    pub fn actual(&self) -> Completion {
        self.actual
    }

    pub fn impacts(&self) -> &[CategoryImpact] {
        &self.impacts
    }

    pub fn impact(&self, category: Category) -> Option<&CategoryImpact> {
        self.impacts.iter().find(|impact| impact.category == category)
    }

    /// Completion with every category removed at once, i.e. passive only.
    pub fn without_all(&self) -> Completion {
        self.without_all
    }

    /// Time saved by all categories together.
    pub fn combined(&self) -> TimeSaved {
        TimeSaved::between(self.actual, self.without_all)
    }
}
