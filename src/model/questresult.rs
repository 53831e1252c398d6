use serde::Serialize;

use crate::math::curve::curve::Curve;
use crate::math::curve::sampledcurve::SampledCurve;
use crate::quest::lane::Lane;
use crate::quest::scenario::ScenarioInput;
use crate::solver::completion::Completion;

use super::accumulationcurve::{
    AccumulationCurve,
    PointBreakdown
};
use super::breakdown::{
    CategoryBreakdown,
    TimeSaved
};

/// Samples per chart curve.
pub const CURVE_SAMPLES: usize = 1000;

/// Chart span used when neither the scenario nor the baseline completes.
pub const FALLBACK_HORIZON_MINUTES: f64 = 30.0;


/// Last minute worth drawing: one past the later of two completions.
pub fn chart_horizon(completion: Completion, baseline: Completion) -> f64 {
    let latest = [completion.minutes(), baseline.minutes()]
        .into_iter()
        .flatten()
        .reduce(f64::max);
    latest.unwrap_or(FALLBACK_HORIZON_MINUTES) + 1.0
}


/// Everything one calculation produces.
#[derive(Debug, Clone, Serialize)]
pub struct QuestResult {
    quest: String,
    lane: Lane,
    threshold: f64,
    scenario: ScenarioInput,
    completion: Completion,
    baseline: Completion,
    time_saved: TimeSaved,
    points_at_completion: Option<PointBreakdown>,
    breakdown: CategoryBreakdown,
    #[serde(skip)]
    curve: AccumulationCurve
}

impl QuestResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(quest: String,
               lane: Lane,
               threshold: f64,
               scenario: ScenarioInput,
               completion: Completion,
               baseline: Completion,
               breakdown: CategoryBreakdown,
               curve: AccumulationCurve) -> QuestResult {
        let points_at_completion = completion.minutes().map(|minutes| curve.breakdown_at(minutes));
        QuestResult {
            quest,
            lane,
            threshold,
            scenario,
            completion,
            baseline,
            time_saved: TimeSaved::between(completion, baseline),
            points_at_completion,
            breakdown,
            curve
        }
    }

    pub fn quest(&self) -> &str {
        &self.quest
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn scenario(&self) -> &ScenarioInput {
        &self.scenario
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn baseline(&self) -> Completion {
        self.baseline
    }

    /// Versus passive generation alone.
    pub fn time_saved(&self) -> TimeSaved {
        self.time_saved
    }

    pub fn points_at_completion(&self) -> Option<&PointBreakdown> {
        self.points_at_completion.as_ref()
    }

    pub fn breakdown(&self) -> &CategoryBreakdown {
        &self.breakdown
    }

    pub fn curve(&self) -> &AccumulationCurve {
        &self.curve
    }

    pub fn horizon(&self) -> f64 {
        chart_horizon(self.completion, self.baseline)
    }

    /// Raw points from 0 to `horizon()`.
    pub fn sample_curve(&self) -> SampledCurve {
        self.curve.sample(0.0, self.horizon(), CURVE_SAMPLES)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_covers_the_later_completion() {
        assert_eq!(chart_horizon(Completion::at_minutes(11.0), Completion::at_minutes(13.5)), 14.5);
        assert_eq!(chart_horizon(Completion::Never, Completion::at_minutes(13.5)), 14.5);
        assert_eq!(chart_horizon(Completion::Never, Completion::Never), FALLBACK_HORIZON_MINUTES + 1.0);
    }
}
