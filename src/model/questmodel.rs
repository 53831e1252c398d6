use std::sync::Arc;

use log::{
    debug,
    warn
};

use crate::math::curve::curve::Curve;
use crate::quest::category::Category;
use crate::quest::questconfig::QuestConfig;
use crate::quest::questerror::QuestError;
use crate::quest::scenario::ScenarioInput;
use crate::solver::completion::Completion;
use crate::solver::completionsolver::{
    ClosedFormSolver,
    CompletionSolver
};

use super::accumulationcurve::{
    AccumulationCurve,
    PointBreakdown
};
use super::breakdown::{
    CategoryBreakdown,
    CategoryImpact
};
use super::questresult::QuestResult;


/// Role quest model for one config. Every lane goes through the same model;
/// only the config differs.
#[derive(Clone)]
pub struct QuestModel {
    config: Arc<QuestConfig>,
    solver: Arc<dyn CompletionSolver>
}

impl QuestModel {
    pub fn new(config: Arc<QuestConfig>) -> QuestModel {
        QuestModel::with_solver(config, Arc::new(ClosedFormSolver::new()))
    }

    pub fn with_solver(config: Arc<QuestConfig>, solver: Arc<dyn CompletionSolver>) -> QuestModel {
        QuestModel { config, solver }
    }

    pub fn config(&self) -> &QuestConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.config.total_points()
    }

    pub fn curve(&self, scenario: &ScenarioInput) -> Result<AccumulationCurve, QuestError> {
        scenario.validate(&self.config)?;
        Ok(AccumulationCurve::new(&self.config, scenario))
    }

    /// Raw, uncapped points after `minutes` of game time.
    pub fn points_at(&self, minutes: f64, scenario: &ScenarioInput) -> Result<f64, QuestError> {
        QuestError::require_non_negative("minutes", minutes)?;
        Ok(self.curve(scenario)?.value(minutes))
    }

    pub fn point_breakdown_at(&self, minutes: f64, scenario: &ScenarioInput) -> Result<PointBreakdown, QuestError> {
        QuestError::require_non_negative("minutes", minutes)?;
        Ok(self.curve(scenario)?.breakdown_at(minutes))
    }

    pub fn completion_time(&self, scenario: &ScenarioInput) -> Result<Completion, QuestError> {
        let curve = self.curve(scenario)?;
        self.solver.solve(&curve, self.threshold())
    }

    /// Completion with passive generation only.
    pub fn baseline(&self) -> Result<Completion, QuestError> {
        self.completion_time(&ScenarioInput::passive_only())
    }

    pub fn breakdown(&self, scenario: &ScenarioInput) -> Result<CategoryBreakdown, QuestError> {
        let actual = self.completion_time(scenario)?;
        self.breakdown_from(scenario, actual)
    }

    fn breakdown_from(&self, scenario: &ScenarioInput, actual: Completion) -> Result<CategoryBreakdown, QuestError> {
        let mut impacts = Vec::with_capacity(Category::ALL.len());
        let mut stripped = scenario.clone();
        for category in Category::ALL {
            let counterfactual = self.completion_time(&scenario.without(category))?;
            debug!("without {}: {}", category, counterfactual);
            impacts.push(CategoryImpact::new(category, actual, counterfactual));
            stripped = stripped.without(category);
        }
        let without_all = self.completion_time(&stripped)?;
        Ok(CategoryBreakdown::new(actual, impacts, without_all))
    }

    pub fn compute(&self, scenario: &ScenarioInput) -> Result<QuestResult, QuestError> {
        let curve = self.curve(scenario)?;
        if self.config.damage_conversion().is_none() && scenario.damage_per_minute() > 0.0 {
            warn!("quest '{}' has no damage term; damage per minute is ignored", self.config.name());
        }
        let completion = self.solver.solve(&curve, self.threshold())?;
        let baseline = self.baseline()?;
        let breakdown = self.breakdown_from(scenario, completion)?;
        debug!("quest '{}' completes at {} (baseline {})", self.config.name(), completion, baseline);
        Ok(QuestResult::new(
            self.config.name().to_owned(),
            self.config.lane(),
            self.threshold(),
            scenario.clone(),
            completion,
            baseline,
            breakdown,
            curve
        ))
    }
}
