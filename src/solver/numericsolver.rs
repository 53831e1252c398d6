use argmin::core::{
    CostFunction,
    Error,
    Executor,
    State
};
use argmin::solver::brent::BrentRoot;
use log::debug;

use crate::math::curve::curve::Curve;
use crate::model::accumulationcurve::AccumulationCurve;
use crate::quest::questerror::QuestError;

use super::completion::Completion;
use super::completionsolver::CompletionSolver;

/// Beyond this many minutes a non-decreasing curve is treated as never
/// reaching its threshold.
const SEARCH_HORIZON_MINUTES: f64 = 1.0e6;


struct ThresholdCrossing<C> {
    curve: C,
    threshold: f64
}

impl<C: Curve> CostFunction for ThresholdCrossing<C> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, minutes: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.curve.value(*minutes) - self.threshold)
    }
}


/// Brackets the crossing by doubling and refines it with Brent's method.
/// Works for any non-decreasing `Curve`.
#[derive(Debug, Clone, Copy)]
pub struct NumericSolver {
    tolerance: f64,
    max_iters: u64
}

impl NumericSolver {
    pub fn new(tolerance: f64, max_iters: u64) -> NumericSolver {
        NumericSolver { tolerance, max_iters }
    }

    /// `first_guess` seeds the upper bracket; the passive start is a good one.
    pub fn solve_curve<C: Curve>(&self, curve: C, threshold: f64, first_guess: f64) -> Result<Completion, QuestError> {
        if curve.value(0.0) >= threshold {
            return Ok(Completion::at_minutes(0.0));
        }

        let mut upper = first_guess.max(1.0);
        while curve.value(upper) < threshold {
            if curve.derivative(upper) <= 0.0 && upper >= first_guess {
                debug!("curve is flat at {} min below the threshold", upper);
                return Ok(Completion::Never);
            }
            upper *= 2.0;
            if upper > SEARCH_HORIZON_MINUTES {
                debug!("threshold not reached within {} min", SEARCH_HORIZON_MINUTES);
                return Ok(Completion::Never);
            }
        }

        let problem = ThresholdCrossing { curve, threshold };
        let solver = BrentRoot::new(0.0, upper, self.tolerance);
        let result = Executor::new(problem, solver)
            .configure(|state| state.max_iters(self.max_iters))
            .run()
            .map_err(|error| QuestError::Solver(error.to_string()))?;
        let minutes = result
            .state()
            .get_param()
            .copied()
            .ok_or_else(|| QuestError::Solver("Brent iteration produced no estimate".to_owned()))?;
        debug!("numeric crossing at {:.6} min after {} iterations", minutes, result.state().get_iter());
        Ok(Completion::at_minutes(minutes))
    }
}

impl Default for NumericSolver {
    fn default() -> Self {
        NumericSolver::new(1.0e-10, 200)
    }
}

impl CompletionSolver for NumericSolver {
    fn solve(&self, curve: &AccumulationCurve, threshold: f64) -> Result<Completion, QuestError> {
        self.solve_curve(curve.clone(), threshold, curve.passive_start())
    }
}
