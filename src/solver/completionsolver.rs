use log::debug;

use crate::model::accumulationcurve::AccumulationCurve;
use crate::quest::questerror::QuestError;

use super::completion::Completion;

/// Finds the first time an accumulation curve reaches a threshold.
pub trait CompletionSolver: Send + Sync {
    fn solve(&self, curve: &AccumulationCurve, threshold: f64) -> Result<Completion, QuestError>;
}


/// Algebraic solution over the two linear segments of the curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormSolver;

impl ClosedFormSolver {
    pub fn new() -> ClosedFormSolver {
        ClosedFormSolver
    }
}

impl CompletionSolver for ClosedFormSolver {
    fn solve(&self, curve: &AccumulationCurve, threshold: f64) -> Result<Completion, QuestError> {
        let bonus = curve.bonus_points();
        if bonus >= threshold {
            debug!("bonuses alone ({}) reach the threshold {}", bonus, threshold);
            return Ok(Completion::at_minutes(0.0));
        }

        let continuous_rate = curve.continuous_rate();
        let start = curve.passive_start();
        let value_at_start = bonus + continuous_rate * start;
        if value_at_start >= threshold {
            // value_at_start > bonus here, so continuous_rate > 0
            let minutes = (threshold - bonus) / continuous_rate;
            debug!("threshold reached before passive start at {:.4} min", minutes);
            return Ok(Completion::at_minutes(minutes));
        }

        let rate = curve.post_start_rate();
        if rate <= 0.0 {
            debug!("no accrual after passive start and {} < {}", value_at_start, threshold);
            return Ok(Completion::Never);
        }
        let minutes = start + (threshold - value_at_start) / rate;
        debug!("threshold reached at {:.4} min with {:.2} pts/min", minutes, rate);
        Ok(Completion::at_minutes(minutes))
    }
}
