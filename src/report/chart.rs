use serde::Serialize;

use crate::comparison::comparisonset::ComparisonSet;
use crate::math::curve::curve::Curve;
use crate::math::curve::sampledcurve::SampledCurve;
use crate::model::questmodel::QuestModel;
use crate::model::questresult::{
    chart_horizon,
    QuestResult
};
use crate::quest::questerror::QuestError;
use crate::quest::scenario::ScenarioInput;
use crate::solver::completion::Completion;

const BASELINE_SAMPLES: usize = 200;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    /// Passive generation only, drawn dashed underneath everything.
    Baseline,
    Comparison,
    /// The scenario being edited, drawn on top.
    Current
}


/// One line of the chart; y is percent of the quest threshold, capped at 100.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    label: String,
    role: SeriesRole,
    completion: Completion,
    points: SampledCurve
}

impl ChartSeries {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> SeriesRole {
        self.role
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn points(&self) -> &SampledCurve {
        &self.points
    }
}


/// Everything a renderer needs to draw quest progress: series in drawing
/// order and the axis ranges.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    title: String,
    x_label: String,
    y_label: String,
    x_max: f64,
    threshold_label: String,
    series: Vec<ChartSeries>
}

impl Chart {
    pub fn build(model: &QuestModel,
                 current: Option<&QuestResult>,
                 comparisons: &ComparisonSet) -> Result<Chart, QuestError> {
        let config = model.config();
        let baseline = model.baseline()?;
        let baseline_curve = model.curve(&ScenarioInput::passive_only())?;
        let x_max = match current {
            Some(result) => result.horizon(),
            None => chart_horizon(baseline, baseline)
        };

        let mut series = vec![ChartSeries {
            label: format!("{} Passive Only", baseline.label()),
            role: SeriesRole::Baseline,
            completion: baseline,
            points: baseline_curve
                .sample(0.0, x_max, BASELINE_SAMPLES)
                .as_percent_of(config.total_points())
        }];

        for entry in comparisons {
            series.push(ChartSeries {
                label: entry.label().to_owned(),
                role: SeriesRole::Comparison,
                completion: entry.completion(),
                points: entry.curve().as_percent_of(entry.threshold())
            });
        }

        if let Some(result) = current {
            series.push(ChartSeries {
                label: format!("{} Current", result.completion().label()),
                role: SeriesRole::Current,
                completion: result.completion(),
                points: result.sample_curve().as_percent_of(result.threshold())
            });
        }

        Ok(Chart {
            title: format!("{} Quest - Completion Progress", config.lane().title()),
            x_label: "Game Time (minutes)".to_owned(),
            y_label: "Quest Completion (%)".to_owned(),
            x_max,
            threshold_label: format!("Quest Completion ({} pts)", config.total_points()),
            series
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn threshold_label(&self) -> &str {
        &self.threshold_label
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
