use serde::Serialize;
use uuid::Uuid;

use crate::math::curve::sampledcurve::SampledCurve;
use crate::model::questresult::QuestResult;
use crate::objectwithuuid::ObjectWithUUID;
use crate::quest::lane::Lane;
use crate::quest::scenario::ScenarioInput;
use crate::solver::completion::Completion;


/// Label built from the scenario when the user gives none, e.g.
/// `12m1s 7.5 CS/Min 500 DPM 3 KP 2 Plates 1 Epics R`.
pub fn default_label(scenario: &ScenarioInput, completion: Completion) -> String {
    let mut parts = vec![completion.label()];
    let total_cs = scenario.total_cs_per_minute();
    if total_cs > 0.0 {
        parts.push(format!("{:.1} CS/Min", total_cs));
    }
    if scenario.damage_per_minute() > 0.0 {
        parts.push(format!("{} DPM", scenario.damage_per_minute().trunc()));
    }
    if scenario.takedowns() > 0 {
        parts.push(format!("{} KP", scenario.takedowns()));
    }
    if scenario.total_plates() > 0 {
        parts.push(format!("{} Plates", scenario.total_plates()));
    }
    if scenario.epic_monsters() > 0 {
        parts.push(format!("{} Epics", scenario.epic_monsters()));
    }
    if let Some(champion_type) = scenario.champion_type() {
        parts.push(champion_type.short_code().to_string());
    }
    parts.join(" ")
}


/// A labelled scenario result kept for overlaying against others.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonEntry {
    uuid: Uuid,
    label: String,
    lane: Lane,
    threshold: f64,
    scenario: ScenarioInput,
    completion: Completion,
    curve: SampledCurve
}

impl ComparisonEntry {
    /// Blank or missing labels fall back to `default_label`.
    pub fn new(label: Option<&str>, result: &QuestResult) -> ComparisonEntry {
        let label = match label.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_owned(),
            _ => default_label(result.scenario(), result.completion())
        };
        ComparisonEntry {
            uuid: Uuid::new_v4(),
            label,
            lane: result.lane(),
            threshold: result.threshold(),
            scenario: result.scenario().clone(),
            completion: result.completion(),
            curve: result.sample_curve()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
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

    pub fn curve(&self) -> &SampledCurve {
        &self.curve
    }
}

impl ObjectWithUUID for ComparisonEntry {
    fn uuid(&self) -> &Uuid {
        &self.uuid
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::lane::ChampionType;

    #[test]
    fn default_label_lists_only_non_zero_inputs() {
        let scenario = ScenarioInput::default()
            .with_cs(7.0, 0.5)
            .with_damage(512.7, ChampionType::Ranged)
            .with_takedowns(3)
            .with_plates(2, 0)
            .with_epic_monsters(1);
        let completion = Completion::at_minutes(12.0 + 1.0 / 60.0);
        assert_eq!(default_label(&scenario, completion), "12m1s 7.5 CS/Min 512 DPM 3 KP 2 Plates 1 Epics R");

        let passive = ScenarioInput::passive_only();
        assert_eq!(default_label(&passive, Completion::Never), "never");
    }
}
