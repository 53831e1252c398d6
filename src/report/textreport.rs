use std::fmt;

use crate::math::round::round;
use crate::model::accumulationcurve::PointBreakdown;
use crate::model::questresult::QuestResult;
use crate::solver::completion::Completion;

const RULE_WIDTH: usize = 40;


/// Plain-text results panel for one calculation.
pub struct TextReport<'a> {
    result: &'a QuestResult
}

impl<'a> TextReport<'a> {
    pub fn new(result: &'a QuestResult) -> TextReport<'a> {
        TextReport { result }
    }

    fn write_points(f: &mut fmt::Formatter<'_>, label: &str, points: f64) -> fmt::Result {
        writeln!(f, "{:<21}{} pts", format!("{}:", label), round(points, 0))
    }

    fn write_point_breakdown(&self, f: &mut fmt::Formatter<'_>, points: &PointBreakdown) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "Points Breakdown:")?;
        writeln!(f, "{}", rule)?;
        Self::write_points(f, "CS in Lane", points.cs_in_lane)?;
        Self::write_points(f, "CS in Other Lanes", points.cs_off_lane)?;
        Self::write_points(f, "  Total CS", points.cs_total())?;
        if self.result.scenario().damage_per_minute() > 0.0 {
            let label = match self.result.scenario().champion_type() {
                Some(champion_type) => format!("Damage ({})", champion_type),
                None => "Damage".to_owned()
            };
            Self::write_points(f, &label, points.damage)?;
        }
        Self::write_points(f, "Turret Plates", points.plates)?;
        Self::write_points(f, "Turret Takedowns", points.turrets)?;
        Self::write_points(f, "Champion Takedowns", points.takedowns)?;
        Self::write_points(f, "Epic Monsters", points.epic_monsters)?;
        writeln!(f, "{}", rule)?;
        Self::write_points(f, "Active Points", points.active_total())?;
        Self::write_points(f, "Passive Points", points.passive)?;
        Self::write_points(f, "TOTAL", points.total())
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "Quest: {} ({} pts)", result.quest(), result.threshold())?;
        match result.completion() {
            Completion::At(time) => {
                writeln!(f, "Quest Completion Time: {}", time)?;
                writeln!(f)?;
            },
            Completion::Never => {
                return writeln!(f, "Quest Completion Time: never (no points accrue after passive start)");
            }
        }

        if let Some(points) = result.points_at_completion() {
            self.write_point_breakdown(f, points)?;
            writeln!(f)?;
        }

        writeln!(f, "Passive Only: {}", result.baseline())?;
        writeln!(f, "Time Saved: {}", result.time_saved())?;
        writeln!(f)?;
        writeln!(f, "Time Saved by Category:")?;
        for impact in result.breakdown().impacts() {
            writeln!(f, "  {:<20}{}", impact.category().label(), impact.time_saved())?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::model::questmodel::QuestModel;
    use crate::quest::lane::{
        ChampionType,
        Lane
    };
    use crate::quest::questconfig::QuestConfig;
    use crate::quest::scenario::ScenarioInput;

    #[test]
    fn report_lists_sources_and_savings() {
        let model = QuestModel::new(Arc::new(QuestConfig::builtin(Lane::Mid)));
        let scenario = ScenarioInput::default()
            .with_cs(7.0, 0.0)
            .with_damage(500.0, ChampionType::Melee)
            .with_plates(2, 0);
        let result = model.compute(&scenario).unwrap();
        let text = TextReport::new(&result).to_string();

        assert!(text.starts_with("Quest: mid (1350 pts)\nQuest Completion Time: "));
        assert!(text.contains("Damage (Melee):"));
        assert!(text.contains("Turret Plates:       80 pts"));
        assert!(text.contains("TOTAL:               1350 pts"));
        assert!(text.contains("Passive Only: 15:09"));
        assert!(text.contains("  Turret Takedowns    0:00"));
    }

    #[test]
    fn never_completing_quests_say_so() {
        let config = QuestConfig::builtin(Lane::Top).with_passive_rate(0.0);
        let model = QuestModel::new(Arc::new(config));
        let result = model.compute(&ScenarioInput::passive_only()).unwrap();
        let text = TextReport::new(&result).to_string();
        assert!(text.contains("Quest Completion Time: never"));
        assert!(!text.contains("Points Breakdown"));
    }
}
