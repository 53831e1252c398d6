use serde::{
    Deserialize,
    Serialize
};

use super::category::Category;
use super::lane::ChampionType;
use super::questconfig::QuestConfig;
use super::questerror::QuestError;

/// A player's performance assumptions for one calculation.
///
/// Rates are per minute of game time; counts are totals over the game and are
/// treated as available from the start. In JSON only `cs_per_minute_in_lane` is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    cs_per_minute_in_lane: f64,
    #[serde(default)]
    cs_per_minute_off_lane: f64,
    #[serde(default)]
    damage_per_minute: f64,
    #[serde(default)]
    champion_type: Option<ChampionType>,
    #[serde(default)]
    takedowns: u32,
    #[serde(default)]
    plates_in_lane: u32,
    #[serde(default)]
    plates_off_lane: u32,
    #[serde(default)]
    turrets_in_lane: u32,
    #[serde(default)]
    turrets_off_lane: u32,
    #[serde(default)]
    epic_monsters: u32
}

impl ScenarioInput {
    /// Passive generation only.
    pub fn passive_only() -> ScenarioInput {
        ScenarioInput::default()
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<ScenarioInput, QuestError> {
        serde_json::from_value(json_value)
            .map_err(|error| QuestError::invalid_input(format!("scenario: {}", error)))
    }

    pub fn with_cs(self, in_lane: f64, off_lane: f64) -> ScenarioInput {
        ScenarioInput {
            cs_per_minute_in_lane: in_lane,
            cs_per_minute_off_lane: off_lane,
            ..self
        }
    }

    pub fn with_damage(self, damage_per_minute: f64, champion_type: ChampionType) -> ScenarioInput {
        ScenarioInput {
            damage_per_minute,
            champion_type: Some(champion_type),
            ..self
        }
    }

    pub fn with_damage_per_minute(self, damage_per_minute: f64) -> ScenarioInput {
        ScenarioInput { damage_per_minute, ..self }
    }

    pub fn with_champion_type(self, champion_type: Option<ChampionType>) -> ScenarioInput {
        ScenarioInput { champion_type, ..self }
    }

    pub fn with_takedowns(self, takedowns: u32) -> ScenarioInput {
        ScenarioInput { takedowns, ..self }
    }

    pub fn with_plates(self, in_lane: u32, off_lane: u32) -> ScenarioInput {
        ScenarioInput {
            plates_in_lane: in_lane,
            plates_off_lane: off_lane,
            ..self
        }
    }

    pub fn with_turrets(self, in_lane: u32, off_lane: u32) -> ScenarioInput {
        ScenarioInput {
            turrets_in_lane: in_lane,
            turrets_off_lane: off_lane,
            ..self
        }
    }

    pub fn with_epic_monsters(self, epic_monsters: u32) -> ScenarioInput {
        ScenarioInput { epic_monsters, ..self }
    }

    /// Copy with every input of `category` set to zero.
    pub fn without(&self, category: Category) -> ScenarioInput {
        let mut scenario = self.clone();
        match category {
            Category::Cs => {
                scenario.cs_per_minute_in_lane = 0.0;
                scenario.cs_per_minute_off_lane = 0.0;
            },
            Category::Takedowns => scenario.takedowns = 0,
            Category::Plates => {
                scenario.plates_in_lane = 0;
                scenario.plates_off_lane = 0;
            },
            Category::Turrets => {
                scenario.turrets_in_lane = 0;
                scenario.turrets_off_lane = 0;
            },
            Category::Epics => scenario.epic_monsters = 0,
            Category::Damage => scenario.damage_per_minute = 0.0
        }
        scenario
    }

    /// Rejects negative or non-finite rates, and damage without a champion
    /// type on a config that converts damage.
    pub fn validate(&self, config: &QuestConfig) -> Result<(), QuestError> {
        QuestError::require_non_negative("cs_per_minute_in_lane", self.cs_per_minute_in_lane)?;
        QuestError::require_non_negative("cs_per_minute_off_lane", self.cs_per_minute_off_lane)?;
        QuestError::require_non_negative("damage_per_minute", self.damage_per_minute)?;
        if config.damage_conversion().is_some() && self.damage_per_minute > 0.0 && self.champion_type.is_none() {
            return Err(QuestError::invalid_input(format!(
                "champion_type is required for damage on quest '{}'",
                config.name()
            )));
        }
        Ok(())
    }

    pub fn cs_per_minute_in_lane(&self) -> f64 {
        self.cs_per_minute_in_lane
    }

    pub fn cs_per_minute_off_lane(&self) -> f64 {
        self.cs_per_minute_off_lane
    }

    pub fn total_cs_per_minute(&self) -> f64 {
        self.cs_per_minute_in_lane + self.cs_per_minute_off_lane
    }

    pub fn damage_per_minute(&self) -> f64 {
        self.damage_per_minute
    }

    pub fn champion_type(&self) -> Option<ChampionType> {
        self.champion_type
    }

    pub fn takedowns(&self) -> u32 {
        self.takedowns
    }

    pub fn plates_in_lane(&self) -> u32 {
        self.plates_in_lane
    }

    pub fn plates_off_lane(&self) -> u32 {
        self.plates_off_lane
    }

    pub fn total_plates(&self) -> u32 {
        self.plates_in_lane + self.plates_off_lane
    }

    pub fn turrets_in_lane(&self) -> u32 {
        self.turrets_in_lane
    }

    pub fn turrets_off_lane(&self) -> u32 {
        self.turrets_off_lane
    }

    pub fn epic_monsters(&self) -> u32 {
        self.epic_monsters
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::lane::Lane;
    use serde_json::json;

    #[test]
    fn json_requires_in_lane_cs_only() {
        let scenario = ScenarioInput::from_json(json!({"cs_per_minute_in_lane": 7.5, "takedowns": 3})).unwrap();
        assert_eq!(scenario.cs_per_minute_in_lane(), 7.5);
        assert_eq!(scenario.takedowns(), 3);
        assert_eq!(scenario.epic_monsters(), 0);
        assert_eq!(scenario.champion_type(), None);

        let missing = ScenarioInput::from_json(json!({"takedowns": 3}));
        assert!(matches!(missing, Err(QuestError::InvalidInput(message)) if message.contains("cs_per_minute_in_lane")));

        let negative_count = ScenarioInput::from_json(json!({"cs_per_minute_in_lane": 7.0, "plates_in_lane": -1}));
        assert!(matches!(negative_count, Err(QuestError::InvalidInput(_))));

        let bad_champion = ScenarioInput::from_json(json!({"cs_per_minute_in_lane": 7.0, "champion_type": "tank"}));
        assert!(matches!(bad_champion, Err(QuestError::InvalidInput(_))));
    }

    #[test]
    fn json_champion_type_accepts_short_names_and_selectors() {
        let with_champion = |value: serde_json::Value| {
            ScenarioInput::from_json(json!({"cs_per_minute_in_lane": 7.0, "champion_type": value}))
        };
        assert_eq!(with_champion(json!("m")).unwrap().champion_type(), Some(ChampionType::Melee));
        assert_eq!(with_champion(json!("r")).unwrap().champion_type(), Some(ChampionType::Ranged));
        assert_eq!(with_champion(json!("Melee")).unwrap().champion_type(), Some(ChampionType::Melee));
        assert_eq!(with_champion(json!(0)).unwrap().champion_type(), Some(ChampionType::Melee));
        assert_eq!(with_champion(json!(1)).unwrap().champion_type(), Some(ChampionType::Ranged));
        assert!(matches!(with_champion(json!(2)), Err(QuestError::InvalidInput(_))));
        assert_eq!(with_champion(json!(null)).unwrap().champion_type(), None);
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_rates() {
        let config = QuestConfig::builtin(Lane::Top);
        assert!(ScenarioInput::passive_only().validate(&config).is_ok());
        assert!(ScenarioInput::default().with_cs(-0.1, 0.0).validate(&config).is_err());
        assert!(ScenarioInput::default().with_cs(7.0, f64::INFINITY).validate(&config).is_err());
        let negative_damage = ScenarioInput::default().with_damage(-5.0, ChampionType::Melee);
        assert!(negative_damage.validate(&config).is_err());
    }

    #[test]
    fn damage_lane_needs_a_champion_type() {
        let mid = QuestConfig::builtin(Lane::Mid);
        let top = QuestConfig::builtin(Lane::Top);
        let untyped = ScenarioInput::default().with_damage_per_minute(600.0);
        assert!(matches!(untyped.validate(&mid), Err(QuestError::InvalidInput(_))));
        assert!(untyped.validate(&top).is_ok());
        assert!(untyped.clone().with_champion_type(Some(ChampionType::Melee)).validate(&mid).is_ok());
    }

    #[test]
    fn without_zeroes_only_the_category() {
        let scenario = ScenarioInput::default()
            .with_cs(7.0, 1.0)
            .with_takedowns(4)
            .with_plates(2, 1)
            .with_turrets(1, 1)
            .with_epic_monsters(2)
            .with_damage(500.0, ChampionType::Ranged);

        let no_cs = scenario.without(Category::Cs);
        assert_eq!(no_cs.total_cs_per_minute(), 0.0);
        assert_eq!(no_cs.takedowns(), 4);

        let no_plates = scenario.without(Category::Plates);
        assert_eq!(no_plates.total_plates(), 0);
        assert_eq!(no_plates.turrets_in_lane(), 1);

        let no_damage = scenario.without(Category::Damage);
        assert_eq!(no_damage.damage_per_minute(), 0.0);
        assert_eq!(no_damage.champion_type(), Some(ChampionType::Ranged));

        let stripped = Category::ALL.iter().fold(scenario, |acc, category| acc.without(*category));
        assert_eq!(stripped.with_champion_type(None), ScenarioInput::passive_only());
    }
}
