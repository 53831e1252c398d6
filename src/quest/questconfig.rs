use serde::{
    Deserialize,
    Serialize
};

use super::lane::{
    ChampionType,
    Lane
};

/// Passive generation starts at 1:05 on every lane.
pub const PASSIVE_START_MINUTES: f64 = 1.0 + 5.0 / 60.0;

/// 8 points every 5 seconds.
pub const PASSIVE_POINTS_PER_MINUTE: f64 = 96.0;


/// Share of champion damage converted into quest points. Melee champions get
/// `rate * melee_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageConversion {
    rate: f64,
    #[serde(default = "DamageConversion::default_melee_multiplier")]
    melee_multiplier: f64
}

impl DamageConversion {
    pub fn new(rate: f64, melee_multiplier: f64) -> DamageConversion {
        DamageConversion { rate, melee_multiplier }
    }

    fn default_melee_multiplier() -> f64 {
        1.0
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn melee_multiplier(&self) -> f64 {
        self.melee_multiplier
    }

    pub fn points_per_damage(&self, champion_type: ChampionType) -> f64 {
        match champion_type {
            ChampionType::Melee => self.rate * self.melee_multiplier,
            ChampionType::Ranged => self.rate
        }
    }
}


/// Constants of one role quest variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestConfig {
    name: String,
    lane: Lane,
    total_points: f64,
    passive_points_per_minute: f64,
    passive_start_minutes: f64,
    points_per_minion_in_lane: f64,
    points_per_minion_off_lane: f64,
    points_per_turret_in_lane: f64,
    points_per_turret_off_lane: f64,
    points_per_plate_in_lane: f64,
    points_per_plate_off_lane: f64,
    points_per_takedown: f64,
    points_per_epic: f64,
    #[serde(default)]
    damage_conversion: Option<DamageConversion>
}

impl QuestConfig {
    /// Built-in constants for `lane`. Top and bot share the symmetric rule set
    /// (bot minions are worth more); mid adds the damage term.
    pub fn builtin(lane: Lane) -> QuestConfig {
        let symmetric = QuestConfig {
            name: lane.config_name().to_owned(),
            lane,
            total_points: 1350.0,
            passive_points_per_minute: PASSIVE_POINTS_PER_MINUTE,
            passive_start_minutes: PASSIVE_START_MINUTES,
            points_per_minion_in_lane: 2.0,
            points_per_minion_off_lane: 1.0,
            points_per_turret_in_lane: 50.0,
            points_per_turret_off_lane: 25.0,
            points_per_plate_in_lane: 40.0,
            points_per_plate_off_lane: 20.0,
            points_per_takedown: 15.0,
            points_per_epic: 30.0,
            damage_conversion: None
        };
        match lane {
            Lane::Top => QuestConfig {
                total_points: 1200.0,
                ..symmetric
            },
            Lane::Mid => QuestConfig {
                points_per_takedown: 25.0,
                damage_conversion: Some(DamageConversion::new(0.015, 2.0)),
                ..symmetric
            },
            Lane::Bot => QuestConfig {
                points_per_minion_in_lane: 3.0,
                points_per_minion_off_lane: 1.5,
                ..symmetric
            }
        }
    }

    /// Same constants with another passive rate. A rate of zero models a
    /// player who never stands in lane.
    pub fn with_passive_rate(&self, passive_points_per_minute: f64) -> QuestConfig {
        QuestConfig {
            passive_points_per_minute,
            ..self.clone()
        }
    }

    /// Checks the invariants the model relies on; returns a description of the
    /// first violated one.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.total_points.is_finite() && self.total_points > 0.0) {
            return Err(format!("total_points must be positive, got {}", self.total_points));
        }
        let mut fields = vec![
            ("passive_points_per_minute", self.passive_points_per_minute),
            ("passive_start_minutes", self.passive_start_minutes),
            ("points_per_minion_in_lane", self.points_per_minion_in_lane),
            ("points_per_minion_off_lane", self.points_per_minion_off_lane),
            ("points_per_turret_in_lane", self.points_per_turret_in_lane),
            ("points_per_turret_off_lane", self.points_per_turret_off_lane),
            ("points_per_plate_in_lane", self.points_per_plate_in_lane),
            ("points_per_plate_off_lane", self.points_per_plate_off_lane),
            ("points_per_takedown", self.points_per_takedown),
            ("points_per_epic", self.points_per_epic)
        ];
        if let Some(conversion) = &self.damage_conversion {
            fields.push(("damage_conversion.rate", conversion.rate));
            fields.push(("damage_conversion.melee_multiplier", conversion.melee_multiplier));
        }
        match fields.iter().find(|(_, value)| !(value.is_finite() && *value >= 0.0)) {
            Some((field, value)) => Err(format!("{} must be a non-negative number, got {}", field, value)),
            None => Ok(())
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn total_points(&self) -> f64 {
        self.total_points
    }

    pub fn passive_points_per_minute(&self) -> f64 {
        self.passive_points_per_minute
    }

    pub fn passive_start_minutes(&self) -> f64 {
        self.passive_start_minutes
    }

    pub fn points_per_minion_in_lane(&self) -> f64 {
        self.points_per_minion_in_lane
    }

    pub fn points_per_minion_off_lane(&self) -> f64 {
        self.points_per_minion_off_lane
    }

    pub fn points_per_turret_in_lane(&self) -> f64 {
        self.points_per_turret_in_lane
    }

    pub fn points_per_turret_off_lane(&self) -> f64 {
        self.points_per_turret_off_lane
    }

    pub fn points_per_plate_in_lane(&self) -> f64 {
        self.points_per_plate_in_lane
    }

    pub fn points_per_plate_off_lane(&self) -> f64 {
        self.points_per_plate_off_lane
    }

    pub fn points_per_takedown(&self) -> f64 {
        self.points_per_takedown
    }

    pub fn points_per_epic(&self) -> f64 {
        self.points_per_epic
    }

    pub fn damage_conversion(&self) -> Option<&DamageConversion> {
        self.damage_conversion.as_ref()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn builtin_lanes_differ_where_the_rules_differ() {
        let top = QuestConfig::builtin(Lane::Top);
        let mid = QuestConfig::builtin(Lane::Mid);
        let bot = QuestConfig::builtin(Lane::Bot);

        assert_eq!(top.total_points(), 1200.0);
        assert_eq!(mid.total_points(), 1350.0);
        assert_eq!(bot.total_points(), 1350.0);
        assert_eq!(mid.points_per_takedown(), 25.0);
        assert_eq!(bot.points_per_minion_in_lane(), 3.0);
        assert!(top.damage_conversion().is_none());
        assert!(bot.damage_conversion().is_none());
        for config in [&top, &mid, &bot] {
            assert!(config.validate().is_ok());
            assert_relative_eq!(config.passive_start_minutes(), 65.0 / 60.0);
        }
    }

    #[test]
    fn melee_converts_twice_the_ranged_rate() {
        let conversion = *QuestConfig::builtin(Lane::Mid).damage_conversion().unwrap();
        assert_relative_eq!(conversion.points_per_damage(ChampionType::Ranged), 0.015);
        assert_relative_eq!(conversion.points_per_damage(ChampionType::Melee), 0.03);
    }

    #[test]
    fn validate_rejects_broken_constants() {
        let config = QuestConfig::builtin(Lane::Top);
        assert!(config.with_passive_rate(0.0).validate().is_ok());
        let error = config.with_passive_rate(-1.0).validate().unwrap_err();
        assert!(error.contains("passive_points_per_minute"));

        let zero_total = QuestConfig {
            total_points: 0.0,
            ..config.clone()
        };
        assert!(zero_total.validate().unwrap_err().contains("total_points"));

        let nan_damage = QuestConfig {
            damage_conversion: Some(DamageConversion::new(f64::NAN, 1.0)),
            ..config
        };
        assert!(nan_damage.validate().unwrap_err().contains("damage_conversion.rate"));
    }
}
