use serde::Serialize;

use crate::math::curve::curve::Curve;
use crate::quest::questconfig::QuestConfig;
use crate::quest::scenario::ScenarioInput;

/// Points by source at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PointBreakdown {
    pub cs_in_lane: f64,
    pub cs_off_lane: f64,
    pub damage: f64,
    pub plates: f64,
    pub turrets: f64,
    pub takedowns: f64,
    pub epic_monsters: f64,
    pub passive: f64
}

impl PointBreakdown {
    pub fn cs_total(&self) -> f64 {
        self.cs_in_lane + self.cs_off_lane
    }

    /// Everything the player earns beyond passive generation.
    pub fn active_total(&self) -> f64 {
        self.cs_total() + self.damage + self.plates + self.turrets + self.takedowns + self.epic_monsters
    }

    pub fn total(&self) -> f64 {
        self.active_total() + self.passive
    }
}


/// Quest points over elapsed minutes for one scenario:
///
/// ```text
/// f(t) = bonus + continuous_rate * t + passive_rate * max(0, t - passive_start)
/// ```
///
/// Bonuses (takedowns, plates, turrets, epics) count from t = 0. CS and damage
/// accrue linearly from t = 0; passive generation only after `passive_start`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulationCurve {
    cs_in_lane_rate: f64,
    cs_off_lane_rate: f64,
    damage_rate: f64,
    plate_points: f64,
    turret_points: f64,
    takedown_points: f64,
    epic_points: f64,
    passive_rate: f64,
    passive_start: f64
}

impl AccumulationCurve {
    /// Assumes `scenario` was validated against `config`. Damage on a config
    /// without a damage conversion contributes nothing.
    pub fn new(config: &QuestConfig, scenario: &ScenarioInput) -> AccumulationCurve {
        let points_per_damage = match (config.damage_conversion(), scenario.champion_type()) {
            (Some(conversion), Some(champion_type)) => conversion.points_per_damage(champion_type),
            _ => 0.0
        };
        AccumulationCurve {
            cs_in_lane_rate: scenario.cs_per_minute_in_lane() * config.points_per_minion_in_lane(),
            cs_off_lane_rate: scenario.cs_per_minute_off_lane() * config.points_per_minion_off_lane(),
            damage_rate: scenario.damage_per_minute() * points_per_damage,
            plate_points: scenario.plates_in_lane() as f64 * config.points_per_plate_in_lane()
                + scenario.plates_off_lane() as f64 * config.points_per_plate_off_lane(),
            turret_points: scenario.turrets_in_lane() as f64 * config.points_per_turret_in_lane()
                + scenario.turrets_off_lane() as f64 * config.points_per_turret_off_lane(),
            takedown_points: scenario.takedowns() as f64 * config.points_per_takedown(),
            epic_points: scenario.epic_monsters() as f64 * config.points_per_epic(),
            passive_rate: config.passive_points_per_minute(),
            passive_start: config.passive_start_minutes()
        }
    }

    /// One-time points available from t = 0.
    pub fn bonus_points(&self) -> f64 {
        self.plate_points + self.turret_points + self.takedown_points + self.epic_points
    }

    /// Points per minute from CS and damage, active from t = 0.
    pub fn continuous_rate(&self) -> f64 {
        self.cs_in_lane_rate + self.cs_off_lane_rate + self.damage_rate
    }

    pub fn passive_rate(&self) -> f64 {
        self.passive_rate
    }

    pub fn passive_start(&self) -> f64 {
        self.passive_start
    }

    /// Slope once passive generation has started.
    pub fn post_start_rate(&self) -> f64 {
        self.continuous_rate() + self.passive_rate
    }

    pub fn passive_points(&self, minutes: f64) -> f64 {
        (minutes - self.passive_start).max(0.0) * self.passive_rate
    }

    pub fn breakdown_at(&self, minutes: f64) -> PointBreakdown {
        let t = minutes.max(0.0);
        PointBreakdown {
            cs_in_lane: self.cs_in_lane_rate * t,
            cs_off_lane: self.cs_off_lane_rate * t,
            damage: self.damage_rate * t,
            plates: self.plate_points,
            turrets: self.turret_points,
            takedowns: self.takedown_points,
            epic_monsters: self.epic_points,
            passive: self.passive_points(t)
        }
    }
}

impl Curve for AccumulationCurve {
    /// Negative times are clamped to zero.
    fn value(&self, x: f64) -> f64 {
        let t = x.max(0.0);
        self.bonus_points() + self.continuous_rate() * t + self.passive_points(t)
    }

    /// Right derivative, so the passive slope is included at the start knot.
    fn derivative(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else if x < self.passive_start {
            self.continuous_rate()
        } else {
            self.post_start_rate()
        }
    }
}
