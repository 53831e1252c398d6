use std::sync::Arc;

use log::debug;

use crate::manager::manager::{
    IManager,
    ManagerBuilder
};
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::manager::namedobject::NamedJsonObject;

use super::lane::Lane;
use super::questconfig::QuestConfig;


fn get_quest_config_from_json(json_value: serde_json::Value) -> Result<Arc<QuestConfig>, ManagerError> {
    let config: QuestConfig = parse_json_value(json_value)?;
    config
        .validate()
        .map_err(|reason| ManagerError::invalid_config(config.name(), reason))?;
    Ok(Arc::new(config))
}


/// Loads `QuestConfig`s from named JSON objects.
pub struct QuestConfigLoader;

impl QuestConfigLoader {
    /// A builder already holding the three built-in lane configs.
    pub fn builtin_builder() -> ManagerBuilder<QuestConfig> {
        let mut builder = ManagerBuilder::new();
        for lane in Lane::ALL {
            builder.insert(lane.config_name().to_owned(), Arc::new(QuestConfig::builtin(lane)));
        }
        builder
    }
}

impl IManager<QuestConfig, ()> for QuestConfigLoader {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<QuestConfig>,
                            json_value: serde_json::Value,
                            _supports: &()) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let config = get_quest_config_from_json(json_value)?;
        if builder.insert(named_object.name().to_owned(), config).is_some() {
            debug!("quest config '{}' replaced", named_object.name());
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn custom_json(name: &str, total_points: f64) -> serde_json::Value {
        json!({
            "name": name,
            "lane": "top",
            "total_points": total_points,
            "passive_points_per_minute": 96.0,
            "passive_start_minutes": 1.0,
            "points_per_minion_in_lane": 2.0,
            "points_per_minion_off_lane": 1.0,
            "points_per_turret_in_lane": 50.0,
            "points_per_turret_off_lane": 25.0,
            "points_per_plate_in_lane": 40.0,
            "points_per_plate_off_lane": 20.0,
            "points_per_takedown": 15.0,
            "points_per_epic": 30.0
        })
    }

    #[test]
    fn builtin_builder_registers_every_lane() {
        let manager = QuestConfigLoader::builtin_builder().build();
        assert_eq!(manager.names(), vec!["bot".to_owned(), "mid".to_owned(), "top".to_owned()]);
        assert_eq!(manager.get("top").unwrap().total_points(), 1200.0);
    }

    #[test]
    fn json_objects_are_added_and_override_builtins() {
        let mut builder = QuestConfigLoader::builtin_builder();
        let loader = QuestConfigLoader;
        loader
            .insert_obj_from_json_vec(&mut builder, &[custom_json("top", 1000.0), custom_json("top-short", 600.0)], &())
            .unwrap();
        let manager = builder.build();
        assert_eq!(manager.len(), 4);
        assert_eq!(manager.get("top").unwrap().total_points(), 1000.0);
        assert_eq!(manager.get("top-short").unwrap().name(), "top-short");
    }

    #[test]
    fn invalid_json_configs_are_rejected() {
        let mut builder = ManagerBuilder::new();
        let loader = QuestConfigLoader;

        let result = loader.insert_obj_from_json(&mut builder, custom_json("broken", -5.0), &());
        assert!(matches!(result, Err(ManagerError::InvalidConfig { name, .. }) if name == "broken"));

        let result = loader.insert_obj_from_json(&mut builder, json!({"name": "partial", "lane": "mid"}), &());
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert!(builder.is_empty());
    }
}
