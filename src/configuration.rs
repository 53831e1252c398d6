use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::manager::manager::{
    FrozenManager,
    IManager
};
use crate::manager::managererror::ManagerError;
use crate::model::questmodel::QuestModel;
use crate::quest::lane::Lane;
use crate::quest::questconfig::QuestConfig;
use crate::quest::questconfigmanager::QuestConfigLoader;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    quests: Vec<serde_json::Value>
}

/// Quest configs by name: the built-in lanes plus whatever a JSON file adds.
pub struct Configuration {
    quest_config_manager: FrozenManager<QuestConfig>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            quest_config_manager: QuestConfigLoader::builtin_builder().build()
        }
    }

    /// Built-ins merged with `{"quests": [...]}` from `file_path`. Entries
    /// sharing a built-in name replace it.
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let mut builder = QuestConfigLoader::builtin_builder();
        QuestConfigLoader.insert_obj_from_json_vec(&mut builder, &json_prop.quests, &())?;
        info!("loaded {} quest config(s) from {}", json_prop.quests.len(), file_path.as_ref().display());
        Ok(Configuration {
            quest_config_manager: builder.build()
        })
    }

    pub fn quest_config_manager(&self) -> &FrozenManager<QuestConfig> {
        &self.quest_config_manager
    }

    pub fn quest_config(&self, name: &str) -> Result<Arc<QuestConfig>, ManagerError> {
        self.quest_config_manager.get(name)
    }

    pub fn lane_config(&self, lane: Lane) -> Result<Arc<QuestConfig>, ManagerError> {
        self.quest_config(lane.config_name())
    }

    pub fn model(&self, name: &str) -> Result<QuestModel, ManagerError> {
        Ok(QuestModel::new(self.quest_config(name)?))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
