use std::collections::HashMap;
use std::sync::Arc;

use super::managererror::ManagerError;


/// Loader side of a manager: turns named JSON objects into values inside a
/// `ManagerBuilder`. `S` carries whatever the loader needs besides the JSON.
pub trait IManager<V: ?Sized, S> {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<V>,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&self,
                                builder: &mut ManagerBuilder<V>,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for json_value in json_vec.iter() {
            self.insert_obj_from_json(builder, json_value.clone(), supports)?;
        }
        Ok(())
    }
}


/// Mutable stage of a manager. Later inserts under an existing name replace
/// the earlier value.
pub struct ManagerBuilder<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, value: Arc<V>) -> Option<Arc<V>> {
        self.map.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn build(self) -> FrozenManager<V> {
        FrozenManager { map: self.map }
    }
}

impl<V: ?Sized> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}


/// Read-only stage of a manager.
pub struct FrozenManager<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> FrozenManager<V> {
    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Names in ascending order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
