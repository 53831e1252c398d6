use serde::{
    Serialize,
    Deserialize
};

/// The `name` every managed JSON object carries.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn new(name: String) -> NamedJsonObject {
        NamedJsonObject { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
