use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

/// Input categories whose contribution the breakdown measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cs,
    Takedowns,
    Plates,
    Turrets,
    Epics,
    Damage
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cs,
        Category::Takedowns,
        Category::Plates,
        Category::Turrets,
        Category::Epics,
        Category::Damage
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cs => "CS",
            Category::Takedowns => "Champion Takedowns",
            Category::Plates => "Turret Plates",
            Category::Turrets => "Turret Takedowns",
            Category::Epics => "Epic Monsters",
            Category::Damage => "Champion Damage"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
