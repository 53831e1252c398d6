use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("invalid quest config '{name}': {reason}")]
    InvalidConfig {
        name: String,
        reason: String
    }
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    pub fn invalid_config(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidConfig {
            name: name.to_owned(),
            reason: reason.into()
        }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}
