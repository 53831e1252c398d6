use thiserror::Error;

/// Failures surfaced by the quest model. A quest that never completes is not
/// an error; see `Completion::Never`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuestError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("solver failed: {0}")]
    Solver(String)
}

impl QuestError {
    pub fn invalid_input(message: impl Into<String>) -> QuestError {
        QuestError::InvalidInput(message.into())
    }

    pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<(), QuestError> {
        if !value.is_finite() {
            Err(QuestError::InvalidInput(format!("{} must be a finite number, got {}", field, value)))
        } else if value < 0.0 {
            Err(QuestError::InvalidInput(format!("{} must not be negative, got {}", field, value)))
        } else {
            Ok(())
        }
    }
}
