use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Worker already registered: {0}")]
    DuplicateWorker(String),

    #[error("Invalid preference for worker '{worker}': {reason}")]
    InvalidPreference { worker: String, reason: String },

    #[error("Worker name must not be empty")]
    EmptyName,

    #[error("Roster failed validation with {} problem(s): {}", .0.len(), join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse roster: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, RosterError>;
