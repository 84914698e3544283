use crate::domain::contact::ContactField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: ContactField, reason: String },

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Failed to serialize contacts: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid validation pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl AppError {
    /// Field that caused the failure, when the error came from contact validation.
    pub fn field(&self) -> Option<ContactField> {
        match self {
            AppError::InvalidArgument { field, .. } => Some(*field),
            _ => None,
        }
    }
}
