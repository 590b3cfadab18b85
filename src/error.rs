use thiserror::Error;

/// Structural decode failure. No partially built result ever accompanies one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Type mismatch for field {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e.to_string())
    }
}

impl DecodeError {
    /// Name of the response field that caused the failure, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingField(field) => Some(field),
            DecodeError::TypeMismatch { field, .. } => Some(field),
            DecodeError::InvalidPayload(_) | DecodeError::Json(_) => None,
        }
    }
}
