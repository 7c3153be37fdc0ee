use crate::types::Timestamp;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid interval: end ({end}) must be after start ({start})")]
    InvalidInterval { start: Timestamp, end: Timestamp },

    #[error("Validation failed: {0}")]
    Validation(String),
}
