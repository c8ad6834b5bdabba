use thiserror::Error;
use uuid::Uuid;

/// Error type that captures store failures: storage faults, validation
/// rejections, and lookup misses. Rejected mutations leave state unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    Invalid(String),
    #[error("Group `{0}` not found")]
    GroupNotFound(Uuid),
    #[error("Code `{code}` not found in group `{group}`")]
    CodeNotFound { group: Uuid, code: String },
    #[error("Entry `{0}` not found")]
    EntryNotFound(Uuid),
}
