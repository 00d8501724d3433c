use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum AutoCatError {
    /// No game database was provided; nothing can be categorized.
    #[error("game database is unavailable, categorization aborted")]
    DatabaseUnavailable,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid autocat profile: {0}")]
    ProfileRead(String),

    #[error("failed to write autocat profile: {0}")]
    ProfileWrite(String),
}
