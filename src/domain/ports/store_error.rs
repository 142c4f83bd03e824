//! Store errors shared by every persistence port

use std::path::PathBuf;

use crate::domain::value_objects::EntityKind;

/// Result type for persistence port operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to lock store {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize store: {message}")]
    Serialization { message: String },

    #[error(
        "store file corrupted: {path}\n  → Fix: restore a backup or delete the file to start empty\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    /// Update or delete targeted a row that is not there
    #[error("no {kind} row with id {id}")]
    NoRowAffected { kind: EntityKind, id: u64 },
}
