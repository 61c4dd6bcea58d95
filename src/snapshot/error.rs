//! Snapshot error types.

use thiserror::Error;

/// Why a snapshot could not be written or read back
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot binary codec failed: {0}")]
    Binary(#[from] bincode::Error),

    /// Written by a build with a different snapshot layout
    #[error("Snapshot {id} has format version {found}, this build reads version {supported}")]
    UnsupportedVersion {
        id: String,
        found: u32,
        supported: u32,
    },
}
