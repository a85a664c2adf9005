//! Error types for nwkit-sync.

use std::path::PathBuf;

use thiserror::Error;

use nwkit_template::TemplateError;

/// Errors from reading the runtime library or writing the project's copy.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The runtime library directory does not contain the bootstrap asset.
    #[error("runtime asset not found at {path}")]
    RuntimeAssetMissing { path: PathBuf },
}

/// Terminal outcome of a failed `create` or `update`.
///
/// The two contract variants display exactly the message the CLI prints.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// `create` target is already occupied.
    #[error("Project already exists. Delete and recreate")]
    PathConflict { path: PathBuf },

    /// `update` target is missing or lacks the project shape.
    #[error("Project not found")]
    NotFound { path: PathBuf },

    /// Skeleton rendering or materialization failed.
    #[error("failed to materialize project: {0}")]
    Template(#[from] TemplateError),

    /// Runtime asset read or write failed.
    #[error("failed to sync runtime asset: {0}")]
    Sync(#[from] SyncError),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
