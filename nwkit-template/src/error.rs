//! Error types for nwkit-template.

use std::path::PathBuf;

use thiserror::Error;

use nwkit_core::ProjectError;

/// All errors that can arise while rendering or materializing the skeleton.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON error while building the tera context or reading the base manifest.
    #[error("template JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Manifest merge failure.
    #[error("manifest error: {0}")]
    Manifest(#[from] ProjectError),

    /// Filesystem error while loading user templates or writing the tree.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target path was occupied when staging began or at commit time.
    #[error("target already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> TemplateError {
    TemplateError::Io {
        path: path.into(),
        source,
    }
}
