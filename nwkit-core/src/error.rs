//! Error types for nwkit-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from descriptor, manifest, and settings handling.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Underlying I/O failure, with the path that was being touched.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encode/decode error on the project manifest.
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest parsed as JSON but does not have the expected shape.
    #[error("malformed manifest: {0}")]
    ManifestShape(String),

    /// Settings YAML parse error on load, with the file path.
    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A project name that cannot be used for a new project.
    #[error("invalid project name '{value}': {reason}")]
    InvalidName { value: String, reason: &'static str },

    /// A package identifier that cannot be used for a new project.
    #[error("invalid package id '{value}': {reason}")]
    InvalidPackageId { value: String, reason: &'static str },

    /// `dirs::home_dir()` returned `None`; cannot locate `~/.nwkit/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`ProjectError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ProjectError {
    ProjectError::Io {
        path: path.into(),
        source,
    }
}
