//! Staged materialization of a new project tree.
//!
//! The tree is built under a hidden sibling of the target
//! (`.<name>.nwkit.tmp`) and moved into place with a single `rename`, so the
//! target is either fully populated or absent. Callers may add files to the
//! staged tree (the runtime asset) before committing.
//!
//! The occupancy check runs when staging starts and again right before the
//! rename. Between the second check and the rename another process could
//! still claim the path; that window is not defended against.

use std::path::{Path, PathBuf};

use serde_json::Value;

use nwkit_core::{layout, validate, ProjectDescriptor};

use crate::context::TemplateContext;
use crate::engine::{SkeletonEngine, MANIFEST_TEMPLATE};
use crate::error::{io_err, TemplateError};

/// Renders the skeleton into staged trees.
pub struct Materializer {
    engine: SkeletonEngine,
}

impl Materializer {
    pub fn new(engine: SkeletonEngine) -> Self {
        Materializer { engine }
    }

    /// Build the full skeleton for `descriptor` next to `target`.
    ///
    /// Fails with [`TemplateError::AlreadyExists`] if `target` is occupied.
    /// Missing parent directories of `target` are created.
    pub fn stage(
        &self,
        target: &Path,
        descriptor: &ProjectDescriptor,
    ) -> Result<StagedTree, TemplateError> {
        if !validate::can_create(target) {
            return Err(TemplateError::AlreadyExists {
                path: target.to_path_buf(),
            });
        }

        let staging = layout::staging_path(target);
        remove_leftover(&staging)?;
        if let Some(parent) = staging.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        std::fs::create_dir(&staging).map_err(|e| io_err(&staging, e))?;

        // From here on, dropping `tree` on an error path removes the staging dir.
        let tree = StagedTree {
            staging,
            target: target.to_path_buf(),
            committed: false,
        };

        let ctx = TemplateContext::from_descriptor(descriptor);
        for file in self.engine.render(&ctx)? {
            let path = tree.staging.join(&file.path);
            let bytes = if file.template == MANIFEST_TEMPLATE {
                let base: Value = serde_json::from_str(&file.content)?;
                descriptor.serialize_onto(base)?
            } else {
                file.content.into_bytes()
            };
            write_file(&path, &bytes)?;
        }

        let www = layout::web_assets_dir(&tree.staging);
        std::fs::create_dir_all(&www).map_err(|e| io_err(&www, e))?;

        tracing::debug!(staging = %tree.staging.display(), "staged project tree");
        Ok(tree)
    }

    /// [`stage`](Self::stage) then [`commit`](StagedTree::commit).
    pub fn materialize(
        &self,
        target: &Path,
        descriptor: &ProjectDescriptor,
    ) -> Result<PathBuf, TemplateError> {
        self.stage(target, descriptor)?.commit()
    }
}

/// A fully rendered project tree waiting to be moved into place.
///
/// Dropped without [`commit`](Self::commit), the staging directory is removed.
#[derive(Debug)]
pub struct StagedTree {
    staging: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedTree {
    /// Root of the staged tree.
    pub fn root(&self) -> &Path {
        &self.staging
    }

    /// Staged `app/www`.
    pub fn web_assets_dir(&self) -> PathBuf {
        layout::web_assets_dir(&self.staging)
    }

    /// Move the staged tree onto the target path.
    pub fn commit(mut self) -> Result<PathBuf, TemplateError> {
        if !validate::can_create(&self.target) {
            return Err(TemplateError::AlreadyExists {
                path: self.target.clone(),
            });
        }
        std::fs::rename(&self.staging, &self.target).map_err(|e| io_err(&self.target, e))?;
        self.committed = true;
        tracing::info!(path = %self.target.display(), "created project");
        Ok(self.target.clone())
    }
}

impl Drop for StagedTree {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(err) = std::fs::remove_dir_all(&self.staging) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.staging.display(),
                    error = %err,
                    "failed to remove staging directory"
                );
            }
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), TemplateError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| io_err(path, e))
}

/// Remove whatever a crashed earlier run left at `staging`.
fn remove_leftover(staging: &Path) -> Result<(), TemplateError> {
    let meta = match std::fs::symlink_metadata(staging) {
        Ok(meta) => meta,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(io_err(staging, err)),
    };
    tracing::warn!(path = %staging.display(), "removing leftover staging directory");
    if meta.is_dir() {
        std::fs::remove_dir_all(staging).map_err(|e| io_err(staging, e))
    } else {
        std::fs::remove_file(staging).map_err(|e| io_err(staging, e))
    }
}
