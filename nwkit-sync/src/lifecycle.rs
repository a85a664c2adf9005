//! `create` and `update`, the two project lifecycle operations.
//!
//! Shared entrypoint for the `create` and `update` binaries. Argument
//! validation happens before these are called; everything from the path
//! checks onward lives here.

use std::path::{Path, PathBuf};

use nwkit_core::{layout, validate, PackageId, ProjectDescriptor, ProjectName};
use nwkit_template::{Materializer, TemplateError};

use crate::error::LifecycleError;
use crate::writer::{RuntimeSynchronizer, WriteResult};

/// Command line usage error (sysexits `EX_USAGE`).
pub const EX_USAGE: i32 = 64;
/// Input missing (sysexits `EX_NOINPUT`).
pub const EX_NOINPUT: i32 = 66;
/// I/O failure (sysexits `EX_IOERR`).
pub const EX_IOERR: i32 = 74;

impl LifecycleError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            LifecycleError::PathConflict { .. } => EX_USAGE,
            LifecycleError::NotFound { .. } => EX_NOINPUT,
            LifecycleError::Template(_) | LifecycleError::Sync(_) => EX_IOERR,
        }
    }
}

/// What `create` produced.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub root: PathBuf,
    pub descriptor: ProjectDescriptor,
    pub runtime: WriteResult,
}

/// Sequences path checks, materialization and runtime sync.
pub struct Lifecycle {
    materializer: Materializer,
    synchronizer: RuntimeSynchronizer,
}

impl Lifecycle {
    pub fn new(materializer: Materializer, synchronizer: RuntimeSynchronizer) -> Self {
        Self {
            materializer,
            synchronizer,
        }
    }

    /// Materialize a new project at `target`.
    ///
    /// The skeleton and runtime asset are assembled in a staging sibling and
    /// renamed into place; on any error neither the target nor the staging
    /// directory remains.
    pub fn create(
        &self,
        target: &Path,
        package_id: PackageId,
        project_name: ProjectName,
    ) -> Result<CreateOutcome, LifecycleError> {
        if !validate::can_create(target) {
            return Err(LifecycleError::PathConflict {
                path: target.to_path_buf(),
            });
        }

        let window_title = project_name.to_string();
        let descriptor = ProjectDescriptor::build(project_name, package_id, window_title);

        let staged = self
            .materializer
            .stage(target, &descriptor)
            .map_err(|e| conflict_or(e, target))?;
        let runtime = self.synchronizer.sync(&staged.web_assets_dir())?;
        let root = staged.commit().map_err(|e| conflict_or(e, target))?;

        // The synced path pointed into the staging tree.
        let runtime = match runtime {
            WriteResult::Written { .. } => WriteResult::Written {
                path: layout::runtime_asset_path(&root),
            },
            WriteResult::Unchanged { .. } => WriteResult::Unchanged {
                path: layout::runtime_asset_path(&root),
            },
        };

        Ok(CreateOutcome {
            root,
            descriptor,
            runtime,
        })
    }

    /// See [`update`].
    pub fn update(&self, target: &Path) -> Result<WriteResult, LifecycleError> {
        update(&self.synchronizer, target)
    }
}

/// Refresh the runtime asset of the project at `target`. Nothing else is
/// read or written apart from `app/www/cordova.js`.
pub fn update(
    synchronizer: &RuntimeSynchronizer,
    target: &Path,
) -> Result<WriteResult, LifecycleError> {
    if !validate::can_update(target) {
        return Err(LifecycleError::NotFound {
            path: target.to_path_buf(),
        });
    }
    let result = synchronizer.sync(&layout::web_assets_dir(target))?;
    Ok(result)
}

/// A late `AlreadyExists` means someone claimed the path after our check.
fn conflict_or(err: TemplateError, target: &Path) -> LifecycleError {
    match err {
        TemplateError::AlreadyExists { .. } => LifecycleError::PathConflict {
            path: target.to_path_buf(),
        },
        other => LifecycleError::Template(other),
    }
}
