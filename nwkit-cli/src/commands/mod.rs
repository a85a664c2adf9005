//! Argument sets for the `create` and `update` binaries.

pub mod create;
pub mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};

use nwkit_core::{settings, ProjectError, Settings};
use nwkit_sync::{runtime, RuntimeSynchronizer};

/// Settings from `~/.nwkit/config.yaml`; defaults when there is no home.
pub(crate) fn load_settings() -> Result<Settings> {
    match settings::load() {
        Ok(settings) => Ok(settings),
        Err(ProjectError::HomeNotFound) => Ok(Settings::default()),
        Err(err) => Err(err).context("failed to load nwkit settings"),
    }
}

/// Flag/env value first, then the settings file, then the embedded copy.
pub(crate) fn runtime_synchronizer(
    flag: Option<PathBuf>,
    settings: &Settings,
) -> RuntimeSynchronizer {
    let dir = flag.or_else(|| settings.runtime_dir.clone());
    let library = runtime::resolve(dir.as_deref());
    tracing::debug!(source = %library.describe(), "runtime library");
    RuntimeSynchronizer::new(library)
}
