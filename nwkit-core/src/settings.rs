//! Per-user settings at `<home>/.nwkit/config.yaml`.
//!
//! ```yaml
//! runtime_dir: /opt/nwkit-runtime     # holds cordova-lib/cordova.js
//! template_dir: /home/me/nwkit-tpl     # .tera overrides for the skeleton
//! ```
//!
//! Both keys are optional. A missing file yields [`Settings::default`].
//! CLI flags and environment variables take precedence over this file.
//!
//! # API pattern
//!
//! - `load_at(home)`: explicit home; used in tests with `TempDir`
//! - `load()`: derives home from `dirs::home_dir()`, delegates to `load_at`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, ProjectError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

/// `<home>/.nwkit/config.yaml`: pure, no I/O.
pub fn settings_path_at(home: &Path) -> PathBuf {
    home.join(".nwkit").join("config.yaml")
}

/// Load settings rooted at `home`.
pub fn load_at(home: &Path) -> Result<Settings, ProjectError> {
    let path = settings_path_at(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| ProjectError::Parse { path, source })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Settings, ProjectError> {
    let home = dirs::home_dir().ok_or(ProjectError::HomeNotFound)?;
    load_at(&home)
}
