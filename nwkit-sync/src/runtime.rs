//! Runtime library providers.
//!
//! A runtime library is anything that can hand out the current bytes of the
//! bootstrap asset (`cordova.js`). nwkit never looks inside those bytes.

use std::path::{Path, PathBuf};

use nwkit_core::layout;

use crate::error::{io_err, SyncError};

/// Copy of `cordova-lib/cordova.js` bundled into the binary.
pub const EMBEDDED_RUNTIME: &[u8] = include_bytes!("../assets/cordova-lib/cordova.js");

/// Source of the canonical runtime bootstrap asset.
pub trait RuntimeLibrary {
    /// Current canonical asset bytes.
    fn current_asset_bytes(&self) -> Result<Vec<u8>, SyncError>;

    /// Short human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// A runtime library distribution on disk: `<root>/cordova-lib/cordova.js`.
#[derive(Debug, Clone)]
pub struct DirRuntimeLibrary {
    root: PathBuf,
}

impl DirRuntimeLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn asset_path(&self) -> PathBuf {
        layout::library_asset_path(&self.root)
    }
}

impl RuntimeLibrary for DirRuntimeLibrary {
    fn current_asset_bytes(&self) -> Result<Vec<u8>, SyncError> {
        let path = self.asset_path();
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(SyncError::RuntimeAssetMissing { path })
            }
            Err(err) => Err(io_err(path, err)),
        }
    }

    fn describe(&self) -> String {
        self.asset_path().display().to_string()
    }
}

/// The asset compiled into this binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRuntimeLibrary;

impl RuntimeLibrary for EmbeddedRuntimeLibrary {
    fn current_asset_bytes(&self) -> Result<Vec<u8>, SyncError> {
        Ok(EMBEDDED_RUNTIME.to_vec())
    }

    fn describe(&self) -> String {
        format!("embedded (nwkit {})", env!("CARGO_PKG_VERSION"))
    }
}

/// Caller-supplied bytes. Handy for tests and for embedding nwkit elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuntimeLibrary {
    bytes: Vec<u8>,
}

impl InMemoryRuntimeLibrary {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Replace the canonical bytes, as a library upgrade would.
    pub fn set(&mut self, bytes: impl Into<Vec<u8>>) {
        self.bytes = bytes.into();
    }
}

impl RuntimeLibrary for InMemoryRuntimeLibrary {
    fn current_asset_bytes(&self) -> Result<Vec<u8>, SyncError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} bytes)", self.bytes.len())
    }
}

/// A library directory when one is configured, the embedded copy otherwise.
pub fn resolve(runtime_dir: Option<&Path>) -> Box<dyn RuntimeLibrary> {
    match runtime_dir {
        Some(dir) => Box::new(DirRuntimeLibrary::new(dir)),
        None => Box::new(EmbeddedRuntimeLibrary),
    }
}
