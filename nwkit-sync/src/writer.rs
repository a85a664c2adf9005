//! Runtime asset synchronizer.
//!
//! ## `atomic_write` protocol
//!
//! 1. SHA-256 the canonical bytes.
//! 2. SHA-256 the project's current copy (if any).
//! 3. Equal → skip; the file and its mtime stay untouched.
//! 4. Write to a hidden sibling `.<file>.<pid>.nwkit.tmp`.
//! 5. Rename to final path (atomic on POSIX).
//!
//! A failed write or rename removes the tmp file, so only `cordova.js` is
//! left changed in the target directory.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use nwkit_core::layout;

use crate::error::{io_err, SyncError};
use crate::runtime::RuntimeLibrary;

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of synchronizing the runtime asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File already matched the canonical bytes.
    Unchanged { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Unchanged { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Digest of the file at `path`, or `None` if there is no file.
fn current_digest(path: &Path) -> Result<Option<String>, SyncError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(sha256_hex(&bytes))),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

/// Hidden, per-process tmp sibling of `path`.
fn tmp_path_for(path: &Path) -> PathBuf {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file}.{}.nwkit.tmp", std::process::id()))
}

pub(crate) fn atomic_write(path: &Path, content: &[u8]) -> Result<WriteResult, SyncError> {
    atomic_write_with_tmp(path, content, &tmp_path_for(path))
}

fn atomic_write_with_tmp(path: &Path, content: &[u8], tmp: &Path) -> Result<WriteResult, SyncError> {
    let digest = sha256_hex(content);
    let short = &digest[..12];

    if current_digest(path)?.as_deref() == Some(digest.as_str()) {
        tracing::debug!(path = %path.display(), sha256 = %short, "unchanged");
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    if let Err(e) = std::fs::write(tmp, content) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(tmp, e));
    }

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!(path = %path.display(), sha256 = %short, "wrote runtime asset");
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// RuntimeSynchronizer
// ---------------------------------------------------------------------------

/// Keeps a project's `www/cordova.js` byte-identical to a runtime library.
pub struct RuntimeSynchronizer {
    library: Box<dyn RuntimeLibrary>,
}

impl RuntimeSynchronizer {
    pub fn new(library: Box<dyn RuntimeLibrary>) -> Self {
        Self { library }
    }

    /// Copy the canonical asset into `web_assets_dir`, replacing any existing
    /// `cordova.js`. `web_assets_dir` is created if missing.
    pub fn sync(&self, web_assets_dir: &Path) -> Result<WriteResult, SyncError> {
        let bytes = self.library.current_asset_bytes()?;
        tracing::debug!(
            source = %self.library.describe(),
            target = %web_assets_dir.display(),
            "syncing runtime asset"
        );
        atomic_write(&web_assets_dir.join(layout::RUNTIME_ASSET), &bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
