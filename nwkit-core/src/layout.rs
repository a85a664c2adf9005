//! Fixed on-disk layout of a project tree and of a runtime library.
//!
//! ```text
//! <root>/
//!   app/
//!     package.json
//!     www/
//!       cordova.js
//!       index.html ...
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "app";
pub const WEB_ASSETS_DIR: &str = "www";
pub const MANIFEST_FILE: &str = "package.json";
pub const RUNTIME_ASSET: &str = "cordova.js";

/// Manifest `main` value; relative to the app directory.
pub const MAIN_ENTRY: &str = "www/index.html";

/// Directory inside a runtime library distribution holding the asset.
pub const RUNTIME_LIB_DIR: &str = "cordova-lib";

/// Suffix for the staging sibling used while materializing a new project.
pub const STAGING_SUFFIX: &str = ".nwkit.tmp";

pub fn app_dir(root: &Path) -> PathBuf {
    root.join(APP_DIR)
}

pub fn web_assets_dir(root: &Path) -> PathBuf {
    app_dir(root).join(WEB_ASSETS_DIR)
}

pub fn manifest_path(root: &Path) -> PathBuf {
    app_dir(root).join(MANIFEST_FILE)
}

pub fn runtime_asset_path(root: &Path) -> PathBuf {
    web_assets_dir(root).join(RUNTIME_ASSET)
}

/// `<library_root>/cordova-lib/cordova.js`
pub fn library_asset_path(library_root: &Path) -> PathBuf {
    library_root.join(RUNTIME_LIB_DIR).join(RUNTIME_ASSET)
}

/// Hidden sibling of `target` used as the staging root: `<parent>/.<name>.nwkit.tmp`.
///
/// Kept in the same directory as the target so the final rename never
/// crosses a filesystem boundary.
pub fn staging_path(target: &Path) -> PathBuf {
    let parent = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or(target.as_os_str()));
    name.push(STAGING_SUFFIX);
    parent.join(name)
}
