//! Path predicates deciding whether `create` or `update` may proceed.
//!
//! Both are point-in-time checks with no side effects. Nothing prevents the
//! filesystem from changing between the check and the operation that follows.

use std::path::Path;

use crate::layout;

/// True iff nothing exists at `path`. A dangling symlink counts as occupied,
/// and so does a path that cannot be inspected.
pub fn can_create(path: &Path) -> bool {
    matches!(
        std::fs::symlink_metadata(path),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound
    )
}

/// True iff `path` is a directory holding an `app/` directory.
pub fn can_update(path: &Path) -> bool {
    path.is_dir() && layout::app_dir(path).is_dir()
}
