//! core/relocate.rs
//! Move a file inside the library root.
//!
//! A move is:
//! 1. refuse if something else already sits at the target
//! 2. create the target's parent directories
//! 3. rename
//! 4. remove source directories left empty, walking up to (not including) the root

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::MoveError;

pub fn move_within(root: &Path, from: &Path, to: &Path) -> Result<(), MoveError> {
    let io_err = |source: io::Error| MoveError::Io {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if to.symlink_metadata().is_ok() && !is_same_file(from, to) {
        return Err(MoveError::TargetExists {
            path: to.to_path_buf(),
        });
    }

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::rename(from, to).map_err(io_err)?;

    prune_empty_dirs(root, from.parent());
    Ok(())
}

/// Remove `start` and its ancestors while they are empty and strictly below `root`.
pub fn prune_empty_dirs(root: &Path, start: Option<&Path>) {
    let mut dir = start;

    while let Some(d) = dir {
        if d == root || !d.starts_with(root) {
            break;
        }
        // Fails on non-empty directories, which ends the climb.
        if fs::remove_dir(d).is_err() {
            break;
        }
        debug!(dir = %d.display(), "removed empty directory");
        dir = d.parent();
    }
}

/// Case-only renames on case-insensitive filesystems resolve to the source itself.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
