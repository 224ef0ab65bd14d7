//! Collision-safe rename primitive

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tagsort_core::Result;

/// Outcome of a `safe_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Source was renamed to the target
    Moved,
    /// Source already is the target; nothing happened
    AlreadyInPlace,
    /// Something already exists at the target; nothing happened
    Collision,
}

/// Rename `source` to `target` without ever replacing an existing entry
///
/// Missing ancestor directories of `target` are created. The primitive
/// carries no policy: callers decide what a collision means.
pub fn safe_move(source: &Path, target: &Path) -> Result<MoveOutcome> {
    if source == target {
        return Ok(MoveOutcome::AlreadyInPlace);
    }

    if entry_exists(target)? {
        return Ok(MoveOutcome::Collision);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::rename(source, target) {
        Ok(()) => Ok(MoveOutcome::Moved),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(MoveOutcome::Collision),
        Err(e) => Err(e.into()),
    }
}

/// Whether any entry (file, directory, dangling symlink) exists at `path`
fn entry_exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
