//! Plan execution: the main move pass

use crate::hasher::file_and_hash;
use crate::mover::{safe_move, MoveOutcome};
use tagsort_core::{Move, MovePlan, Result, UnmovableSets};

/// Result of the main move pass
#[derive(Debug, Default)]
pub struct Resolution {
    /// Files renamed to their target
    pub placed: usize,

    /// Files that already were at their target
    pub already_in_place: usize,

    /// Files that collided, grouped by contested target
    pub deferred: UnmovableSets,
}

/// Move every known file to its target
///
/// A collision does not drop the move: the source is deferred under its
/// target, and the file occupying the target becomes that target's blocker.
/// Both are hashed at that point. Deferred files are left where they are
/// for the quarantine pass.
pub fn execute_moves(plan: &MovePlan) -> Result<Resolution> {
    let mut resolution = Resolution::default();

    for Move { source, target } in plan.moves() {
        match safe_move(&source, &target)? {
            MoveOutcome::Moved => {
                tracing::debug!("Moved {} -> {}", source.display(), target.display());
                resolution.placed += 1;
            }
            MoveOutcome::AlreadyInPlace => {
                resolution.already_in_place += 1;
            }
            MoveOutcome::Collision => {
                tracing::debug!("Deferred {}: {} is taken", source.display(), target.display());
                if resolution.deferred.blocker(&target).is_none() {
                    let blocker = file_and_hash(&target)?;
                    resolution.deferred.open(target.clone(), blocker)?;
                }
                resolution.deferred.defer(&target, file_and_hash(&source)?)?;
            }
        }
    }

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::hash_file;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collisions_are_grouped_under_target() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        let target = base.join("a").join("b").join("c.mp3");
        for name in ["1.mp3", "2.mp3", "3.mp3"] {
            fs::write(base.join(name), name.as_bytes()).unwrap();
        }

        let mut plan = MovePlan::new();
        for name in ["1.mp3", "2.mp3", "3.mp3"] {
            plan.insert_known(base.join(name), target.clone());
        }

        let resolution = execute_moves(&plan).unwrap();
        assert_eq!(resolution.placed, 1);
        assert_eq!(resolution.deferred.len(), 1);
        assert_eq!(resolution.deferred.deferred_count(), 2);

        let blocker = resolution.deferred.blocker(&target).unwrap();
        assert_eq!(blocker.filepath, target);
        assert_eq!(blocker.hash, hash_file(&target).unwrap());
        assert_eq!(fs::read(&target).unwrap(), b"1.mp3");

        let (_, set) = resolution.deferred.iter().next().unwrap();
        let deferred: Vec<_> = set.unmovables.iter().map(|f| f.filepath.clone()).collect();
        assert_eq!(deferred, vec![base.join("2.mp3"), base.join("3.mp3")]);
        assert!(base.join("2.mp3").exists());
        assert!(base.join("3.mp3").exists());
    }

    #[test]
    fn test_in_place_files_are_counted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c.mp3");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"x").unwrap();

        let mut plan = MovePlan::new();
        plan.insert_known(path.clone(), path);

        let resolution = execute_moves(&plan).unwrap();
        assert_eq!(resolution.already_in_place, 1);
        assert_eq!(resolution.placed, 0);
        assert!(resolution.deferred.is_empty());
    }
}
