//! Quarantine routing for deferred and unknown files
//!
//! Quarantined files land under reserved directories at the root, mirroring
//! the relative path of the location they were meant to occupy:
//!
//! | Directory | Contents |
//! |-----------|----------|
//! | `.duplicate` | Same content as the file holding their target |
//! | `.unmovable` | Different content from the file holding their target |
//! | `.unknown` | Files without a recognized identity |
//!
//! Deferred files get their content hash appended to the file name; any
//! remaining collision is resolved with an increasing numeric suffix.

use crate::mover::{safe_move, MoveOutcome};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tagsort_core::{FileAndHash, Result, TagsortError, UnmovableSets};

/// Directory for deferred files identical to their blocker
pub const DUPLICATE_DIR: &str = ".duplicate";

/// Directory for deferred files that differ from their blocker
pub const UNMOVABLE_DIR: &str = ".unmovable";

/// Directory for unrecognized files
pub const UNKNOWN_DIR: &str = ".unknown";

const RESERVED_DIRS: [&str; 3] = [DUPLICATE_DIR, UNMOVABLE_DIR, UNKNOWN_DIR];

/// Quarantine destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarantineKind {
    /// `.duplicate`
    Duplicate,
    /// `.unmovable`
    Unmovable,
    /// `.unknown`
    Unknown,
}

impl QuarantineKind {
    /// Reserved directory name under the root
    pub fn dir_name(self) -> &'static str {
        match self {
            QuarantineKind::Duplicate => DUPLICATE_DIR,
            QuarantineKind::Unmovable => UNMOVABLE_DIR,
            QuarantineKind::Unknown => UNKNOWN_DIR,
        }
    }

    /// Destination for a deferred file given the blocker of its target
    pub fn for_deferred(blocker: &FileAndHash, deferred: &FileAndHash) -> Self {
        if deferred.same_content(blocker) {
            QuarantineKind::Duplicate
        } else {
            QuarantineKind::Unmovable
        }
    }
}

/// Where a quarantined file ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Final location
    pub path: PathBuf,

    /// `Moved`, or `AlreadyInPlace` when the file already sat there
    pub outcome: MoveOutcome,
}

/// Counts from routing deferred files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuarantineStats {
    /// Files routed to `.duplicate`
    pub duplicates: usize,

    /// Files routed to `.unmovable`
    pub unmovable: usize,
}

/// Path of `path` relative to `root`, without leading reserved directories
///
/// The file name itself is never stripped.
pub fn relative_to_root(root: &Path, path: &Path) -> Result<PathBuf> {
    let relative = path.strip_prefix(root).map_err(|_| {
        TagsortError::invalid_path(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;

    let components: Vec<Component<'_>> = relative.components().collect();
    let Some((file_name, dirs)) = components.split_last() else {
        return Err(TagsortError::invalid_path(format!(
            "{} has no file name",
            path.display()
        )));
    };

    let kept = dirs.iter().skip_while(|c| is_reserved(c));
    Ok(kept.chain(std::iter::once(file_name)).collect())
}

fn is_reserved(component: &Component<'_>) -> bool {
    match component {
        Component::Normal(name) => RESERVED_DIRS.iter().any(|dir| *name == OsStr::new(dir)),
        _ => false,
    }
}

/// Whether `name` is one of the quarantine directory names
pub fn is_reserved_dir(name: &str) -> bool {
    RESERVED_DIRS.contains(&name)
}

/// `root/<kind dir>/<relative path of desired>`
pub fn quarantine_base(root: &Path, kind: QuarantineKind, desired: &Path) -> Result<PathBuf> {
    Ok(root
        .join(kind.dir_name())
        .join(relative_to_root(root, desired)?))
}

/// Append `_<suffix>` to the file stem, keeping the extension
///
/// "song.mp3" -> "song_abc.mp3"
pub fn with_suffix(path: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = path
        .file_stem()
        .ok_or_else(|| TagsortError::invalid_path(format!("{} has no file name", path.display())))?;

    let mut name = stem.to_os_string();
    name.push("_");
    name.push(suffix);
    if let Some(extension) = path.extension() {
        name.push(".");
        name.push(extension);
    }

    Ok(path.with_file_name(name))
}

/// Move `source` to the first free name derived from `base`
///
/// With a hash the candidates are `stem_<hash>.ext`, `stem_<hash>_1.ext`,
/// `stem_<hash>_2.ext`, ...; without one they are `base`, `stem_1.ext`,
/// `stem_2.ext`, ... The search is unbounded; every attempt uses a new name.
pub fn place_collision_free(source: &Path, base: &Path, hash: Option<&str>) -> Result<Placement> {
    let mut candidate = match hash {
        Some(hash) => with_suffix(base, hash)?,
        None => base.to_path_buf(),
    };
    let mut counter: u64 = 0;

    loop {
        match safe_move(source, &candidate)? {
            MoveOutcome::Collision => {
                counter += 1;
                let suffix = match hash {
                    Some(hash) => format!("{}_{}", hash, counter),
                    None => counter.to_string(),
                };
                candidate = with_suffix(base, &suffix)?;
            }
            outcome => {
                return Ok(Placement {
                    path: candidate,
                    outcome,
                })
            }
        }
    }
}

/// Route every deferred file into `.duplicate` or `.unmovable`
///
/// Consumes the sets; each deferred file is placed exactly once.
pub fn route_unmovables(root: &Path, sets: UnmovableSets) -> Result<QuarantineStats> {
    let mut stats = QuarantineStats::default();

    for (target, set) in sets {
        for deferred in &set.unmovables {
            let kind = QuarantineKind::for_deferred(&set.blocker, deferred);
            let base = quarantine_base(root, kind, &set.blocker.filepath)?;
            let placement = place_collision_free(&deferred.filepath, &base, Some(&deferred.hash))?;

            tracing::debug!(
                "Quarantined {} -> {} (target {})",
                deferred.filepath.display(),
                placement.path.display(),
                target.display()
            );

            match kind {
                QuarantineKind::Duplicate => stats.duplicates += 1,
                _ => stats.unmovable += 1,
            }
        }
    }

    Ok(stats)
}

/// Move an unrecognized file under `.unknown`, keeping its relative path
///
/// Unknown files are never hashed; a name already taken under `.unknown`
/// gets a numeric suffix.
pub fn relocate_unknown(root: &Path, file: &Path) -> Result<Placement> {
    let base = quarantine_base(root, QuarantineKind::Unknown, file)?;
    let placement = place_collision_free(file, &base, None)?;
    if placement.path != base {
        tracing::warn!(
            "{} is taken, placed {} instead",
            base.display(),
            placement.path.display()
        );
    }
    Ok(placement)
}
