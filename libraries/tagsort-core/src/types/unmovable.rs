/// Collision bookkeeping types
use crate::error::{Result, TagsortError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A file together with the hex SHA-256 digest of its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAndHash {
    /// File location
    pub filepath: PathBuf,

    /// Lowercase hex content digest
    pub hash: String,
}

impl FileAndHash {
    /// Pair a path with its digest
    pub fn new(filepath: impl Into<PathBuf>, hash: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            hash: hash.into(),
        }
    }

    /// Whether both files have identical content
    pub fn same_content(&self, other: &FileAndHash) -> bool {
        self.hash == other.hash
    }
}

/// Files that lost the race for one target path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmovableSet {
    /// File already occupying the target
    pub blocker: FileAndHash,

    /// Sources that wanted the target, in the order they were deferred
    pub unmovables: Vec<FileAndHash>,
}

impl UnmovableSet {
    /// Start a set with its blocker and no deferred files
    pub fn new(blocker: FileAndHash) -> Self {
        Self {
            blocker,
            unmovables: Vec::new(),
        }
    }
}

/// Unmovable sets keyed by the contested target path
///
/// Iteration is ordered by target path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmovableSets {
    sets: BTreeMap<PathBuf, UnmovableSet>,
}

impl UnmovableSets {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocker recorded for a target, if any
    pub fn blocker(&self, target: &Path) -> Option<&FileAndHash> {
        self.sets.get(target).map(|set| &set.blocker)
    }

    /// Record the blocker for a target
    ///
    /// Recording the same blocker path again is a no-op. Recording a blocker
    /// with a different path under an existing target is an invariant violation.
    pub fn open(&mut self, target: PathBuf, blocker: FileAndHash) -> Result<()> {
        match self.sets.get(&target) {
            Some(set) if set.blocker.filepath != blocker.filepath => {
                Err(TagsortError::BlockerMismatch {
                    existing: set.blocker.filepath.clone(),
                    attempted: blocker.filepath,
                    target,
                })
            }
            Some(_) => Ok(()),
            None => {
                self.sets.insert(target, UnmovableSet::new(blocker));
                Ok(())
            }
        }
    }

    /// Defer a source that collided on `target`
    ///
    /// The target must already have a blocker.
    pub fn defer(&mut self, target: &Path, unmovable: FileAndHash) -> Result<()> {
        let set = self
            .sets
            .get_mut(target)
            .ok_or_else(|| TagsortError::MissingBlocker(target.to_path_buf()))?;
        set.unmovables.push(unmovable);
        Ok(())
    }

    /// Number of deferred files across all targets
    pub fn deferred_count(&self) -> usize {
        self.sets.values().map(|set| set.unmovables.len()).sum()
    }

    /// Number of contested targets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no collision was recorded
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate sets in target order
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &UnmovableSet)> {
        self.sets.iter()
    }
}

impl IntoIterator for UnmovableSets {
    type Item = (PathBuf, UnmovableSet);
    type IntoIter = std::collections::btree_map::IntoIter<PathBuf, UnmovableSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}
