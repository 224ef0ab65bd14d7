/// Move plan domain types
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A proposed or executed relocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Current location
    pub source: PathBuf,

    /// Desired location
    pub target: PathBuf,
}

/// Result of classifying every file under a root directory
///
/// Known moves are keyed (and iterated) by source path, so executing the
/// plan is deterministic for identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovePlan {
    /// Classified files: source path to metadata-derived target path
    pub known_moves: BTreeMap<PathBuf, PathBuf>,

    /// Unclassified files, in classification order
    pub unknown_moves: Vec<PathBuf>,
}

impl MovePlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified file
    pub fn insert_known(&mut self, source: PathBuf, target: PathBuf) {
        self.known_moves.insert(source, target);
    }

    /// Record an unclassified file
    pub fn push_unknown(&mut self, source: PathBuf) {
        self.unknown_moves.push(source);
    }

    /// Iterate the known moves in source order
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.known_moves.iter().map(|(source, target)| Move {
            source: source.clone(),
            target: target.clone(),
        })
    }

    /// Whether a source path appears anywhere in the plan
    pub fn contains(&self, source: &Path) -> bool {
        self.known_moves.contains_key(source) || self.unknown_moves.iter().any(|p| p == source)
    }

    /// Total number of files in the plan
    pub fn len(&self) -> usize {
        self.known_moves.len() + self.unknown_moves.len()
    }

    /// Whether the plan holds no files
    pub fn is_empty(&self) -> bool {
        self.known_moves.is_empty() && self.unknown_moves.is_empty()
    }
}
