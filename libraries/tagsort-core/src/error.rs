/// Core error types for tagsort
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `TagsortError`
pub type Result<T> = std::result::Result<T, TagsortError>;

/// Core error type for tagsort
///
/// Every variant aborts the run. Target collisions are not errors; they are
/// reported through the move outcome instead.
#[derive(Error, Debug)]
pub enum TagsortError {
    /// I/O errors (unreadable source, failed rename, failed directory walk)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Root directory missing or not a directory
    #[error("Invalid root directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// Path outside the root or without a file name
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A different blocker was recorded for a target that already has one
    #[error(
        "Blocker mismatch for {}: recorded {}, attempted {}",
        .target.display(),
        .existing.display(),
        .attempted.display()
    )]
    BlockerMismatch {
        /// Contested target path
        target: PathBuf,
        /// Blocker already recorded for the target
        existing: PathBuf,
        /// Blocker that was rejected
        attempted: PathBuf,
    },

    /// A deferred file was recorded before its target had a blocker
    #[error("No blocker recorded for target: {}", .0.display())]
    MissingBlocker(PathBuf),
}

impl TagsortError {
    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Whether this error signals a bug in the engine rather than bad input
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::BlockerMismatch { .. } | Self::MissingBlocker(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_violations_are_flagged() {
        let mismatch = TagsortError::BlockerMismatch {
            target: PathBuf::from("/music/a.mp3"),
            existing: PathBuf::from("/music/a.mp3"),
            attempted: PathBuf::from("/music/b.mp3"),
        };
        assert!(mismatch.is_invariant_violation());
        assert!(TagsortError::MissingBlocker(PathBuf::from("/x")).is_invariant_violation());
        assert!(!TagsortError::invalid_path("nope").is_invariant_violation());
    }

    #[test]
    fn blocker_mismatch_message_names_paths() {
        let err = TagsortError::BlockerMismatch {
            target: PathBuf::from("/music/t.mp3"),
            existing: PathBuf::from("/music/t.mp3"),
            attempted: PathBuf::from("/music/other.mp3"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/music/t.mp3"));
        assert!(msg.contains("/music/other.mp3"));
    }
}
