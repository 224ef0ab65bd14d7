//! Plan building: discovery and classification of source files

use crate::quarantine::is_reserved_dir;
use crate::sanitize::sanitize_path_segment;
use std::io;
use std::path::{Path, PathBuf};
use tagsort_core::{Identity, IdentityExtractor, MovePlan, Result, TagsortError};
use walkdir::WalkDir;

/// Extension given to every organized track
pub const TRACK_EXTENSION: &str = "mp3";

/// Builds a move plan for a root directory
pub struct PlanBuilder<E> {
    extractor: E,
}

impl<E: IdentityExtractor> PlanBuilder<E> {
    /// Create a plan builder using the given identity extractor
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Classify every regular file under `root`
    ///
    /// Files are classified in sorted path order. A file is known when the
    /// extractor recognizes it and its identity yields a usable target path;
    /// every other file is unknown.
    pub fn build(&self, root: &Path) -> Result<MovePlan> {
        let files = discover_files(root)?;
        let mut plan = MovePlan::new();

        for file in files {
            let target = self
                .extractor
                .inspect(&file)
                .and_then(|identity| target_path(root, &identity));

            match target {
                Some(target) => {
                    tracing::debug!("Planned {} -> {}", file.display(), target.display());
                    plan.insert_known(file, target);
                }
                None => {
                    tracing::debug!("Unrecognized {}", file.display());
                    plan.push_unknown(file);
                }
            }
        }

        Ok(plan)
    }
}

/// List every regular file under `root`, sorted
///
/// Symbolic links and directories are skipped. Walk errors abort.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(TagsortError::InvalidRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// File name for a track: `"{:02} - {title}.mp3"`, or `"{title}.mp3"` without a number
pub fn track_file_name(identity: &Identity) -> String {
    let title = sanitize_path_segment(&identity.track_name);
    match identity.track_number {
        Some(number) => format!("{:02} - {}.{}", number, title, TRACK_EXTENSION),
        None => format!("{}.{}", title, TRACK_EXTENSION),
    }
}

/// Target path `root/artist/album/file name` for an identity
///
/// Returns `None` when a sanitized artist, album or title is empty, `.` or
/// `..`, since such a segment would not produce exactly one directory level
/// or a named file. An artist equal to a quarantine directory name is also
/// rejected so known tracks never land inside a reserved subtree.
pub fn target_path(root: &Path, identity: &Identity) -> Option<PathBuf> {
    let artist = sanitize_path_segment(&identity.artist_name);
    let album = sanitize_path_segment(&identity.album_name);
    let title = sanitize_path_segment(&identity.track_name);

    if !is_usable_segment(&artist) || is_reserved_dir(&artist) {
        return None;
    }
    if !is_usable_segment(&album) || !is_usable_segment(&title) {
        return None;
    }

    Some(root.join(artist).join(album).join(track_file_name(identity)))
}

fn is_usable_segment(segment: &str) -> bool {
    !matches!(segment, "" | "." | "..")
}
