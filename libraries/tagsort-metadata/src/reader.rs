/// Identity extraction using lofty
use crate::error::Result;
use lofty::{Accessor, Probe, Tag, TaggedFileExt};
use std::borrow::Cow;
use std::path::Path;
use tagsort_core::{Identity, IdentityExtractor};

/// Identity extractor using the lofty library
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyIdentityExtractor;

impl LoftyIdentityExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl IdentityExtractor for LoftyIdentityExtractor {
    fn inspect(&self, path: &Path) -> Option<Identity> {
        match read_identity(path) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::debug!("No readable tags in {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Read the identity of a file
///
/// The container format is detected from content, not from the extension.
/// Returns `Ok(None)` when the file has no tag or the tag is incomplete.
pub fn read_identity(path: &Path) -> Result<Option<Identity>> {
    let tagged_file = Probe::open(path)?.guess_file_type()?.read()?;

    // Prefer the format's primary tag (ID3v2 for MP3), fall back to any tag
    let Some(tag) = tagged_file.primary_tag().or(tagged_file.first_tag()) else {
        return Ok(None);
    };

    Ok(identity_from_tag(tag))
}

/// Build an identity from a tag
///
/// Artist, album and title must be present and non-empty.
pub fn identity_from_tag(tag: &Tag) -> Option<Identity> {
    let artist = non_empty(tag.artist())?;
    let album = non_empty(tag.album())?;
    let title = non_empty(tag.title())?;

    let identity = Identity::new(artist, album, title);
    Some(match tag.track() {
        Some(track_number) => identity.with_track_number(track_number),
        None => identity,
    })
}

fn non_empty(value: Option<Cow<'_, str>>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.into_owned())
}
