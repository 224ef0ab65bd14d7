/// Music identity read from a file's embedded tags
///
/// Used only to derive a target path; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Artist name
    pub artist_name: String,

    /// Album name
    pub album_name: String,

    /// Track title
    pub track_name: String,

    /// Track number
    pub track_number: Option<u32>,
}

impl Identity {
    /// Create an identity without a track number
    pub fn new(
        artist_name: impl Into<String>,
        album_name: impl Into<String>,
        track_name: impl Into<String>,
    ) -> Self {
        Self {
            artist_name: artist_name.into(),
            album_name: album_name.into(),
            track_name: track_name.into(),
            track_number: None,
        }
    }

    /// Set the track number
    pub fn with_track_number(mut self, track_number: u32) -> Self {
        self.track_number = Some(track_number);
        self
    }
}
