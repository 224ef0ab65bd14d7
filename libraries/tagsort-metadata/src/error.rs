/// Metadata-specific errors
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
///
/// These never reach the organizer: the extractor maps them to "unrecognized".
#[derive(Error, Debug)]
pub enum MetadataError {
    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error (unknown format, corrupt tag, ...)
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}
