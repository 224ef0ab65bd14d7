//! tagsort Metadata
//!
//! Identity extraction from embedded audio tags, backed by `lofty`.
//!
//! # Example
//!
//! ```rust,no_run
//! use tagsort_core::IdentityExtractor;
//! use tagsort_metadata::LoftyIdentityExtractor;
//! use std::path::Path;
//!
//! let extractor = LoftyIdentityExtractor::new();
//! match extractor.inspect(Path::new("/music/song.mp3")) {
//!     Some(identity) => println!("{} - {}", identity.artist_name, identity.track_name),
//!     None => println!("unrecognized"),
//! }
//! ```

mod error;
mod reader;

pub use error::{MetadataError, Result};
pub use reader::{identity_from_tag, read_identity, LoftyIdentityExtractor};
