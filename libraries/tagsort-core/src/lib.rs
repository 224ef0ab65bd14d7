//! tagsort Core
//!
//! Domain types, capability traits, and error handling shared by the tagsort crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Identity`, `Move`, `MovePlan`, `FileAndHash`, `UnmovableSet`
//! - **Core Traits**: `IdentityExtractor` (tag lookup) and `LogSink` (informational messages)
//! - **Error Handling**: Unified `TagsortError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tagsort_core::{Identity, MovePlan};
//! use std::path::PathBuf;
//!
//! let identity = Identity::new("Artist", "Album", "Title").with_track_number(1);
//! assert_eq!(identity.track_number, Some(1));
//!
//! let mut plan = MovePlan::new();
//! plan.push_unknown(PathBuf::from("/music/readme.txt"));
//! assert_eq!(plan.unknown_moves.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, TagsortError};
pub use traits::{FnLog, IdentityExtractor, LogSink, NoopLog};
pub use types::{FileAndHash, Identity, Move, MovePlan, UnmovableSet, UnmovableSets};
