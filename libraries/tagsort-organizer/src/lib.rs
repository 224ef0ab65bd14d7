//! tagsort Organizer
//!
//! Reorganizes a directory of audio files into `Artist/Album/Track` without
//! ever replacing or deleting a file.
//!
//! # Architecture
//!
//! - `plan`: discovery and classification into a `MovePlan`
//! - `sanitize`: tag field to path segment
//! - `mover`: the collision-safe rename primitive
//! - `hasher`: SHA-256 content hashing
//! - `resolver`: the main move pass, deferring collisions by target
//! - `quarantine`: `.duplicate` / `.unmovable` / `.unknown` placement
//! - `organizer`: orchestration and reporting

pub mod hasher;
pub mod mover;
pub mod organizer;
pub mod plan;
pub mod quarantine;
pub mod resolver;
pub mod sanitize;

pub use mover::{safe_move, MoveOutcome};
pub use organizer::{OrganizeReport, Organizer};
pub use plan::PlanBuilder;
pub use quarantine::{QuarantineKind, DUPLICATE_DIR, UNKNOWN_DIR, UNMOVABLE_DIR};
pub use sanitize::sanitize_path_segment;
