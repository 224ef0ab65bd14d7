mod identity;
mod plan;
mod unmovable;

pub use identity::Identity;
pub use plan::{Move, MovePlan};
pub use unmovable::{FileAndHash, UnmovableSet, UnmovableSets};
