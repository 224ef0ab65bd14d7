//! Orchestration of a full organize run

use crate::plan::PlanBuilder;
use crate::quarantine::{relocate_unknown, route_unmovables};
use crate::resolver::execute_moves;
use std::fmt;
use std::path::Path;
use tagsort_core::{IdentityExtractor, LogSink, MovePlan, Result};

/// Terminal state counts of an organize run
///
/// Every enumerated file is counted exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrganizeReport {
    /// Moved to their metadata-derived target
    pub placed: usize,

    /// Already at their metadata-derived target
    pub already_in_place: usize,

    /// Quarantined under `.duplicate`
    pub duplicates: usize,

    /// Quarantined under `.unmovable`
    pub unmovable: usize,

    /// Relocated under `.unknown`
    pub unknown: usize,
}

impl OrganizeReport {
    /// Number of files accounted for
    pub fn total(&self) -> usize {
        self.placed + self.already_in_place + self.duplicates + self.unmovable + self.unknown
    }
}

impl fmt::Display for OrganizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} placed, {} already in place, {} duplicate, {} unmovable, {} unknown",
            self.placed, self.already_in_place, self.duplicates, self.unmovable, self.unknown
        )
    }
}

/// Reorganizes a directory tree into `Artist/Album/Track`
///
/// Runs strictly sequentially: plan, main move pass, quarantine of
/// deferred files, then relocation of unknown files.
///
/// # Example
///
/// ```rust,no_run
/// use tagsort_core::{IdentityExtractor, Identity, NoopLog};
/// use tagsort_organizer::Organizer;
/// use std::path::Path;
///
/// struct NothingKnown;
///
/// impl IdentityExtractor for NothingKnown {
///     fn inspect(&self, _path: &Path) -> Option<Identity> {
///         None
///     }
/// }
///
/// let report = Organizer::new(NothingKnown, NoopLog).run(Path::new("/music"))?;
/// println!("{}", report);
/// # Ok::<(), tagsort_core::TagsortError>(())
/// ```
pub struct Organizer<E, L> {
    builder: PlanBuilder<E>,
    log: L,
}

impl<E: IdentityExtractor, L: LogSink> Organizer<E, L> {
    /// Create an organizer with an identity extractor and a log sink
    pub fn new(extractor: E, log: L) -> Self {
        Self {
            builder: PlanBuilder::new(extractor),
            log,
        }
    }

    /// Build the move plan for `root` without touching the filesystem
    pub fn plan(&self, root: &Path) -> Result<MovePlan> {
        self.log
            .info(&format!("Starting targeting dir {}", root.display()));
        self.builder.build(root)
    }

    /// Execute a plan built for `root`
    pub fn execute(&self, root: &Path, plan: &MovePlan) -> Result<OrganizeReport> {
        let mut report = OrganizeReport::default();

        self.log
            .info(&format!("Found {} files", plan.known_moves.len()));

        let resolution = execute_moves(plan)?;
        report.placed = resolution.placed;
        report.already_in_place = resolution.already_in_place;

        self.log.info(&format!(
            "Found {} unmovable files",
            resolution.deferred.deferred_count()
        ));

        let stats = route_unmovables(root, resolution.deferred)?;
        report.duplicates = stats.duplicates;
        report.unmovable = stats.unmovable;

        self.log
            .info(&format!("Found {} unknown files", plan.unknown_moves.len()));

        for file in &plan.unknown_moves {
            relocate_unknown(root, file)?;
            report.unknown += 1;
        }

        self.log.info(&format!("Done, {}", report));
        Ok(report)
    }

    /// Plan and execute in one go
    pub fn run(&self, root: &Path) -> Result<OrganizeReport> {
        let plan = self.plan(root)?;
        self.execute(root, &plan)
    }
}
