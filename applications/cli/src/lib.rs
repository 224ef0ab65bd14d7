//! tagsort command line
//!
//! Thin shell around the organizer: argument parsing, configuration,
//! logging set-up and the exit code policy.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{parse_args, Cli, Invocation};
pub use config::TagsortConfig;
pub use error::{exit_code, CliError, EXIT_ARGUMENTS, EXIT_UNHANDLED};

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tagsort_core::MovePlan;
use tagsort_metadata::LoftyIdentityExtractor;
use tagsort_organizer::Organizer;

/// Run tagsort for a parsed command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = TagsortConfig::load(cli.config.as_deref())?;
    logging::init(cli.verbose, config.log_filter.as_deref());

    let root = resolve_root(&cli.root)?;
    let organizer = Organizer::new(LoftyIdentityExtractor::new(), logging::sink(cli.verbose));

    if cli.dry_run || config.dry_run {
        let plan = organizer
            .plan(&root)
            .with_context(|| format!("Failed to plan {}", root.display()))?;
        print!("{}", render_plan(&root, &plan));
        return Ok(());
    }

    let report = organizer
        .run(&root)
        .with_context(|| format!("Failed to organize {}", root.display()))?;
    tracing::debug!("Organized {}: {}", root.display(), report);

    Ok(())
}

/// Resolve the root argument to an absolute directory path
pub fn resolve_root(path: &Path) -> Result<PathBuf, CliError> {
    let root = fs::canonicalize(path)
        .map_err(|e| CliError::Arguments(format!("Cannot resolve {}: {}", path.display(), e)))?;

    if !root.is_dir() {
        return Err(CliError::Arguments(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    Ok(root)
}

/// One line per planned move, paths relative to `root`
pub fn render_plan(root: &Path, plan: &MovePlan) -> String {
    let relative = |path: &Path| path.strip_prefix(root).unwrap_or(path).display().to_string();
    let mut out = String::new();

    for (source, target) in &plan.known_moves {
        if source != target {
            out.push_str(&format!("{} -> {}\n", relative(source), relative(target)));
        }
    }
    for source in &plan.unknown_moves {
        out.push_str(&format!("{} -> (unknown)\n", relative(source)));
    }

    out
}
