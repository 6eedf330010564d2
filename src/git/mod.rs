//! Git repository setup for freshly scaffolded projects.
//!
//! The whole stage is best-effort: a missing or failing git tool never
//! fails the surrounding workflow. Only filesystem errors (writing the
//! ignore rules) propagate.

mod operations;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::templates;
use crate::tools::ToolLocator;

/// How far repository setup got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoOutcome {
    /// No git executable on this machine; nothing was attempted.
    ToolUnavailable,
    /// `git init` failed.
    InitFailed,
    /// Staging or the initial commit failed.
    CommitFailed,
    /// Repository created, ignore rules written, initial commit in place.
    Committed,
}

/// Initialize a repository at `project_path`, write the ignore rules and
/// create one initial commit.
pub fn initialize_repository(
    locator: &ToolLocator,
    project_path: &Path,
    verbose: bool,
) -> Result<RepoOutcome> {
    let Some(git) = locator.locate("git") else {
        println!("⚠️  No usable git found, skipping repository setup");
        return Ok(RepoOutcome::ToolUnavailable);
    };

    println!("📦 Initializing git repository...");
    match operations::init(&git, project_path, verbose) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            eprintln!(
                "✗ Failed to initialize git repository at {} ({status})",
                project_path.display()
            );
            return Ok(RepoOutcome::InitFailed);
        }
        Err(err) => {
            eprintln!("✗ Failed to initialize git repository: {err:#}");
            return Ok(RepoOutcome::InitFailed);
        }
    }

    fs::write(project_path.join(".gitignore"), templates::GITIGNORE)
        .with_context(|| format!("Failed to write .gitignore in {}", project_path.display()))?;
    println!("  ✓ Wrote .gitignore");

    let committed = match operations::add_all(&git, project_path, verbose) {
        Ok(status) if status.success() => {
            operations::commit(&git, project_path, templates::INITIAL_COMMIT_MESSAGE, verbose)
        }
        other => other,
    };
    match committed {
        Ok(status) if status.success() => {
            println!(
                "  ✓ Created initial commit: {}",
                templates::INITIAL_COMMIT_MESSAGE
            );
            Ok(RepoOutcome::Committed)
        }
        Ok(status) => {
            eprintln!("✗ Failed to create the initial commit ({status})");
            Ok(RepoOutcome::CommitFailed)
        }
        Err(err) => {
            eprintln!("✗ Failed to create the initial commit: {err:#}");
            Ok(RepoOutcome::CommitFailed)
        }
    }
}
