//! Low-level git operations.

use anyhow::Result;
use std::path::Path;
use std::process::ExitStatus;

use crate::process;

/// Initialize a repository in `cwd`.
pub fn init(git: &Path, cwd: &Path, verbose: bool) -> Result<ExitStatus> {
    process::run_tool(git, &["init", "."], cwd, verbose)
}

/// Stage every file under `cwd`.
pub fn add_all(git: &Path, cwd: &Path, verbose: bool) -> Result<ExitStatus> {
    process::run_tool(git, &["add", "."], cwd, verbose)
}

/// Create a commit with `message`.
pub fn commit(git: &Path, cwd: &Path, message: &str, verbose: bool) -> Result<ExitStatus> {
    process::run_tool(git, &["commit", "-m", message], cwd, verbose)
}
