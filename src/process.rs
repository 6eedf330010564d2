//! Thin wrapper for invoking external tools.
//!
//! Every external command runs with an explicit argument vector and a
//! pinned working directory; no shell is involved. Output is discarded
//! unless the caller asked for verbose mode.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Run `program` with `args`, with the working directory set to `cwd`.
///
/// Blocks until the child exits and returns its exit status. Spawn
/// failures (missing or unreadable executable) are errors.
pub fn run_tool(program: &Path, args: &[&str], cwd: &Path, verbose: bool) -> Result<ExitStatus> {
    let mut command = Command::new(program);
    command.args(args).current_dir(cwd);
    if !verbose {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }
    command
        .status()
        .with_context(|| format!("Failed to run {}", program.display()))
}
