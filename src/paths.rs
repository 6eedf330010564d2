//! Project path resolution and the safety gate for pre-existing
//! directories.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the final project path: `<target-dir>/<name>`.
///
/// `target_dir` falls back to the current working directory. The path is
/// resolved once; every later stage works relative to it.
pub fn resolve_project_path(target_dir: Option<&Path>, name: &str) -> Result<PathBuf> {
    let target = match target_dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().context("Failed to resolve the current directory")?,
    };
    Ok(target.join(name))
}

/// Make sure the project directory exists and decide what happens to
/// pre-existing content.
///
/// A missing directory is created together with its ancestors. An existing
/// empty directory passes through untouched. An existing non-empty
/// directory triggers `confirm`: an affirmative answer empties the
/// directory, a negative answer leaves its contents in place and the
/// workflow carries on over them.
pub fn prepare_project_dir(
    path: &Path,
    mut confirm: impl FnMut(&str) -> Result<bool>,
) -> Result<()> {
    if path.is_dir() {
        if !dir_is_empty(path)? {
            println!(
                "⚠️  Directory {} already exists and is not empty",
                path.display()
            );
            if confirm("Clean directory and continue?")? {
                clean_dir_contents(path)?;
            }
        }
        return Ok(());
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create project directory: {}", path.display()))
}

pub fn dir_is_empty(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;
    Ok(entries.next().is_none())
}

/// Delete every entry below `root` while keeping `root` itself.
///
/// Subdirectories are removed as whole trees; files and symlinks are
/// unlinked directly, without following the link. The first failed
/// removal aborts the cleanup.
pub fn clean_dir_contents(root: &Path) -> Result<()> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove: {}", path.display()))?;
        }
    }
    Ok(())
}
