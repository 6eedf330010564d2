//! External tool resolution.

use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

/// Locates the external executables the scaffolding workflow depends on.
///
/// Constructed once at startup; construction fails on unsupported
/// platforms, so a host the tool cannot run on is reported before any
/// filesystem work starts.
#[derive(Debug, Clone, Copy)]
pub struct ToolLocator(());

impl ToolLocator {
    pub fn for_host() -> Result<Self> {
        match env::consts::OS {
            "linux" | "macos" | "windows" => Ok(ToolLocator(())),
            other => bail!("pyinit is not supported on this platform: {other}"),
        }
    }

    /// Look up `tool` on PATH. `None` when the tool is not installed.
    pub fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }

    /// Resolve a Python interpreter, preferring `python3` over `python`.
    pub fn python(&self) -> Option<PathBuf> {
        self.locate("python3").or_else(|| self.locate("python"))
    }
}
