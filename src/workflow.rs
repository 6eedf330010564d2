//! The project creation workflow.
//!
//! Stages run in order: path resolution with the safety gate, project
//! materialization, then version-control setup. Materialization failures
//! abort the workflow; version-control failures are absorbed.

use anyhow::{ensure, Result};
use std::path::PathBuf;

use crate::git;
use crate::paths;
use crate::prompt;
use crate::scaffold;
use crate::tools::ToolLocator;

/// Everything the workflow needs to create one project.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    /// Project (directory) name.
    pub name: String,
    /// Directory the project is created in; current directory when `None`.
    pub target_dir: Option<PathBuf>,
    /// Description embedded into setup.py; `"` must already be escaped.
    pub description: String,
    /// Author embedded into setup.py; `"` must already be escaped.
    pub author: String,
    /// Skip repository setup entirely.
    pub skip_git: bool,
    /// Surface the output of external commands.
    pub verbose: bool,
}

/// Create the Python project described by `request`.
pub fn create_project(request: &ProjectRequest, locator: &ToolLocator) -> Result<()> {
    ensure!(!request.name.is_empty(), "project name must not be empty");

    let project_path = paths::resolve_project_path(request.target_dir.as_deref(), &request.name)?;
    paths::prepare_project_dir(&project_path, prompt::confirm)?;

    println!("🐍 Creating project: {}", project_path.display());
    scaffold::materialize(&project_path, request, locator)?;

    if !request.skip_git {
        git::initialize_repository(locator, &project_path, request.verbose)?;
    }

    println!();
    println!("✨ Project '{}' is ready!", request.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let locator = ToolLocator::for_host().unwrap();
        let request = ProjectRequest {
            name: String::new(),
            target_dir: None,
            description: String::new(),
            author: String::new(),
            skip_git: true,
            verbose: false,
        };

        assert!(create_project(&request, &locator).is_err());
    }
}
