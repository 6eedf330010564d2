//! Scaffolding for new Python projects.
//!
//! One workflow: resolve the project path, guarding pre-existing content
//! behind a confirmation prompt, then write the `setup.py` manifest, an
//! importable package directory and a project-local virtualenv with an
//! editable install. Unless disabled, a git repository with a first
//! commit is set up at the end.

pub mod git;
pub mod paths;
pub mod process;
pub mod prompt;
pub mod scaffold;
pub mod templates;
pub mod tools;
pub mod workflow;

// Re-export commonly used types
pub use tools::ToolLocator;
pub use workflow::{create_project, ProjectRequest};
