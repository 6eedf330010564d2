//! Project materialization: manifest, package directory, virtualenv.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::process;
use crate::templates;
use crate::tools::ToolLocator;
use crate::workflow::ProjectRequest;

/// Directory name of the project-local virtual environment.
pub const VENV_DIR: &str = ".venv";

/// Populate `project_path` with the project skeleton and provision its
/// virtual environment.
///
/// Steps run in order: setup.py, the package directory with its
/// `__init__.py` marker, then the virtualenv with an editable install of
/// the project. Every failure here aborts the workflow.
pub fn materialize(
    project_path: &Path,
    request: &ProjectRequest,
    locator: &ToolLocator,
) -> Result<()> {
    write_setup_py(project_path, &request.name, &request.description, &request.author)?;
    create_package_dir(project_path, &request.name)?;
    provision_venv(project_path, locator, request.verbose)
}

/// Collapse every run of non-word characters in `name` to one underscore.
pub fn package_dir_name(name: &str) -> Result<String> {
    let non_word = Regex::new(r"[^\w]+")?;
    Ok(non_word.replace_all(name, "_").into_owned())
}

fn write_setup_py(project_path: &Path, name: &str, description: &str, author: &str) -> Result<()> {
    let manifest = templates::render_setup_py(name, description, author);
    fs::write(project_path.join("setup.py"), manifest)
        .with_context(|| format!("Failed to write setup.py in {}", project_path.display()))?;
    println!("  ✓ Created setup.py");
    Ok(())
}

fn create_package_dir(project_path: &Path, name: &str) -> Result<()> {
    let package = package_dir_name(name)?;
    let package_path = project_path.join(&package);
    fs::create_dir(&package_path).with_context(|| {
        format!(
            "Failed to create package directory: {}",
            package_path.display()
        )
    })?;
    fs::write(package_path.join("__init__.py"), "").with_context(|| {
        format!("Failed to write __init__.py in {}", package_path.display())
    })?;
    println!("  ✓ Created package '{package}'");
    Ok(())
}

/// Path of the pip executable inside the project's virtualenv.
fn venv_pip(project_path: &Path) -> PathBuf {
    if cfg!(windows) {
        project_path.join(VENV_DIR).join("Scripts").join("pip.exe")
    } else {
        project_path.join(VENV_DIR).join("bin").join("pip")
    }
}

fn provision_venv(project_path: &Path, locator: &ToolLocator, verbose: bool) -> Result<()> {
    let Some(python) = locator.python() else {
        bail!("No usable python found, cannot create a virtual environment");
    };

    println!("🐍 Installing local environment...");
    let status = process::run_tool(&python, &["-m", "venv", VENV_DIR], project_path, verbose)?;
    if !status.success() {
        bail!("Failed to create virtual environment ({status})");
    }

    let pip = venv_pip(project_path);
    let status = process::run_tool(&pip, &["install", "-e", "."], project_path, verbose)?;
    if !status.success() {
        bail!("Failed to install the project into its virtual environment ({status})");
    }

    println!("  ✓ Installed project into {VENV_DIR} (editable)");
    Ok(())
}
