//! Integration tests for path resolution, the safety gate and the
//! generated file bodies. No external tools (python, pip, git) are
//! spawned here.

use std::fs;

use pyinit::paths::{clean_dir_contents, dir_is_empty, prepare_project_dir, resolve_project_path};
use pyinit::scaffold::package_dir_name;
use pyinit::templates::{render_setup_py, GITIGNORE};
use tempfile::TempDir;

#[test]
fn project_path_is_target_dir_joined_with_name() {
    let temp = TempDir::new().unwrap();
    let path = resolve_project_path(Some(temp.path()), "demo").unwrap();
    assert_eq!(path, temp.path().join("demo"));
}

#[test]
fn fresh_target_is_created_without_prompting() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("workspace").join("demo");

    prepare_project_dir(&project, |_| -> anyhow::Result<bool> {
        panic!("prompt must not fire for a fresh target")
    })
    .unwrap();

    assert!(project.is_dir());
    assert!(dir_is_empty(&project).unwrap());
}

#[test]
fn confirmed_cleanup_empties_the_directory_before_scaffolding() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("demo");
    fs::create_dir_all(project.join("leftover").join("deep")).unwrap();
    fs::write(project.join("stale.txt"), "old").unwrap();

    let mut prompts = 0;
    prepare_project_dir(&project, |question| {
        prompts += 1;
        assert!(question.contains("Clean directory"));
        Ok(true)
    })
    .unwrap();

    assert_eq!(prompts, 1);
    assert!(project.is_dir());
    assert!(dir_is_empty(&project).unwrap());
}

#[test]
fn declined_cleanup_leaves_the_directory_alone() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("demo");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("keep.txt"), "precious").unwrap();

    prepare_project_dir(&project, |_| Ok(false)).unwrap();

    assert_eq!(
        fs::read_to_string(project.join("keep.txt")).unwrap(),
        "precious"
    );
}

#[test]
fn cleanup_preserves_the_anchor_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("demo");
    fs::create_dir_all(project.join("a").join("b")).unwrap();
    fs::write(project.join("f"), "x").unwrap();

    clean_dir_contents(&project).unwrap();

    assert!(project.is_dir());
    assert!(dir_is_empty(&project).unwrap());
}

#[test]
fn package_names_collapse_non_word_runs() {
    assert_eq!(package_dir_name("my-cool app!").unwrap(), "my_cool_app_");
    assert_eq!(package_dir_name("demo").unwrap(), "demo");
}

#[test]
fn manifest_fields_equal_the_supplied_metadata() {
    let manifest = render_setup_py("demo", r#"a \"quoted\" blurb"#, "Jamie");

    assert!(manifest.contains(r#"name="demo","#));
    assert!(manifest.contains(r#"description="a \"quoted\" blurb","#));
    assert!(manifest.contains(r#"author="Jamie","#));
}

#[test]
fn ignore_rules_exclude_generated_directories() {
    assert!(GITIGNORE.contains(".venv/"));
    assert!(GITIGNORE.contains("*.egg-info/"));
}
