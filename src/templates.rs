//! Fixed file bodies written into a new project.

/// setup.py manifest; placeholders filled by [`render_setup_py`].
const SETUP_PY: &str = r#"from setuptools import find_packages, setup

setup(
    name="{name}",
    version="0.1.0",
    description="{description}",
    author="{author}",
    packages=find_packages(),
)
"#;

/// Ignore rules for freshly initialized repositories.
pub const GITIGNORE: &str = "\
# Virtual environment
.venv/

# Byte-compiled files
__pycache__/
*.py[cod]

# Distribution artifacts
build/
dist/
*.egg-info/
";

/// Message used for the first commit of a new project.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Interpolate project metadata into the setup.py template.
///
/// Values are inserted between double quotes; callers must have escaped
/// embedded `"` characters already.
pub fn render_setup_py(name: &str, description: &str, author: &str) -> String {
    SETUP_PY
        .replace("{name}", name)
        .replace("{description}", description)
        .replace("{author}", author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_metadata_fields() {
        let manifest = render_setup_py("demo", "A demo project", "Jamie");

        assert!(manifest.contains(r#"name="demo","#));
        assert!(manifest.contains(r#"description="A demo project","#));
        assert!(manifest.contains(r#"author="Jamie","#));
        assert!(manifest.contains("find_packages()"));
    }

    #[test]
    fn pre_escaped_quotes_land_verbatim() {
        let manifest = render_setup_py("demo", r#"say \"hi\""#, "");

        assert!(manifest.contains(r#"description="say \"hi\"","#));
        assert!(manifest.contains(r#"author="","#));
    }

    #[test]
    fn ignore_rules_cover_the_virtualenv() {
        assert!(GITIGNORE.contains(".venv/"));
        assert!(GITIGNORE.contains("__pycache__/"));
    }
}
