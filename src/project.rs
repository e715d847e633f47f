use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::boilerplate::Boilerplate;
use crate::{command, info, trace, warn};

/// Whether `name` is safe to use as a project directory name and as a
/// manifest `name` prefix. The name ends up as a path component and as an
/// argument to git and npm, so anything beyond plain package-style names
/// is rejected rather than escaped.
#[must_use]
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(['-', '.'])
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Create a project named `project_name` in the current directory from the
/// given boilerplate.
///
/// All work happens in a `<project_name>.tmp` staging directory which is
/// renamed to `<project_name>` only once every step has succeeded; on
/// failure the staging directory is removed and the error propagated, so
/// no half-built project is left under the final name.
pub fn scaffold(boilerplate: Boilerplate, project_name: &str) -> Result<()> {
    ensure!(
        is_valid_project_name(project_name),
        "Invalid project name {project_name:?}: use letters, digits, '-', '_' or '.'"
    );

    let parent = std::env::current_dir().context("Failed to get current dir")?;
    let target = parent.join(project_name);
    let staging = parent.join(format!("{project_name}.tmp"));

    ensure!(
        !target.exists(),
        "Path {} already exists",
        target.display()
    );
    ensure!(
        !staging.exists(),
        "Staging path {} already exists; remove it and retry",
        staging.display()
    );

    if let Err(err) = build(boilerplate, &staging, project_name) {
        if staging.exists() {
            if let Err(e) = fs_extra::dir::remove(&staging) {
                warn!("Failed to clean up {}: {e}", staging.display());
            }
        }
        return Err(err);
    }

    fs::rename(&staging, &target)
        .with_context(|| format!("Failed to move project into {}", target.display()))?;

    info!("Created {}", target.display());

    Ok(())
}

fn build(boilerplate: Boilerplate, staging: &Path, project_name: &str) -> Result<()> {
    let url = boilerplate.clone_url();
    let dest = staging
        .to_str()
        .context("Staging path is not valid UTF-8")?;

    info!("Cloning {url}");
    command::run("git", &["clone", &url, dest], "git clone")?;

    strip_template_metadata(staging)?;

    command::run_in(staging, "git", &["init"], "git init")?;

    boilerplate.post_process(staging, project_name)
}

/// Remove the template's own `README.md` and `.git` directory from the
/// workspace. A template without a README is tolerated.
pub fn strip_template_metadata(workspace: &Path) -> Result<()> {
    let readme = workspace.join("README.md");
    match fs::remove_file(&readme) {
        Ok(()) => trace!("Removed {}", readme.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!("No README.md in template, nothing to remove");
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to remove {}", readme.display()));
        }
    }

    let git_dir = workspace.join(".git");
    match fs::remove_dir_all(&git_dir) {
        Ok(()) => {
            trace!("Removed {}", git_dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", git_dir.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(is_valid_project_name("my-app"));
        assert!(is_valid_project_name("shop"));
        assert!(is_valid_project_name("app_2.0"));
    }

    #[test]
    fn rejects_empty_and_hostile_names() {
        assert!(!is_valid_project_name(""));
        assert!(!is_valid_project_name("."));
        assert!(!is_valid_project_name(".."));
        assert!(!is_valid_project_name("../escape"));
        assert!(!is_valid_project_name("a/b"));
        assert!(!is_valid_project_name("a b"));
        assert!(!is_valid_project_name("-rf"));
        assert!(!is_valid_project_name("name;rm"));
        assert!(!is_valid_project_name("$(id)"));
    }

    #[test]
    fn strips_readme_and_git_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# template").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git").join("HEAD"), "ref").unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        strip_template_metadata(dir.path()).unwrap();

        assert!(!dir.path().join("README.md").exists());
        assert!(!dir.path().join(".git").exists());
        assert!(dir.path().join("package.json").exists());
    }

    #[test]
    fn tolerates_a_template_without_readme() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        strip_template_metadata(dir.path()).unwrap();

        assert!(!dir.path().join(".git").exists());
    }
}
