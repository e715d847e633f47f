use std::path::Path;
use std::process::Command;

use anyhow::{ensure, Context, Result};

use crate::info;

/// Run `npm install` in `path`, streaming the package manager's output to
/// the terminal, and block until it exits.
///
/// The directory is passed to the subprocess; the process-wide working
/// directory stays untouched, so repeated installs do not compound.
///
/// # Errors
///
/// Fails if `npm` cannot be spawned or exits non-zero.
pub fn install_dependencies(path: &Path) -> Result<()> {
    info!("Installing dependencies in {}", path.display());

    let status = Command::new("npm")
        .arg("install")
        .current_dir(path)
        .status()
        .with_context(|| format!("Failed to run npm install in {}", path.display()))?;

    ensure!(
        status.success(),
        "npm install in {} exited with {status}",
        path.display()
    );

    Ok(())
}
