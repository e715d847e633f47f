use std::path::Path;
use std::process::{Command, Output};

use anyhow::{bail, Context, Result};

/// Run a command, capturing its output. Returns trimmed stdout on success,
/// the command's stderr wrapped in the error otherwise.
pub fn run(program: &str, args: &[&str], what: &str) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to spawn {what}"))?;

    if !output.status.success() {
        bail!("{what} failed: {}", error_text(&output));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Same as [`run`], with an explicit working directory.
///
/// Every caller passes its own directory; the process-wide working
/// directory is never changed.
pub fn run_in(dir: &Path, program: &str, args: &[&str], what: &str) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to spawn {what} in {}", dir.display()))?;

    if !output.status.success() {
        bail!("{what} failed in {}: {}", dir.display(), error_text(&output));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Stderr if non-empty, stdout otherwise.
fn error_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
