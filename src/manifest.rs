use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Set the top-level `name` field of a JSON manifest, inserting it if
/// absent, and rewrite the file with 2-space indentation.
///
/// The whole document is read, mutated and written back; field order and
/// whitespace follow `serde_json`'s pretty output, not the original file.
///
/// # Errors
///
/// Fails if the file cannot be read or written, is not valid JSON, or its
/// top level is not an object.
pub fn set_manifest_name(path: &Path, new_name: &str) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;

    let mut manifest: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Manifest {} is not valid JSON", path.display()))?;

    let Value::Object(fields) = &mut manifest else {
        bail!("Manifest {} is not a JSON object", path.display());
    };

    fields.insert("name".to_string(), Value::String(new_name.to_string()));

    let mut rendered = serde_json::to_string_pretty(&manifest)?;
    rendered.push('\n');

    fs::write(path, rendered)
        .with_context(|| format!("Failed to write manifest {}", path.display()))
}

/// Replace every occurrence of `from` in the file with `to`, returning how
/// many occurrences were replaced. The file is left untouched when there is
/// no match.
pub fn replace_in_file(path: &Path, from: &str, to: &str) -> Result<usize> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let occurrences = contents.matches(from).count();

    if occurrences > 0 {
        fs::write(path, contents.replace(from, to))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(occurrences)
}
