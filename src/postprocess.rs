//! Per-boilerplate customization of a freshly cloned workspace.

use std::path::Path;

use anyhow::Result;

use crate::{install, manifest, prompt, warn};

/// Placeholder database name shipped inside the Express template's
/// `api/ormconfig.ts`.
const DB_PLACEHOLDER: &str = "example-db";

/// Templates with a single manifest at the workspace root: rename it to the
/// project name, then install dependencies.
pub fn single_package(workspace: &Path, project_name: &str) -> Result<()> {
    manifest::set_manifest_name(&workspace.join("package.json"), project_name)?;
    install::install_dependencies(workspace)
}

/// The Express + Next.js template: an `api/` and a `web/` package, plus a
/// database name substituted into the ORM config. Prompts for the database
/// name, then installs both packages.
pub fn api_web_split(workspace: &Path, project_name: &str) -> Result<()> {
    let database_name = prompt::database_name()?;

    customize_api_web(workspace, project_name, &database_name)?;

    install::install_dependencies(&workspace.join("api"))?;
    install::install_dependencies(&workspace.join("web"))
}

/// The non-interactive part of [`api_web_split`]: manifest renames and the
/// database-name substitution.
fn customize_api_web(workspace: &Path, project_name: &str, database_name: &str) -> Result<()> {
    manifest::set_manifest_name(
        &workspace.join("api").join("package.json"),
        &format!("{project_name}-api"),
    )?;
    manifest::set_manifest_name(
        &workspace.join("web").join("package.json"),
        &format!("{project_name}-web"),
    )?;

    let ormconfig = workspace.join("api").join("ormconfig.ts");
    let replaced = manifest::replace_in_file(&ormconfig, DB_PLACEHOLDER, database_name)?;

    if replaced == 0 {
        warn!(
            "No {DB_PLACEHOLDER:?} placeholder found in {}; database name left as shipped",
            ormconfig.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::Value;

    use super::*;

    fn express_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();

        fs::create_dir(dir.path().join("api")).unwrap();
        fs::create_dir(dir.path().join("web")).unwrap();
        fs::write(
            dir.path().join("api").join("package.json"),
            r#"{"name":"boilerplate-api","version":"0.1.0"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("web").join("package.json"),
            r#"{"name":"boilerplate-web","version":"0.1.0"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("api").join("ormconfig.ts"),
            "export default {\n  type: \"postgres\",\n  database: \"example-db\",\n};\n",
        )
        .unwrap();

        dir
    }

    fn manifest_name(path: &Path) -> String {
        let parsed: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        parsed["name"].as_str().unwrap().to_string()
    }

    #[test]
    fn customizes_both_manifests_and_the_orm_config() {
        let dir = express_fixture();

        customize_api_web(dir.path(), "shop", "shopdb").unwrap();

        assert_eq!(
            manifest_name(&dir.path().join("api").join("package.json")),
            "shop-api"
        );
        assert_eq!(
            manifest_name(&dir.path().join("web").join("package.json")),
            "shop-web"
        );

        let ormconfig = fs::read_to_string(dir.path().join("api").join("ormconfig.ts")).unwrap();
        assert!(ormconfig.contains("database: \"shopdb\""));
        assert!(!ormconfig.contains("example-db"));
    }

    #[test]
    fn tolerates_an_absent_placeholder() {
        let dir = express_fixture();
        fs::write(
            dir.path().join("api").join("ormconfig.ts"),
            "export default { database: \"custom\" };\n",
        )
        .unwrap();

        customize_api_web(dir.path(), "shop", "shopdb").unwrap();

        let ormconfig = fs::read_to_string(dir.path().join("api").join("ormconfig.ts")).unwrap();
        assert!(ormconfig.contains("\"custom\""));
    }

    #[test]
    fn fails_when_a_manifest_is_missing() {
        let dir = express_fixture();
        fs::remove_file(dir.path().join("web").join("package.json")).unwrap();

        assert!(customize_api_web(dir.path(), "shop", "shopdb").is_err());
    }
}
