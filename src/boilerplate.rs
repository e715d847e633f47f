use std::fmt::{self, Display, Formatter};
use std::path::Path;

use anyhow::Result;

use crate::postprocess;

/// All template repositories live under this account.
pub const REPO_PREFIX: &str = "https://github.com/timthedev07/";

/// One scaffoldable boilerplate. Each variant carries its display label,
/// its template repository id and its post-clone customization, so the
/// catalog and the customization logic cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boilerplate {
    NextTailwind,
    ExpressNextUrql,
}

impl Boilerplate {
    pub const ALL: [Boilerplate; 2] = [Boilerplate::NextTailwind, Boilerplate::ExpressNextUrql];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Boilerplate::NextTailwind => "Next.js with TailwindCSS",
            Boilerplate::ExpressNextUrql => "Express + Next.js URQL GraphQL Session Auth",
        }
    }

    /// Repository name of the template under [`REPO_PREFIX`].
    #[must_use]
    pub fn repo(self) -> &'static str {
        match self {
            Boilerplate::NextTailwind => "next-tailwind-ts-boilerplate",
            Boilerplate::ExpressNextUrql => "express-nextjs-urql-boilerplate",
        }
    }

    #[must_use]
    pub fn clone_url(self) -> String {
        format!("{REPO_PREFIX}{}", self.repo())
    }

    /// Look a boilerplate up by its display label or repository id.
    #[must_use]
    pub fn find(needle: &str) -> Option<Boilerplate> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == needle || b.repo() == needle)
    }

    /// Template-specific customization, run inside the cloned workspace
    /// after its history has been stripped and reinitialized. May prompt
    /// for further input.
    pub fn post_process(self, workspace: &Path, project_name: &str) -> Result<()> {
        match self {
            Boilerplate::NextTailwind => postprocess::single_package(workspace, project_name),
            Boilerplate::ExpressNextUrql => postprocess::api_web_split(workspace, project_name),
        }
    }
}

impl Display for Boilerplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
