//! Interactive prompts. Invalid input is re-asked by the validator; a
//! cancelled prompt surfaces as an error and aborts the run.

use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Select, Text};

use crate::boilerplate::Boilerplate;
use crate::project;

pub fn boilerplate() -> Result<Boilerplate> {
    Select::new("Choose boilerplate:", Boilerplate::ALL.to_vec())
        .prompt()
        .context("No boilerplate chosen")
}

pub fn project_name() -> Result<String> {
    Text::new("Project name:")
        .with_validator(|input: &str| {
            if project::is_valid_project_name(input.trim()) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    "Enter a non-empty name made of letters, digits, '-', '_' or '.'".into(),
                ))
            }
        })
        .prompt()
        .map(|name| name.trim().to_string())
        .context("No project name given")
}

pub fn database_name() -> Result<String> {
    Text::new("Database name:")
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("Database name must not be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()
        .map(|name| name.trim().to_string())
        .context("No database name given")
}
