use anyhow::{Context, Result};
use clap::Parser;
use kindling::{
    args::{Args, Commands},
    boilerplate::Boilerplate,
    error, project, prompt,
};
use std::process::ExitCode;

fn app(args: Args) -> Result<()> {
    let command = args.command.unwrap_or(Commands::New {
        project_name: None,
        template: None,
    });

    match command {
        Commands::List => {
            println!("Available boilerplates:");
            for boilerplate in Boilerplate::ALL {
                println!("    {} ({})", boilerplate.label(), boilerplate.repo());
            }
            Ok(())
        }
        Commands::New {
            project_name,
            template,
        } => {
            let boilerplate = match template {
                Some(ref wanted) => Boilerplate::find(wanted).with_context(|| {
                    format!("Unknown boilerplate {wanted:?}; run `kindling list`")
                })?,
                None => prompt::boilerplate()?,
            };

            let project_name = match project_name {
                Some(name) => name,
                None => prompt::project_name()?,
            };

            project::scaffold(boilerplate, &project_name)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
