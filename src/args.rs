pub use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(version, about)]
pub struct Args {
    /// Defaults to `new` when no subcommand is given
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project from a boilerplate
    New {
        /// Name of the project; prompted for when omitted
        project_name: Option<String>,

        /// Boilerplate label or repository id; prompted for when omitted
        #[clap(long, short)]
        template: Option<String>,
    },
    /// List the available boilerplates
    List,
}
