pub mod args;
pub mod boilerplate;
pub mod command;
pub mod install;
pub mod manifest;
pub mod postprocess;
pub mod project;
pub mod prompt;

mod log;
