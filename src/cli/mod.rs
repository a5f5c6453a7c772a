//! Command-line interface layer.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, ExtractArgs};
pub use commands::extract::ExtractSummary;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
