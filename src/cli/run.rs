use std::{env, io};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{extract::extract, init::init},
    exit_status::ExitStatus,
};

/// Dispatch the parsed arguments to their command.
///
/// Runs `extract` when no subcommand was given.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine the working directory")?;

    match args.into_command() {
        Command::Extract(args) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            extract(&args, &cwd, &mut out)
        }
        Command::Init => init(&cwd),
    }
}
