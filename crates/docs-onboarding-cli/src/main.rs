//! Command-line entrypoint for rendering and planning docs onboarding options.

mod bootstrap_helpers;
mod cli_args;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::bootstrap_helpers::init_tracing;
use crate::cli_args::Cli;
use crate::commands::run_cli;

fn main() -> Result<()> {
    init_tracing();
    let output = run_cli(Cli::parse())?;
    println!("{output}");
    Ok(())
}
