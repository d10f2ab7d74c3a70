use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docs_onboarding_core::OptionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One checkbox change requested on the command line, e.g. `profiling=on`.
pub(crate) struct OptionToggle {
    pub id: OptionId,
    pub checked: bool,
}

pub(crate) fn parse_option_toggle(value: &str) -> Result<OptionToggle, String> {
    let Some((raw_id, raw_state)) = value.split_once('=') else {
        return Err(format!("expected <option>=on|off, got '{value}'"));
    };
    let id = raw_id
        .trim()
        .parse::<OptionId>()
        .map_err(|error| error.to_string())?;
    let checked = match raw_state.trim() {
        "on" | "true" => true,
        "off" | "false" => false,
        other => return Err(format!("toggle state must be on or off, got '{other}'")),
    };
    Ok(OptionToggle { id, checked })
}

#[derive(Debug, Parser)]
#[command(
    name = "docs-onboarding",
    about = "Render docs onboarding option bars and plan content visibility",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CliCommand {
    /// Print the option bar markup for a page manifest.
    Render {
        #[arg(
            long,
            env = "DOCS_ONBOARDING_PAGE",
            help = "Page manifest JSON listing the onboarding options shown on the page"
        )]
        page: PathBuf,
    },
    /// Apply checkbox changes and print the final options and visibility plan as JSON.
    Plan {
        #[arg(
            long,
            env = "DOCS_ONBOARDING_PAGE",
            help = "Page manifest JSON listing the onboarding options shown on the page"
        )]
        page: PathBuf,

        #[arg(
            long = "toggle",
            value_parser = parse_option_toggle,
            help = "Checkbox change in <option>=on|off form; repeat to apply several in order"
        )]
        toggles: Vec<OptionToggle>,

        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },
}
