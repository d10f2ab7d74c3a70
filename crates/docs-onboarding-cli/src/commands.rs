use anyhow::{Context, Result};
use docs_onboarding_core::{
    load_page_manifest, OnboardingSession, OptionState, PageCodeContext, VisibilityInstruction,
};
use docs_onboarding_ui::render_onboarding_option_buttons;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::cli_args::{Cli, CliCommand, OptionToggle};

#[derive(Debug, Serialize)]
/// JSON payload printed by the `plan` command.
pub(crate) struct PlanOutput {
    pub options: Vec<OptionState>,
    pub touched: bool,
    pub exported_options: Vec<OptionState>,
    pub visibility_plan: Vec<VisibilityInstruction>,
}

pub(crate) fn run_cli(cli: Cli) -> Result<String> {
    match cli.command {
        CliCommand::Render { page } => run_render(&page),
        CliCommand::Plan {
            page,
            toggles,
            pretty,
        } => {
            let output = run_plan(&page, &toggles)?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            };
            rendered.context("failed to serialize plan output")
        }
    }
}

pub(crate) fn run_render(page: &Path) -> Result<String> {
    let requested = load_page_manifest(page)?;
    let session = OnboardingSession::new(&requested, None)
        .with_context(|| format!("failed to initialize options for {}", page.display()))?;
    info!(options = session.options().len(), "rendering onboarding option bar");
    Ok(render_onboarding_option_buttons(session.options()))
}

pub(crate) fn run_plan(page: &Path, toggles: &[OptionToggle]) -> Result<PlanOutput> {
    let requested = load_page_manifest(page)?;
    let code_context = Arc::new(PageCodeContext::new());
    let mut session = OnboardingSession::new(&requested, Some(code_context.clone()))
        .with_context(|| format!("failed to initialize options for {}", page.display()))?;

    let mut visibility_plan = session.visibility_plan();
    for toggle in toggles {
        visibility_plan = session.set_checked(toggle.id, toggle.checked);
    }
    info!(
        toggles = toggles.len(),
        instructions = visibility_plan.len(),
        "planned onboarding visibility"
    );

    Ok(PlanOutput {
        options: session.options().to_vec(),
        touched: session.touched(),
        exported_options: code_context.onboarding_options(),
        visibility_plan,
    })
}
