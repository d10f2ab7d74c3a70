//! Leptos SSR markup for docs onboarding option bars and tagged content blocks.

use docs_onboarding_core::{
    ContentNode, MarkupDocument, OnboardingSession, OptionState, OptionTarget,
    VisibilityReport, ONBOARDING_STEP_CLASS,
};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Content block shown or hidden by an onboarding option.
pub struct OnboardingOptionBlock {
    pub target: OptionTarget,
    pub hide_for_this_option: bool,
    pub is_step: bool,
    /// Pre-rendered inner markup of the block.
    pub content_html: String,
}

impl OnboardingOptionBlock {
    pub fn new(target: impl Into<OptionTarget>, content_html: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            hide_for_this_option: false,
            is_step: false,
            content_html: content_html.into(),
        }
    }

    pub fn hidden_for_this_option(mut self) -> Self {
        self.hide_for_this_option = true;
        self
    }

    pub fn as_step(mut self) -> Self {
        self.is_step = true;
        self
    }

    /// Node carrying the classes this block has before any visibility sync.
    pub fn content_node(&self) -> ContentNode {
        let mut node = ContentNode::block(self.target);
        if self.hide_for_this_option {
            node = node.hidden_for_this_option();
        }
        if self.is_step {
            node = node.with_class(ONBOARDING_STEP_CLASS);
        }
        node
    }
}

/// Renders one block with its initial classes.
pub fn render_onboarding_option(block: &OnboardingOptionBlock) -> String {
    option_block_view(block, &block.content_node()).to_html()
}

/// Wraps blocks in the counter context used for numbered steps.
pub fn render_onboarding_steps(blocks: &[OnboardingOptionBlock]) -> String {
    let steps = view! {
        <div class="onboarding-steps">
            {blocks
                .iter()
                .map(|block| option_block_view(block, &block.content_node()))
                .collect_view()}
        </div>
    };
    steps.to_html()
}

/// Renders the sticky option bar with one checkbox button per option.
pub fn render_onboarding_option_buttons(options: &[OptionState]) -> String {
    option_bar_view(options).to_html()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Markup for a page plus the outcome of its initial visibility sync.
pub struct OnboardingPageRender {
    pub html: String,
    pub report: VisibilityReport,
}

/// Renders the option bar followed by `blocks`, with classes synced to `session`.
pub fn render_onboarding_page(
    session: &OnboardingSession,
    blocks: &[OnboardingOptionBlock],
) -> OnboardingPageRender {
    let mut document =
        MarkupDocument::new(blocks.iter().map(OnboardingOptionBlock::content_node).collect());
    let report = document.sync(&session.visibility_plan());

    let page = view! {
        <>
            {option_bar_view(session.options())}
            {blocks
                .iter()
                .zip(document.nodes())
                .map(|(block, node)| option_block_view(block, node))
                .collect_view()}
        </>
    };
    OnboardingPageRender {
        html: page.to_html(),
        report,
    }
}

fn option_bar_view(options: &[OptionState]) -> impl IntoView {
    let option_count_value = options.len().to_string();
    view! {
        <div
            class="onboarding-options"
            data-component="OnboardingOptionButtons"
            data-option-count=option_count_value
        >
            {options.iter().map(option_button_view).collect_view()}
        </div>
    }
}

fn option_block_view(block: &OnboardingOptionBlock, node: &ContentNode) -> impl IntoView {
    let target_attr = block.target.as_str();
    let hide_for_this_option_value = if block.hide_for_this_option {
        "true"
    } else {
        "false"
    };
    let class_value = node.class_attribute();
    let content_html = block.content_html.clone();
    view! {
        <div
            data-onboarding-option=target_attr
            data-hide-for-this-option=hide_for_this_option_value
            class=class_value
            inner_html=content_html
        ></div>
    }
}

fn option_button_view(option: &OptionState) -> impl IntoView {
    let details = option.id.details();
    let option_id = option.id.as_str();
    let name = details.name;
    let description = details.description;
    let help_label = format!("Help: {name}");
    let checked = option.checked;
    let disabled = option.disabled;
    let checked_value = if checked { "true" } else { "false" };
    let disabled_value = if disabled { "true" } else { "false" };
    let tooltip_title = details.tooltip_title.map(|title| {
        view! { <span class="tooltip-title">{title}</span> }
    });
    view! {
        <label
            role="button"
            class="onboarding-option-button"
            data-option-id=option_id
            data-option-disabled=disabled_value
        >
            <input
                type="checkbox"
                data-onboarding-checkbox=option_id
                aria-checked=checked_value
                checked=checked
                disabled=disabled
            />
            {name}
            <span
                role="button"
                tabindex="0"
                class="onboarding-option-help"
                aria-label=help_label
                data-tooltip-trigger=option_id
            >
                "?"
            </span>
            <span role="tooltip" class="onboarding-option-tooltip" data-tooltip-for=option_id>
                {tooltip_title}
                {description}
            </span>
        </label>
    }
}
