//! Visibility planning for content blocks tagged with onboarding options.
//!
//! [`plan_visibility`] turns the current option list into instructions; a
//! [`VisibilitySurface`] applies them to whatever presentation layer hosts the
//! tagged content. [`MarkupDocument`] is the in-memory surface used by the
//! renderer and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, trace};

use crate::error::OnboardingOptionError;
use crate::registry::{lookup, OptionId};
use crate::selection::OptionState;

pub const HIDDEN_CLASS: &str = "hidden";
pub const ANIMATE_LINE_CLASS: &str = "animate-line";
pub const ANIMATE_CONTENT_CLASS: &str = "animate-content";
pub const ONBOARDING_STEP_CLASS: &str = "onboarding-step";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
/// Enumerates supported `VisibilityAction` values.
pub enum VisibilityAction {
    /// Show or hide every node tagged with the target according to `checked`.
    Sync { checked: bool, animate: bool },
    /// Remove `hidden` from every node tagged with the target.
    ForceVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityInstruction {
    pub target: OptionId,
    #[serde(flatten)]
    pub action: VisibilityAction,
}

/// Emits instructions for every enabled option, in list order.
///
/// Checked options with dependencies also force their dependencies' content
/// visible. That override never touches the dependencies' own checked state.
pub fn plan_visibility(options: &[OptionState], touched: bool) -> Vec<VisibilityInstruction> {
    let mut plan = Vec::new();
    for option in options.iter().filter(|option| !option.disabled) {
        plan.push(VisibilityInstruction {
            target: option.id,
            action: VisibilityAction::Sync {
                checked: option.checked,
                animate: touched,
            },
        });
        if option.checked {
            plan.extend(
                lookup(option.id)
                    .dependencies
                    .iter()
                    .map(|dependency| VisibilityInstruction {
                        target: *dependency,
                        action: VisibilityAction::ForceVisible,
                    }),
            );
        }
    }
    plan
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Option a content node belongs to; `All` nodes are never toggled.
pub enum OptionTarget {
    All,
    Option(OptionId),
}

impl OptionTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Option(id) => id.as_str(),
        }
    }

    fn matches(self, id: OptionId) -> bool {
        self == Self::Option(id)
    }
}

impl fmt::Display for OptionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionTarget {
    type Err = OnboardingOptionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == "all" {
            return Ok(Self::All);
        }
        raw.parse().map(Self::Option)
    }
}

impl From<OptionId> for OptionTarget {
    fn from(id: OptionId) -> Self {
        Self::Option(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Presentation node carrying the onboarding markup contract.
pub struct ContentNode {
    pub target: OptionTarget,
    /// Inverted policy: the node shows only while the option is unchecked.
    pub hide_for_this_option: bool,
    pub code_line: bool,
    classes: BTreeSet<String>,
}

impl ContentNode {
    /// Content block as rendered before any sync has run.
    pub fn block(target: impl Into<OptionTarget>) -> Self {
        Self {
            target: target.into(),
            hide_for_this_option: false,
            code_line: false,
            classes: BTreeSet::new(),
        }
    }

    /// Code line highlighted for an option inside a snippet.
    pub fn code_line(id: OptionId) -> Self {
        Self {
            code_line: true,
            ..Self::block(id)
        }
    }

    /// Marks the node as hidden-for-this-option; such blocks start hidden.
    pub fn hidden_for_this_option(mut self) -> Self {
        self.hide_for_this_option = true;
        self.classes.insert(HIDDEN_CLASS.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(HIDDEN_CLASS)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Space-separated class attribute value.
    pub fn class_attribute(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }

    fn toggle_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn apply(&mut self, action: VisibilityAction) {
        match action {
            VisibilityAction::Sync { checked, animate } => {
                let shown = if self.hide_for_this_option {
                    !checked
                } else {
                    checked
                };
                self.toggle_class(HIDDEN_CLASS, !shown);
                if animate {
                    if self.code_line {
                        // Line highlights follow the checkbox, even on inverted lines.
                        self.toggle_class(ANIMATE_LINE_CLASS, checked);
                    } else {
                        self.toggle_class(ANIMATE_CONTENT_CLASS, shown);
                    }
                }
            }
            VisibilityAction::ForceVisible => self.toggle_class(HIDDEN_CLASS, false),
        }
    }
}

/// Presentation layer able to apply visibility instructions.
pub trait VisibilitySurface {
    fn apply_instruction(&mut self, instruction: &VisibilityInstruction);

    fn apply_plan(&mut self, plan: &[VisibilityInstruction]) {
        for instruction in plan {
            self.apply_instruction(instruction);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Outcome of one visibility sync over a [`MarkupDocument`].
pub struct VisibilityReport {
    pub instructions: usize,
    /// Nodes whose class set differs after the sync.
    pub changed_nodes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// In-memory list of tagged content nodes in document order.
pub struct MarkupDocument {
    nodes: Vec<ContentNode>,
}

impl MarkupDocument {
    pub fn new(nodes: Vec<ContentNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    pub fn nodes_for(&self, id: OptionId) -> impl Iterator<Item = &ContentNode> {
        self.nodes.iter().filter(move |node| node.target.matches(id))
    }

    /// Applies `plan` and reports how many nodes ended up with different classes.
    #[instrument(skip_all, fields(instructions = plan.len()))]
    pub fn sync(&mut self, plan: &[VisibilityInstruction]) -> VisibilityReport {
        let before = self
            .nodes
            .iter()
            .map(|node| node.classes.clone())
            .collect::<Vec<_>>();
        self.apply_plan(plan);
        let changed_nodes = self
            .nodes
            .iter()
            .zip(before.iter())
            .filter(|(node, classes)| &node.classes != *classes)
            .count();
        VisibilityReport {
            instructions: plan.len(),
            changed_nodes,
        }
    }
}

impl VisibilitySurface for MarkupDocument {
    fn apply_instruction(&mut self, instruction: &VisibilityInstruction) {
        let mut matched = 0usize;
        for node in self
            .nodes
            .iter_mut()
            .filter(|node| node.target.matches(instruction.target))
        {
            node.apply(instruction.action);
            matched += 1;
        }
        trace!(target_option = %instruction.target, matched, "applied visibility instruction");
    }
}
