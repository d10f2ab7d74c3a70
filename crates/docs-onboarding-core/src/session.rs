//! Onboarding option bar session: selection state wired to its collaborators.

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::code_context::OnboardingOptionsSink;
use crate::error::OnboardingOptionError;
use crate::registry::OptionId;
use crate::selection::{OptionState, RequestedOption, SelectionState};
use crate::visibility::{plan_visibility, VisibilityInstruction};

/// One option bar on one page view.
///
/// Every state change is exported to the page code context, when one is
/// attached, and answered with the visibility plan for the new state.
pub struct OnboardingSession {
    selection: SelectionState,
    code_context: Option<Arc<dyn OnboardingOptionsSink>>,
}

impl std::fmt::Debug for OnboardingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingSession")
            .field("selection", &self.selection)
            .field("code_context_attached", &self.code_context.is_some())
            .finish()
    }
}

impl OnboardingSession {
    #[instrument(skip_all, fields(requested = requested.len()))]
    pub fn new(
        requested: &[RequestedOption],
        code_context: Option<Arc<dyn OnboardingOptionsSink>>,
    ) -> Result<Self, OnboardingOptionError> {
        let session = Self {
            selection: SelectionState::new(requested)?,
            code_context,
        };
        session.export();
        Ok(session)
    }

    pub fn options(&self) -> &[OptionState] {
        self.selection.options()
    }

    pub fn touched(&self) -> bool {
        self.selection.touched()
    }

    /// Plan for the current state; the initial render never animates.
    pub fn visibility_plan(&self) -> Vec<VisibilityInstruction> {
        plan_visibility(self.selection.options(), self.selection.touched())
    }

    /// Checkbox change handler.
    #[instrument(skip(self))]
    pub fn set_checked(&mut self, target: OptionId, checked: bool) -> Vec<VisibilityInstruction> {
        self.selection.set_checked(target, checked);
        self.export();
        let plan = self.visibility_plan();
        debug!(instructions = plan.len(), "planned visibility after checked change");
        plan
    }

    fn export(&self) {
        if let Some(code_context) = &self.code_context {
            code_context.update_onboarding_options(self.selection.options());
        }
    }
}
