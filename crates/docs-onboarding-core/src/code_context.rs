//! Page-level export of the current onboarding selection.

use std::sync::{PoisonError, RwLock};

use crate::registry::OptionId;
use crate::selection::OptionState;

/// Receives the latest option list after every selection change.
pub trait OnboardingOptionsSink: Send + Sync {
    fn update_onboarding_options(&self, options: &[OptionState]);
}

#[derive(Debug, Default)]
/// Shared page context read by snippet generation elsewhere on the page.
pub struct PageCodeContext {
    onboarding_options: RwLock<Vec<OptionState>>,
}

impl PageCodeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the most recently exported option list.
    pub fn onboarding_options(&self) -> Vec<OptionState> {
        self.onboarding_options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// True when `id` was exported as checked; options not on the page are off.
    pub fn is_option_enabled(&self, id: OptionId) -> bool {
        self.onboarding_options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|option| option.id == id && option.checked)
    }
}

impl OnboardingOptionsSink for PageCodeContext {
    fn update_onboarding_options(&self, options: &[OptionState]) {
        let mut current = self
            .onboarding_options
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        current.clear();
        current.extend_from_slice(options);
    }
}
