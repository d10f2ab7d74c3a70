//! Checkbox selection state with one-level dependency propagation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

use crate::error::OnboardingOptionError;
use crate::registry::{lookup, validate_option_ids, OptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Checked/disabled state of one option shown on a page.
pub struct OptionState {
    pub id: OptionId,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Option requested by a page, either bare or with explicit overrides.
pub enum RequestedOption {
    Id(OptionId),
    Record {
        id: OptionId,
        checked: Option<bool>,
        disabled: Option<bool>,
    },
}

impl RequestedOption {
    pub fn id(&self) -> OptionId {
        match self {
            Self::Id(id) => *id,
            Self::Record { id, .. } => *id,
        }
    }

    fn into_state(self) -> OptionState {
        let (id, checked, disabled) = match self {
            Self::Id(id) => (id, None, None),
            Self::Record {
                id,
                checked,
                disabled,
            } => (id, checked, disabled),
        };
        if id == OptionId::ErrorMonitoring {
            return OptionState {
                id,
                checked: true,
                disabled: true,
            };
        }
        OptionState {
            id,
            checked: checked.unwrap_or(false),
            disabled: disabled.unwrap_or(false),
        }
    }
}

impl From<OptionId> for RequestedOption {
    fn from(id: OptionId) -> Self {
        Self::Id(id)
    }
}

/// Builds the per-page option list in presentation order.
///
/// `error-monitoring` is always checked and disabled, whatever the caller asked for.
pub fn initialize_options(
    requested: &[RequestedOption],
) -> Result<Vec<OptionState>, OnboardingOptionError> {
    let mut seen = BTreeSet::new();
    for option in requested {
        if !seen.insert(option.id()) {
            return Err(OnboardingOptionError::DuplicateOptionIdentifier {
                id: option.id().to_string(),
            });
        }
    }
    Ok(requested.iter().map(|option| option.into_state()).collect())
}

/// Validates raw identifiers and builds bare option states from them.
pub fn initialize_options_from_ids<'a>(
    raw_ids: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<OptionState>, OnboardingOptionError> {
    let requested = validate_option_ids(raw_ids)?
        .into_iter()
        .map(RequestedOption::from)
        .collect::<Vec<_>>();
    initialize_options(&requested)
}

/// Returns `options` with `target` set to `checked`.
///
/// Checking also checks the target's direct dependencies. Unchecking also
/// unchecks options that list the target as a direct dependency. Disabled
/// options are never changed; a disabled or absent target leaves the list as is.
pub fn apply_checked_change(
    options: &[OptionState],
    target: OptionId,
    checked: bool,
) -> Vec<OptionState> {
    let Some(target_state) = options.iter().find(|option| option.id == target) else {
        debug!(option = %target, "checked change for option not on page");
        return options.to_vec();
    };
    if target_state.disabled {
        debug!(option = %target, "checked change for disabled option ignored");
        return options.to_vec();
    }

    let dependencies = lookup(target).dependencies;
    options
        .iter()
        .map(|option| {
            if option.disabled {
                return *option;
            }
            let cascades = if checked {
                dependencies.contains(&option.id)
            } else {
                // One level only: transitive dependents are left alone.
                lookup(option.id).dependencies.contains(&target)
            };
            if option.id == target || cascades {
                OptionState { checked, ..*option }
            } else {
                *option
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Option list for one page view plus the touched flag.
pub struct SelectionState {
    options: Vec<OptionState>,
    touched: bool,
}

impl SelectionState {
    pub fn new(requested: &[RequestedOption]) -> Result<Self, OnboardingOptionError> {
        Ok(Self {
            options: initialize_options(requested)?,
            touched: false,
        })
    }

    pub fn options(&self) -> &[OptionState] {
        &self.options
    }

    /// True once the user has changed any checkbox.
    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn is_checked(&self, id: OptionId) -> bool {
        self.options
            .iter()
            .any(|option| option.id == id && option.checked)
    }

    #[instrument(skip(self), fields(option = %target))]
    pub fn set_checked(&mut self, target: OptionId, checked: bool) -> &[OptionState] {
        self.touched = true;
        self.options = apply_checked_change(&self.options, target, checked);
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_checked_change, initialize_options, initialize_options_from_ids, OptionState,
        RequestedOption, SelectionState,
    };
    use crate::error::OnboardingOptionError;
    use crate::registry::OptionId;

    fn state(id: OptionId, checked: bool) -> OptionState {
        OptionState {
            id,
            checked,
            disabled: false,
        }
    }

    #[test]
    fn unit_initialize_defaults_to_unchecked_and_enabled() {
        let options = initialize_options(&[OptionId::Logs.into(), OptionId::Dsym.into()])
            .expect("initialize");
        assert_eq!(
            options,
            vec![state(OptionId::Logs, false), state(OptionId::Dsym, false)]
        );
    }

    #[test]
    fn unit_initialize_keeps_explicit_record_overrides() {
        let options = initialize_options(&[RequestedOption::Record {
            id: OptionId::SessionReplay,
            checked: Some(true),
            disabled: Some(true),
        }])
        .expect("initialize");
        assert_eq!(
            options,
            vec![OptionState {
                id: OptionId::SessionReplay,
                checked: true,
                disabled: true,
            }]
        );
    }

    #[test]
    fn functional_initialize_forces_error_monitoring_checked_and_disabled() {
        let requested = [
            RequestedOption::Id(OptionId::ErrorMonitoring),
            RequestedOption::Record {
                id: OptionId::Performance,
                checked: None,
                disabled: None,
            },
        ];
        let options = initialize_options(&requested).expect("initialize");
        assert!(options[0].checked && options[0].disabled);

        let overridden = initialize_options(&[RequestedOption::Record {
            id: OptionId::ErrorMonitoring,
            checked: Some(false),
            disabled: Some(false),
        }])
        .expect("initialize");
        assert_eq!(
            overridden[0],
            OptionState {
                id: OptionId::ErrorMonitoring,
                checked: true,
                disabled: true,
            }
        );
    }

    #[test]
    fn functional_initialize_from_ids_rejects_unknown_identifier() {
        let error = initialize_options_from_ids(["performance", "tracing"])
            .expect_err("tracing is not a registry id");
        assert!(matches!(
            error,
            OnboardingOptionError::InvalidOptionIdentifier { ref id, .. } if id == "tracing"
        ));
    }

    #[test]
    fn regression_initialize_rejects_duplicate_identifier() {
        let error = initialize_options(&[OptionId::Logs.into(), OptionId::Logs.into()])
            .expect_err("duplicate ids should fail");
        assert_eq!(
            error,
            OnboardingOptionError::DuplicateOptionIdentifier {
                id: "logs".to_string()
            }
        );
    }

    #[test]
    fn functional_checking_profiling_checks_performance() {
        let options = vec![
            state(OptionId::Performance, false),
            state(OptionId::Profiling, false),
        ];
        let next = apply_checked_change(&options, OptionId::Profiling, true);
        assert_eq!(
            next,
            vec![
                state(OptionId::Performance, true),
                state(OptionId::Profiling, true)
            ]
        );
    }

    #[test]
    fn functional_unchecking_profiling_leaves_performance_checked() {
        let options = vec![
            state(OptionId::Performance, true),
            state(OptionId::Profiling, true),
        ];
        let next = apply_checked_change(&options, OptionId::Profiling, false);
        assert_eq!(
            next,
            vec![
                state(OptionId::Performance, true),
                state(OptionId::Profiling, false)
            ]
        );
    }

    #[test]
    fn functional_unchecking_performance_unchecks_direct_dependents() {
        let options = vec![
            state(OptionId::Performance, true),
            state(OptionId::Profiling, true),
            state(OptionId::Logs, true),
        ];
        let next = apply_checked_change(&options, OptionId::Performance, false);
        assert_eq!(
            next,
            vec![
                state(OptionId::Performance, false),
                state(OptionId::Profiling, false),
                state(OptionId::Logs, true),
            ]
        );
    }

    #[test]
    fn regression_disabled_options_never_change() {
        let options = vec![
            OptionState {
                id: OptionId::Performance,
                checked: false,
                disabled: true,
            },
            state(OptionId::Profiling, false),
        ];
        let next = apply_checked_change(&options, OptionId::Profiling, true);
        assert!(!next[0].checked);
        assert!(next[1].checked);

        let disabled_target = vec![OptionState {
            id: OptionId::ErrorMonitoring,
            checked: true,
            disabled: true,
        }];
        assert_eq!(
            apply_checked_change(&disabled_target, OptionId::ErrorMonitoring, false),
            disabled_target
        );
    }

    #[test]
    fn regression_change_for_option_not_on_page_is_a_no_op() {
        let options = vec![state(OptionId::Performance, false)];
        assert_eq!(
            apply_checked_change(&options, OptionId::Profiling, true),
            options
        );
    }

    #[test]
    fn integration_selection_state_tracks_touched_flag() {
        let mut selection =
            SelectionState::new(&[OptionId::ErrorMonitoring.into(), OptionId::Logs.into()])
                .expect("selection");
        assert!(!selection.touched());
        assert!(selection.is_checked(OptionId::ErrorMonitoring));

        selection.set_checked(OptionId::Logs, true);
        assert!(selection.touched());
        assert!(selection.is_checked(OptionId::Logs));

        selection.set_checked(OptionId::Logs, false);
        assert!(selection.touched());
        assert!(!selection.is_checked(OptionId::Logs));
    }
}
