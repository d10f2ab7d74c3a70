use thiserror::Error;

/// Contract violations raised while building onboarding option state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingOptionError {
    #[error("Invalid option id: {id}.\nValid options are: {valid}")]
    InvalidOptionIdentifier { id: String, valid: String },
    #[error("duplicate option id on page: {id}")]
    DuplicateOptionIdentifier { id: String },
    #[error("unsupported page manifest schema_version {found} (expected {expected})")]
    UnsupportedManifestSchema { found: u32, expected: u32 },
}
