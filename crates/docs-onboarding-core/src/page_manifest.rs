//! Page manifest JSON naming the onboarding options a docs page shows.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

use crate::error::OnboardingOptionError;
use crate::registry::OptionId;
use crate::selection::RequestedOption;

pub const PAGE_MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Requested option as written in a page manifest, before registry validation.
pub enum RequestedOptionEntry {
    Id(String),
    Record {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        disabled: Option<bool>,
    },
}

impl TryFrom<&RequestedOptionEntry> for RequestedOption {
    type Error = OnboardingOptionError;

    fn try_from(entry: &RequestedOptionEntry) -> Result<Self, Self::Error> {
        match entry {
            RequestedOptionEntry::Id(raw) => Ok(Self::Id(raw.parse::<OptionId>()?)),
            RequestedOptionEntry::Record {
                id,
                checked,
                disabled,
            } => Ok(Self::Record {
                id: id.parse::<OptionId>()?,
                checked: *checked,
                disabled: *disabled,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Options requested by one documentation page, in presentation order.
pub struct PageManifest {
    pub schema_version: u32,
    pub options: Vec<RequestedOptionEntry>,
}

impl PageManifest {
    /// Validates the schema version and every identifier against the registry.
    pub fn requested_options(&self) -> Result<Vec<RequestedOption>, OnboardingOptionError> {
        if self.schema_version != PAGE_MANIFEST_SCHEMA_VERSION {
            return Err(OnboardingOptionError::UnsupportedManifestSchema {
                found: self.schema_version,
                expected: PAGE_MANIFEST_SCHEMA_VERSION,
            });
        }
        self.options.iter().map(RequestedOption::try_from).collect()
    }
}

pub fn parse_page_manifest(raw: &str) -> Result<PageManifest> {
    serde_json::from_str::<PageManifest>(raw).context("failed to parse page manifest JSON")
}

#[instrument(fields(path = %path.display()))]
pub fn load_page_manifest(path: &Path) -> Result<Vec<RequestedOption>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read page manifest {}", path.display()))?;
    let manifest = parse_page_manifest(&raw)
        .with_context(|| format!("invalid page manifest {}", path.display()))?;
    let requested = manifest
        .requested_options()
        .with_context(|| format!("invalid onboarding options in {}", path.display()))?;
    Ok(requested)
}
