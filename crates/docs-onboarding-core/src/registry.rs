//! Closed registry of onboarding options and their static details.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OnboardingOptionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Enumerates the onboarding options a docs page may offer.
pub enum OptionId {
    ErrorMonitoring,
    Performance,
    Profiling,
    SessionReplay,
    UserFeedback,
    Logs,
    SourceContext,
    Dsym,
    SourceMaps,
    Opentelemetry,
}

const ALL_OPTION_IDS: [OptionId; 10] = [
    OptionId::ErrorMonitoring,
    OptionId::Performance,
    OptionId::Profiling,
    OptionId::SessionReplay,
    OptionId::UserFeedback,
    OptionId::Logs,
    OptionId::SourceContext,
    OptionId::Dsym,
    OptionId::SourceMaps,
    OptionId::Opentelemetry,
];

impl OptionId {
    /// Every known option in registry order.
    pub fn all() -> &'static [OptionId] {
        &ALL_OPTION_IDS
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ErrorMonitoring => "error-monitoring",
            Self::Performance => "performance",
            Self::Profiling => "profiling",
            Self::SessionReplay => "session-replay",
            Self::UserFeedback => "user-feedback",
            Self::Logs => "logs",
            Self::SourceContext => "source-context",
            Self::Dsym => "dsym",
            Self::SourceMaps => "source-maps",
            Self::Opentelemetry => "opentelemetry",
        }
    }

    /// Static details for this option.
    pub fn details(self) -> &'static OptionDetails {
        lookup(self)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionId {
    type Err = OnboardingOptionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ALL_OPTION_IDS
            .iter()
            .copied()
            .find(|id| id.as_str() == raw)
            .ok_or_else(|| OnboardingOptionError::InvalidOptionIdentifier {
                id: raw.to_string(),
                valid: render_valid_option_ids(),
            })
    }
}

impl TryFrom<String> for OptionId {
    type Error = OnboardingOptionError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<OptionId> for String {
    fn from(id: OptionId) -> Self {
        id.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Display metadata and dependency edges for one option.
pub struct OptionDetails {
    pub id: OptionId,
    pub name: &'static str,
    pub description: &'static str,
    /// Heading shown above the description in the tooltip, when present.
    pub tooltip_title: Option<&'static str>,
    /// Options that must be checked whenever this option is checked.
    pub dependencies: &'static [OptionId],
}

static OPTION_REGISTRY: [OptionDetails; 10] = [
    OptionDetails {
        id: OptionId::ErrorMonitoring,
        name: "Error Monitoring",
        description: "Let's admit it, we all have errors.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::Performance,
        name: "Tracing",
        description: "Tracing and automatic performance issue detection across services and \
                      context on who is impacted, outliers, regressions, and the root cause of \
                      your slowdown.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::Profiling,
        name: "Profiling",
        description: "See the exact lines of code causing your performance bottlenecks, for \
                      faster troubleshooting and resource optimization.",
        tooltip_title: Some("Requires Tracing to be enabled"),
        dependencies: &[OptionId::Performance],
    },
    OptionDetails {
        id: OptionId::SessionReplay,
        name: "Session Replay",
        description: "Video-like reproductions of user sessions with debugging context to help \
                      you confirm issue impact and troubleshoot faster.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::UserFeedback,
        name: "User Feedback",
        description: "Collect user feedback from anywhere in your application with an \
                      embeddable widget that allows users to report bugs and provide insights.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::Logs,
        name: "Logs (Beta)",
        description: "Send text-based log information from your applications to Sentry for \
                      viewing alongside relevant errors and searching by text-string or \
                      individual attributes.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::SourceContext,
        name: "Source Context",
        description: "Upload your source code to allow Sentry to display snippets of your code \
                      next to the event stack traces.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::Dsym,
        name: "dSYM",
        description: "Debug symbols for iOS and macOS that provide the necessary information to \
                      convert program addresses back to function names, source file names, and \
                      line numbers.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::SourceMaps,
        name: "Source Maps",
        description: "Source maps for web applications that help translate minified code back \
                      to the original source for better error reporting.",
        tooltip_title: None,
        dependencies: &[],
    },
    OptionDetails {
        id: OptionId::Opentelemetry,
        name: "OpenTelemetry",
        description: "Combine Sentry with OpenTelemetry.",
        tooltip_title: None,
        dependencies: &[],
    },
];

/// Returns the static details for `id`.
pub fn lookup(id: OptionId) -> &'static OptionDetails {
    // Registry rows are declared in `OptionId` order.
    &OPTION_REGISTRY[id as usize]
}

/// Returns every registry option whose dependency list directly names `id`.
pub fn dependents_of(id: OptionId) -> Vec<OptionId> {
    OPTION_REGISTRY
        .iter()
        .filter(|details| details.dependencies.contains(&id))
        .map(|details| details.id)
        .collect()
}

/// Parses every raw identifier, failing on the first one outside the registry.
pub fn validate_option_ids<'a>(
    raw_ids: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<OptionId>, OnboardingOptionError> {
    raw_ids.into_iter().map(str::parse).collect()
}

fn render_valid_option_ids() -> String {
    ALL_OPTION_IDS
        .iter()
        .map(|id| format!("\"{}\"", id.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
