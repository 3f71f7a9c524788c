//! Lookback window kinds and their fixed feature-family association.

use crate::config::WindowConfig;
use serde::{Deserialize, Serialize};

/// The three lookback window kinds.
///
/// Each kind always feeds the same feature family regardless of the
/// durations the caller configures; see [`WindowKind::family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Short,
    Medium,
    Large,
}

/// Feature families, one per window kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFamily {
    TimeDomain,
    NonLinear,
    FrequencyDomain,
}

impl WindowKind {
    /// All kinds, in dispatch order.
    pub const ALL: [WindowKind; 3] = [WindowKind::Short, WindowKind::Medium, WindowKind::Large];

    /// Configured lookback duration for this kind.
    pub fn duration_ms(&self, config: &WindowConfig) -> u64 {
        match self {
            WindowKind::Short => config.short_ms,
            WindowKind::Medium => config.medium_ms,
            WindowKind::Large => config.large_ms,
        }
    }

    /// The feature family this window feeds. The association is fixed:
    /// short→time-domain, medium→non-linear, large→frequency-domain.
    pub fn family(&self) -> FeatureFamily {
        match self {
            WindowKind::Short => FeatureFamily::TimeDomain,
            WindowKind::Medium => FeatureFamily::NonLinear,
            WindowKind::Large => FeatureFamily::FrequencyDomain,
        }
    }

    /// Label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            WindowKind::Short => "short",
            WindowKind::Medium => "medium",
            WindowKind::Large => "large",
        }
    }

    /// Whether a step starting at `start_ms` has accumulated enough
    /// history to fill this window. Non-strict: at exactly the boundary
    /// the window is attempted.
    pub fn has_history(&self, start_ms: u64, config: &WindowConfig) -> bool {
        start_ms >= self.duration_ms(config)
    }
}
