//! Configuration for the windowed feature aggregator.

use serde::{Deserialize, Serialize};

/// Sliding step and lookback window durations, in milliseconds.
///
/// The short/medium/large names are labels tied to feature families, not
/// size guarantees: no relative ordering is enforced, and a "short" window
/// configured larger than the "large" one is legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Step size used to advance through the timeline
    pub sliding_ms: u64,
    /// Lookback feeding time-domain features
    pub short_ms: u64,
    /// Lookback feeding non-linear features
    pub medium_ms: u64,
    /// Lookback feeding frequency-domain features
    pub large_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            sliding_ms: 30_000,
            short_ms: 60_000,
            medium_ms: 150_000,
            large_ms: 300_000,
        }
    }
}

/// Interpolation strategy the cleaner should use to close gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// Leave gaps in place
    None,
    /// Linear interpolation between neighbors
    Linear,
}

/// Ectopic-beat detection heuristic the cleaner should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EctopicMethod {
    Malik,
    Kamath,
    Karlsson,
    Acar,
}

/// Settings handed through to the signal cleaner.
///
/// The aggregator assigns no meaning to these values; they parameterize
/// the collaborator's cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Lower edge of the physiological plausibility band
    pub low_rri_ms: f64,
    /// Upper edge of the physiological plausibility band
    pub high_rri_ms: f64,
    /// How the cleaner closes gaps left by removed values
    pub interpolation: InterpolationMethod,
    /// How the cleaner detects ectopic beats
    pub ectopic: EctopicMethod,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            low_rri_ms: 300.0,
            high_rri_ms: 1800.0,
            interpolation: InterpolationMethod::Linear,
            ectopic: EctopicMethod::Malik,
        }
    }
}

/// Full configuration for one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub windows: WindowConfig,
    pub cleaning: CleaningConfig,
}
