//! Types crossing the extraction boundary.

use std::collections::HashMap;
use std::fmt;

/// Named scalar features produced by a single extraction call.
pub type FeatureSet = HashMap<String, f64>;

/// Why an extraction call produced no features.
///
/// This is an expected outcome, not control flow: the aggregator turns
/// either variant into missing cells and moves on to the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The input was numerically degenerate (too few beats, zero
    /// variance). Skipped without a diagnostic.
    Degenerate,
    /// The collaborator failed outright.
    Failed(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::Degenerate => write!(f, "degenerate input"),
            ExtractionError::Failed(msg) => write!(f, "extraction failed: {msg}"),
        }
    }
}

impl std::error::Error for ExtractionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ExtractionError::Degenerate.to_string(), "degenerate input");
        assert_eq!(
            ExtractionError::Failed("spectrum too sparse".to_string()).to_string(),
            "extraction failed: spectrum too sparse"
        );
    }
}
