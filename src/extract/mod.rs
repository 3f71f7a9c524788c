//! Contract with the external signal-cleaning and feature-extraction library.
//!
//! The aggregator computes no HRV math itself. Cleaning, outlier and
//! ectopic-beat handling, and every feature family are supplied by the
//! caller through the traits below and treated as opaque. Implementations
//! must be deterministic for identical input if the resulting matrices are
//! expected to be reproducible.

pub mod types;

pub use types::{ExtractionError, FeatureSet};

use crate::config::CleaningConfig;

/// Cleans a raw RR-interval slice before feature extraction.
///
/// The expected pipeline (all of it the implementation's business): drop
/// values outside the plausibility band, close gaps by interpolation,
/// detect and remove ectopic beats, interpolate again.
pub trait SignalCleaner {
    /// Produce cleaned NN intervals from a raw RR slice.
    fn clean(&self, rr_intervals: &[f64], config: &CleaningConfig)
        -> Result<Vec<f64>, ExtractionError>;
}

/// Computes named scalar features from cleaned NN intervals.
///
/// One operation per library call the aggregator dispatches: time-domain
/// statistics for the short window; CSI/CVI, sample entropy and Poincaré
/// geometry for the medium window; spectral band powers for the large
/// window.
pub trait FeatureExtractor {
    /// Time-domain statistics (means, deviations, RMSSD-style measures).
    fn time_domain(&self, nn_intervals: &[f64]) -> Result<FeatureSet, ExtractionError>;

    /// Cardiac sympathetic/vagal index features.
    fn csi_cvi(&self, nn_intervals: &[f64]) -> Result<FeatureSet, ExtractionError>;

    /// Sample entropy, keyed `sampen`.
    fn sample_entropy(&self, nn_intervals: &[f64]) -> Result<FeatureSet, ExtractionError>;

    /// Poincaré-plot geometry features.
    fn poincare(&self, nn_intervals: &[f64]) -> Result<FeatureSet, ExtractionError>;

    /// Spectral band power features.
    fn frequency_domain(&self, nn_intervals: &[f64]) -> Result<FeatureSet, ExtractionError>;
}
