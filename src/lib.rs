//! Sliding-window HRV feature matrices over RR-interval series.
//!
//! Different HRV feature families need different amounts of signal history
//! to be statistically valid, so this library slides three lookback windows
//! of configurable size over a time-stamped RR-interval series: a short one
//! feeding time-domain statistics, a medium one feeding non-linear measures,
//! and a large one feeding frequency-domain band powers. It steps through
//! the timeline at a fixed increment and writes every result into one dense
//! matrix, one row per step.
//!
//! The library computes no HRV math itself. Signal cleaning and the three
//! extractor families are supplied by the caller through the
//! [`extract::SignalCleaner`] and [`extract::FeatureExtractor`] traits and
//! treated as opaque collaborators; the engineering here is the windowed
//! slicing, the column-mapped matrix, and the per-window failure
//! suppression that keeps one bad window from aborting a run.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     hrv-feature-matrix                     │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────────┐   ┌──────────────────┐  │
//! │  │ RrSeries │──▶│  Window slicer │──▶│ SignalCleaner    │  │
//! │  │ (input)  │   │ (short/medium/ │   │ FeatureExtractor │  │
//! │  └──────────┘   │     large)     │   │ (caller-supplied)│  │
//! │                 └───────────────┘   └──────────────────┘  │
//! │                         │                     │            │
//! │                         ▼                     ▼            │
//! │                 ┌────────────────────────────────┐         │
//! │                 │  Feature matrix (NaN = missing) │         │
//! │                 └────────────────────────────────┘         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use hrv_feature_matrix::{
//!     AggregatorConfig, CleaningConfig, ExtractionError, FeatureAggregator, FeatureColumns,
//!     FeatureExtractor, FeatureSet, RrSeries, SignalCleaner, WindowConfig,
//! };
//!
//! /// Minimal stand-in for a real HRV library.
//! struct Library;
//!
//! impl SignalCleaner for Library {
//!     fn clean(&self, rr: &[f64], _: &CleaningConfig) -> Result<Vec<f64>, ExtractionError> {
//!         Ok(rr.to_vec())
//!     }
//! }
//!
//! impl FeatureExtractor for Library {
//!     fn time_domain(&self, nn: &[f64]) -> Result<FeatureSet, ExtractionError> {
//!         let mean = nn.iter().sum::<f64>() / nn.len() as f64;
//!         Ok(FeatureSet::from([("mean_nni".to_string(), mean)]))
//!     }
//!     fn csi_cvi(&self, _: &[f64]) -> Result<FeatureSet, ExtractionError> {
//!         Err(ExtractionError::Degenerate)
//!     }
//!     fn sample_entropy(&self, _: &[f64]) -> Result<FeatureSet, ExtractionError> {
//!         Err(ExtractionError::Degenerate)
//!     }
//!     fn poincare(&self, _: &[f64]) -> Result<FeatureSet, ExtractionError> {
//!         Err(ExtractionError::Degenerate)
//!     }
//!     fn frequency_domain(&self, _: &[f64]) -> Result<FeatureSet, ExtractionError> {
//!         Err(ExtractionError::Degenerate)
//!     }
//! }
//!
//! let series = RrSeries::new(
//!     vec![0.0, 800.0, 1600.0, 2400.0],
//!     vec![800.0, 800.0, 800.0, 800.0],
//! )
//! .unwrap();
//! let columns = FeatureColumns::from_names([
//!     "interval_index",
//!     "interval_start_time",
//!     "mean_nni",
//! ])
//! .unwrap();
//! let config = AggregatorConfig {
//!     windows: WindowConfig {
//!         sliding_ms: 1000,
//!         short_ms: 1000,
//!         medium_ms: 2000,
//!         large_ms: 2000,
//!     },
//!     ..Default::default()
//! };
//!
//! let aggregator = FeatureAggregator::compute(&series, columns, &config, &Library, &Library);
//! assert_eq!(aggregator.n_steps(), 3);
//! assert_eq!(aggregator.value(1, "mean_nni"), Some(800.0));
//! ```

pub mod config;
pub mod core;
pub mod extract;

// Re-export key types at crate root for convenience
pub use config::{
    AggregatorConfig, CleaningConfig, EctopicMethod, InterpolationMethod, WindowConfig,
};
pub use core::{
    ColumnsError, FeatureAggregator, FeatureColumns, FeatureFamily, RrSeries, SeriesError,
    WindowKind, INTERVAL_INDEX, INTERVAL_START_TIME,
};
pub use extract::{ExtractionError, FeatureExtractor, FeatureSet, SignalCleaner};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
