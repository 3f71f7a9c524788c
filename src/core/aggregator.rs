//! Windowed feature aggregation over an RR-interval series.
//!
//! One row per sliding-window step. Each step slices the raw series once
//! per window kind, hands the slice to the cleaner and the matching
//! extractor family, and writes the named results into the row at the
//! columns the caller mapped. Trouble inside a window never aborts the
//! run: affected cells simply stay missing.

use crate::config::AggregatorConfig;
use crate::core::columns::{FeatureColumns, INTERVAL_INDEX, INTERVAL_START_TIME};
use crate::core::series::RrSeries;
use crate::core::windows::{FeatureFamily, WindowKind};
use crate::extract::{ExtractionError, FeatureExtractor, FeatureSet, SignalCleaner};
use nalgebra::DMatrix;
use tracing::{debug, warn};

/// Dense per-step feature matrix computed over sliding lookback windows.
///
/// Construction runs the whole computation eagerly; afterwards the matrix
/// and the step count are read-only. Cells that no extractor filled hold
/// NaN.
#[derive(Debug, Clone)]
pub struct FeatureAggregator {
    features: DMatrix<f64>,
    columns: FeatureColumns,
    n_steps: usize,
    sliding_ms: u64,
}

impl FeatureAggregator {
    /// Compute the feature matrix for a series.
    ///
    /// The matrix has `floor(end_time / sliding) + 1` rows and one column
    /// per mapped feature name. Every row gets its step index and start
    /// time; feature cells fill only where a window had enough history and
    /// its extraction succeeded.
    pub fn compute<C, X>(
        series: &RrSeries,
        columns: FeatureColumns,
        config: &AggregatorConfig,
        cleaner: &C,
        extractor: &X,
    ) -> Self
    where
        C: SignalCleaner + ?Sized,
        X: FeatureExtractor + ?Sized,
    {
        let sliding_ms = config.windows.sliding_ms.max(1);
        let n_steps = (series.end_time() / sliding_ms as f64).floor() as usize + 1;
        let features = DMatrix::from_element(n_steps, columns.len(), f64::NAN);

        let mut aggregator = Self {
            features,
            columns,
            n_steps,
            sliding_ms,
        };
        aggregator.fill(series, config, cleaner, extractor);
        aggregator
    }

    /// Number of sliding-window steps, equal to the matrix row count.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// The populated feature matrix, one row per step.
    pub fn features(&self) -> &DMatrix<f64> {
        &self.features
    }

    /// The column layout the matrix was built against.
    pub fn columns(&self) -> &FeatureColumns {
        &self.columns
    }

    /// Value of a named feature at a step. `None` for unknown names or
    /// out-of-range steps; NaN for cells no extractor filled.
    pub fn value(&self, step: usize, name: &str) -> Option<f64> {
        if step >= self.n_steps {
            return None;
        }
        self.columns
            .column(name)
            .map(|column| self.features[(step, column)])
    }

    fn fill<C, X>(&mut self, series: &RrSeries, config: &AggregatorConfig, cleaner: &C, extractor: &X)
    where
        C: SignalCleaner + ?Sized,
        X: FeatureExtractor + ?Sized,
    {
        for step in 0..self.n_steps {
            let start_ms = step as u64 * self.sliding_ms;
            self.write(step, INTERVAL_INDEX, step as f64);
            self.write(step, INTERVAL_START_TIME, start_ms as f64);

            for kind in WindowKind::ALL {
                if !kind.has_history(start_ms, &config.windows) {
                    continue;
                }

                let window_ms = kind.duration_ms(&config.windows);
                let raw = series.window_ending_at(start_ms as f64, window_ms as f64);
                if raw.is_empty() {
                    debug!(step, window = kind.label(), "window holds no RR intervals");
                    continue;
                }

                let cleaned = match cleaner.clean(raw, &config.cleaning) {
                    Ok(nn_intervals) => nn_intervals,
                    Err(ExtractionError::Degenerate) => continue,
                    Err(error) => {
                        self.report(step, kind, &error);
                        continue;
                    }
                };

                self.extract_family(step, kind, &cleaned, extractor);
            }
        }
    }

    fn extract_family<X>(&mut self, step: usize, kind: WindowKind, nn: &[f64], extractor: &X)
    where
        X: FeatureExtractor + ?Sized,
    {
        match kind.family() {
            FeatureFamily::TimeDomain => {
                self.apply(step, kind, extractor.time_domain(nn));
            }
            FeatureFamily::NonLinear => {
                // results written before a later call errors stay in place
                if !self.apply(step, kind, extractor.csi_cvi(nn)) {
                    return;
                }
                if !self.apply(step, kind, extractor.sample_entropy(nn)) {
                    return;
                }
                self.apply(step, kind, extractor.poincare(nn));
            }
            FeatureFamily::FrequencyDomain => {
                self.apply(step, kind, extractor.frequency_domain(nn));
            }
        }
    }

    /// Write one extraction outcome into the step's row, dropping keys the
    /// mapping does not know. Returns false when the family's remaining
    /// calls should be skipped.
    fn apply(
        &mut self,
        step: usize,
        kind: WindowKind,
        outcome: Result<FeatureSet, ExtractionError>,
    ) -> bool {
        match outcome {
            Ok(set) => {
                for (name, value) in &set {
                    self.write(step, name, *value);
                }
                true
            }
            Err(ExtractionError::Degenerate) => false,
            Err(error) => {
                self.report(step, kind, &error);
                false
            }
        }
    }

    fn write(&mut self, step: usize, name: &str, value: f64) {
        if let Some(column) = self.columns.column(name) {
            self.features[(step, column)] = value;
        }
    }

    fn report(&self, step: usize, kind: WindowKind, error: &ExtractionError) {
        warn!(
            step,
            window = kind.label(),
            error = %error,
            "window feature computation failed"
        );
    }
}
