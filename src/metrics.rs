//! Coefficient-recovery metrics
//!
//! This module scores an estimated coefficient vector against the ground
//! truth of a synthetic problem.

use ndarray::{Array1, ArrayBase, Data, Ix1, Zip};

use crate::error::{Result, SparseSimError};

/// Selection and estimation accuracy of a fitted coefficient vector
///
/// Both rates normalize by the *total* feature count, not by the number of
/// true negatives or positives as the textbook definitions would, so a
/// model that misses half of a six-feature support on a ten-feature problem
/// reports a false-negative rate of `0.3`, not `0.5`. Relative bias
/// normalizes each elementwise error by the total magnitude `sum(|truth|)`
/// of the true coefficients.
///
/// Support membership is exact: a coefficient counts as selected when it is
/// not `0.0`, matching the point mass of the spike and the hard zeros of a
/// Lasso-style fitter. All fields are computed once and never mutated.
#[derive(Clone, Debug)]
pub struct RecoveryMetrics {
    false_positive_rate: f64,
    false_negative_rate: f64,
    relative_bias: Array1<f64>,
}

impl RecoveryMetrics {
    /// Score `estimate` against `truth`
    ///
    /// Returns [`CoefficientLength`](SparseSimError::CoefficientLength) when
    /// the vectors differ in length and
    /// [`ZeroSignal`](SparseSimError::ZeroSignal) when the truth is all
    /// zero, which would make the relative bias a division by zero.
    pub fn new(
        estimate: &ArrayBase<impl Data<Elem = f64>, Ix1>,
        truth: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    ) -> Result<Self> {
        if estimate.len() != truth.len() {
            return Err(SparseSimError::CoefficientLength(
                estimate.len(),
                truth.len(),
            ));
        }

        let magnitude = truth.mapv(f64::abs).sum();
        if magnitude == 0.0 {
            return Err(SparseSimError::ZeroSignal);
        }

        let mut false_positives = 0usize;
        let mut false_negatives = 0usize;
        Zip::from(estimate).and(truth).for_each(|&est, &tru| {
            if est != 0.0 && tru == 0.0 {
                false_positives += 1;
            }
            if est == 0.0 && tru != 0.0 {
                false_negatives += 1;
            }
        });

        let n_features = truth.len() as f64;
        let relative_bias = Zip::from(estimate)
            .and(truth)
            .map_collect(|&est, &tru| (est - tru) / magnitude);

        Ok(RecoveryMetrics {
            false_positive_rate: false_positives as f64 / n_features,
            false_negative_rate: false_negatives as f64 / n_features,
            relative_bias,
        })
    }

    /// Fraction of all features selected by the estimate but truly zero
    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    /// Fraction of all features missed by the estimate but truly nonzero
    pub fn false_negative_rate(&self) -> f64 {
        self.false_negative_rate
    }

    /// Elementwise `(estimate - truth) / sum(|truth|)`
    pub fn relative_bias(&self) -> &Array1<f64> {
        &self.relative_bias
    }

    /// Mean of the elementwise relative bias
    pub fn mean_relative_bias(&self) -> f64 {
        self.relative_bias.mean().unwrap_or(0.0)
    }
}
