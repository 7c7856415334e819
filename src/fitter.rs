//! Seam for the external sparse model fitter
//!
//! The actual selection/estimation machinery (for example a UoI-Lasso with
//! bootstrapped selection and bagged re-estimation) lives outside this
//! crate; only its input/output contract is modeled here.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{Result, SparseSimError};

/// How the fitter resamples the training data
#[derive(Clone, Debug, PartialEq)]
pub enum Resampling {
    /// Resample across all samples uniformly
    Uniform,
    /// Resample within the given per-sample group labels, so each group
    /// keeps its proportion of the data
    Stratified(Array1<usize>),
}

/// Options forwarded to the external fitter, passed by value as an explicit
/// structure rather than loose keyword arguments
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    resampling: Resampling,
}

impl FitConfig {
    pub fn new() -> Self {
        Self {
            resampling: Resampling::Uniform,
        }
    }

    /// Request stratified resampling with one group label per sample
    pub fn stratify(mut self, labels: Array1<usize>) -> Self {
        self.resampling = Resampling::Stratified(labels);
        self
    }

    pub fn resampling(&self) -> &Resampling {
        &self.resampling
    }

    /// Verify the configuration against the dataset it will be used with
    ///
    /// Returns [`StratifyLength`](SparseSimError::StratifyLength) when the
    /// stratification labels do not cover every sample exactly once.
    pub fn check_samples(&self, n_samples: usize) -> Result<()> {
        if let Resampling::Stratified(labels) = &self.resampling {
            if labels.len() != n_samples {
                return Err(SparseSimError::StratifyLength(labels.len(), n_samples));
            }
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An external collaborator that estimates a sparse coefficient vector
///
/// Implementors consume a design matrix with shape `(n_samples, n_features)`
/// and a response vector with shape `(n_samples,)` and return one estimated
/// coefficient per feature. Failures inside the collaborator surface as
/// [`Fitter`](SparseSimError::Fitter) errors.
pub trait FitSparse {
    fn fit(
        &self,
        records: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        config: &FitConfig,
    ) -> Result<Array1<f64>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn uniform_config_accepts_any_sample_count() {
        let config = FitConfig::new();
        assert!(config.check_samples(0).is_ok());
        assert!(config.check_samples(400).is_ok());
    }

    #[test]
    fn stratified_config_requires_one_label_per_sample() {
        let config = FitConfig::new().stratify(array![0, 0, 1, 1]);
        assert!(config.check_samples(4).is_ok());
        assert!(matches!(
            config.check_samples(5),
            Err(SparseSimError::StratifyLength(4, 5))
        ));
    }
}
