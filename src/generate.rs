//! Spike-and-slab regression data synthesis

use ndarray::{Array, Array1, Array2};
use ndarray_rand::{
    rand::{seq::index::sample, Rng},
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

use crate::error::Result;
use crate::hyperparams::{SparseSimParams, SparseSimValidParams};

/// A synthetic sparse regression problem together with its ground truth
///
/// All three arrays are created in one pass and never mutated afterwards:
/// the design matrix has i.i.d. standard-normal entries, the coefficient
/// vector mixes exact zeros with slab-sampled values, and the response is
/// the noisy matrix-vector product of the two.
#[derive(Clone, Debug)]
pub struct SparseDataset {
    records: Array2<f64>,
    targets: Array1<f64>,
    coefficients: Array1<f64>,
}

impl SparseDataset {
    /// Design matrix with shape `(n_samples, n_features)`
    pub fn records(&self) -> &Array2<f64> {
        &self.records
    }

    /// Response vector with shape `(n_samples,)`
    pub fn targets(&self) -> &Array1<f64> {
        &self.targets
    }

    /// True coefficient vector with shape `(n_features,)`
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    pub fn n_samples(&self) -> usize {
        self.records.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.records.ncols()
    }
}

/// Generate a spike-and-slab regression dataset from a checked parameter set.
///
/// Support positions are drawn uniformly without replacement, their values
/// are sampled from `slab`, and the response is `X w` plus centered Gaussian
/// noise with the configured scale. The random source is caller-owned, so
/// regenerating with an equally seeded `rng` reproduces the dataset exactly.
pub fn spike_slab_regression(
    params: &SparseSimValidParams,
    slab: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> SparseDataset {
    let (n_samples, n_features) = (params.n_samples(), params.n_features());

    let records: Array2<f64> = Array::random_using((n_samples, n_features), StandardNormal, rng);

    let mut coefficients = Array1::zeros(n_features);
    for position in sample(rng, n_features, params.n_nonzero()) {
        coefficients[position] = slab.sample(rng);
    }

    let noise: Array1<f64> = Array::random_using(n_samples, StandardNormal, rng);
    let targets = records.dot(&coefficients) + noise * params.noise_scale();

    SparseDataset {
        records,
        targets,
        coefficients,
    }
}

impl SparseSimParams {
    /// Check the parameter set and generate a dataset from it
    ///
    /// Convenience for [`check`](Self::check) followed by
    /// [`spike_slab_regression`].
    pub fn generate(
        &self,
        slab: impl Distribution<f64> + Clone,
        rng: &mut impl Rng,
    ) -> Result<SparseDataset> {
        let params = self.check_ref()?;
        Ok(spike_slab_regression(&params, slab, rng))
    }
}
