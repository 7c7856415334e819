//! One-shot demonstration pipeline
//!
//! Wires the generator, the external fitter, the metrics and the report
//! together: generate → fit → score → render. Every run owns its random
//! source and data, so successive runs are fully independent.

use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Distribution;

use crate::error::{Result, SparseSimError};
use crate::fitter::{FitConfig, FitSparse};
use crate::hyperparams::SparseSimParams;
use crate::metrics::RecoveryMetrics;
use crate::report::Report;

/// Run one complete simulation and return the computed metrics
///
/// Generates a spike-and-slab dataset from `params` with `slab` coefficient
/// values, hands it to `fitter` under `config`, scores the estimate against
/// the generated ground truth and renders the outcome through `report`.
///
/// Fails fast before the fitter runs when the configuration does not match
/// the generated data, and rejects fitter output whose length differs from
/// the feature count.
///
/// # Example
///
/// ```rust
/// use ndarray::{Array1, ArrayView1, ArrayView2};
/// use ndarray_rand::rand_distr::StandardNormal;
/// use rand::{rngs::SmallRng, SeedableRng};
/// use sparse_sim::{
///     run_simulation, FitConfig, FitSparse, Result, SparseSimParams, TextReport,
/// };
///
/// /// Keeps every feature whose marginal correlation clears a threshold.
/// struct MarginalScreening {
///     threshold: f64,
/// }
///
/// impl FitSparse for MarginalScreening {
///     fn fit(
///         &self,
///         records: ArrayView2<f64>,
///         targets: ArrayView1<f64>,
///         _config: &FitConfig,
///     ) -> Result<Array1<f64>> {
///         let scaled = records.t().dot(&targets) / records.nrows() as f64;
///         Ok(scaled.mapv(|w| if w.abs() >= self.threshold { w } else { 0.0 }))
///     }
/// }
///
/// let mut rng = SmallRng::seed_from_u64(17);
/// let metrics = run_simulation(
///     &SparseSimParams::new(400, 10).sparsity(0.4).noise_scale(0.5),
///     StandardNormal,
///     &MarginalScreening { threshold: 0.25 },
///     &FitConfig::new(),
///     &mut TextReport::new(Vec::new()),
///     &mut rng,
/// )?;
/// assert!(metrics.false_positive_rate() <= 1.0);
/// # Ok::<(), sparse_sim::SparseSimError>(())
/// ```
pub fn run_simulation<S, F, R>(
    params: &SparseSimParams,
    slab: S,
    fitter: &F,
    config: &FitConfig,
    report: &mut R,
    rng: &mut impl Rng,
) -> Result<RecoveryMetrics>
where
    S: Distribution<f64> + Clone,
    F: FitSparse + ?Sized,
    R: Report + ?Sized,
{
    let dataset = params.generate(slab, rng)?;
    config.check_samples(dataset.n_samples())?;

    let estimate = fitter.fit(dataset.records().view(), dataset.targets().view(), config)?;
    if estimate.len() != dataset.n_features() {
        return Err(SparseSimError::FitterOutput(
            estimate.len(),
            dataset.n_features(),
        ));
    }

    let metrics = RecoveryMetrics::new(&estimate, dataset.coefficients())?;
    report.render(dataset.coefficients().view(), estimate.view(), &metrics)?;

    Ok(metrics)
}
