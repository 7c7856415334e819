//! `sparse-sim` generates synthetic sparse regression problems and scores
//! how well an external model fitter recovers their ground truth.
//!
//! The true coefficient vector follows a spike-and-slab construction: a
//! configurable number of entries, placed uniformly at random, are drawn
//! from a caller-supplied "slab" distribution while all others are exactly
//! zero. The response is the noisy matrix-vector product of a
//! standard-normal design with those coefficients.
//!
//! The model-fitting step itself (for example a Union-of-Intersections
//! Lasso with bootstrapped selection and bagged estimation) is deliberately
//! out of scope. It enters through the [`FitSparse`] trait together with a
//! [`FitConfig`] describing its resampling options, and everything the
//! crate measures is derived from the coefficient vector it returns:
//! false-positive rate, false-negative rate and relative bias, each
//! normalized over the full feature set (see [`RecoveryMetrics`]).
//!
//! Randomness is always caller-owned: every generating function takes
//! `&mut impl Rng`, so a seeded generator reproduces a dataset bit for bit.
//!
//! ```rust
//! use ndarray_rand::rand_distr::StandardNormal;
//! use rand::{rngs::SmallRng, SeedableRng};
//! use sparse_sim::{RecoveryMetrics, SparseSimParams};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let dataset = SparseSimParams::new(400, 10)
//!     .sparsity(0.4)
//!     .noise_scale(0.5)
//!     .generate(StandardNormal, &mut rng)?;
//!
//! // a perfect oracle scores zero on every metric
//! let metrics = RecoveryMetrics::new(dataset.coefficients(), dataset.coefficients())?;
//! assert_eq!(metrics.false_positive_rate(), 0.0);
//! # Ok::<(), sparse_sim::SparseSimError>(())
//! ```
//!
//! Rendering is isolated behind the [`Report`] trait so the numerical core
//! carries no graphics dependency; enable the `plot` cargo feature for a
//! `plotters`-based scatter of true versus estimated coefficients.

mod error;
mod fitter;
mod generate;
mod hyperparams;
mod metrics;
mod report;
mod simulation;

pub use error::{Result, SparseSimError};
pub use fitter::{FitConfig, FitSparse, Resampling};
pub use generate::{spike_slab_regression, SparseDataset};
pub use hyperparams::{SparseSimParams, SparseSimValidParams, Support};
pub use metrics::RecoveryMetrics;
pub use report::{Report, TextReport};
#[cfg(feature = "plot")]
pub use report::ScatterPlot;
pub use simulation::run_simulation;
