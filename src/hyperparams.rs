use crate::error::{Result, SparseSimError};

/// How many of the generated coefficients carry signal.
///
/// A `Fraction` is resolved against the feature count when the parameter set
/// is checked, rounding to the nearest whole number of coefficients.
#[derive(Clone, Debug, PartialEq)]
pub enum Support {
    /// Exact number of nonzero coefficients
    Count(usize),
    /// Fraction of the features pinned to zero (the spike), in `[0, 1]`
    Fraction(f64),
}

/// A verified parameter set ready for spike-and-slab data generation
///
/// See [`SparseSimParams`](crate::SparseSimParams) for more information.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseSimValidParams {
    n_samples: usize,
    n_features: usize,
    n_nonzero: usize,
    noise_scale: f64,
}

impl SparseSimValidParams {
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_nonzero(&self) -> usize {
        self.n_nonzero
    }

    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }
}

/// A parameter set for spike-and-slab regression data
///
/// Configures the synthesis of a regression problem whose true coefficient
/// vector mixes a point mass at zero (the "spike") with values drawn from a
/// caller-supplied distribution (the "slab"):
/// ```ignore
/// y = X w + e,    X_ij ~ N(0, 1),    e_i ~ N(0, noise_scale^2)
/// ```
/// where exactly `n_nonzero` entries of `w`, at positions chosen uniformly
/// without replacement, are sampled from the slab and all others are `0.0`.
///
/// The parameter set is verified into a
/// [`SparseSimValidParams`](crate::SparseSimValidParams) by calling
/// [check](Self::check). Calling [generate](Self::generate) verifies the
/// parameters implicitly and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [support](Self::support) | `Fraction(0.5)` | Fraction of zero coefficients, or an exact nonzero count | `[0, 1]` / `[0, n_features]` |
/// | [noise_scale](Self::noise_scale) | `1.0` | Standard deviation of the additive noise | `[0, inf)` |
///
/// # Errors
///
/// Returns [`SupportTooLarge`](SparseSimError::SupportTooLarge) if the
/// requested support exceeds the feature count,
/// [`InvalidSparsity`](SparseSimError::InvalidSparsity) if a fractional
/// support lies outside the unit interval,
/// [`InvalidNoiseScale`](SparseSimError::InvalidNoiseScale) if the noise
/// scale is negative or not finite, and
/// [`EmptyDesign`](SparseSimError::EmptyDesign) if either dimension is zero.
///
/// # Example
///
/// ```rust
/// use sparse_sim::SparseSimParams;
/// use ndarray_rand::rand_distr::StandardNormal;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let dataset = SparseSimParams::new(400, 10)
///     .sparsity(0.4)
///     .noise_scale(0.5)
///     .generate(StandardNormal, &mut rng)?;
///
/// assert_eq!(dataset.records().dim(), (400, 10));
/// # Ok::<(), sparse_sim::SparseSimError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SparseSimParams {
    n_samples: usize,
    n_features: usize,
    support: Support,
    noise_scale: f64,
}

impl SparseSimParams {
    /// Create a parameter set for the given design dimensions
    ///
    /// By default half of the features carry signal and the noise has unit
    /// standard deviation.
    pub fn new(n_samples: usize, n_features: usize) -> Self {
        Self {
            n_samples,
            n_features,
            support: Support::Fraction(0.5),
            noise_scale: 1.0,
        }
    }

    /// Set the support of the true coefficient vector explicitly
    pub fn support(mut self, support: Support) -> Self {
        self.support = support;
        self
    }

    /// Set the exact number of nonzero coefficients
    pub fn n_nonzero(mut self, n_nonzero: usize) -> Self {
        self.support = Support::Count(n_nonzero);
        self
    }

    /// Set the fraction of features pinned to zero
    ///
    /// The number of zero coefficients is `round(sparsity * n_features)`;
    /// the rest carry slab values. Must lie in `[0, 1]`.
    pub fn sparsity(mut self, sparsity: f64) -> Self {
        self.support = Support::Fraction(sparsity);
        self
    }

    /// Set the standard deviation of the additive observation noise
    ///
    /// Defaults to `1.0` if not set. Must be finite and non-negative; zero
    /// yields a noiseless response.
    pub fn noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Validate the parameter set
    pub fn check(self) -> Result<SparseSimValidParams> {
        self.check_ref()
    }

    /// Validate the parameter set without consuming it
    pub fn check_ref(&self) -> Result<SparseSimValidParams> {
        if self.n_samples == 0 || self.n_features == 0 {
            return Err(SparseSimError::EmptyDesign(self.n_samples, self.n_features));
        }
        if !self.noise_scale.is_finite() || self.noise_scale < 0.0 {
            return Err(SparseSimError::InvalidNoiseScale(self.noise_scale));
        }

        let n_nonzero = match self.support {
            Support::Count(count) => count,
            Support::Fraction(fraction) => {
                if !(0.0..=1.0).contains(&fraction) {
                    return Err(SparseSimError::InvalidSparsity(fraction));
                }
                let zeros = (fraction * self.n_features as f64).round() as usize;
                self.n_features.saturating_sub(zeros)
            }
        };
        if n_nonzero > self.n_features {
            return Err(SparseSimError::SupportTooLarge(n_nonzero, self.n_features));
        }

        Ok(SparseSimValidParams {
            n_samples: self.n_samples,
            n_features: self.n_features,
            n_nonzero,
            noise_scale: self.noise_scale,
        })
    }
}
