//! Error types for sparse-sim

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SparseSimError>;

#[derive(Debug, Clone, Error)]
pub enum SparseSimError {
    /// More nonzero coefficients were requested than the design has features
    #[error("support size {0} exceeds the number of features {1}")]
    SupportTooLarge(usize, usize),
    #[error("the design needs at least one sample and one feature, got {0} samples and {1} features")]
    EmptyDesign(usize, usize),
    #[error("noise scale must be finite and non-negative, got {0}")]
    InvalidNoiseScale(f64),
    #[error("sparsity must lie in the unit interval, got {0}")]
    InvalidSparsity(f64),
    #[error("stratification labels cover {0} samples but the dataset has {1}")]
    StratifyLength(usize, usize),
    #[error("estimate has {0} coefficients but the ground truth has {1}")]
    CoefficientLength(usize, usize),
    /// Relative bias divides by the total magnitude of the true coefficients
    #[error("relative bias is undefined for an all-zero true coefficient vector")]
    ZeroSignal,
    #[error("fitter returned {0} coefficients for a design with {1} features")]
    FitterOutput(usize, usize),
    #[error("external fitter failed: {0}")]
    Fitter(String),
    #[error("failed to write report: {0}")]
    Report(String),
    #[error("failed to render plot: {0}")]
    Render(String),
}
