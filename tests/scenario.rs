//! End-to-end run of the documented demonstration scenario: 400 samples,
//! 10 features, 0.4 sparsity (6 informative coefficients), Laplace slab
//! values and two equal strata.

use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::{rngs::SmallRng, SeedableRng};
use sparse_sim::{
    run_simulation, FitConfig, FitSparse, RecoveryMetrics, Result, SparseSimParams, TextReport,
};
use statrs::distribution::Laplace;

/// Stand-in for the external fitter: keeps every feature whose marginal
/// correlation with the response clears a fixed threshold.
struct MarginalScreening {
    threshold: f64,
}

impl FitSparse for MarginalScreening {
    fn fit(
        &self,
        records: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        _config: &FitConfig,
    ) -> Result<Array1<f64>> {
        let scaled = records.t().dot(&targets) / records.nrows() as f64;
        Ok(scaled.mapv(|weight| {
            if weight.abs() >= self.threshold {
                weight
            } else {
                0.0
            }
        }))
    }
}

fn scenario_params() -> SparseSimParams {
    SparseSimParams::new(400, 10).sparsity(0.4).noise_scale(0.5)
}

fn laplace_slab() -> Laplace {
    Laplace::new(0.0, 1.0).unwrap()
}

fn two_strata() -> Array1<usize> {
    (0..400).map(|sample| sample / 200).collect()
}

#[test]
fn generation_matches_the_documented_scenario() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let dataset = scenario_params()
        .generate(laplace_slab(), &mut rng)
        .unwrap();

    assert_eq!(dataset.records().dim(), (400, 10));
    assert_eq!(dataset.targets().len(), 400);
    assert_eq!(dataset.coefficients().len(), 10);

    let nonzero = dataset
        .coefficients()
        .iter()
        .filter(|value| **value != 0.0)
        .count();
    assert_eq!(nonzero, 6);
}

#[test]
fn metrics_stay_finite_and_bounded_for_any_matching_estimate() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let dataset = scenario_params()
        .generate(laplace_slab(), &mut rng)
        .unwrap();

    let estimates = [
        Array1::zeros(10),
        Array1::ones(10),
        dataset.coefficients().clone(),
    ];
    for estimate in &estimates {
        let metrics = RecoveryMetrics::new(estimate, dataset.coefficients()).unwrap();

        assert!((0.0..=1.0).contains(&metrics.false_positive_rate()));
        assert!((0.0..=1.0).contains(&metrics.false_negative_rate()));
        assert!(metrics.relative_bias().iter().all(|bias| bias.is_finite()));
        assert!(metrics.mean_relative_bias().is_finite());
    }
}

#[test]
fn stratified_pipeline_runs_end_to_end() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let config = FitConfig::new().stratify(two_strata());
    let mut buffer = Vec::new();

    let metrics = run_simulation(
        &scenario_params(),
        laplace_slab(),
        &MarginalScreening { threshold: 0.2 },
        &config,
        &mut TextReport::new(&mut buffer),
        &mut rng,
    )
    .unwrap();

    assert!((0.0..=1.0).contains(&metrics.false_positive_rate()));
    assert!((0.0..=1.0).contains(&metrics.false_negative_rate()));

    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("false positive rate: "));
    assert!(lines[1].starts_with("false negative rate: "));
    assert!(lines[2].starts_with("mean relative bias: "));
}

#[test]
fn reseeding_reproduces_the_dataset() {
    let mut first_rng = SmallRng::seed_from_u64(7);
    let first = scenario_params()
        .generate(laplace_slab(), &mut first_rng)
        .unwrap();

    let mut second_rng = SmallRng::seed_from_u64(7);
    let second = scenario_params()
        .generate(laplace_slab(), &mut second_rng)
        .unwrap();

    assert_eq!(first.records(), second.records());
    assert_eq!(first.coefficients(), second.coefficients());
    assert_eq!(first.targets(), second.targets());
}
