//! Presentation of a finished simulation run
//!
//! The numerical core stays independent of any output medium: results pass
//! through the [`Report`] trait, with a plain-text implementation always
//! available and a raster scatter plot behind the `plot` feature.

use std::io;

use ndarray::ArrayView1;

use crate::error::{Result, SparseSimError};
use crate::metrics::RecoveryMetrics;

/// Renders the outcome of one simulation run
pub trait Report {
    fn render(
        &mut self,
        truth: ArrayView1<f64>,
        estimate: ArrayView1<f64>,
        metrics: &RecoveryMetrics,
    ) -> Result<()>;
}

/// Writes the three fit metrics as human-readable lines
///
/// Each value is formatted to four decimal places, one metric per line.
pub struct TextReport<W> {
    writer: W,
}

impl<W: io::Write> TextReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> Report for TextReport<W> {
    fn render(
        &mut self,
        _truth: ArrayView1<f64>,
        _estimate: ArrayView1<f64>,
        metrics: &RecoveryMetrics,
    ) -> Result<()> {
        let lines = [
            ("false positive rate", metrics.false_positive_rate()),
            ("false negative rate", metrics.false_negative_rate()),
            ("mean relative bias", metrics.mean_relative_bias()),
        ];
        for (label, value) in lines {
            writeln!(self.writer, "{}: {:.4}", label, value)
                .map_err(|err| SparseSimError::Report(err.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(feature = "plot")]
pub use self::plot::ScatterPlot;

#[cfg(feature = "plot")]
mod plot {
    use std::path::PathBuf;

    use ndarray::ArrayView1;
    use plotters::prelude::*;

    use super::Report;
    use crate::error::{Result, SparseSimError};
    use crate::metrics::RecoveryMetrics;

    /// Scatter plot of true (x) versus estimated (y) coefficients with a
    /// reference diagonal, rendered to a raster image file
    pub struct ScatterPlot {
        path: PathBuf,
        resolution: (u32, u32),
    }

    impl ScatterPlot {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                resolution: (800, 600),
            }
        }

        pub fn resolution(mut self, width: u32, height: u32) -> Self {
            self.resolution = (width, height);
            self
        }

        fn draw(
            &self,
            truth: ArrayView1<f64>,
            estimate: ArrayView1<f64>,
        ) -> std::result::Result<(), Box<dyn std::error::Error>> {
            let root = BitMapBackend::new(&self.path, self.resolution).into_drawing_area();
            root.fill(&WHITE)?;

            let mut low = truth
                .iter()
                .chain(estimate.iter())
                .copied()
                .fold(f64::INFINITY, f64::min);
            let mut high = truth
                .iter()
                .chain(estimate.iter())
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            if low >= high {
                low -= 1.0;
                high += 1.0;
            }

            let mut chart = ChartBuilder::on(&root)
                .caption("Estimated vs True Coefficients", ("sans-serif", 20).into_font())
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(40)
                .build_cartesian_2d(low..high, low..high)?;

            chart.configure_mesh().x_labels(10).y_labels(10).draw()?;

            chart.draw_series(LineSeries::new(vec![(low, low), (high, high)], &BLACK))?;

            chart
                .draw_series(
                    truth
                        .iter()
                        .zip(estimate.iter())
                        .map(|(tru, est)| Circle::new((*tru, *est), 3, BLUE.filled())),
                )?
                .label("Coefficients")
                .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

            chart.configure_series_labels().background_style(WHITE).draw()?;
            root.present()?;

            Ok(())
        }
    }

    impl Report for ScatterPlot {
        fn render(
            &mut self,
            truth: ArrayView1<f64>,
            estimate: ArrayView1<f64>,
            _metrics: &RecoveryMetrics,
        ) -> Result<()> {
            self.draw(truth, estimate)
                .map_err(|err| SparseSimError::Render(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn text_report_formats_to_four_decimals() {
        let truth = array![0.0, 1.0, 2.0, 0.0];
        let estimate = array![0.5, 1.0, 0.0, 0.0];
        let metrics = RecoveryMetrics::new(&estimate, &truth).unwrap();

        let mut buffer = Vec::new();
        TextReport::new(&mut buffer)
            .render(truth.view(), estimate.view(), &metrics)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "false positive rate: 0.2500");
        assert_eq!(lines[1], "false negative rate: 0.2500");
        // (0.5 + 0.0 - 2.0 + 0.0) / 3.0 / 4 features
        assert_eq!(lines[2], "mean relative bias: -0.1250");
    }
}
