//! Sacks spirals and line graphs of prime sequences
//!
//! These functions validate their arguments, build the sequence, and hand it
//! to an injected [`DotCanvas`] or [`LinePlotter`]. Nothing is drawn when
//! validation fails.

pub mod terminal;

use crate::core::data::{LineChart, Operation, PositionRange, to_f64};
use crate::core::engine::{differences, first_primes, slice_range};
use crate::core::traits::{DotCanvas, LinePlotter};
use crate::core::transform::transform;
use crate::utils::error::{AppError, AppResult};
use std::collections::HashSet;
use std::f64::consts::PI;
use tracing::debug;

pub use terminal::{TerminalCanvas, TerminalChart};

/// Canvas settings for one spiral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralOptions {
    pub coordinate_range: f64,
    pub dot_size: u32,
}

impl SpiralOptions {
    pub fn sacks() -> Self {
        Self {
            coordinate_range: 100.0,
            dot_size: 5,
        }
    }

    pub fn differences() -> Self {
        Self {
            coordinate_range: 15.0,
            dot_size: 10,
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.dot_size == 0 {
            return Err(AppError::InvalidArgument(
                "'dot_size' must be a positive integer".to_string(),
            ));
        }
        if self.coordinate_range == 0.0 || !self.coordinate_range.is_finite() {
            return Err(AppError::InvalidArgument(
                "'coordinate_range' cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Polar placement used by the Sacks spiral: θ = 2π√v, r = √v.
pub fn spiral_point(value: f64) -> AppResult<(f64, f64)> {
    if value < 0.0 || value.is_nan() {
        return Err(AppError::InvalidArgument(format!(
            "spiral values must be non-negative (got {})",
            value
        )));
    }
    let r = value.sqrt();
    let theta = 2.0 * PI * r;
    Ok((theta.cos() * r, -theta.sin() * r))
}

fn positive_count(n: i64) -> AppResult<usize> {
    if n <= 0 {
        return Err(AppError::InvalidArgument(format!(
            "'n' must be a positive integer (got {})",
            n
        )));
    }
    Ok(n as usize)
}

fn draw_points<C: DotCanvas + ?Sized>(values: &[u64], options: &SpiralOptions, canvas: &mut C) -> AppResult<()> {
    let points = values
        .iter()
        .map(|&v| spiral_point(v as f64))
        .collect::<AppResult<Vec<_>>>()?;

    canvas.set_world_coordinates(options.coordinate_range.abs());
    for (x, y) in points {
        canvas.dot(x, y, options.dot_size);
    }
    canvas.finish()
}

/// Draw one dot per prime among the first `n`.
pub fn sacks_spiral<C: DotCanvas + ?Sized>(n: i64, options: &SpiralOptions, canvas: &mut C) -> AppResult<()> {
    let count = positive_count(n)?;
    options.validate()?;

    debug!(count, "drawing sacks spiral");
    draw_points(&first_primes(count), options, canvas)
}

/// Gaps among the first `n` primes, each distinct value once, in first-seen order
pub fn distinct_differences(n: i64) -> AppResult<Vec<u64>> {
    let gaps = differences(n)?.unwrap_or_default();
    let mut seen = HashSet::new();
    Ok(gaps.into_iter().filter(|gap| seen.insert(*gap)).collect())
}

/// Draw the Sacks spiral of the distinct gaps among the first `n` primes.
pub fn difference_spiral<C: DotCanvas + ?Sized>(n: i64, options: &SpiralOptions, canvas: &mut C) -> AppResult<()> {
    positive_count(n)?;
    options.validate()?;

    let distinct = distinct_differences(n)?;
    debug!(n, distinct = distinct.len(), "drawing difference spiral");
    draw_points(&distinct, options, canvas)
}

/// Line chart of the gaps among the first `n` primes
pub fn differences_chart(n: i64) -> AppResult<LineChart> {
    positive_count(n)?;
    let gaps = differences(n)?.unwrap_or_default();

    Ok(LineChart::new(
        format!("Graph of Differences Between the First {} Successive Prime Numbers", n),
        "Number Line",
        "Difference Between Prime Numbers",
    )
    .with_series("Differences", to_f64(&gaps)))
}

pub fn graph_differences<P: LinePlotter + ?Sized>(n: i64, plotter: &mut P) -> AppResult<()> {
    let chart = differences_chart(n)?;
    plotter.plot(&chart)
}

/// Line chart of `slice(start, stop)`, optionally beside a transformed copy.
///
/// A transform whose operand is 0 draws only the parent series.
pub fn primes_chart(start: i64, stop: i64, modifier: Option<(Operation, f64)>) -> AppResult<LineChart> {
    let range = PositionRange::new(start, stop)?;
    let parent = to_f64(&slice_range(&range));

    let title = if range.is_reversed() {
        "Graph of parent prime function and modified prime function (reverse)"
    } else {
        "Graph of parent prime function and modified prime function"
    };

    let modified = match modifier {
        Some((op, operand)) if operand != 0.0 => Some(transform(&parent, op, operand)?),
        _ => None,
    };

    let mut chart = LineChart::new(title, "Number Line", "Prime Numbers").with_series("Parent Prime", parent);
    if let Some(values) = modified {
        chart = chart.with_series("Modified Prime", values);
    }
    Ok(chart)
}

pub fn graph_primes<P: LinePlotter + ?Sized>(
    start: i64,
    stop: i64,
    modifier: Option<(Operation, f64)>,
    plotter: &mut P,
) -> AppResult<()> {
    let chart = primes_chart(start, stop, modifier)?;
    plotter.plot(&chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingCanvas {
        range: Option<f64>,
        dots: Vec<(f64, f64, u32)>,
        finished: bool,
    }

    impl DotCanvas for RecordingCanvas {
        fn set_world_coordinates(&mut self, range: f64) {
            self.range = Some(range);
        }

        fn dot(&mut self, x: f64, y: f64, size: u32) {
            self.dots.push((x, y, size));
        }

        fn finish(&mut self) -> AppResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingPlotter {
        charts: Vec<LineChart>,
    }

    impl LinePlotter for RecordingPlotter {
        fn plot(&mut self, chart: &LineChart) -> AppResult<()> {
            self.charts.push(chart.clone());
            Ok(())
        }
    }

    #[test]
    fn test_spiral_point() {
        let (x, y) = spiral_point(0.0).unwrap();
        assert_eq!((x, y), (0.0, 0.0));

        // √4 = 2, θ = 4π, so the point lands on the positive x axis
        let (x, y) = spiral_point(4.0).unwrap();
        assert!((x - 2.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);

        assert!(matches!(spiral_point(-1.0), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_sacks_spiral_draws_one_dot_per_prime() {
        let mut canvas = RecordingCanvas::default();
        sacks_spiral(10, &SpiralOptions::sacks(), &mut canvas).unwrap();
        assert_eq!(canvas.dots.len(), 10);
        assert_eq!(canvas.range, Some(100.0));
        assert!(canvas.dots.iter().all(|&(_, _, size)| size == 5));
        assert!(canvas.finished);
    }

    #[test]
    fn test_spiral_validation_draws_nothing() {
        let mut canvas = RecordingCanvas::default();
        assert!(sacks_spiral(0, &SpiralOptions::sacks(), &mut canvas).is_err());

        let bad = SpiralOptions {
            coordinate_range: 0.0,
            dot_size: 5,
        };
        assert!(sacks_spiral(10, &bad, &mut canvas).is_err());

        let bad = SpiralOptions {
            coordinate_range: 10.0,
            dot_size: 0,
        };
        assert!(difference_spiral(10, &bad, &mut canvas).is_err());
        assert!(canvas.dots.is_empty());
        assert!(!canvas.finished);
    }

    #[test]
    fn test_distinct_differences() {
        // gaps of the first 10 primes: 1 2 2 4 2 4 2 4 6
        assert_eq!(distinct_differences(10).unwrap(), vec![1, 2, 4, 6]);

        let mut canvas = RecordingCanvas::default();
        difference_spiral(10, &SpiralOptions::differences(), &mut canvas).unwrap();
        assert_eq!(canvas.dots.len(), 4);
        assert_eq!(canvas.range, Some(15.0));
    }

    #[test]
    fn test_graph_differences() {
        let mut plotter = RecordingPlotter::default();
        graph_differences(6, &mut plotter).unwrap();
        let chart = &plotter.charts[0];
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values, vec![1.0, 2.0, 2.0, 4.0, 2.0]);
        assert!(chart.title.contains("First 6"));

        assert!(graph_differences(0, &mut plotter).is_err());
        assert_eq!(plotter.charts.len(), 1);
    }

    #[test]
    fn test_graph_primes_series() {
        let mut plotter = RecordingPlotter::default();
        graph_primes(1, 3, Some((Operation::Add, 0.0)), &mut plotter).unwrap();
        assert_eq!(plotter.charts[0].series.len(), 1);

        graph_primes(1, 3, Some((Operation::Multiply, 2.0)), &mut plotter).unwrap();
        let chart = &plotter.charts[1];
        assert_eq!(chart.series[0].label, "Parent Prime");
        assert_eq!(chart.series[1].values, vec![4.0, 6.0, 10.0]);

        graph_primes(3, 1, None, &mut plotter).unwrap();
        assert!(plotter.charts[2].title.ends_with("(reverse)"));
        assert_eq!(plotter.charts[2].series[0].values, vec![5.0, 3.0, 2.0]);

        assert!(matches!(
            graph_primes(0, 3, None, &mut plotter),
            Err(AppError::InvalidRange(_))
        ));
        assert!(matches!(
            graph_primes(1, 3, Some((Operation::Divide, 0.0)), &mut plotter),
            Ok(())
        ));
    }
}
