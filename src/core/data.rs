//! Core data structures for prime sequences
//!
//! Positions are 1-based throughout the public API: position 1 is the prime 2,
//! difference position 1 is the gap between the first and second prime.

use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which sequence an operation reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Primes,
    Differences,
}

impl SequenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SequenceKind::Primes => "primes",
            SequenceKind::Differences => "differences",
        }
    }
}

/// An inclusive pair of 1-based positions, possibly reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRange {
    pub start: usize,
    pub stop: usize,
}

impl PositionRange {
    /// Build a range, rejecting any bound below 1
    pub fn new(start: i64, stop: i64) -> AppResult<Self> {
        if start <= 0 || stop <= 0 {
            return Err(AppError::InvalidRange(format!(
                "positions start from 1 (got start={}, stop={})",
                start, stop
            )));
        }

        Ok(Self {
            start: start as usize,
            stop: stop as usize,
        })
    }

    /// True when the caller asked for a descending slice
    pub fn is_reversed(&self) -> bool {
        self.stop < self.start
    }

    pub fn low(&self) -> usize {
        self.start.min(self.stop)
    }

    pub fn high(&self) -> usize {
        self.start.max(self.stop)
    }

    /// Number of positions covered, both ends included
    pub fn len(&self) -> usize {
        self.high() - self.low() + 1
    }

    /// Distance between the bounds, the upper limit for sampling lengths
    pub fn span(&self) -> usize {
        self.high() - self.low()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.stop)
    }
}

/// Elementwise arithmetic applied by `transform`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Exponent,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Exponent => "^",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Exponent => "exponent",
        }
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "-" => Ok(Operation::Subtract),
            "multiply" | "*" => Ok(Operation::Multiply),
            "divide" | "/" => Ok(Operation::Divide),
            "exponent" | "^" => Ok(Operation::Exponent),
            other => Err(AppError::InvalidOperation(format!(
                "unknown operation '{}' (expected one of: add, subtract, multiply, divide, exponent)",
                other
            ))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Summary statistics over a numeric sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceStats {
    pub count: usize,
    pub first: u64,
    pub last: u64,
    pub min: u64,
    pub max: u64,
    pub sum: u128,
    pub mean: f64,
    pub frequencies: BTreeMap<u64, usize>,
}

impl SequenceStats {
    /// Returns `None` for an empty sequence
    pub fn from_values(values: &[u64]) -> Option<Self> {
        let first = *values.first()?;
        let last = *values.last()?;
        let min = values.iter().copied().min()?;
        let max = values.iter().copied().max()?;
        let sum: u128 = values.iter().map(|&v| v as u128).sum();

        let mut frequencies = BTreeMap::new();
        for &value in values {
            *frequencies.entry(value).or_insert(0) += 1;
        }

        Some(Self {
            count: values.len(),
            first,
            last,
            min,
            max,
            sum,
            mean: sum as f64 / values.len() as f64,
            frequencies,
        })
    }
}

/// One named line of a chart, plotted against its 1-based position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Everything a line plotter needs to draw one figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

impl LineChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.series.push(ChartSeries {
            label: label.into(),
            values,
        });
        self
    }

    /// Smallest and largest value across all series
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |bounds, v| match bounds {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn max_len(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).max().unwrap_or(0)
    }
}

/// Widen integer sequences for the float-valued transforms and plots
pub fn to_f64(values: &[u64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}
