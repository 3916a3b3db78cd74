//! wwp - working with primes
//!
//! Generation, slicing, differencing, transformation and random sampling of
//! the ascending sequence of primes, plus Sacks spiral and line graph
//! rendering through pluggable drawing traits.
//!
//! Positions are 1-based. Count-taking functions return `Ok(None)` when zero
//! is requested and `AppError::InvalidArgument` for negative counts.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;
pub mod visual;

// Re-export the library surface for easier use
pub use crate::core::{
    data::{ChartSeries, LineChart, Operation, PositionRange, SequenceKind, SequenceStats},
    engine::{
        count_below, difference_slice, differences, generate, is_prime, lcm_of_first_n, nth, slice,
        sum, sum_of_differences,
    },
    operations::PrimeOperations,
    sampling::{
        random_difference_slice, random_difference_slice_with, random_slice, random_slice_with,
    },
    traits::{DotCanvas, LinePlotter, SequenceDisplay},
    transform::{transform, transform_tagged},
};
pub use utils::error::{AppError, AppResult};
pub use visual::{
    SpiralOptions, difference_spiral, graph_differences, graph_primes, sacks_spiral, spiral_point,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
