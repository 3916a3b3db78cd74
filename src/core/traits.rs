//! Core trait definitions
//!
//! Drawing and display are capabilities the library calls through. The crate
//! ships terminal implementations, but any host plotting facility can stand in.

use crate::cli::OutputFormat;
use crate::core::data::{LineChart, SequenceStats};
use crate::utils::error::AppResult;

/// Renders an ordered numeric sequence against its position axis
///
/// Callers validate their input before plotting, so implementations can
/// assume every series is free of gaps and sentinel values.
pub trait LinePlotter {
    /// Draw one complete chart
    fn plot(&mut self, chart: &LineChart) -> AppResult<()>;
}

/// A surface that receives one dot at a time in world coordinates
pub trait DotCanvas {
    /// Set the visible square from `-range` to `range` on both axes
    fn set_world_coordinates(&mut self, range: f64);

    /// Draw a dot of `size` centred on (x, y)
    fn dot(&mut self, x: f64, y: f64, size: u32);

    /// Flush everything drawn so far
    fn finish(&mut self) -> AppResult<()>;
}

/// Display formatting operations for sequences and scalar results
pub trait SequenceDisplay {
    /// Print a sequence in the requested format
    fn print_sequence(&self, title: &str, values: &[u64], format: &OutputFormat) -> AppResult<()>;

    /// Print a float sequence, used for transformed values
    fn print_values(&self, title: &str, values: &[f64], format: &OutputFormat) -> AppResult<()>;

    /// Print a single labelled result
    fn print_scalar(&self, label: &str, value: &str, format: &OutputFormat) -> AppResult<()>;

    /// Print sequence statistics
    fn print_stats(&self, stats: &SequenceStats) -> AppResult<()>;
}
