//! Core operations implementation
//!
//! `PrimeOperations` is the hub the command handlers work through: it owns
//! the configuration and the random source, enforces the configured size
//! limit, and implements the display trait.

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::core::{
    data::{PositionRange, SequenceKind, SequenceStats},
    sampling::random_run_with,
    traits::SequenceDisplay,
};
use crate::utils::{
    error::{AppError, AppResult},
    format::format_float,
    output::DisplayFormatter,
    pagination::emit,
    stats::StatsCalculator,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Main operations hub
pub struct PrimeOperations {
    config: Config,
    rng: StdRng,
}

impl PrimeOperations {
    /// Create a hub seeded from `WWP_SEED` or the config, else from entropy
    pub fn new(config: Config) -> AppResult<Self> {
        let seed = config.effective_seed()?;
        Ok(Self::with_seed(config, seed))
    }

    pub fn with_seed(config: Config, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!(seed, "using seeded random source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reject counts and positions above the configured `max_count`
    pub fn check_limit(&self, value: i64, what: &str) -> AppResult<()> {
        if value > 0 && value as u64 > self.config.general.max_count {
            return Err(AppError::InvalidArgument(format!(
                "'{}' ({}) exceeds the configured max_count of {}",
                what, value, self.config.general.max_count
            )));
        }
        Ok(())
    }

    pub fn check_range_limit(&self, start: i64, stop: i64) -> AppResult<()> {
        self.check_limit(start, "start")?;
        self.check_limit(stop, "stop")
    }

    /// Sample a run with the hub's random source
    pub fn random_run(
        &mut self,
        kind: SequenceKind,
        start: i64,
        stop: i64,
        length: i64,
    ) -> AppResult<Option<Vec<u64>>> {
        self.check_range_limit(start, stop)?;
        random_run_with(&mut self.rng, kind, start, stop, length)
    }

    /// Title for a slice of `kind` over `range`
    pub fn slice_title(kind: SequenceKind, range: &PositionRange) -> String {
        let direction = if range.is_reversed() { ", reversed" } else { "" };
        match kind {
            SequenceKind::Primes => format!("Primes at positions {} to {}{}", range.start, range.stop, direction),
            SequenceKind::Differences => {
                format!("Prime differences at positions {} to {}{}", range.start, range.stop, direction)
            }
        }
    }
}

impl SequenceDisplay for PrimeOperations {
    fn print_sequence(&self, title: &str, values: &[u64], format: &OutputFormat) -> AppResult<()> {
        let rendered = DisplayFormatter::render_sequence(title, values, format)?;
        emit(&rendered, self.config.general.pager)
    }

    fn print_values(&self, title: &str, values: &[f64], format: &OutputFormat) -> AppResult<()> {
        let rendered = match format {
            OutputFormat::Json => DisplayFormatter::render_sequence(title, values, format)?,
            _ => {
                let labels: Vec<String> = values.iter().map(|&v| format_float(v)).collect();
                DisplayFormatter::render_sequence(title, &labels, format)?
            }
        };
        emit(&rendered, self.config.general.pager)
    }

    fn print_scalar(&self, label: &str, value: &str, format: &OutputFormat) -> AppResult<()> {
        println!("{}", DisplayFormatter::render_scalar(label, value, format)?);
        Ok(())
    }

    fn print_stats(&self, stats: &SequenceStats) -> AppResult<()> {
        StatsCalculator::print_stats(stats);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_limit() {
        let mut config = Config::default();
        config.general.max_count = 100;
        let ops = PrimeOperations::with_seed(config, Some(1));

        assert!(ops.check_limit(100, "n").is_ok());
        assert!(ops.check_limit(-5, "n").is_ok());
        assert!(matches!(ops.check_limit(101, "n"), Err(AppError::InvalidArgument(_))));
        assert!(ops.check_range_limit(1, 500).is_err());
    }

    #[test]
    fn test_seeded_hub_is_reproducible() {
        let mut first = PrimeOperations::with_seed(Config::default(), Some(99));
        let mut second = PrimeOperations::with_seed(Config::default(), Some(99));
        for _ in 0..5 {
            assert_eq!(
                first.random_run(SequenceKind::Primes, 1, 40, 3).unwrap(),
                second.random_run(SequenceKind::Primes, 1, 40, 3).unwrap()
            );
        }
    }

    #[test]
    fn test_slice_title() {
        let range = PositionRange::new(9, 2).unwrap();
        assert_eq!(
            PrimeOperations::slice_title(SequenceKind::Primes, &range),
            "Primes at positions 9 to 2, reversed"
        );
    }
}
