use crate::commands::{configure, graph, query, sequence, spiral};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wwp")]
#[command(about = "Generate, slice, transform and visualize prime numbers")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(short, long, global = true, help = "Output format (overrides config)")]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true, help = "Print statistics for sequence results")]
    pub stats: bool,

    #[arg(long, global = true, help = "Never page long output")]
    pub no_pager: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings resolved from flags and config for one invocation
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub stats: bool,
    pub config_path: PathBuf,
}

impl Cli {
    /// Fold the global flags into the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) -> RunOptions {
        if self.no_pager {
            config.general.pager = false;
        }
        if !config.general.color {
            colored::control::set_override(false);
        }

        RunOptions {
            format: self.format.clone().unwrap_or_else(|| config.general.format.clone()),
            stats: self.stats,
            config_path: self.config_path(),
        }
    }

    /// The config file in use: `--config` or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_file_path)
    }
}

impl Commands {
    pub fn execute(self, config: Config, options: &RunOptions) -> Result<()> {
        match self {
            Commands::Generate(args) => query::handle_generate_command(config, &args, options)?,
            Commands::Nth(args) => query::handle_nth_command(config, &args, options)?,
            Commands::Sum(args) => query::handle_sum_command(config, &args, options)?,
            Commands::CountBelow(args) => query::handle_count_below_command(config, &args, options)?,
            Commands::Differences(args) => query::handle_differences_command(config, &args, options)?,
            Commands::SumDifferences(args) => query::handle_sum_differences_command(config, &args, options)?,
            Commands::Lcm(args) => query::handle_lcm_command(config, &args, options)?,
            Commands::IsPrime(args) => query::handle_is_prime_command(config, &args, options)?,
            Commands::Slice(args) => sequence::handle_slice_command(config, &args, options)?,
            Commands::Random(args) => sequence::handle_random_command(config, &args, options)?,
            Commands::Transform(args) => sequence::handle_transform_command(config, &args, options)?,
            Commands::Graph(args) => graph::handle_graph_command(config, args.command)?,
            Commands::Spiral(args) => spiral::handle_spiral_command(config, &args)?,
            Commands::Config(args) => configure::handle_config_command(config, args.command, &options.config_path)?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the first N primes
    Generate(CountArgs),

    /// Show the prime at position N
    Nth(CountArgs),

    /// Sum the first N primes
    Sum(CountArgs),

    /// Count the primes below N (N primes are generated, then filtered by value)
    CountBelow(CountArgs),

    /// List the gaps between the first N primes
    Differences(CountArgs),

    /// Sum the gaps between the first N primes
    SumDifferences(CountArgs),

    /// Lowest common multiple of the first N primes
    Lcm(CountArgs),

    /// Check whether N is prime
    IsPrime(CountArgs),

    /// Primes (or gaps) between two positions, inclusive
    Slice(SliceArgs),

    /// A random run of consecutive primes (or gaps) between two positions
    Random(RandomArgs),

    /// Apply an arithmetic operation to a slice
    Transform(TransformArgs),

    /// Draw line graphs in the terminal
    Graph(GraphArgs),

    /// Draw a Sacks spiral in the terminal
    Spiral(SpiralArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct CountArgs {
    #[arg(help = "Count or position")]
    pub n: i64,
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct SliceArgs {
    #[arg(help = "First position (1-based)")]
    pub start: i64,

    #[arg(help = "Last position, inclusive; smaller than start for a descending slice")]
    pub stop: i64,

    #[arg(short = 'D', long, help = "Slice prime differences instead of primes")]
    pub differences: bool,
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct RandomArgs {
    pub start: i64,

    pub stop: i64,

    #[arg(help = "Number of consecutive elements to pick")]
    pub length: i64,

    #[arg(short = 'D', long, help = "Sample prime differences instead of primes")]
    pub differences: bool,

    #[arg(short, long, help = "Seed for reproducible sampling (overrides config)")]
    pub seed: Option<u64>,
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct TransformArgs {
    pub start: i64,

    pub stop: i64,

    #[arg(short, long, help = "add (+), subtract (-), multiply (*), divide (/) or exponent (^)")]
    pub op: String,

    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub operand: f64,

    #[arg(short = 'D', long, help = "Transform prime differences instead of primes")]
    pub differences: bool,
}

#[derive(Args)]
pub struct GraphArgs {
    #[command(subcommand)]
    pub command: GraphCommands,
}

#[derive(Subcommand, Clone)]
pub enum GraphCommands {
    /// Graph the gaps between the first N primes
    #[command(allow_negative_numbers = true)]
    Differences {
        n: i64,
    },

    /// Graph a slice of primes, optionally beside a transformed copy
    #[command(allow_negative_numbers = true)]
    Primes {
        stop: i64,

        #[arg(short, long, default_value_t = 1)]
        start: i64,

        #[arg(short, long, default_value = "+")]
        op: String,

        #[arg(short = 'x', long, default_value_t = 0.0, allow_negative_numbers = true)]
        operand: f64,
    },
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct SpiralArgs {
    #[arg(help = "Number of primes to draw")]
    pub n: i64,

    #[arg(short = 'D', long, help = "Draw the distinct prime differences instead")]
    pub differences: bool,

    #[arg(short, long, help = "Coordinate range for both axes (overrides config)")]
    pub range: Option<f64>,

    #[arg(long, help = "Dot size (overrides config)")]
    pub dot_size: Option<u32>,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Simple,
    Column,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_count() {
        let cli = Cli::try_parse_from(["wwp", "generate", "-3"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert_eq!(args.n, -3),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_random_with_seed() {
        let cli = Cli::try_parse_from(["wwp", "random", "1", "10", "3", "--seed", "5", "-D"]).unwrap();
        match cli.command {
            Commands::Random(args) => {
                assert_eq!((args.start, args.stop, args.length), (1, 10, 3));
                assert_eq!(args.seed, Some(5));
                assert!(args.differences);
            }
            _ => panic!("expected random"),
        }
    }

    #[test]
    fn test_parse_transform() {
        let cli = Cli::try_parse_from(["wwp", "transform", "1", "5", "--op", "^", "--operand", "2"]).unwrap();
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.op, "^");
                assert_eq!(args.operand, 2.0);
                assert!(!args.differences);
            }
            _ => panic!("expected transform"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["wwp", "nth", "5", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));

        let mut config = Config::default();
        let options = cli.apply_overrides(&mut config);
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn test_graph_primes_defaults() {
        let cli = Cli::try_parse_from(["wwp", "graph", "primes", "20"]).unwrap();
        match cli.command {
            Commands::Graph(GraphArgs {
                command: GraphCommands::Primes { stop, start, op, operand },
            }) => {
                assert_eq!((stop, start), (20, 1));
                assert_eq!(op, "+");
                assert_eq!(operand, 0.0);
            }
            _ => panic!("expected graph primes"),
        }
    }
}
