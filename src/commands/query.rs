use crate::cli::{CountArgs, RunOptions};
use crate::commands::{show_scalar, show_sequence};
use crate::config::Config;
use crate::core::engine;
use crate::core::operations::PrimeOperations;
use crate::utils::error::AppResult;

fn operations(config: Config, args: &CountArgs) -> AppResult<PrimeOperations> {
    let ops = PrimeOperations::new(config)?;
    ops.check_limit(args.n, "n")?;
    Ok(ops)
}

pub fn handle_generate_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = operations(config, args)?;
    let primes = engine::generate(args.n)?;
    show_sequence(&ops, &format!("First {} primes", args.n), "primes", primes, options)
}

pub fn handle_nth_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = operations(config, args)?;
    let label = format!("Prime #{}", args.n);
    show_scalar(&ops, &label, "prime", engine::nth(args.n)?, options)
}

pub fn handle_sum_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = operations(config, args)?;
    let label = format!("Sum of the first {} primes", args.n);
    show_scalar(&ops, &label, "primes", engine::sum(args.n)?, options)
}

pub fn handle_count_below_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = operations(config, args)?;
    let label = format!("Primes below {}", args.n);
    show_scalar(&ops, &label, "primes", engine::count_below(args.n)?, options)
}

pub fn handle_differences_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = operations(config, args)?;
    let gaps = engine::differences(args.n)?;
    let title = format!("Differences between the first {} primes", args.n);
    show_sequence(&ops, &title, "differences", gaps, options)
}

pub fn handle_sum_differences_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = operations(config, args)?;
    let label = format!("Sum of differences between the first {} primes", args.n);
    show_scalar(&ops, &label, "differences", engine::sum_of_differences(args.n)?, options)
}

pub fn handle_lcm_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = operations(config, args)?;
    let label = format!("LCM of the first {} primes", args.n);
    show_scalar(&ops, &label, "primes", engine::lcm_of_first_n(args.n)?, options)
}

pub fn handle_is_prime_command(config: Config, args: &CountArgs, options: &RunOptions) -> AppResult<()> {
    let ops = PrimeOperations::new(config)?;
    let label = format!("{} is prime", args.n);
    show_scalar(&ops, &label, "primality check", engine::is_prime(args.n)?, options)
}
