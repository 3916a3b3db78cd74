use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use wwp::cli::Cli;
use wwp::config::Config;
use wwp::utils::error::{AppError, report_error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --debug
    let level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let mut config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    let options = cli.apply_overrides(&mut config);

    if let Err(err) = cli.command.execute(config, &options) {
        if let Some(app_err) = err.downcast_ref::<AppError>()
            && app_err.is_usage()
        {
            report_error(app_err);
            std::process::exit(2);
        }
        return Err(err);
    }

    Ok(())
}
