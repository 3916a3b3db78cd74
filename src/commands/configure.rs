// Configuration operations

use crate::cli::ConfigCommands;
use crate::config::{Config, SEED_ENV};
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    command: Option<ConfigCommands>,
    config_path: &Path,
) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config) -> AppResult<()> {
    println!("⚙️  wwp Configuration");
    println!("====================");

    println!("General:");
    println!("  Color: {}", config.general.color);
    println!("  Format: {:?}", config.general.format);
    println!("  Pager: {}", config.general.pager);
    println!("  Max count: {}", config.general.max_count);

    println!("Random:");
    match config.random.seed {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: (entropy)"),
    }
    if let Ok(seed) = std::env::var(SEED_ENV) {
        println!("  {} override: {}", SEED_ENV, seed);
    }

    println!("Spiral:");
    println!("  Coordinate range: {}", config.spiral.coordinate_range);
    println!("  Dot size: {}", config.spiral.dot_size);
    println!(
        "  Difference coordinate range: {}",
        config.spiral.difference_coordinate_range
    );
    println!("  Difference dot size: {}", config.spiral.difference_dot_size);

    println!("Graph:");
    println!("  Width: {}", size_label(config.graph.width));
    println!("  Height: {}", size_label(config.graph.height));

    Ok(())
}

fn size_label(cells: u16) -> String {
    if cells == 0 {
        "terminal".to_string()
    } else {
        cells.to_string()
    }
}

fn handle_config_help(config_path: &Path) -> AppResult<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  wwp config show    - Show current configuration");
    println!("  wwp config path    - Print the configuration file location");
    println!("  wwp config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> AppResult<()> {
    Config::default().save_to(config_path)?;
    handle_flow(FlowResult::Success(format!(
        "Configuration reset to defaults at {}",
        config_path.display()
    )));
    Ok(())
}
