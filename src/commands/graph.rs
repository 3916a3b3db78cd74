use crate::cli::GraphCommands;
use crate::config::Config;
use crate::core::data::Operation;
use crate::core::operations::PrimeOperations;
use crate::utils::error::AppResult;
use crate::visual::{self, TerminalChart, terminal::grid_size};

pub fn handle_graph_command(config: Config, command: GraphCommands) -> AppResult<()> {
    let (width, height) = grid_size(config.graph.width, config.graph.height);
    let mut plotter = TerminalChart::stdout(width, height);

    match command {
        GraphCommands::Differences { n } => {
            PrimeOperations::new(config)?.check_limit(n, "n")?;
            visual::graph_differences(n, &mut plotter)
        }
        GraphCommands::Primes {
            stop,
            start,
            op,
            operand,
        } => {
            PrimeOperations::new(config)?.check_range_limit(start, stop)?;
            let modifier = Some((op.parse::<Operation>()?, operand));
            visual::graph_primes(start, stop, modifier, &mut plotter)
        }
    }
}
