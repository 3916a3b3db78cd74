use crate::cli::SpiralArgs;
use crate::config::Config;
use crate::core::operations::PrimeOperations;
use crate::utils::error::AppResult;
use crate::visual::{self, SpiralOptions, TerminalCanvas, terminal::grid_size};

pub fn handle_spiral_command(config: Config, args: &SpiralArgs) -> AppResult<()> {
    let defaults = if args.differences {
        SpiralOptions {
            coordinate_range: config.spiral.difference_coordinate_range,
            dot_size: config.spiral.difference_dot_size,
        }
    } else {
        SpiralOptions {
            coordinate_range: config.spiral.coordinate_range,
            dot_size: config.spiral.dot_size,
        }
    };
    let options = SpiralOptions {
        coordinate_range: args.range.unwrap_or(defaults.coordinate_range),
        dot_size: args.dot_size.unwrap_or(defaults.dot_size),
    };

    // Character cells are about twice as tall as they are wide
    let (width, height) = grid_size(config.graph.width, config.graph.height);
    let height = height.min(width / 2).max(3);
    let mut canvas = TerminalCanvas::stdout(height * 2, height);

    PrimeOperations::new(config)?.check_limit(args.n, "n")?;
    if args.differences {
        visual::difference_spiral(args.n, &options, &mut canvas)
    } else {
        visual::sacks_spiral(args.n, &options, &mut canvas)
    }
}
