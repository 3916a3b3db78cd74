use crate::cli::{RunOptions, RandomArgs, SliceArgs, TransformArgs};
use crate::commands::show_sequence;
use crate::config::Config;
use crate::core::data::{Operation, PositionRange, SequenceKind, to_f64};
use crate::core::engine::{difference_slice_range, slice_range};
use crate::core::operations::PrimeOperations;
use crate::core::traits::SequenceDisplay;
use crate::core::transform::transform;
use crate::utils::error::AppResult;
use tracing::debug;

fn kind_of(differences: bool) -> SequenceKind {
    if differences {
        SequenceKind::Differences
    } else {
        SequenceKind::Primes
    }
}

fn slice_of(kind: SequenceKind, range: &PositionRange) -> Vec<u64> {
    match kind {
        SequenceKind::Primes => slice_range(range),
        SequenceKind::Differences => difference_slice_range(range),
    }
}

pub fn handle_slice_command(config: Config, args: &SliceArgs, options: &RunOptions) -> AppResult<()> {
    let ops = PrimeOperations::new(config)?;
    let range = PositionRange::new(args.start, args.stop)?;
    ops.check_range_limit(args.start, args.stop)?;

    let kind = kind_of(args.differences);
    let values = slice_of(kind, &range);
    let title = PrimeOperations::slice_title(kind, &range);
    show_sequence(&ops, &title, kind.label(), Some(values), options)
}

pub fn handle_random_command(config: Config, args: &RandomArgs, options: &RunOptions) -> AppResult<()> {
    let mut ops = match args.seed {
        Some(seed) => PrimeOperations::with_seed(config, Some(seed)),
        None => PrimeOperations::new(config)?,
    };

    let kind = kind_of(args.differences);
    let run = ops.random_run(kind, args.start, args.stop, args.length)?;
    let title = format!(
        "Random run of {} {} between positions {} and {}",
        args.length,
        kind.label(),
        args.start,
        args.stop
    );
    show_sequence(&ops, &title, kind.label(), run, options)
}

pub fn handle_transform_command(config: Config, args: &TransformArgs, options: &RunOptions) -> AppResult<()> {
    let ops = PrimeOperations::new(config)?;
    let op: Operation = args.op.parse()?;
    let range = PositionRange::new(args.start, args.stop)?;
    ops.check_range_limit(args.start, args.stop)?;

    let kind = kind_of(args.differences);
    let values = to_f64(&slice_of(kind, &range));
    let transformed = transform(&values, op, args.operand)?;
    debug!(%op, operand = args.operand, count = transformed.len(), "transformed slice");

    let title = format!(
        "{} {} {}",
        PrimeOperations::slice_title(kind, &range),
        op.symbol(),
        args.operand
    );
    ops.print_values(&title, &transformed, &options.format)
}
