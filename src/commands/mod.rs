pub mod configure;
pub mod graph;
pub mod query;
pub mod sequence;
pub mod spiral;

use crate::cli::RunOptions;
use crate::core::data::SequenceStats;
use crate::core::operations::PrimeOperations;
use crate::core::traits::SequenceDisplay;
use crate::utils::error::{AppResult, FlowResult, handle_flow};

/// Print a sequence result, its statistics when asked, or the no-result notice
pub(crate) fn show_sequence(
    ops: &PrimeOperations,
    title: &str,
    item_type: &str,
    values: Option<Vec<u64>>,
    options: &RunOptions,
) -> AppResult<()> {
    let Some(values) = values else {
        handle_flow(FlowResult::NoResult {
            item_type: item_type.to_string(),
        });
        return Ok(());
    };

    ops.print_sequence(title, &values, &options.format)?;
    if options.stats
        && let Some(stats) = SequenceStats::from_values(&values)
    {
        ops.print_stats(&stats)?;
    }
    Ok(())
}

/// Print a scalar result or the no-result notice
pub(crate) fn show_scalar<T: ToString>(
    ops: &PrimeOperations,
    label: &str,
    item_type: &str,
    value: Option<T>,
    options: &RunOptions,
) -> AppResult<()> {
    match value {
        Some(value) => ops.print_scalar(label, &value.to_string(), &options.format),
        None => {
            handle_flow(FlowResult::NoResult {
                item_type: item_type.to_string(),
            });
            Ok(())
        }
    }
}
