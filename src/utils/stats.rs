use crate::core::data::SequenceStats;
use crate::utils::format::format_float;
use crate::utils::output::OutputStyle;

/// Utilities for displaying sequence statistics
pub struct StatsCalculator;

impl StatsCalculator {
    /// Print formatted sequence statistics
    pub fn print_stats(stats: &SequenceStats) {
        OutputStyle::print_header("📊 Sequence Statistics");

        OutputStyle::print_field_colored("Count", &stats.count.to_string(), OutputStyle::info);
        OutputStyle::print_field_colored("First", &stats.first.to_string(), OutputStyle::info);
        OutputStyle::print_field_colored("Last", &stats.last.to_string(), OutputStyle::info);
        OutputStyle::print_field_colored("Min", &stats.min.to_string(), OutputStyle::info);
        OutputStyle::print_field_colored("Max", &stats.max.to_string(), OutputStyle::info);
        OutputStyle::print_field_colored("Sum", &stats.sum.to_string(), OutputStyle::info);
        OutputStyle::print_field_colored("Mean", &format_float((stats.mean * 1000.0).round() / 1000.0), OutputStyle::info);

        // Only worth showing when values repeat, as prime gaps do
        if stats.frequencies.len() < stats.count {
            println!("\n🔢 {}:", OutputStyle::header("Most frequent values"));
            let mut sorted: Vec<_> = stats.frequencies.iter().collect();
            sorted.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

            for (value, count) in sorted.iter().take(10) {
                println!("  {}: {}", OutputStyle::value(&value.to_string()), OutputStyle::info(&count.to_string()));
            }
        }
    }
}
