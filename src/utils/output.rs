use crate::cli::OutputFormat;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{column_width, join_values};
use colored::*;
use serde::Serialize;
use std::fmt::Write as _;

pub struct OutputStyle;

impl OutputStyle {
    pub fn value(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn position(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    // Formatting helpers
    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }
}

#[derive(Serialize)]
struct JsonSequence<'a, T: Serialize> {
    title: &'a str,
    count: usize,
    values: &'a [T],
}

#[derive(Serialize)]
struct JsonScalar<'a> {
    label: &'a str,
    value: &'a str,
}

/// Display formatter for the different output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Render a sequence according to the specified format
    pub fn render_sequence<T: Serialize + ToString>(
        title: &str,
        values: &[T],
        format: &OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Simple => Ok(Self::render_simple(title, values)),
            OutputFormat::Column => Ok(Self::render_column(title, values)),
            OutputFormat::Json => Self::render_json(title, values),
        }
    }

    /// Render a single labelled value according to the specified format
    pub fn render_scalar(label: &str, value: &str, format: &OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Simple | OutputFormat::Column => Ok(format!(
                "{}: {}",
                OutputStyle::label(label),
                OutputStyle::value(value)
            )),
            OutputFormat::Json => serde_json::to_string_pretty(&JsonScalar { label, value })
                .map_err(|e| AppError::System(format!("Failed to serialize result to JSON: {}", e))),
        }
    }

    fn render_simple<T: ToString>(title: &str, values: &[T]) -> String {
        format!(
            "{} ({})\n{}",
            OutputStyle::header(title),
            OutputStyle::info(&values.len().to_string()),
            OutputStyle::value(&join_values(values))
        )
    }

    fn render_column<T: ToString>(title: &str, values: &[T]) -> String {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let value_width = column_width(&rendered).max(5);
        let position_width = values.len().to_string().len().max(3);

        let mut out = String::new();
        let _ = writeln!(out, "{}", OutputStyle::title(title));
        let _ = writeln!(
            out,
            "{:>pw$}  {:>vw$}",
            OutputStyle::header("#"),
            OutputStyle::header("Value"),
            pw = position_width,
            vw = value_width
        );
        let _ = writeln!(out, "{}", OutputStyle::separator());
        for (i, value) in rendered.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>pw$}  {:>vw$}",
                OutputStyle::position(&(i + 1).to_string()),
                OutputStyle::value(value),
                pw = position_width,
                vw = value_width
            );
        }
        out
    }

    fn render_json<T: Serialize>(title: &str, values: &[T]) -> AppResult<String> {
        serde_json::to_string_pretty(&JsonSequence {
            title,
            count: values.len(),
            values,
        })
        .map_err(|e| AppError::System(format!("Failed to serialize sequence to JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_sequence() {
        let json = DisplayFormatter::render_sequence("Primes", &[2u64, 3, 5], &OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["count"], 3);
        assert_eq!(parsed["values"], serde_json::json!([2, 3, 5]));
        assert_eq!(parsed["title"], "Primes");
    }

    #[test]
    fn test_render_column_has_one_row_per_value() {
        colored::control::set_override(false);
        let out = DisplayFormatter::render_column("Primes", &[2u64, 3, 5, 7]);
        assert_eq!(out.lines().count(), 3 + 4);
        assert!(out.lines().last().unwrap().trim_end().ends_with('7'));
    }

    #[test]
    fn test_render_scalar_json() {
        let json = DisplayFormatter::render_scalar("nth", "11", &OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["value"], "11");
    }
}
