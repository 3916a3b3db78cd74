/// Format a float without a trailing `.0` when it holds an integer value
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Join values into a single comma separated line
pub fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Width of the widest rendered value, used for column alignment
pub fn column_width(values: &[String]) -> usize {
    values.iter().map(|v| v.len()).max().unwrap_or(0)
}
