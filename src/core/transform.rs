//! Elementwise operand transforms over numeric sequences

use crate::core::data::Operation;
use crate::utils::error::{AppError, AppResult};

/// Apply `op` with `operand` to every element, returning a new sequence.
///
/// Dividing by zero is rejected instead of leaving the values untouched.
pub fn transform(values: &[f64], op: Operation, operand: f64) -> AppResult<Vec<f64>> {
    if op == Operation::Divide && operand == 0.0 {
        return Err(AppError::InvalidOperation(
            "cannot divide by an operand of 0".to_string(),
        ));
    }

    let apply = |value: f64| match op {
        Operation::Add => value + operand,
        Operation::Subtract => value - operand,
        Operation::Multiply => value * operand,
        Operation::Divide => value / operand,
        Operation::Exponent => value.powf(operand),
    };

    Ok(values.iter().map(|&v| apply(v)).collect())
}

/// Like [`transform`], with the operation given as a tag such as `"add"` or `"^"`.
pub fn transform_tagged(values: &[f64], tag: &str, operand: f64) -> AppResult<Vec<f64>> {
    transform(values, tag.parse()?, operand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_examples() {
        let primes = [2.0, 3.0, 5.0];
        assert_eq!(transform_tagged(&primes, "add", 10.0).unwrap(), vec![12.0, 13.0, 15.0]);
        assert_eq!(transform_tagged(&primes, "exponent", 2.0).unwrap(), vec![4.0, 9.0, 25.0]);
        assert_eq!(transform_tagged(&primes, "*", 3.0).unwrap(), vec![6.0, 9.0, 15.0]);
        assert_eq!(transform_tagged(&primes, "-", 2.0).unwrap(), vec![0.0, 1.0, 3.0]);
        assert_eq!(transform_tagged(&primes, "/", 2.0).unwrap(), vec![1.0, 1.5, 2.5]);
    }

    #[test]
    fn test_transform_rejects_unknown_tag() {
        assert!(matches!(
            transform_tagged(&[2.0, 3.0, 5.0], "bogus", 1.0),
            Err(AppError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_transform_rejects_divide_by_zero() {
        assert!(matches!(
            transform(&[2.0, 3.0], Operation::Divide, 0.0),
            Err(AppError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_transform_leaves_input_untouched() {
        let values = vec![2.0, 3.0, 5.0];
        let result = transform(&values, Operation::Multiply, 2.0).unwrap();
        assert_eq!(values, vec![2.0, 3.0, 5.0]);
        assert_eq!(result.len(), values.len());
    }

    #[test]
    fn test_transform_empty() {
        assert!(transform(&[], Operation::Add, 1.0).unwrap().is_empty());
    }
}
