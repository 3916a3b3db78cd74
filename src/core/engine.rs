//! Prime sequence engine
//!
//! Every count-taking function follows one policy: a count of 0 yields
//! `Ok(None)`, a negative count is `AppError::InvalidArgument`.

use crate::core::data::PositionRange;
use crate::utils::error::{AppError, AppResult};
use tracing::{debug, trace};

/// Validate a count argument; `Ok(None)` means zero was requested.
fn count_arg(n: i64, what: &str) -> AppResult<Option<usize>> {
    if n < 0 {
        return Err(AppError::InvalidArgument(format!(
            "'{}' must be a non-negative integer (got {})",
            what, n
        )));
    }
    if n == 0 {
        return Ok(None);
    }
    usize::try_from(n)
        .map(Some)
        .map_err(|_| AppError::InvalidArgument(format!("'{}' is too large: {}", what, n)))
}

/// Trial-division generator for the first `count` primes.
pub fn first_primes(count: usize) -> Vec<u64> {
    if count == 0 {
        return Vec::new();
    }

    let mut primes = Vec::with_capacity(count);
    primes.push(2u64);
    let mut candidate = 3u64;

    while primes.len() < count {
        let mut is_prime = true;
        for &p in &primes {
            if p * p > candidate {
                break;
            }
            if candidate % p == 0 {
                is_prime = false;
                break;
            }
        }
        if is_prime {
            primes.push(candidate);
        }
        candidate += 2;
    }

    trace!(count, last = primes[count - 1], "generated primes");
    primes
}

/// Consecutive gaps of a prime sequence
fn gaps(primes: &[u64]) -> Vec<u64> {
    primes.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// The first `n` primes in ascending order.
pub fn generate(n: i64) -> AppResult<Option<Vec<u64>>> {
    let Some(count) = count_arg(n, "n")? else {
        return Ok(None);
    };
    debug!(count, "generating primes");
    Ok(Some(first_primes(count)))
}

/// The prime at 1-based position `n`.
pub fn nth(n: i64) -> AppResult<Option<u64>> {
    Ok(generate(n)?.and_then(|primes| primes.last().copied()))
}

/// Sum of the first `n` primes.
pub fn sum(n: i64) -> AppResult<Option<u64>> {
    let Some(primes) = generate(n)? else {
        return Ok(None);
    };
    primes
        .iter()
        .try_fold(0u64, |acc, &p| acc.checked_add(p))
        .map(Some)
        .ok_or_else(|| AppError::Overflow(format!("sum of the first {} primes", n)))
}

/// Number of primes strictly below the value `n`.
///
/// `n` plays two roles: it is the count of primes generated and then the
/// value bound they are filtered by. Since the n-th prime always exceeds n,
/// generating n primes is enough to find every prime below n.
pub fn count_below(n: i64) -> AppResult<Option<usize>> {
    let Some(primes) = generate(n)? else {
        return Ok(None);
    };
    let bound = n as u64;
    Ok(Some(primes.iter().take_while(|&&p| p < bound).count()))
}

/// Gaps between consecutive primes among the first `n`; length `n - 1`.
pub fn differences(n: i64) -> AppResult<Option<Vec<u64>>> {
    Ok(generate(n)?.map(|primes| gaps(&primes)))
}

/// Sum of the gaps among the first `n` primes, which telescopes to `nth(n) - 2`.
pub fn sum_of_differences(n: i64) -> AppResult<Option<u64>> {
    Ok(nth(n)?.map(|last| last - 2))
}

/// Least common multiple of the first `n` primes, i.e. their product.
pub fn lcm_of_first_n(n: i64) -> AppResult<Option<u128>> {
    let Some(primes) = generate(n)? else {
        return Ok(None);
    };
    primes
        .iter()
        .try_fold(1u128, |acc, &p| acc.checked_mul(p as u128))
        .map(Some)
        .ok_or_else(|| {
            AppError::Overflow(format!(
                "lcm of the first {} primes does not fit in 128 bits",
                n
            ))
        })
}

/// Primality by trial division up to the square root.
pub fn is_prime(n: i64) -> AppResult<Option<bool>> {
    let Some(value) = count_arg(n, "n")? else {
        return Ok(None);
    };
    let value = value as u64;
    if value < 2 {
        return Ok(Some(false));
    }
    if value % 2 == 0 {
        return Ok(Some(value == 2));
    }

    let mut divisor = 3u64;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            return Ok(Some(false));
        }
        divisor += 2;
    }
    Ok(Some(true))
}

/// Take the inclusive span of `range` out of `values`, reversing when asked.
pub(crate) fn take_span(values: &[u64], range: &PositionRange) -> Vec<u64> {
    let span = &values[range.low() - 1..range.high()];
    if range.is_reversed() {
        span.iter().rev().copied().collect()
    } else {
        span.to_vec()
    }
}

/// Primes between 1-based positions `start` and `stop`, both inclusive.
///
/// `start > stop` returns the same span in descending order.
pub fn slice(start: i64, stop: i64) -> AppResult<Vec<u64>> {
    let range = PositionRange::new(start, stop)?;
    Ok(slice_range(&range))
}

pub fn slice_range(range: &PositionRange) -> Vec<u64> {
    debug!(%range, "slicing primes");
    let primes = first_primes(range.high());
    take_span(&primes, range)
}

/// Gaps between 1-based difference positions `start` and `stop`, both inclusive.
///
/// Difference position k is the gap between prime k and prime k + 1.
pub fn difference_slice(start: i64, stop: i64) -> AppResult<Vec<u64>> {
    let range = PositionRange::new(start, stop)?;
    Ok(difference_slice_range(&range))
}

pub fn difference_slice_range(range: &PositionRange) -> Vec<u64> {
    debug!(%range, "slicing differences");
    let differences = gaps(&first_primes(range.high() + 1));
    take_span(&differences, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_first_five() {
        assert_eq!(generate(5).unwrap(), Some(vec![2, 3, 5, 7, 11]));
        assert_eq!(generate(1).unwrap(), Some(vec![2]));
    }

    #[test]
    fn test_generate_boundaries() {
        assert_eq!(generate(0).unwrap(), None);
        assert!(matches!(generate(-3), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(nth(5).unwrap(), Some(11));
        assert_eq!(nth(100).unwrap(), Some(541));
        assert_eq!(sum(5).unwrap(), Some(28));
        assert_eq!(lcm_of_first_n(3).unwrap(), Some(30));
        assert_eq!(lcm_of_first_n(1).unwrap(), Some(2));
        assert_eq!(count_below(10).unwrap(), Some(4));
        assert_eq!(count_below(1).unwrap(), Some(0));
        assert_eq!(count_below(100).unwrap(), Some(25));
    }

    #[test]
    fn test_zero_and_negative_policy() {
        assert_eq!(nth(0).unwrap(), None);
        assert_eq!(sum(0).unwrap(), None);
        assert_eq!(count_below(0).unwrap(), None);
        assert_eq!(differences(0).unwrap(), None);
        assert_eq!(sum_of_differences(0).unwrap(), None);
        assert_eq!(lcm_of_first_n(0).unwrap(), None);

        assert!(nth(-1).is_err());
        assert!(sum(-1).is_err());
        assert!(count_below(-1).is_err());
        assert!(differences(-1).is_err());
        assert!(sum_of_differences(-1).is_err());
        assert!(lcm_of_first_n(-1).is_err());
    }

    #[test]
    fn test_differences() {
        assert_eq!(differences(6).unwrap(), Some(vec![1, 2, 2, 4, 2]));
        assert_eq!(differences(1).unwrap(), Some(vec![]));
        assert_eq!(sum_of_differences(6).unwrap(), Some(11));
        assert_eq!(sum_of_differences(1).unwrap(), Some(0));
    }

    #[test]
    fn test_lcm_overflow() {
        // The product of the first 25 primes is below 2^128, the first 30 are not
        assert!(lcm_of_first_n(25).unwrap().is_some());
        assert!(matches!(lcm_of_first_n(30), Err(AppError::Overflow(_))));
    }

    #[test]
    fn test_is_prime() {
        assert_eq!(is_prime(0).unwrap(), None);
        assert!(matches!(is_prime(-7), Err(AppError::InvalidArgument(_))));
        assert_eq!(is_prime(1).unwrap(), Some(false));
        assert_eq!(is_prime(2).unwrap(), Some(true));
        assert_eq!(is_prime(9).unwrap(), Some(false));
        assert_eq!(is_prime(97).unwrap(), Some(true));
        assert_eq!(is_prime(7919).unwrap(), Some(true));
        assert_eq!(is_prime(7917).unwrap(), Some(false));
    }

    #[test]
    fn test_slice() {
        assert_eq!(slice(2, 5).unwrap(), vec![3, 5, 7, 11]);
        assert_eq!(slice(5, 2).unwrap(), vec![11, 7, 5, 3]);
        assert_eq!(slice(3, 3).unwrap(), vec![5]);
        assert!(matches!(slice(0, 5), Err(AppError::InvalidRange(_))));
        assert!(matches!(slice(5, 0), Err(AppError::InvalidRange(_))));
    }

    #[test]
    fn test_difference_slice() {
        // gaps: 1, 2, 2, 4, 2, 4, 2, 4
        assert_eq!(difference_slice(1, 4).unwrap(), vec![1, 2, 2, 4]);
        assert_eq!(difference_slice(4, 2).unwrap(), vec![4, 2, 2]);
        assert_eq!(difference_slice(5, 5).unwrap(), vec![2]);
        assert!(matches!(difference_slice(-1, 3), Err(AppError::InvalidRange(_))));
    }
}
