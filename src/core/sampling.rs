//! Random contiguous runs drawn from prime and difference slices

use crate::core::data::{PositionRange, SequenceKind};
use crate::core::engine::{difference_slice_range, slice_range};
use crate::utils::error::{AppError, AppResult};
use rand::Rng;
use tracing::debug;

/// Validate the sampling request; `Ok(None)` means a zero length was requested.
fn sample_request(start: i64, stop: i64, length: i64) -> AppResult<Option<(PositionRange, usize)>> {
    let range = PositionRange::new(start, stop)?;

    if length < 0 {
        return Err(AppError::InvalidArgument(format!(
            "'length' must be a non-negative integer (got {})",
            length
        )));
    }
    if length == 0 {
        return Ok(None);
    }

    let length = length as u64;
    if length > range.span() as u64 {
        return Err(AppError::OutOfRange(format!(
            "'length' ({}) cannot be greater than the distance between start and stop ({})",
            length,
            range.span()
        )));
    }

    Ok(Some((range, length as usize)))
}

/// Sample a run of `length` consecutive elements of the chosen sequence.
pub fn random_run_with<R: Rng + ?Sized>(
    rng: &mut R,
    kind: SequenceKind,
    start: i64,
    stop: i64,
    length: i64,
) -> AppResult<Option<Vec<u64>>> {
    let Some((range, length)) = sample_request(start, stop, length)? else {
        return Ok(None);
    };

    let span = match kind {
        SequenceKind::Primes => slice_range(&range),
        SequenceKind::Differences => difference_slice_range(&range),
    };

    let offset = rng.gen_range(0..=span.len() - length);
    debug!(kind = kind.label(), %range, length, offset, "sampled run");
    Ok(Some(span[offset..offset + length].to_vec()))
}

/// A random run of `length` consecutive primes inside `slice(start, stop)`.
pub fn random_slice_with<R: Rng + ?Sized>(
    rng: &mut R,
    start: i64,
    stop: i64,
    length: i64,
) -> AppResult<Option<Vec<u64>>> {
    random_run_with(rng, SequenceKind::Primes, start, stop, length)
}

/// A random run of `length` consecutive gaps inside `difference_slice(start, stop)`.
pub fn random_difference_slice_with<R: Rng + ?Sized>(
    rng: &mut R,
    start: i64,
    stop: i64,
    length: i64,
) -> AppResult<Option<Vec<u64>>> {
    random_run_with(rng, SequenceKind::Differences, start, stop, length)
}

pub fn random_slice(start: i64, stop: i64, length: i64) -> AppResult<Option<Vec<u64>>> {
    random_slice_with(&mut rand::thread_rng(), start, stop, length)
}

pub fn random_difference_slice(start: i64, stop: i64, length: i64) -> AppResult<Option<Vec<u64>>> {
    random_difference_slice_with(&mut rand::thread_rng(), start, stop, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{difference_slice, slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_run_of(run: &[u64], span: &[u64]) -> bool {
        span.windows(run.len()).any(|window| window == run)
    }

    #[test]
    fn test_random_slice_is_consecutive_run() {
        let span = slice(1, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let run = random_slice_with(&mut rng, 1, 10, 3).unwrap().unwrap();
            assert_eq!(run.len(), 3);
            assert!(is_run_of(&run, &span));
        }
    }

    #[test]
    fn test_random_slice_varies_offset() {
        let mut rng = StdRng::seed_from_u64(42);
        let firsts: std::collections::HashSet<u64> = (0..200)
            .map(|_| random_slice_with(&mut rng, 1, 10, 3).unwrap().unwrap()[0])
            .collect();
        assert!(firsts.len() > 1);
    }

    #[test]
    fn test_random_slice_reversed() {
        let span = slice(12, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let run = random_slice_with(&mut rng, 12, 3, 4).unwrap().unwrap();
            assert!(run.windows(2).all(|pair| pair[0] > pair[1]));
            assert!(is_run_of(&run, &span));
        }
    }

    #[test]
    fn test_random_difference_slice() {
        let span = difference_slice(2, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let run = random_difference_slice_with(&mut rng, 2, 20, 5).unwrap().unwrap();
            assert!(is_run_of(&run, &span));
        }
    }

    #[test]
    fn test_random_slice_boundaries() {
        assert_eq!(random_slice(1, 10, 0).unwrap(), None);
        assert!(matches!(random_slice(1, 5, 10), Err(AppError::OutOfRange(_))));
        assert!(matches!(random_slice(0, 5, 1), Err(AppError::InvalidRange(_))));
        assert!(matches!(random_slice(1, 5, -2), Err(AppError::InvalidArgument(_))));
        assert!(matches!(random_difference_slice(9, 5, 5), Err(AppError::OutOfRange(_))));
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let first = random_slice_with(&mut StdRng::seed_from_u64(3), 1, 50, 4).unwrap();
        let second = random_slice_with(&mut StdRng::seed_from_u64(3), 1, 50, 4).unwrap();
        assert_eq!(first, second);
    }
}
