//! Random key lists for demos and stress runs.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};

/// Seeded generator when `seed` is given, otherwise seeded from the OS.
pub fn key_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `count` distinct keys uniformly from `range`, in random order.
pub fn random_keys<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: Range<i64>,
) -> ApplicationResult<Vec<i64>> {
    let span = range
        .end
        .checked_sub(range.start)
        .filter(|span| *span > 0)
        .and_then(|span| usize::try_from(span).ok());
    let Some(span) = span.filter(|span| count <= *span) else {
        return Err(ApplicationError::InvalidSample { count, range });
    };
    debug!("random_keys: count={} range={:?}", count, range);

    Ok(rand::seq::index::sample(rng, span, count)
        .into_iter()
        .map(|offset| range.start + offset as i64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn given_seed_when_sampling_then_keys_are_distinct_and_in_range() {
        let keys = random_keys(&mut key_rng(Some(7)), 10, 1..100).unwrap();

        assert_eq!(keys.len(), 10);
        assert!(keys.iter().all(|k| (1..100).contains(k)));
        assert_eq!(keys.iter().unique().count(), 10);
    }

    #[test]
    fn given_same_seed_then_same_keys() {
        let a = random_keys(&mut key_rng(Some(42)), 20, 0..1000).unwrap();
        let b = random_keys(&mut key_rng(Some(42)), 20, 0..1000).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn given_whole_range_then_every_key_is_drawn() {
        let keys = random_keys(&mut key_rng(Some(1)), 5, 10..15).unwrap();

        assert_eq!(keys.into_iter().sorted().collect::<Vec<_>>(), vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn given_count_larger_than_range_then_invalid_sample() {
        let result = random_keys(&mut key_rng(Some(1)), 11, 0..10);

        assert!(matches!(
            result,
            Err(ApplicationError::InvalidSample { count: 11, .. })
        ));
    }

    #[test]
    fn given_empty_range_then_invalid_sample() {
        assert!(random_keys(&mut key_rng(None), 0, 5..5).is_err());
    }
}
