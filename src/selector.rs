//! Song selection for a requested mood.
//!
//! Two sampling primitives live here and are deliberately kept apart:
//! [`sample_distinct`] never repeats an index within one call, while
//! [`sample_with_replacement`] draws each item independently.

use crate::song::SongRecord;
use log::trace;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Number of titles recommended when the caller does not say otherwise.
pub const DEFAULT_PICK_COUNT: usize = 3;

/// Upper bound accepted on the command line for the number of titles.
pub const MAX_PICK_COUNT: u64 = 100;

/// Picks `n` titles tagged with `mood` from `records`.
///
/// `mood` is compared exactly against the stored (lowercase) mood, so callers
/// normalize it first.
///
/// - No matching rows: returns an empty list, leaving fallback to the caller.
/// - At least `n` matches: `n` distinct titles in random order.
/// - Fewer than `n` matches: exactly `n` titles drawn with replacement.
///
/// # Examples
///
/// ```
/// use mood_melody::selector::pick;
/// use mood_melody::song::SongRecord;
///
/// let records = vec![SongRecord { mood: "happy".into(), title: "A".into() }];
/// let titles = pick(&records, "happy", 3, &mut rand::thread_rng());
/// assert_eq!(titles, vec!["A", "A", "A"]);
/// ```
pub fn pick<R: Rng + ?Sized>(
    records: &[SongRecord],
    mood: &str,
    n: usize,
    rng: &mut R,
) -> Vec<String> {
    let pool: Vec<String> = records
        .iter()
        .filter(|record| record.mood == mood)
        .map(|record| record.title.clone())
        .collect();

    trace!("Pool for mood `{mood}' has {} titles.", pool.len());

    if pool.is_empty() {
        return Vec::new();
    }

    if pool.len() >= n {
        sample_distinct(&pool, n, rng)
    } else {
        sample_with_replacement(&pool, n, rng)
    }
}

/// Draws `min(k, pool.len())` distinct items in random order.
pub fn sample_distinct<T: Clone, R: Rng + ?Sized>(pool: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let amount = k.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}

/// Draws `k` items uniformly, each independently, so repeats are possible.
///
/// Returns an empty list for an empty pool.
pub fn sample_with_replacement<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    k: usize,
    rng: &mut R,
) -> Vec<T> {
    (0..k)
        .filter_map(|_| pool.choose(rng).cloned())
        .collect()
}
