//! # Recommendation Module
//!
//! Decides where the recommended titles come from.
//!
//! ## Resolution Order
//!
//! 1. **Nothing loaded**: sample from the built-in pool for the mood, or from
//!    every built-in title when the mood is unknown.
//! 2. **Data loaded**: run [`selector::pick`] on the loaded records. Only when
//!    that comes back empty (no rows at all for this mood) fall back to the
//!    built-in table as in step 1.
//!
//! A loaded pool that is merely smaller than the requested count is still
//! used; the selector repeats titles to fill the list.
//!
//! Built-in samples never repeat and are clamped to the pool size.

use crate::selector;
use crate::song::{self, SongRecord};
use crate::table::MoodTable;
use log::{debug, info, log_enabled, Level};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Where a set of recommended titles was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Rows from the data file.
    Loaded,
    /// The built-in table.
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Loaded => write!(f, "source"),
            Origin::Fallback => write!(f, "built-in"),
        }
    }
}

/// The outcome of one recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub mood: String,
    /// Whether `mood` is one of [`song::VALID_MOODS`].
    pub recognized: bool,
    /// Whether the data file produced any records at all.
    ///
    /// Drives the `(from source)` label even when this mood missed and the
    /// titles came from the built-in table.
    pub data_loaded: bool,
    pub origin: Origin,
    pub titles: Vec<String>,
}

/// Stateless resolver tying the loaded records to the built-in table.
#[derive(Debug, Clone)]
pub struct Recommender {
    records: Vec<SongRecord>,
    fallback: MoodTable,
}

impl Recommender {
    /// Creates a recommender over `records` with the built-in fallback table.
    #[must_use]
    pub fn new(records: Vec<SongRecord>) -> Self {
        Self::with_fallback(records, MoodTable::builtin())
    }

    /// Creates a recommender over `records` using `fallback` for misses.
    #[must_use]
    pub fn with_fallback(records: Vec<SongRecord>, fallback: MoodTable) -> Self {
        if !records.is_empty() && log_enabled!(Level::Debug) {
            let moods: HashSet<&str> = records.iter().map(|r| r.mood.as_str()).collect();
            debug!(
                "Recommender has {} records across {} moods",
                records.len(),
                moods.len()
            );
        }
        Self { records, fallback }
    }

    /// True when no records were loaded, so every answer comes from the table.
    #[must_use]
    pub fn is_fallback_only(&self) -> bool {
        self.records.is_empty()
    }

    /// Recommends `n` titles for an already normalized `mood`.
    pub fn recommend<R: Rng + ?Sized>(&self, mood: &str, n: usize, rng: &mut R) -> Recommendation {
        let recognized = song::is_recognized(mood);

        let (origin, titles) = if self.is_fallback_only() {
            (Origin::Fallback, self.sample_fallback(mood, n, rng))
        } else {
            match selector::pick(&self.records, mood, n, rng) {
                titles if titles.is_empty() => {
                    debug!("No loaded rows for mood `{mood}', using built-in songs");
                    (Origin::Fallback, self.sample_fallback(mood, n, rng))
                }
                titles => (Origin::Loaded, titles),
            }
        };

        info!("Recommending {} titles for `{mood}' from {origin}", titles.len());

        Recommendation {
            mood: mood.to_string(),
            recognized,
            data_loaded: !self.is_fallback_only(),
            origin,
            titles,
        }
    }

    fn sample_fallback<R: Rng + ?Sized>(&self, mood: &str, n: usize, rng: &mut R) -> Vec<String> {
        let pool = self.fallback.pool_or_all(mood);
        selector::sample_distinct(&pool, n, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn records(rows: &[(&str, &str)]) -> Vec<SongRecord> {
        rows.iter()
            .map(|(mood, title)| SongRecord {
                mood: (*mood).to_string(),
                title: (*title).to_string(),
            })
            .collect()
    }

    fn assert_distinct_from(titles: &[String], pool: &[String]) {
        let unique: HashSet<&String> = titles.iter().collect();
        assert_eq!(unique.len(), titles.len(), "duplicates in {titles:?}");
        assert!(titles.iter().all(|t| pool.contains(t)), "{titles:?} not from pool");
    }

    #[test]
    fn test_no_data_known_mood() {
        let recommender = Recommender::new(Vec::new());
        let table = MoodTable::builtin();

        for seed in 0..20 {
            let rec = recommender.recommend("sad", 3, &mut StdRng::seed_from_u64(seed));
            assert_eq!(rec.origin, Origin::Fallback);
            assert!(rec.recognized);
            assert_eq!(rec.titles.len(), 3);
            assert_distinct_from(&rec.titles, table.get("sad").unwrap());
        }
    }

    #[test]
    fn test_no_data_unknown_mood_uses_all_titles() {
        let recommender = Recommender::new(Vec::new());
        let all = MoodTable::builtin().all_titles();

        let rec = recommender.recommend("zzz", 3, &mut StdRng::seed_from_u64(5));
        assert!(!rec.recognized);
        assert!(!rec.data_loaded);
        assert_eq!(rec.origin, Origin::Fallback);
        assert_eq!(rec.titles.len(), 3);
        assert_distinct_from(&rec.titles, &all);
    }

    #[test]
    fn test_loaded_data_is_preferred() {
        let recommender = Recommender::new(records(&[
            ("happy", "A"),
            ("happy", "B"),
            ("happy", "C"),
            ("happy", "D"),
        ]));
        let pool: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();

        let rec = recommender.recommend("happy", 3, &mut StdRng::seed_from_u64(11));
        assert_eq!(rec.origin, Origin::Loaded);
        assert_distinct_from(&rec.titles, &pool);
        assert_eq!(rec.titles.len(), 3);
    }

    #[test]
    fn test_small_loaded_pool_is_not_replaced_by_fallback() {
        let recommender = Recommender::new(records(&[("happy", "A")]));

        let rec = recommender.recommend("happy", 3, &mut StdRng::seed_from_u64(2));
        assert_eq!(rec.origin, Origin::Loaded);
        assert_eq!(rec.titles, vec!["A", "A", "A"]);
    }

    #[test]
    fn test_missing_mood_in_loaded_data_uses_table_entry() {
        let recommender = Recommender::new(records(&[("happy", "A")]));
        let table = MoodTable::builtin();

        let rec = recommender.recommend("relaxed", 3, &mut StdRng::seed_from_u64(8));
        assert_eq!(rec.origin, Origin::Fallback);
        assert_eq!(rec.titles.len(), 3);
        assert_distinct_from(&rec.titles, table.get("relaxed").unwrap());
    }

    #[test]
    fn test_unknown_mood_with_loaded_data_uses_all_titles() {
        let recommender = Recommender::new(records(&[("happy", "A"), ("sad", "B")]));
        let all = MoodTable::builtin().all_titles();

        let rec = recommender.recommend("zzz", 3, &mut StdRng::seed_from_u64(4));
        assert!(rec.data_loaded);
        assert_eq!(rec.origin, Origin::Fallback);
        assert_eq!(rec.titles.len(), 3);
        assert_distinct_from(&rec.titles, &all);
    }

    #[test]
    fn test_unknown_mood_found_in_loaded_data() {
        let recommender = Recommender::new(records(&[("melancholic", "A")]));

        let rec = recommender.recommend("melancholic", 2, &mut StdRng::seed_from_u64(0));
        assert!(!rec.recognized);
        assert_eq!(rec.origin, Origin::Loaded);
        assert_eq!(rec.titles, vec!["A", "A"]);
    }

    #[test]
    fn test_fallback_count_is_clamped() {
        let recommender = Recommender::new(Vec::new());

        let rec = recommender.recommend("angry", 10, &mut StdRng::seed_from_u64(1));
        assert_eq!(rec.titles.len(), 3);
    }

    #[test]
    fn test_custom_fallback_table() {
        let fallback = MoodTable::from_records(&records(&[("calm", "X"), ("calm", "Y")]));
        let recommender = Recommender::with_fallback(Vec::new(), fallback);

        let mut rec = recommender.recommend("calm", 3, &mut StdRng::seed_from_u64(1));
        rec.titles.sort();
        assert_eq!(rec.titles, vec!["X", "Y"]);
    }

    #[test]
    fn test_recommendation_serializes() {
        let rec = Recommendation {
            mood: "happy".into(),
            recognized: true,
            data_loaded: true,
            origin: Origin::Loaded,
            titles: vec!["A".into()],
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["origin"], "loaded");
        assert_eq!(json["titles"][0], "A");
    }
}
