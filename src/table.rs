//! Per-mood title pools, including the built-in fallback table.

use crate::song::SongRecord;

/// Songs used when no data file is present or it has nothing for a mood.
const FALLBACK: &[(&str, &[&str])] = &[
    (
        "happy",
        &[
            "Happy — Pharrell Williams",
            "Uptown Funk — Mark Ronson ft. Bruno Mars",
            "Good as Hell — Lizzo",
            "Can’t Stop the Feeling! — Justin Timberlake",
        ],
    ),
    (
        "sad",
        &[
            "Someone Like You — Adele",
            "Fix You — Coldplay",
            "Let Her Go — Passenger",
            "When I Was Your Man — Bruno Mars",
        ],
    ),
    (
        "angry",
        &[
            "Smells Like Teen Spirit — Nirvana",
            "In the End — Linkin Park",
            "Killing in the Name — Rage Against the Machine",
        ],
    ),
    (
        "relaxed",
        &[
            "Weightless — Marconi Union",
            "Banana Pancakes — Jack Johnson",
            "Holocene — Bon Iver",
            "Sunflower — Rex Orange County",
        ],
    ),
    (
        "energetic",
        &[
            "Tití Me Preguntó — Bad Bunny",
            "Turn Down for What — DJ Snake & Lil Jon",
            "Titanium — David Guetta ft. Sia",
        ],
    ),
    (
        "tired",
        &[
            "River Flows in You — Yiruma",
            "Clair de Lune — Debussy",
            "Night Owl — Galimatias",
            "Breathe Me — Sia",
        ],
    ),
];

/// Mood to titles mapping that remembers the order moods were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodTable {
    pools: Vec<(String, Vec<String>)>,
}

impl MoodTable {
    /// The table compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pools: FALLBACK
                .iter()
                .map(|(mood, titles)| {
                    (
                        (*mood).to_string(),
                        titles.iter().map(|t| (*t).to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Groups loaded records into per-mood pools, keeping source order.
    #[must_use]
    pub fn from_records(records: &[SongRecord]) -> Self {
        let mut table = Self::default();
        for record in records {
            match table.pools.iter_mut().find(|(mood, _)| *mood == record.mood) {
                Some((_, titles)) => titles.push(record.title.clone()),
                None => table
                    .pools
                    .push((record.mood.clone(), vec![record.title.clone()])),
            }
        }
        table
    }

    /// Titles for exactly `mood`, if the table has that mood.
    #[must_use]
    pub fn get(&self, mood: &str) -> Option<&[String]> {
        self.pools
            .iter()
            .find(|(m, _)| m == mood)
            .map(|(_, titles)| titles.as_slice())
    }

    /// Every title in the table, concatenated in mood order.
    #[must_use]
    pub fn all_titles(&self) -> Vec<String> {
        self.pools
            .iter()
            .flat_map(|(_, titles)| titles.iter().cloned())
            .collect()
    }

    /// The pool for `mood`, or the union of all pools when the mood is unknown.
    #[must_use]
    pub fn pool_or_all(&self, mood: &str) -> Vec<String> {
        self.get(mood)
            .map(<[String]>::to_vec)
            .unwrap_or_else(|| self.all_titles())
    }

    pub fn moods(&self) -> impl Iterator<Item = &str> {
        self.pools.iter().map(|(mood, _)| mood.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
