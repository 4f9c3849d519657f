//! Song records and the mood vocabulary.

use serde::{Deserialize, Serialize};

/// Moods the built-in table knows about, in display order.
pub const VALID_MOODS: [&str; 6] = ["happy", "sad", "angry", "relaxed", "energetic", "tired"];

/// One tagged row from the data file.
///
/// Only the loader builds these, so `mood` is always lowercase and trimmed
/// and `title` is always trimmed. Neither is ever empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongRecord {
    pub mood: String,
    pub title: String,
}

impl SongRecord {
    /// Normalizes raw cell values into a record.
    ///
    /// Returns `None` when either field is empty after trimming.
    #[must_use]
    pub fn from_raw(mood: &str, title: &str) -> Option<Self> {
        let mood = mood.trim().to_lowercase();
        let title = title.trim();

        if mood.is_empty() || title.is_empty() {
            log::trace!("Dropping row with mood `{mood}' and title `{title}'.");
            return None;
        }

        Some(Self {
            mood,
            title: title.to_string(),
        })
    }
}

/// Normalizes free-text mood input the same way stored moods are normalized.
#[must_use]
pub fn normalize_mood(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether `mood` is one of [`VALID_MOODS`]. Expects already normalized input.
#[must_use]
pub fn is_recognized(mood: &str) -> bool {
    VALID_MOODS.contains(&mood)
}
