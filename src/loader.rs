//! # Loader Module
//!
//! Reads a tagged song table (CSV with a header row) into [`SongRecord`]s.
//!
//! ## Column Names
//!
//! Data sets name their columns differently, so each field is looked up under
//! several names, in order:
//!
//! - mood: `mood`, `tag`, `mood_tag`
//! - title: `track_name`, `name`, `title`
//!
//! The first alias holding a non-empty cell wins. The cell is tested before
//! trimming, so a whitespace-only `mood` still shadows `tag`, and the row is
//! then dropped as blank.
//!
//! ## Missing Data
//!
//! A missing file is not an error: it loads as an empty list and the caller
//! switches to the built-in table. Rows without a usable mood or title are
//! skipped silently.

use crate::song::SongRecord;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, trace};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default file name looked up in the working directory.
pub const DEFAULT_DATA_PATH: &str = "kaggle_songs.csv";

/// Header names accepted for the mood field, in lookup order.
pub const MOOD_COLUMNS: [&str; 3] = ["mood", "tag", "mood_tag"];

/// Header names accepted for the title field, in lookup order.
pub const TITLE_COLUMNS: [&str; 3] = ["track_name", "name", "title"];

/// Loads song records from the CSV file at `path`.
///
/// Returns an empty list when the file does not exist. Any other I/O or
/// decoding failure is returned as an error with the path attached.
///
/// # Examples
///
/// ```no_run
/// use mood_melody::loader::load_songs;
///
/// let songs = load_songs("kaggle_songs.csv")?;
/// println!("Loaded {} songs", songs.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_songs(path: impl AsRef<Path>) -> Result<Vec<SongRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        debug!("No data file at {}, using built-in songs", path.display());
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open song data at {}", path.display()))?;

    let songs = load_from_reader(file)
        .with_context(|| format!("Failed to read song data from {}", path.display()))?;

    debug!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

/// Loads song records from any CSV byte stream with a header row.
///
/// Rows are returned in source order without deduplication.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<SongRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("Failed to read CSV header row")?.clone();
    let columns = ColumnMap::resolve(&headers);
    trace!("Resolved columns: {columns:?}");

    let mut songs = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Malformed CSV data at record {}", index + 1))?;

        match columns.extract(&row) {
            Some(song) => songs.push(song),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} rows without a usable mood or title");
    }

    Ok(songs)
}

/// Column positions for each accepted alias, kept in lookup order.
#[derive(Debug, Default)]
struct ColumnMap {
    mood: Vec<usize>,
    title: Vec<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Self {
        Self {
            mood: positions(headers, &MOOD_COLUMNS),
            title: positions(headers, &TITLE_COLUMNS),
        }
    }

    fn extract(&self, row: &StringRecord) -> Option<SongRecord> {
        let mood = first_non_empty(row, &self.mood)?;
        let title = first_non_empty(row, &self.title)?;
        SongRecord::from_raw(mood, title)
    }
}

/// For repeated header names the last column wins.
fn positions(headers: &StringRecord, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .filter_map(|name| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| header == name)
                .map(|(index, _)| index)
                .last()
        })
        .collect()
}

fn first_non_empty<'r>(row: &'r StringRecord, columns: &[usize]) -> Option<&'r str> {
    columns
        .iter()
        .filter_map(|&index| row.get(index))
        .find(|cell| !cell.is_empty())
}
