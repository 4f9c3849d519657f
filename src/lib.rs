//! Mood Melody: small mood to song recommender.
//!
//! Core modules:
//! - [`loader`] - Reads mood-tagged songs from a CSV file
//! - [`selector`] - Picks titles for a mood
//! - [`recommend`] - Falls back to the built-in table when data is missing
//!
//! ### Supporting Modules
//!
//! - [`song`] - `SongRecord` and the recognized moods
//! - [`table`] - Per-mood pools and the built-in song table
//! - [`prompt`] - Interactive name and mood questions
//! - [`session`] - One full run from banner to goodbye
//! - [`config`] - Runtime configuration built from CLI arguments
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use mood_melody::{loader, recommend::Recommender};
//!
//! let songs = loader::load_songs("kaggle_songs.csv")?;
//! let recommender = Recommender::new(songs);
//!
//! let rec = recommender.recommend("happy", 3, &mut rand::thread_rng());
//! for title in &rec.titles {
//!     println!("{title}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Selection Rules
//!
//! - Enough loaded songs for the mood: distinct titles, random order
//! - Some, but fewer than requested: titles repeat to fill the list
//! - None for the mood: distinct titles from the built-in table, or from
//!   every built-in title when the mood is not one the table knows
//!
//! ## Error Handling
//!
//! Public fallible functions return `anyhow::Result`. A missing data file is
//! not an error; unreadable or malformed files are.

pub mod cli;
pub mod completion;
pub mod config;
pub mod loader;
pub mod prompt;
pub mod recommend;
pub mod selector;
pub mod session;
pub mod song;
pub mod table;
