//! # Configuration Module
//!
//! Runtime settings for one recommendation session. Everything comes from the
//! command line; there is no config file and nothing is persisted.

use crate::cli::Args;
use crate::loader::DEFAULT_DATA_PATH;
use crate::selector::DEFAULT_PICK_COUNT;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Path to the CSV data file (may not exist)
    pub data_path: PathBuf,
    /// How many titles to recommend
    pub count: usize,
    /// Fixed seed, if reproducible picks were requested
    pub seed: Option<u64>,
    /// Emit JSON instead of the text report
    pub json: bool,
    /// Preset answer for the name prompt
    pub name: Option<String>,
    /// Preset answer for the mood prompt
    pub mood: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            count: DEFAULT_PICK_COUNT,
            seed: None,
            json: false,
            name: None,
            mood: None,
        }
    }
}

impl RuntimeConfig {
    /// Create configuration with an explicit data path
    #[must_use]
    pub fn with_data_path(data_path: PathBuf) -> Self {
        Self {
            data_path,
            ..Self::default()
        }
    }

    /// Random source for this run: seeded when `seed` is set.
    #[must_use]
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(thread_rng()),
        }
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            data_path: args.data.clone(),
            count: args.count,
            seed: args.seed,
            json: args.json,
            name: args.name.clone(),
            mood: args.mood.clone(),
        }
    }
}
