//! # Command-Line Interface Module
//!
//! Clap derive definitions for Mood Melody. Running without a subcommand
//! starts a recommendation session; any of `--name` and `--mood` that are
//! given skip the matching prompt.
//!
//! ## Examples
//!
//! ```bash
//! mood-melody
//! mood-melody --name Ada --mood happy
//! mood-melody --data songs.csv --mood tired --count 5 --seed 7
//! mood-melody completion bash
//! ```

use crate::loader::DEFAULT_DATA_PATH;
use crate::selector::{DEFAULT_PICK_COUNT, MAX_PICK_COUNT};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "mood-melody")]
#[command(about = "Mood Melody: simple mood to song recommendations")]
#[command(version)]
pub struct Args {
    /// CSV file with mood-tagged songs
    ///
    /// Needs a mood column (`mood`, `tag` or `mood_tag`) and a title column
    /// (`track_name`, `name` or `title`). A missing file is fine: the
    /// built-in song list is used instead.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Your name (skips the name prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// How you feel (skips the mood prompt)
    #[arg(long)]
    pub mood: Option<String>,

    /// Number of songs to recommend (1-100)
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_PICK_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_PICK_COUNT)
    )]
    pub count: usize,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the recommendation as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate shell completions
    ///
    /// Usage: mood-melody completion bash > ~/.local/share/bash-completion/completions/mood-melody
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
