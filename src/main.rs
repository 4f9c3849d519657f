//! # Mood Melody
//!
//! Asks for a name and a mood, then suggests a few songs. Songs come from a
//! mood-tagged CSV when one is available, otherwise from a built-in list.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive
//! mood-melody
//!
//! # Non-interactive, custom data file
//! mood-melody --data songs.csv --name Ada --mood relaxed
//!
//! # Shell completions
//! mood-melody completion bash
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;
use mood_melody::{cli, completion, config::RuntimeConfig, session};
use std::io;

/// Main entry point for the Mood Melody application.
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug mood-melody` - Enable debug logging
/// - `RUST_LOG=mood_melody::loader=trace mood-melody` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    if let Some(cli::Command::Completion { shell }) = &args.command {
        let mut cmd = cli::Args::command();
        completion::generate_completions(completion::shell_to_completion_shell(*shell), &mut cmd);
        return Ok(());
    }

    let config = RuntimeConfig::from(&args);
    info!("Using song data from: {}", config.data_path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut rng = config.rng();

    session::run(&config, &mut stdin.lock(), &mut stdout.lock(), &mut *rng)?;

    Ok(())
}
