//! One interactive recommendation session, from banner to goodbye.

use crate::config::RuntimeConfig;
use crate::loader;
use crate::prompt;
use crate::recommend::{Recommendation, Recommender};
use crate::song::{self, VALID_MOODS};
use anyhow::{Context, Result};
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};

/// JSON shape printed with `--json`.
#[derive(Debug, Serialize)]
struct Report<'a> {
    name: &'a str,
    #[serde(flatten)]
    recommendation: &'a Recommendation,
}

/// Runs a full session against the given streams.
///
/// Answers preset in `config` skip their prompts. The data file is read
/// after the questions, then titles are printed either as a text report or
/// as JSON.
pub fn run<R, W, G>(
    config: &RuntimeConfig,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<Recommendation>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    if !config.json {
        writeln!(output, "🎶 Welcome to Mood Melody!")?;
        writeln!(output, "Answer a couple of quick questions and I’ll suggest songs.\n")?;
    }

    let name = match &config.name {
        Some(name) => prompt::name_or_default(name),
        None => prompt::ask_name(input, output)?,
    };

    let raw_mood = match &config.mood {
        Some(mood) => mood.clone(),
        None => prompt::ask_mood(input, output, &VALID_MOODS)?,
    };
    let mood = song::normalize_mood(&raw_mood);

    if !song::is_recognized(&mood) && !config.json {
        writeln!(output, "I don't know that mood yet — I’ll try my best with general picks.\n")?;
    }

    let records = loader::load_songs(&config.data_path)?;
    debug!("Using {} loaded records", records.len());

    let recommendation = Recommender::new(records).recommend(&mood, config.count, rng);

    if config.json {
        let report = Report {
            name: &name,
            recommendation: &recommendation,
        };
        serde_json::to_writer_pretty(&mut *output, &report)
            .context("Failed to write JSON report")?;
        writeln!(output)?;
    } else {
        writeln!(output, "\n🎧 Recommendations:")?;
        for title in &recommendation.titles {
            writeln!(output, "{}", format_title(recommendation.data_loaded, title))?;
        }
        writeln!(output, "\nThanks, {name}! Enjoy the music 🎵")?;
    }

    output.flush().context("Failed to flush output")?;
    Ok(recommendation)
}

/// Formats one recommendation line.
///
/// Every line is marked `(from source)` once the data file produced records,
/// including lines filled from the built-in table after a mood miss.
#[must_use]
pub fn format_title(data_loaded: bool, title: &str) -> String {
    if data_loaded {
        format!("• (from source) {title}")
    } else {
        format!("• {title}")
    }
}
