//! Interactive questions asked before recommending.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Name used when the user leaves the name prompt blank.
pub const DEFAULT_NAME: &str = "Friend";

/// Prints `question` and returns one trimmed line of input.
///
/// End of input is treated as a blank answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer")?;
    Ok(line.trim().to_string())
}

/// Asks for the user's name, defaulting to [`DEFAULT_NAME`].
pub fn ask_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    let answer = ask(input, output, "Your name: ")?;
    Ok(name_or_default(&answer))
}

/// Asks how the user feels, listing the moods the built-in table knows.
///
/// The raw answer is returned; normalization happens in the caller.
pub fn ask_mood<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    choices: &[&str],
) -> Result<String> {
    ask(input, output, &format!("How are you feeling? {}: ", format_choices(choices)))
}

#[must_use]
pub fn name_or_default(name: &str) -> String {
    match name.trim() {
        "" => DEFAULT_NAME.to_string(),
        name => name.to_string(),
    }
}

fn format_choices(choices: &[&str]) -> String {
    format!("[{}]", choices.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut input = Cursor::new("  Ada  \n");
        let mut output = Vec::new();

        let answer = ask(&mut input, &mut output, "Q? ").unwrap();
        assert_eq!(answer, "Ada");
        assert_eq!(String::from_utf8(output).unwrap(), "Q? ");
    }

    #[test]
    fn test_blank_name_defaults() {
        let mut input = Cursor::new("   \n");
        let mut output = Vec::new();
        assert_eq!(ask_name(&mut input, &mut output).unwrap(), "Friend");
    }

    #[test]
    fn test_eof_is_blank() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(ask_name(&mut input, &mut output).unwrap(), DEFAULT_NAME);
        assert_eq!(ask(&mut input, &mut output, "").unwrap(), "");
    }

    #[test]
    fn test_mood_prompt_lists_choices() {
        let mut input = Cursor::new("Happy\n");
        let mut output = Vec::new();

        let answer = ask_mood(&mut input, &mut output, &["happy", "sad"]).unwrap();
        assert_eq!(answer, "Happy");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "How are you feeling? [happy, sad]: "
        );
    }

    #[test]
    fn test_name_or_default() {
        assert_eq!(name_or_default(""), "Friend");
        assert_eq!(name_or_default(" Grace "), "Grace");
    }
}
