//! Interactive yes/no prompts on stdin.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Answers that count as "yes". Anything else, including EOF, is "no".
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Print `warning_text`, then ask `question [y/N]` and read one line.
pub fn confirm(warning_text: &str, question: &str) -> AppResult<bool> {
    warning(warning_text);
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}
