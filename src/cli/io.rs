//! Terminal I/O for CLI
//!
//! Writes rendered output to stdout, progress to stderr and reads yes/no
//! answers from stdin.

use std::io::{self, BufRead, Write};

use super::errors::CliResult;

/// Write rendered output to stdout
pub fn write_output(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", text)?;
    if !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Write a progress line to stderr so it never mixes with rendered output
pub fn report_progress(message: &str) {
    let mut stderr = io::stderr();
    let _ = writeln!(stderr, "{}", message);
}

/// Print `prompt` and read a yes/no answer from stdin
pub fn confirm(prompt: &str) -> CliResult<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{} [y/N] ", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
