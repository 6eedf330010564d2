//! Interactive confirmation for destructive operations.

use anyhow::{bail, Result};
use std::io::{self, BufRead, Write};

/// Ask `question` on stdin/stdout until the user answers y/Y/n/N.
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask_yes_no(&mut stdin.lock(), &mut stdout.lock(), question)
}

/// The prompt loop behind [`confirm`], generic over its streams.
///
/// Accepts only a literal `y`, `Y`, `n` or `N` (surrounding whitespace
/// ignored); anything else is reported and the question is asked again.
/// A closed input stream is an error.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    loop {
        write!(output, "{question} [y/N] ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the prompt was answered");
        }
        match line.trim() {
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            other => writeln!(output, "Invalid input '{other}', please answer y or n")?,
        }
    }
}
