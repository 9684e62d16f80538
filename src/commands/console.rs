//! Line-oriented prompting shared by the console modes

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Reads answers from `input` and writes prompts and output to `out`
pub struct Console<R, W> {
    input: R,
    pub out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` is no
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self
            .prompt(&format!("{question} (y/n)"))?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }
}

/// True for the words that end a console session
#[must_use]
pub fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_reads_trimmed_lines_until_eof() {
        let mut console = Console::new(Cursor::new("  crane \nslate\n"), Vec::new());
        assert_eq!(console.prompt("Guess").unwrap().as_deref(), Some("crane"));
        assert_eq!(console.prompt("Guess").unwrap().as_deref(), Some("slate"));
        assert_eq!(console.prompt("Guess").unwrap(), None);

        let written = String::from_utf8(console.out).unwrap();
        assert!(written.starts_with("Guess: "));
    }

    #[test]
    fn confirm_accepts_yes() {
        let mut console = Console::new(Cursor::new("Y\nno\n\n"), Vec::new());
        assert!(console.confirm("Again?").unwrap());
        assert!(!console.confirm("Again?").unwrap());
        assert!(!console.confirm("Again?").unwrap());
        assert!(!console.confirm("Again?").unwrap());
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("Q"));
        assert!(is_quit("exit"));
        assert!(!is_quit("quite"));
    }
}
