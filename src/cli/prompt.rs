//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::{TrackerError, TrackerResult};

/// Reads answers to prompts, one line each
///
/// Normal output and error messages go to separate writers, mirroring
/// stdout and stderr.
pub struct Prompter<R, W, E> {
    input: R,
    output: W,
    errors: E,
    hide_credentials: bool,
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    /// `hide_credentials` reads passwords from the terminal without echo
    pub fn new(input: R, output: W, errors: E, hide_credentials: bool) -> Self {
        Self {
            input,
            output,
            errors,
            hide_credentials,
        }
    }

    /// Print `prompt` and read one line; `None` at end of input
    ///
    /// The trailing line break is removed, other whitespace is kept.
    pub fn line(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like `line`, but surrounding whitespace is dropped
    pub fn word(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        Ok(self.line(prompt)?.map(|s| as_word(&s)))
    }

    /// Read a credential, hidden when attached to a terminal
    ///
    /// Surrounding whitespace is dropped on both paths.
    pub fn credential(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        if !self.hide_credentials {
            return self.word(prompt);
        }

        self.output.flush()?;
        rpassword::prompt_password(prompt)
            .map(|s| Some(as_word(&s)))
            .map_err(|e| TrackerError::Io(format!("Failed to read password: {}", e)))
    }

    /// Write a line of output
    pub fn say(&mut self, message: &str) -> TrackerResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Write a line to the error stream
    pub fn complain(&mut self, message: &str) -> TrackerResult<()> {
        self.output.flush()?;
        writeln!(self.errors, "{}", message)?;
        Ok(())
    }

    /// Write pre-formatted text as-is
    pub fn print(&mut self, text: &str) -> TrackerResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }
}

fn as_word(raw: &str) -> String {
    raw.trim().to_string()
}
