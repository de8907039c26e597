use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Whitespace-token reader over a console stream.
///
/// Answers are consumed one token at a time, so several answers may share a
/// line and a multi-word answer is split across prompts.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    quiet: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, quiet: bool) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            quiet,
        }
    }

    /// Print a prompt (unless quiet) and read the next token.
    /// Returns `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompt(prompt)?;
        self.next_token()
    }

    /// Print a prompt (unless quiet) without reading anything.
    pub fn prompt(&mut self, prompt: &str) -> Result<()> {
        if !self.quiet {
            write!(self.output, "{}", prompt).context("Failed to write prompt")?;
            self.output.flush().context("Failed to flush stdout")?;
        }
        Ok(())
    }

    /// Read the next token without prompting.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from stdin")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Write a full line of output. Always shown, quiet or not.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to stdout")
    }

    /// Write a line only when prompts are shown.
    pub fn banner(&mut self, line: impl std::fmt::Display) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.say(line)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
