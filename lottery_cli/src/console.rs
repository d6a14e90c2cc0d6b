//! Line-oriented terminal I/O.

use std::io::{self, BufRead, Write};

/// Prompting console over any reader and writer.
///
/// End of input is reported as `None`/`false` so callers can treat it as a
/// cancellation. With `assume_yes` set, prompts are echoed but never read.
pub struct Console<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    pub fn assume_yes(&self) -> bool {
        self.assume_yes
    }

    /// Write one line of output.
    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    /// Show `message` and read one trimmed line.
    ///
    /// Returns `None` at end of input. In non-interactive mode the answer is
    /// always empty, which selects every prompt's default.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        if self.assume_yes {
            writeln!(self.output)?;
            return Ok(Some(String::new()));
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Wait for Enter. Returns `false` at end of input.
    pub fn pause(&mut self, message: &str) -> io::Result<bool> {
        Ok(self.prompt(message)?.is_some())
    }

    /// Ask a `(y/N)` question. Anything starting with `y` is a yes.
    ///
    /// Returns `None` at end of input.
    pub fn confirm(&mut self, message: &str) -> io::Result<Option<bool>> {
        if self.assume_yes {
            writeln!(self.output, "{message}y")?;
            return Ok(Some(true));
        }
        Ok(self
            .prompt(message)?
            .map(|answer| answer.to_lowercase().starts_with('y')))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
