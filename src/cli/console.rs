use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use crate::cli::output::{paint, Tone, CLEAR_SCREEN};

/// Rendering switches for a console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub clear_screen: bool,
}

impl Style {
    /// No colors, no screen clearing
    pub fn plain() -> Self {
        Self { color: false, clear_screen: false }
    }
}

/// Line-oriented prompting and rendering over any reader/writer pair
///
/// Reads return `None` at end of input so callers can wind the session down.
pub struct Console<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self { input, output, style }
    }

    /// Print a line in the given tone
    pub fn say(&mut self, tone: Tone, text: &str) -> Result<()> {
        let line = paint(text, tone, self.style.color);
        writeln!(self.output, "{}", line).context("Failed to write to console")
    }

    /// Print uncolored text
    pub fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to console")
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        if self.style.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN).context("Failed to write to console")?;
            self.output.flush().context("Failed to flush console")?;
        }
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the read.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Ask until the answer is `y` or `n` (case-insensitive)
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                _ => self.say(Tone::Error, "Please enter 'y' or 'n'. ❌")?,
            }
        }
    }
}
