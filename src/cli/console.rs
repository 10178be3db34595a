//! Line-oriented terminal I/O for the interactive menu.

use crate::error::{AppError, ErrorSeverity};
use crate::{Result, map_display_error, map_input_error};
use log::warn;
use std::io::{BufRead, Write};

/// Owns the input and output streams for the lifetime of a menu session.
///
/// Generic over the streams so the menu can be driven from in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line
    pub fn print(&mut self, text: &str) -> Result<()> {
        map_display_error!(writeln!(self.output, "{}", text), "write line")?;
        Ok(())
    }

    /// Write `text` without a newline, then read one trimmed line.
    /// Returns `None` once the input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        map_display_error!(write!(self.output, "{}", text), "write prompt")?;
        map_display_error!(self.output.flush(), "flush prompt")?;

        let mut line = Vec::new();
        let read = map_input_error!(self.input.read_until(b'\n', &mut line), "read line")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Prompt where end of input counts as an empty answer
    pub fn ask(&mut self, text: &str) -> Result<String> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    pub fn warn(&mut self, message: &str) -> Result<()> {
        self.print(&format!("\n{} {}", ErrorSeverity::Medium.emoji(), message))
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        self.print(&format!("\n✅ {}", message))
    }

    /// Print a failure. Client, validation and input errors show their own
    /// message; anything else shows `fallback`.
    pub fn report(&mut self, error: &AppError, fallback: &str) -> Result<()> {
        warn!("Flow failed: {}", error);
        let line = if error.is_known_cause() {
            format!("\n{} {}", error.severity().emoji(), error.display_friendly())
        } else {
            format!("\n{} {}", ErrorSeverity::High.emoji(), fallback)
        };
        self.print(&line)
    }

    /// Close an error scope: report a failed result and carry on.
    pub fn recover(&mut self, result: Result<()>, fallback: &str) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(error) => self.report(&error, fallback),
        }
    }
}
