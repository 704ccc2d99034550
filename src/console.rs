use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{CareError, Result};

/// Line-oriented prompt/print over any reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Prints `text` without a newline and reads one line back, with the line
    /// ending stripped. A closed input yields `CareError::EndOfInput`.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CareError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
