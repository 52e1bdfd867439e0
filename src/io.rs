//! Whitespace-delimited text load/save for [`Matrix`].
//!
//! The format carries no header: one row per line, elements separated
//! by a single tab, trailing newline per row. On load the token count
//! of the first line fixes the column count and any trailing tokens
//! that do not complete a full row are discarded.

use crate::error::{Error, Result};
use crate::primitives::Matrix;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

impl<T: FromStr + Copy> Matrix<T> {
    /// Reads a matrix from a whitespace-delimited token stream.
    ///
    /// Token reading stops at the first unparsable token; everything
    /// before it is kept, truncated to a whole number of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the stream cannot be read and
    /// [`Error::Parse`] when it holds no numeric data at all.
    pub fn load<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse_text(&text)
    }

    /// Reads a matrix from a text file. See [`load`](Matrix::load).
    ///
    /// # Errors
    ///
    /// Same as [`load`](Matrix::load); an unreadable path surfaces as
    /// [`Error::Io`].
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(File::open(path)?)
    }

    fn parse_text(text: &str) -> Result<Self> {
        let mut values: Vec<T> = Vec::new();
        for token in text.split_whitespace() {
            match token.parse::<T>() {
                Ok(v) => values.push(v),
                Err(_) => break,
            }
        }
        if values.is_empty() {
            return Err(Error::Parse("no numeric data in stream".to_string()));
        }

        // Tokens on the first line fix the column count.
        let mut cols = text
            .lines()
            .next()
            .map_or(0, |line| line.split_whitespace().count());
        if cols == 0 || cols > values.len() {
            cols = values.len();
        }

        let count = values.len() - values.len() % cols;
        values.truncate(count);
        Ok(Self::from_parts(count / cols, cols, values))
    }
}

impl<T: fmt::Display + Copy> Matrix<T> {
    /// Writes the matrix as tab-separated rows, one per line, floats
    /// rendered with the given precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the writer fails.
    pub fn save<W: Write>(&self, writer: W, precision: usize) -> Result<()> {
        let mut w = BufWriter::new(writer);
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let sep = if c + 1 == self.cols() { '\n' } else { '\t' };
                write!(w, "{:.*}{}", precision, self.get(r, c), sep)?;
            }
        }
        w.flush()?;
        Ok(())
    }

    /// Writes the matrix to a text file. See [`save`](Matrix::save).
    ///
    /// # Errors
    ///
    /// Same as [`save`](Matrix::save); an unwritable path surfaces as
    /// [`Error::Io`].
    pub fn save_path<P: AsRef<Path>>(&self, path: P, precision: usize) -> Result<()> {
        self.save(File::create(path)?, precision)
    }
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
