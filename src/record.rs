//! Streaming reader for two-line pair records.

use crate::config::TrailingLine;
use crate::streaming::buffers::DEFAULT_LINE_BUFFER;
use memchr::memchr;
use std::io::{self, BufRead};
use thiserror::Error;

/// Errors that can occur while tallying pairs.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Incomplete record at line {line}: entity has no partner line")]
    IncompleteRecord { line: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;

/// One input record: entity `a` from the first line, `b` from the second.
///
/// Entities are raw bytes with the `\n` terminator removed. Nothing else is
/// stripped, so a `\r` from CRLF input stays part of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRecord {
    pub a: Vec<u8>,
    pub b: Vec<u8>,
}

impl PairRecord {
    pub fn new(a: impl Into<Vec<u8>>, b: impl Into<Vec<u8>>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// A streaming reader producing one [`PairRecord`] per two input lines.
pub struct PairReader<R: BufRead> {
    reader: R,
    trailing: TrailingLine,
    lines_read: usize,
    records_read: usize,
    finished: bool,
}

impl<R: BufRead> PairReader<R> {
    /// Create a pair reader from any buffered source.
    pub fn new(reader: R, trailing: TrailingLine) -> Self {
        Self {
            reader,
            trailing,
            lines_read: 0,
            records_read: 0,
            finished: false,
        }
    }

    /// Number of input lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Number of records produced so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Read the next record.
    ///
    /// Returns `Ok(None)` once the input is exhausted. After `None` or an
    /// error the reader stays finished.
    pub fn read_record(&mut self) -> Result<Option<PairRecord>> {
        if self.finished {
            return Ok(None);
        }

        let mut a = Vec::with_capacity(DEFAULT_LINE_BUFFER);
        if !self.read_line(&mut a)? {
            self.finished = true;
            return Ok(None);
        }

        let mut b = Vec::with_capacity(DEFAULT_LINE_BUFFER);
        if !self.read_line(&mut b)? {
            self.finished = true;
            match self.trailing {
                TrailingLine::PairEmpty => {
                    tracing::debug!(
                        line = self.lines_read,
                        "pairing trailing line with empty entity"
                    );
                }
                TrailingLine::Discard => {
                    tracing::debug!(
                        line = self.lines_read,
                        "discarding trailing unpaired line"
                    );
                    return Ok(None);
                }
                TrailingLine::Error => {
                    return Err(TallyError::IncompleteRecord {
                        line: self.lines_read,
                    });
                }
            }
        }

        self.records_read += 1;
        Ok(Some(PairRecord { a, b }))
    }

    /// Read one line into `buf` without its `\n`.
    ///
    /// Returns false when no bytes remain. A last line without a terminator
    /// still counts as a line.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<bool> {
        buf.clear();
        let mut seen = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(TallyError::Io(e)),
            };
            if available.is_empty() {
                if seen {
                    self.lines_read += 1;
                }
                return Ok(seen);
            }
            seen = true;

            match memchr(b'\n', available) {
                Some(pos) => {
                    buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    self.lines_read += 1;
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }

    /// Get an iterator over all records.
    pub fn records(self) -> PairRecordIter<R> {
        PairRecordIter { reader: self }
    }
}

/// Iterator over pair records.
pub struct PairRecordIter<R: BufRead> {
    reader: PairReader<R>,
}

impl<R: BufRead> Iterator for PairRecordIter<R> {
    type Item = Result<PairRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Parse records from a string (useful for testing).
pub fn parse_records(content: &str, trailing: TrailingLine) -> Result<Vec<PairRecord>> {
    PairReader::new(content.as_bytes(), trailing)
        .records()
        .collect()
}
