//! Line-oriented report output.
//!
//! Every report line is either an entity, written back byte-for-byte, or a
//! decimal count formatted with itoa so the hot path does not allocate.

use crate::record::TallyError;
use crate::streaming::buffers::DEFAULT_OUTPUT_BUFFER;
use std::io::{BufWriter, Write};

/// Buffered writer for pair reports.
pub struct PairWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
    lines_written: usize,
}

impl<W: Write> PairWriter<W> {
    /// Create a new PairWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_OUTPUT_BUFFER, output)
    }

    /// Create a new PairWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
            lines_written: 0,
        }
    }

    /// Write one entity followed by newline.
    #[inline]
    pub fn write_entity(&mut self, entity: &[u8]) -> Result<(), TallyError> {
        self.writer.write_all(entity)?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write both entities of a pair, one per line.
    #[inline]
    pub fn write_pair(&mut self, a: &[u8], b: &[u8]) -> Result<(), TallyError> {
        self.write_entity(a)?;
        self.write_entity(b)
    }

    /// Write a count as decimal followed by newline.
    #[inline]
    pub fn write_count<I: itoa::Integer>(&mut self, n: I) -> Result<(), TallyError> {
        self.writer.write_all(self.itoa_buf.format(n).as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<(), TallyError> {
        self.writer.flush()?;
        Ok(())
    }
}
