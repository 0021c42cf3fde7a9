//! Pair aggregation commands.
//!
//! Both commands share one shape: a [`PairReader`](crate::record::PairReader)
//! feeds records through the key normalizer into a table, and the table's
//! contents are reported as lines. They differ in what the table stores and
//! when output happens.

pub mod count;
pub mod distinct;

pub use count::{CountCommand, CountStats, PairCounter};
pub use distinct::{DistinctCommand, DistinctStats, PairSet};

use crate::config::TallyConfig;
use crate::record::Result;
use crate::streaming::buffers::{input_buffer_size, MMAP_THRESHOLD};
use crate::streaming::InputSource;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Common entry points for a command that consumes pair records.
pub trait PairCommand {
    type Stats;

    fn config(&self) -> &TallyConfig;

    /// Core implementation over any buffered source.
    fn run_reader<R: BufRead, W: Write>(&self, reader: R, output: &mut W) -> Result<Self::Stats>;

    /// Run on a file. Large files are memory-mapped.
    fn run<P: AsRef<Path>, W: Write>(&self, input_path: P, output: &mut W) -> Result<Self::Stats> {
        let file = File::open(input_path.as_ref())?;
        let file_size = file.metadata()?.len();

        if file_size >= MMAP_THRESHOLD {
            // SAFETY: the map is read-only and dropped before this call returns.
            let mmap = unsafe { Mmap::map(&file)? };
            tracing::debug!(bytes = file_size, "reading memory-mapped input");
            self.run_reader(&mmap[..], output)
        } else {
            let capacity = input_buffer_size(self.config().low_memory);
            self.run_reader(BufReader::with_capacity(capacity, file), output)
        }
    }

    /// Run from stdin.
    fn run_stdin<W: Write>(&self, output: &mut W) -> Result<Self::Stats> {
        let stdin = io::stdin();
        self.run_reader(stdin.lock(), output)
    }

    /// Run on whichever source the caller selected.
    fn run_source<W: Write>(&self, source: &InputSource, output: &mut W) -> Result<Self::Stats> {
        match source {
            InputSource::Stdin => self.run_stdin(output),
            InputSource::Path(path) => self.run(path, output),
        }
    }
}
