//! Distinct unordered pairs.
//!
//! `(a, b)` and `(b, a)` are the same pair. The first record producing a
//! pair is written immediately, in the orientation it was read; later
//! records for that pair produce no output. After the input ends, one line
//! holds the number of distinct pairs.
//!
//! Memory: O(d) where d = number of distinct unordered pairs.

use super::PairCommand;
use crate::config::TallyConfig;
use crate::key::{normalize, Mode, PairKey};
use crate::record::{PairReader, Result};
use crate::streaming::buffers::output_buffer_size;
use crate::streaming::PairWriter;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// Aggregate table of canonical keys seen so far.
#[derive(Debug, Default, Clone)]
pub struct PairSet {
    seen: FxHashSet<PairKey>,
}

impl PairSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`. Returns true on first sight, false if already present.
    #[inline]
    pub fn record(&mut self, key: PairKey) -> bool {
        self.seen.insert(key)
    }

    pub fn contains(&self, key: &PairKey) -> bool {
        self.seen.contains(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Distinct unordered pair command.
#[derive(Debug, Clone, Default)]
pub struct DistinctCommand {
    pub config: TallyConfig,
}

impl DistinctCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: TallyConfig) -> Self {
        self.config = config;
        self
    }
}

impl PairCommand for DistinctCommand {
    type Stats = DistinctStats;

    fn config(&self) -> &TallyConfig {
        &self.config
    }

    fn run_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        output: &mut W,
    ) -> Result<DistinctStats> {
        let mut stats = DistinctStats::default();
        let mut reader = PairReader::new(reader, self.config.trailing);
        let capacity = output_buffer_size(self.config.low_memory);
        let mut writer = PairWriter::with_capacity(capacity, output);
        let mut set = PairSet::new();

        while let Some(record) = reader.read_record()? {
            // Output uses the orientation as read, not the canonical key.
            let original = record.clone();
            let key = normalize(record.a, record.b, Mode::Unordered);

            if set.record(key) {
                writer.write_pair(&original.a, &original.b)?;
            } else {
                stats.duplicates += 1;
            }
        }

        stats.records_read = reader.records_read();
        stats.lines_read = reader.lines_read();
        stats.distinct_pairs = set.len();
        writer.write_count(set.len())?;
        writer.flush()?;

        tracing::debug!(
            records = stats.records_read,
            distinct = stats.distinct_pairs,
            lines_written = writer.lines_written(),
            "distinct pair scan finished"
        );
        Ok(stats)
    }
}

/// Statistics from a distinct pair run.
#[derive(Debug, Default, Clone)]
pub struct DistinctStats {
    pub lines_read: usize,
    pub records_read: usize,
    pub distinct_pairs: usize,
    /// Records whose pair had already been seen.
    pub duplicates: usize,
}

impl std::fmt::Display for DistinctStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lines: {}, Records: {}, Distinct: {}, Duplicates: {}",
            self.lines_read, self.records_read, self.distinct_pairs, self.duplicates
        )
    }
}
