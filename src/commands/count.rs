//! Ordered pair counting.
//!
//! Every record is counted under its exact `(a, b)` orientation. Nothing is
//! written until the input is exhausted; then each distinct pair is reported
//! as three lines (a, b, count) in ascending key order, followed by one line
//! holding the number of distinct pairs.
//!
//! Memory: O(d) where d = number of distinct ordered pairs.

use super::PairCommand;
use crate::config::TallyConfig;
use crate::key::{normalize, Mode, PairKey};
use crate::record::{PairReader, Result};
use crate::streaming::buffers::output_buffer_size;
use crate::streaming::PairWriter;
use rustc_hash::FxHashMap;
use std::io::{BufRead, Write};

/// Aggregate table mapping each ordered pair to its occurrence count.
#[derive(Debug, Default, Clone)]
pub struct PairCounter {
    counts: FxHashMap<PairKey, u64>,
}

impl PairCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`, starting at 1 if unseen.
    #[inline]
    pub fn record(&mut self, key: PairKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Occurrences recorded for `key` (0 if never seen).
    pub fn count(&self, key: &PairKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of records recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries sorted ascending by key.
    ///
    /// The table is hash-based, so this sort is what makes the report
    /// deterministic.
    pub fn into_sorted(self) -> Vec<(PairKey, u64)> {
        let mut entries: Vec<_> = self.counts.into_iter().collect();
        entries.sort_unstable_by(|x, y| x.0.cmp(&y.0));
        entries
    }
}

/// Ordered pair counting command.
#[derive(Debug, Clone, Default)]
pub struct CountCommand {
    pub config: TallyConfig,
}

impl CountCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: TallyConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume every record into a fresh table.
    pub fn tally<R: BufRead>(&self, reader: &mut PairReader<R>) -> Result<PairCounter> {
        let mut counter = PairCounter::new();
        while let Some(record) = reader.read_record()? {
            counter.record(normalize(record.a, record.b, Mode::Ordered));
        }
        Ok(counter)
    }

    /// Write the report for a finished table.
    pub fn report<W: Write>(
        &self,
        counter: PairCounter,
        writer: &mut PairWriter<W>,
        stats: &mut CountStats,
    ) -> Result<()> {
        let distinct = counter.len();
        for (key, count) in counter.into_sorted() {
            if key.is_self_pair() {
                stats.self_pairs += 1;
            }
            writer.write_pair(&key.a, &key.b)?;
            writer.write_count(count)?;
        }
        writer.write_count(distinct)?;
        stats.distinct_pairs = distinct;
        Ok(())
    }
}

impl PairCommand for CountCommand {
    type Stats = CountStats;

    fn config(&self) -> &TallyConfig {
        &self.config
    }

    fn run_reader<R: BufRead, W: Write>(&self, reader: R, output: &mut W) -> Result<CountStats> {
        let mut stats = CountStats::default();
        let mut reader = PairReader::new(reader, self.config.trailing);

        let counter = self.tally(&mut reader)?;
        stats.records_read = reader.records_read();
        stats.lines_read = reader.lines_read();

        let capacity = output_buffer_size(self.config.low_memory);
        let mut writer = PairWriter::with_capacity(capacity, output);
        self.report(counter, &mut writer, &mut stats)?;
        writer.flush()?;

        tracing::debug!(
            records = stats.records_read,
            distinct = stats.distinct_pairs,
            lines_written = writer.lines_written(),
            "ordered pair count finished"
        );
        Ok(stats)
    }
}

/// Statistics from an ordered count run.
#[derive(Debug, Default, Clone)]
pub struct CountStats {
    pub lines_read: usize,
    pub records_read: usize,
    pub distinct_pairs: usize,
    /// Distinct pairs whose two entities are equal.
    pub self_pairs: usize,
}

impl CountStats {
    /// Average occurrences per distinct pair.
    pub fn repeat_ratio(&self) -> f64 {
        if self.distinct_pairs == 0 {
            0.0
        } else {
            self.records_read as f64 / self.distinct_pairs as f64
        }
    }
}

impl std::fmt::Display for CountStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lines: {}, Records: {}, Distinct: {}, Self-pairs: {}, Repeat: {:.2}x",
            self.lines_read,
            self.records_read,
            self.distinct_pairs,
            self.self_pairs,
            self.repeat_ratio()
        )
    }
}
