//! Per-run configuration for pairtally.
//!
//! Configuration is an explicit value built once at startup and handed to
//! the command that consumes the input. Nothing here is global.

use std::fmt;
use std::str::FromStr;

use crate::record::TallyError;

/// What to do with a final input line that has no partner.
///
/// Input is read two lines at a time. When the stream holds an odd number
/// of lines, the last one is a dangling `A` with no `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingLine {
    /// Pair the dangling line with an empty entity.
    ///
    /// For newline-terminated input this matches a plain "read A, then
    /// read B" loop, whose second read comes back empty at end of input.
    /// When the dangling line has no terminator the partner is still empty
    /// here; such a loop would instead keep the previous `B`.
    #[default]
    PairEmpty,
    /// Drop the dangling line.
    Discard,
    /// Fail with [`TallyError::IncompleteRecord`].
    Error,
}

impl TrailingLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailingLine::PairEmpty => "pair-empty",
            TrailingLine::Discard => "discard",
            TrailingLine::Error => "error",
        }
    }
}

impl FromStr for TrailingLine {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pair-empty" | "empty" => Ok(TrailingLine::PairEmpty),
            "discard" => Ok(TrailingLine::Discard),
            "error" => Ok(TrailingLine::Error),
            other => Err(TallyError::InvalidArgument(format!(
                "Invalid trailing-line policy '{}'. Use: pair-empty, discard, error",
                other
            ))),
        }
    }
}

impl fmt::Display for TrailingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime configuration shared by both pair commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct TallyConfig {
    /// Policy for an unpaired final line.
    pub trailing: TrailingLine,
    /// Use smaller I/O buffers.
    pub low_memory: bool,
}

impl TallyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trailing(mut self, trailing: TrailingLine) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_low_memory(mut self, low_memory: bool) -> Self {
        self.low_memory = low_memory;
        self
    }
}
