//! Pair tally: aggregate statistics over two-line pair records.
//!
//! Input is a stream of lines read two at a time: entity A, then entity B.
//! Two commands consume it:
//!
//! - [`CountCommand`] counts every ordered pair and reports each one with
//!   its count, sorted, once the input is exhausted.
//! - [`DistinctCommand`] treats `(a, b)` and `(b, a)` as one pair and writes
//!   each pair the first time it appears.
//!
//! Both finish with a line holding the number of distinct pairs.
//!
//! # Example
//!
//! ```rust
//! use pairtally::commands::{CountCommand, PairCommand};
//!
//! let input = b"x\ny\nx\ny\ny\nx\n";
//! let mut output = Vec::new();
//! CountCommand::new().run_reader(&input[..], &mut output).unwrap();
//!
//! assert_eq!(output, b"x\ny\n2\ny\nx\n1\n2\n");
//! ```

pub mod commands;
pub mod cli;
pub mod config;
pub mod key;
pub mod logging;
pub mod record;
pub mod streaming;

// Re-export commonly used types
pub use commands::{CountCommand, DistinctCommand, PairCommand};
pub use config::{TallyConfig, TrailingLine};
pub use key::{normalize, Mode, PairKey};
pub use record::{PairReader, PairRecord, TallyError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{
        CountCommand, CountStats, DistinctCommand, DistinctStats, PairCommand, PairCounter,
        PairSet,
    };
    pub use crate::config::{TallyConfig, TrailingLine};
    pub use crate::key::{normalize, Mode, PairKey};
    pub use crate::record::{PairReader, PairRecord, TallyError};
    pub use crate::streaming::{InputSource, PairWriter};
}
