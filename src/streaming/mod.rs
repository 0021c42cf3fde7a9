//! Shared streaming plumbing for the pair commands.
//!
//! - Buffer sizing for input and output
//! - Line-oriented report writer with allocation-free count formatting
//! - Input source selection (stdin, buffered file, memory-mapped file)

pub mod buffers;
pub mod input;
pub mod output;

pub use input::InputSource;
pub use output::PairWriter;
