//! Buffer size constants for streaming input and output.
//!
//! These constants trade memory for I/O throughput. Pair tables usually
//! dominate memory use, so the buffers stay modest.

/// Default output buffer size (1 MB).
pub const DEFAULT_OUTPUT_BUFFER: usize = 1024 * 1024;

/// Low-memory output buffer size (64 KB).
pub const LOW_MEMORY_OUTPUT_BUFFER: usize = 64 * 1024;

/// Default input buffer size (256 KB).
pub const DEFAULT_INPUT_BUFFER: usize = 256 * 1024;

/// Low-memory input buffer size (16 KB).
pub const LOW_MEMORY_INPUT_BUFFER: usize = 16 * 1024;

/// Initial capacity for one entity line.
/// Participant names are short; longer lines just grow the buffer.
pub const DEFAULT_LINE_BUFFER: usize = 32;

/// Files at least this large are memory-mapped instead of read through
/// a buffered reader.
pub const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Returns the appropriate output buffer size based on low_memory flag.
#[inline]
pub const fn output_buffer_size(low_memory: bool) -> usize {
    if low_memory {
        LOW_MEMORY_OUTPUT_BUFFER
    } else {
        DEFAULT_OUTPUT_BUFFER
    }
}

/// Returns the appropriate input buffer size based on low_memory flag.
#[inline]
pub const fn input_buffer_size(low_memory: bool) -> usize {
    if low_memory {
        LOW_MEMORY_INPUT_BUFFER
    } else {
        DEFAULT_INPUT_BUFFER
    }
}
