//! Diagnostic logging setup.
//!
//! Reports go to stdout; all log output goes to stderr so it never mixes
//! with a report.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `debug`.
pub const LOG_ENV: &str = "PAIRTALLY_LOG";

/// Map `-v` repetitions to a default level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber.
///
/// `PAIRTALLY_LOG` wins when set; otherwise the level follows `verbose`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    // A second init (e.g. in tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
