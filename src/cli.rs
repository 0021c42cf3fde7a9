//! Command-line plumbing shared by the `all-pairs` and `distinct-pairs`
//! binaries.
//!
//! Every flag is optional: with no arguments the binaries read stdin and
//! write the report to stdout.

use crate::commands::PairCommand;
use crate::config::{TallyConfig, TrailingLine};
use crate::record::TallyError;
use crate::streaming::InputSource;
use clap::Args;
use std::fmt::Display;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process;

/// Options common to both binaries.
#[derive(Debug, Clone, Args)]
pub struct TallyArgs {
    /// Input file of two-line records (use - for stdin; default stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// What to do with an unpaired final line: pair-empty, discard or error
    #[arg(long, default_value = "pair-empty")]
    pub trailing: TrailingLine,

    /// Use smaller I/O buffers
    #[arg(long)]
    pub low_memory: bool,

    /// Print run statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TallyArgs {
    pub fn config(&self) -> TallyConfig {
        TallyConfig::new()
            .with_trailing(self.trailing)
            .with_low_memory(self.low_memory)
    }

    pub fn source(&self) -> InputSource {
        InputSource::from_arg(self.input.clone())
    }
}

/// Run `cmd` on the selected source, writing the report to stdout.
pub fn execute<C>(cmd: &C, args: &TallyArgs) -> Result<(), TallyError>
where
    C: PairCommand,
    C::Stats: Display,
{
    let source = args.source();
    tracing::info!(input = %source, trailing = %cmd.config().trailing, "starting");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let stats = cmd.run_source(&source, &mut handle)?;

    if args.stats {
        eprintln!("Pair stats: {}", stats);
    }
    Ok(())
}

/// Report a failed run and exit non-zero.
///
/// A closed stdout (e.g. piping into `head`) is a normal way to stop.
pub fn exit_on_error(result: Result<(), TallyError>) {
    match result {
        Ok(()) => {}
        Err(TallyError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
