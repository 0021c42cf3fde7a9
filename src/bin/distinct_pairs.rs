//! distinct-pairs: list each unordered pair of two-line records once.
//!
//! Usage: distinct-pairs [OPTIONS] < records.txt

use clap::Parser;
use pairtally::cli::{execute, exit_on_error, TallyArgs};
use pairtally::DistinctCommand;

#[derive(Parser)]
#[command(name = "distinct-pairs")]
#[command(version)]
#[command(
    about = "Write each unordered {A, B} pair on first sight, as read, then the distinct total",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    args: TallyArgs,
}

fn main() {
    let cli = Cli::parse();
    pairtally::logging::init(cli.args.verbose);

    let cmd = DistinctCommand::new().with_config(cli.args.config());
    exit_on_error(execute(&cmd, &cli.args));
}
