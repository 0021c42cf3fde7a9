//! all-pairs: count every ordered pair of two-line records.
//!
//! Usage: all-pairs [OPTIONS] < records.txt

use clap::Parser;
use pairtally::cli::{execute, exit_on_error, TallyArgs};
use pairtally::CountCommand;

#[derive(Parser)]
#[command(name = "all-pairs")]
#[command(version)]
#[command(
    about = "Count each ordered (A, B) pair; report A, B, count per pair in sorted order, then the distinct total",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    args: TallyArgs,
}

fn main() {
    let cli = Cli::parse();
    pairtally::logging::init(cli.args.verbose);

    let cmd = CountCommand::new().with_config(cli.args.config());
    exit_on_error(execute(&cmd, &cli.args));
}
