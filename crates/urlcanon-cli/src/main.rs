use clap::Parser;
use urlcanon_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Log file under the state dir; stderr if it is unusable.
    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("file logging unavailable, using stderr: {err:#}");
    }

    if let Err(err) = cli.run() {
        eprintln!("urlcanon error: {:#}", err);
        std::process::exit(1);
    }
}
