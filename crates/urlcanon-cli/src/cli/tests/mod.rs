//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_verbose_count() {
    let cli = Cli::try_parse_from(["urlcanon", "config"]).unwrap();
    assert_eq!(cli.verbose, 0);
    let cli = Cli::try_parse_from(["urlcanon", "-vv", "config"]).unwrap();
    assert_eq!(cli.verbose, 2);
    let cli = Cli::try_parse_from(["urlcanon", "normalize", "http://x.com", "--verbose"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

mod rest;
