//! `urlcanon completions <shell>` and `urlcanon manpage`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::Cli;

pub fn run_completions<W: Write>(out: &mut W, shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "urlcanon", out);
}

pub fn run_manpage<W: Write>(out: &mut W) -> Result<()> {
    clap_mangen::Man::new(Cli::command()).render(out)?;
    Ok(())
}
