//! CLI for the urlcanon URL canonicalizer.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::{Path, PathBuf};
use urlcanon_core::config::{self, CanonConfig};
use urlcanon_core::Canonicalizer;

use commands::{
    run_completions, run_config, run_dedup, run_manpage, run_normalize, run_query_decode,
    run_query_encode,
};

/// Top-level CLI for the urlcanon URL canonicalizer.
#[derive(Debug, Parser)]
#[command(name = "urlcanon")]
#[command(about = "urlcanon: deterministic URL canonicalization for dedup and cache keys", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/urlcanon/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// More log detail (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of each URL, one per line.
    Normalize {
        /// URLs to canonicalize.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Log invalid URLs and keep going instead of failing.
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Read URLs one per line and print each distinct canonical URL once.
    Dedup {
        /// File with one URL per line (stdin when omitted).
        path: Option<PathBuf>,
        /// Prefix each URL with how many inputs collapsed into it.
        #[arg(long)]
        counts: bool,
    },

    /// Decode or encode query strings.
    Query {
        #[command(subcommand)]
        action: QueryAction,
    },

    /// Show the config file path and the effective configuration.
    Config,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page.
    Manpage,
}

#[derive(Debug, Subcommand)]
pub enum QueryAction {
    /// Decode a query string into key/value pairs.
    Decode {
        /// Raw query string, with or without the leading `?`.
        query: String,
        /// Print a JSON object (`null` when the query is empty).
        #[arg(long)]
        json: bool,
    },

    /// Encode KEY=VALUE pairs into an RFC 3986 query string.
    Encode {
        /// Pairs in KEY=VALUE form; a bare KEY means an empty value.
        #[arg(required = true, value_name = "KEY=VALUE")]
        pairs: Vec<String>,
        /// Sort by key before encoding, as canonical output does.
        #[arg(long)]
        sort: bool,
    },
}

fn load_config(explicit: Option<&Path>) -> Result<(PathBuf, CanonConfig)> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    let cfg = config::load_or_init_at(&path)?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok((path, cfg))
}

impl Cli {
    /// Runs the parsed command, writing results to stdout.
    pub fn run(self) -> Result<()> {
        let config_file = self.config_file.as_deref();
        let mut out = io::stdout().lock();

        match self.command {
            CliCommand::Normalize { urls, skip_invalid } => {
                let (_, cfg) = load_config(config_file)?;
                let canon = Canonicalizer::new(&cfg);
                run_normalize(&mut out, &canon, &urls, skip_invalid)?;
            }
            CliCommand::Dedup { path, counts } => {
                let (_, cfg) = load_config(config_file)?;
                let canon = Canonicalizer::new(&cfg);
                run_dedup(&mut out, &canon, path.as_deref(), counts)?;
            }
            CliCommand::Query { action } => match action {
                QueryAction::Decode { query, json } => run_query_decode(&mut out, &query, json)?,
                QueryAction::Encode { pairs, sort } => run_query_encode(&mut out, &pairs, sort)?,
            },
            CliCommand::Config => {
                let (path, cfg) = load_config(config_file)?;
                run_config(&mut out, &path, &cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(&mut out, shell),
            CliCommand::Manpage => run_manpage(&mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
