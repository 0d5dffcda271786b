//! `urlcanon dedup [file]` – distinct canonical URLs from a list.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use urlcanon_core::dedup::{canonicalize_lines, DedupReport};
use urlcanon_core::Canonicalizer;

pub fn run_dedup<W: Write>(
    out: &mut W,
    canon: &Canonicalizer,
    path: Option<&Path>,
    counts: bool,
) -> Result<()> {
    let report = match path {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open {}", p.display()))?;
            canonicalize_lines(canon, BufReader::new(f))?
        }
        None => canonicalize_lines(canon, io::stdin().lock())?,
    };
    write_report(out, &report, counts)?;
    if !report.rejected.is_empty() {
        eprintln!("skipped {} invalid URL(s)", report.rejected.len());
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &DedupReport, counts: bool) -> Result<()> {
    for entry in &report.entries {
        if counts {
            writeln!(out, "{:>6} {}", entry.count, entry.canonical)?;
        } else {
            writeln!(out, "{}", entry.canonical)?;
        }
    }
    Ok(())
}
