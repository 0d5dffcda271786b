//! `urlcanon config` – show config path and effective values.

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use urlcanon_core::CanonConfig;

pub fn run_config<W: Write>(out: &mut W, path: &Path, cfg: &CanonConfig) -> Result<()> {
    writeln!(out, "# {}", path.display())?;
    write!(out, "{}", cfg.to_toml_string()?)?;
    let rules = cfg.tracking_rules();
    if cfg.tracking.is_none() {
        writeln!(
            out,
            "# tracking (built-in): prefixes = {:?}, substrings = {:?}",
            rules.prefixes, rules.substrings
        )?;
    }
    Ok(())
}
