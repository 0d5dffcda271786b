//! `urlcanon query decode|encode` – query string <-> key/value pairs.

use anyhow::Result;
use std::io::Write;
use urlcanon_core::{map_to_query_string, query_string_to_map, ParameterMapping};

pub fn run_query_decode<W: Write>(out: &mut W, query: &str, json: bool) -> Result<()> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mapping = query_string_to_map(Some(query))?;
    if json {
        writeln!(out, "{}", serde_json::to_string(&mapping)?)?;
        return Ok(());
    }
    for (k, v) in mapping.iter().flat_map(|m| m.iter()) {
        writeln!(out, "{k}={v}")?;
    }
    Ok(())
}

pub fn run_query_encode<W: Write>(out: &mut W, pairs: &[String], sort: bool) -> Result<()> {
    let mut mapping: ParameterMapping = pairs
        .iter()
        .map(|p| p.split_once('=').unwrap_or((p.as_str(), "")))
        .collect();
    if sort {
        mapping.sort_by_key();
    }
    writeln!(out, "{}", map_to_query_string(Some(&mapping)))?;
    Ok(())
}
