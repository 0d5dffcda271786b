//! Tests for query, config, completions, manpage.

use super::parse;
use crate::cli::{CliCommand, QueryAction};
use clap_complete::Shell;

#[test]
fn cli_parse_query_decode() {
    match parse(&["urlcanon", "query", "decode", "a=1&b", "--json"]) {
        CliCommand::Query {
            action: QueryAction::Decode { query, json },
        } => {
            assert_eq!(query, "a=1&b");
            assert!(json);
        }
        _ => panic!("expected Query Decode"),
    }
}

#[test]
fn cli_parse_query_encode() {
    match parse(&["urlcanon", "query", "encode", "a=1", "b", "--sort"]) {
        CliCommand::Query {
            action: QueryAction::Encode { pairs, sort },
        } => {
            assert_eq!(pairs, ["a=1", "b"]);
            assert!(sort);
        }
        _ => panic!("expected Query Encode"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["urlcanon", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["urlcanon", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_manpage() {
    match parse(&["urlcanon", "manpage"]) {
        CliCommand::Manpage => {}
        _ => panic!("expected Manpage"),
    }
}
