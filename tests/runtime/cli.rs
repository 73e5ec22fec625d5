//! Integration tests for the stdnames command line

use std::fs;
use std::path::Path;

use clap::Parser;
use stdnames_runtime::cli::{Cli, execute};

fn run(args: &[&str]) -> stdnames_runtime::cli::Outcome {
    let cli = Cli::try_parse_from(std::iter::once("stdnames").chain(args.iter().copied())).unwrap();
    execute(&cli.command).unwrap()
}

fn names_file(dir: &Path, lines: &str) -> String {
    let path = dir.join("names.txt");
    fs::write(&path, lines).unwrap();
    path.to_string_lossy().into_owned()
}

// =============================================================================
// Subcommands
// =============================================================================

#[test]
fn build_dumps_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let file = names_file(dir.path(), "water__temperature\nair__temperature\n");

    let outcome = run(&["build", &file]);
    assert_eq!(
        outcome.output,
        "names:\n  - air__temperature\n  - water__temperature\n\n\
         objects:\n  - air\n  - water\n\n\
         quantities:\n  - temperature\n\n\
         operators:\n  []"
    );
    assert_eq!(outcome.status, 0);
}

#[test]
fn dump_selected_field() {
    let dir = tempfile::tempdir().unwrap();
    let file = names_file(dir.path(), "air__temperature\nair__speed\n");

    let outcome = run(&["dump", "--field", "q", "--format", "myst", &file]);
    assert_eq!(outcome.output, "# quantities\n* speed\n* temperature");
}

#[test]
fn sql_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = names_file(dir.path(), "air__temperature\n");

    let outcome = run(&["sql", &file]);
    assert!(outcome.output.starts_with("BEGIN TRANSACTION;"));
    assert!(outcome.output.ends_with("COMMIT;"));
}

#[test]
fn validate_counts_invalid_names() {
    let dir = tempfile::tempdir().unwrap();
    let file = names_file(dir.path(), "air__temperature\nair_temperature\n");

    let outcome = run(&["validate", &file]);
    assert_eq!(outcome.output, "air_temperature");
    assert_eq!(outcome.status, 1);
}

#[test]
fn validate_without_files_finds_nothing() {
    let outcome = run(&["validate"]);
    assert!(outcome.output.is_empty());
    assert_eq!(outcome.status, 0);
}

#[test]
fn dump_without_files_is_empty() {
    let outcome = run(&["dump", "-f", "names"]);
    assert_eq!(outcome.output, "names");
    assert_eq!(outcome.status, 0);
}

#[test]
fn dump_reads_the_union_of_files() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let a = names_file(first.path(), "air__temperature\n");
    let b = names_file(second.path(), "water__temperature\nair__temperature\n");

    let outcome = run(&["dump", "-f", "o", "--sort", &a, &b]);
    assert_eq!(outcome.output, "objects\nair\nwater");
}
