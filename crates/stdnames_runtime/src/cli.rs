//! The `stdnames` command line.
//!
//! Argument parsing is declared with `clap`; [`execute`] runs a parsed
//! command and returns what should be printed along with the exit status,
//! so every subcommand can be tested without spawning a process.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use stdnames_grammar::Result;
use stdnames_registry::{ErrorPolicy, NamesRegistry};

use crate::dump::{Field, dumps};
use crate::format::Format;
use crate::scrape::scrape_paths;
use crate::sql::as_sql_commands;
use crate::validate::validate_paths;

const NEWLINE: &str = "\n";

/// Work with lists of CSDMS standard names.
#[derive(Debug, Parser)]
#[command(name = "stdnames", version, about)]
pub struct Cli {
    /// Also emit status messages to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress status messages.
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Default log level selected by `--verbose` and `--silent`.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.silent {
            LevelFilter::ERROR
        } else {
            match self.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        }
    }
}

/// Subcommands of `stdnames`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a YAML listing of every field from names files.
    Build(FileArgs),
    /// Dump the standard names read from files.
    Dump(DumpArgs),
    /// Scrape standard names from text files.
    Scrape(FileArgs),
    /// Write SQL commands that build a database of names.
    Sql(FileArgs),
    /// Validate lists of standard names.
    Validate(FileArgs),
}

/// Input files shared by most subcommands.
#[derive(Debug, Args)]
pub struct FileArgs {
    /// Files to read.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Arguments of `stdnames dump`.
#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Files to read names from.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Fields to print (names, objects, quantities, operators, or n, o, q, op).
    #[arg(short, long = "field")]
    pub fields: Vec<Field>,

    /// Sort names.
    #[arg(long)]
    pub sort: bool,

    /// Output format (wiki, yaml, text, myst).
    #[arg(long, default_value_t = Format::Text)]
    pub format: Format,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout, without a trailing newline.
    pub output: String,
    /// Process exit status.
    pub status: u8,
}

impl Outcome {
    fn success(output: String) -> Self {
        Self { output, status: 0 }
    }
}

/// Runs a parsed command.
///
/// `build`, `dump`, and `sql` read the union of their files; with no files
/// they work on an empty registry. `validate` exits with the number of
/// invalid names, capped at 255.
///
/// # Errors
///
/// Returns any error raised while reading or validating input files.
pub fn execute(command: &Command) -> Result<Outcome> {
    match command {
        Command::Build(args) => {
            let registry = NamesRegistry::from_path(&args.files)?;
            Ok(Outcome::success(dumps(&registry, Format::Yaml, &Field::ALL, true, NEWLINE)))
        }
        Command::Dump(args) => {
            let registry = NamesRegistry::from_path(&args.files)?;
            Ok(Outcome::success(dumps(
                &registry,
                args.format,
                &args.fields,
                args.sort,
                NEWLINE,
            )))
        }
        Command::Scrape(args) => {
            let names = scrape_paths(&args.files)?;
            let registry = NamesRegistry::from_lines(names, ErrorPolicy::Raise)?;
            Ok(Outcome::success(dumps(&registry, Format::Text, &[Field::Names], true, NEWLINE)))
        }
        Command::Sql(args) => {
            let registry = NamesRegistry::from_path(&args.files)?;
            Ok(Outcome::success(as_sql_commands(&registry, NEWLINE)))
        }
        Command::Validate(args) => {
            let invalid = validate_paths(&args.files)?;
            let status = u8::try_from(invalid.len()).unwrap_or(u8::MAX);
            let output = invalid.into_iter().collect::<Vec<_>>().join(NEWLINE);
            Ok(Outcome { output, status })
        }
    }
}
