//! stdnames CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stdnames_runtime::cli::{Cli, execute};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match execute(&cli.command) {
        Ok(outcome) => {
            if !outcome.output.is_empty() {
                println!("{}", outcome.output);
            }
            ExitCode::from(outcome.status)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            for name in e.bad_names() {
                eprintln!("  {name}");
            }
            ExitCode::FAILURE
        }
    }
}
