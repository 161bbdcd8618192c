//! Entry point for the `multini` binary.

use anyhow::Result;
use clap::Parser;

use multini::cli::{Cli, Command};
use multini::commands;

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::List(opts) => commands::list(&opts),
        Command::Get(opts) => commands::get(&opts),
        Command::Set(opts) => commands::set(&opts),
    }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
