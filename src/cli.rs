//! Command-line surface of the `multini` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "multini",
    about = "Inspect and edit order-preserving INI files",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every section occurrence in a file
    List(ListOpts),
    /// Print one value
    Get(GetOpts),
    /// Set one value and save the file
    Set(SetOpts),
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// INI file to read
    pub file: PathBuf,

    /// Emit section handles as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for the `get` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GetOpts {
    /// INI file to read
    pub file: PathBuf,

    /// Section name
    pub section: String,

    /// Key name
    pub key: String,

    /// Which occurrence of the section to address (0 = first)
    #[arg(short, long, default_value_t = 0)]
    pub occurrence: usize,

    /// Value to print when the key is absent
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Options for the `set` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SetOpts {
    /// INI file to edit
    pub file: PathBuf,

    /// Section name
    pub section: String,

    /// Key name
    pub key: String,

    /// Value to store
    pub value: String,

    /// Which occurrence of the section to address (0 = first)
    #[arg(short, long, default_value_t = 0)]
    pub occurrence: usize,

    /// Create a new section occurrence when the addressed one is missing
    #[arg(long)]
    pub create: bool,
}
