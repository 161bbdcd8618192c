//! Order-preserving INI files with duplicate section support.
//!
//! Most INI libraries fold same-named sections into one map entry. This
//! crate keeps every `[name]` occurrence as its own record, addressable by
//! a [`handle::SectionHandle`] (name + 0-based occurrence index), and
//! remembers the source line of every section header and key so that
//! [`file::IniFile::save`] reproduces the file's original top-to-bottom
//! order.
//!
//! The public API is organised in layers:
//!
//! - **[`parse`]** — classify raw lines and load them into a store
//! - **[`store`]** — the ordered multi-section data structure
//! - **[`value`]** — typed conversion between INI text and Rust scalars
//! - **[`file`]** — the `IniFile` facade: open, typed read/write, save
//! - **[`cli`]** / **[`commands`]** — the `multini` command-line tool
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod file;
pub mod handle;
pub mod parse;
pub mod serialize;
pub mod store;
pub mod value;
