//! Handlers for the `multini` subcommands.
//!
//! The library returns typed [`crate::error::IniError`] values; this layer
//! is the boundary where they become [`anyhow::Error`] with path context.

use anyhow::{Context as _, Result, bail};

use crate::cli::{GetOpts, ListOpts, SetOpts};
use crate::file::IniFile;
use crate::handle::SectionHandle;

/// Run the `list` command: print every section occurrence in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if JSON
/// rendering fails.
pub fn list(opts: &ListOpts) -> Result<()> {
    let ini = open(opts.file.as_path())?;
    let sections = ini.sections();

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for handle in sections {
        let keys = ini.keys(&handle).len();
        println!(
            "[{}] occurrence {} (line {}, {} keys)",
            handle.name(),
            handle.occurrence(),
            handle.line(),
            keys
        );
    }
    Ok(())
}

/// Run the `get` command: print one value as stored.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if the addressed
/// section occurrence does not exist, or if the key is absent and no
/// `--default` was supplied.
pub fn get(opts: &GetOpts) -> Result<()> {
    let ini = open(opts.file.as_path())?;
    let handle = SectionHandle::new(opts.section.as_str(), opts.occurrence);

    if !ini.section_exists(&handle) {
        bail!(
            "no occurrence {} of section [{}] in {}",
            opts.occurrence,
            opts.section,
            opts.file.display()
        );
    }

    if ini.key_exists(&handle, &opts.key) {
        println!("{}", ini.read(&handle, &opts.key, String::new()));
        return Ok(());
    }

    match &opts.default {
        Some(default) => {
            println!("{default}");
            Ok(())
        }
        None => bail!(
            "no key '{}' in occurrence {} of section [{}]",
            opts.key,
            opts.occurrence,
            opts.section
        ),
    }
}

/// Run the `set` command: upsert one value and save the file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or saved, or if
/// the addressed section occurrence does not exist and `--create` was not
/// given.
pub fn set(opts: &SetOpts) -> Result<()> {
    let mut ini = open(opts.file.as_path())?;
    let mut handle = SectionHandle::new(opts.section.as_str(), opts.occurrence);

    if !ini.section_exists(&handle) {
        if !opts.create {
            bail!(
                "no occurrence {} of section [{}] in {} (use --create to add one)",
                opts.occurrence,
                opts.section,
                opts.file.display()
            );
        }
        handle = ini.create_section(&opts.section);
        tracing::debug!(
            section = %opts.section,
            occurrence = handle.occurrence(),
            "created section"
        );
    }

    ini.write(&handle, &opts.key, opts.value.clone());
    ini.save()
        .with_context(|| format!("saving {}", opts.file.display()))
}

fn open(path: &std::path::Path) -> Result<IniFile> {
    IniFile::open(path).with_context(|| format!("loading {}", path.display()))
}
