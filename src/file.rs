//! The `IniFile` facade: open, typed access, save.
//!
//! Loading and saving are blocking whole-file operations against a single
//! path; nothing here is designed for concurrent use. Saving renders the
//! complete output in memory first and writes once, so a failed save never
//! leaves a partially written file behind.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IniError;
use crate::handle::SectionHandle;
use crate::parse;
use crate::store::Store;
use crate::value::IniValue;

/// An INI file held in memory, bound to the path it loads from and saves to.
///
/// Reads never fail loudly: unresolved handles and absent keys degrade to
/// the caller-supplied default, so callers can probe optimistically.
/// Writes to an unresolved handle are silent no-ops — check
/// [`IniFile::section_exists`] first when failure feedback matters.
///
/// # Examples
///
/// ```
/// use multini::file::IniFile;
/// use multini::handle::SectionHandle;
///
/// let ini = IniFile::parse("app.ini", "[net]\nport = 8080\n").unwrap();
/// let net = SectionHandle::first("net");
/// assert_eq!(ini.read(&net, "port", 0_u16), 8080);
/// assert_eq!(ini.read(&net, "missing", 42_i64), 42);
/// ```
#[derive(Debug, Clone)]
pub struct IniFile {
    path: PathBuf,
    store: Store,
}

impl IniFile {
    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Source`] when the file cannot be read, or any of
    /// the structural parse failures from [`parse::parse_str`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, IniError> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| IniError::Source {
            path: path.display().to_string(),
            source,
        })?;
        let store = parse::parse_str(&content)?;
        tracing::debug!(path = %path.display(), sections = store.len(), "opened INI file");
        Ok(Self { path, store })
    }

    /// Parse in-memory content, bound to `path` for a later save.
    ///
    /// # Errors
    ///
    /// Returns the structural parse failures from [`parse::parse_str`].
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, IniError> {
        Ok(Self {
            path: path.into(),
            store: parse::parse_str(content)?,
        })
    }

    /// An empty file bound to `path`, for programmatic construction.
    #[must_use]
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: Store::new(),
        }
    }

    /// Path this file loads from and saves to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render and persist the current state to the backing path.
    ///
    /// The full output is built in memory and written in one call, so
    /// failure leaves no partial file.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Destination`] when the path cannot be written.
    pub fn save(&self) -> Result<(), IniError> {
        fs::write(&self.path, self.store.to_string()).map_err(|source| IniError::Destination {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "saved INI file");
        Ok(())
    }

    /// Read a typed value, falling back to `default`.
    ///
    /// The default is returned when the handle does not resolve, the key is
    /// absent, or the stored text does not parse as `T`. Booleans never hit
    /// the parse-failure path: unrecognized text reads as `false`.
    pub fn read<T: IniValue>(&self, section: &SectionHandle, key: &str, default: T) -> T {
        self.store
            .resolve(section)
            .and_then(|record| record.get(key))
            .and_then(|record| T::from_ini(record.value()))
            .unwrap_or(default)
    }

    /// Upsert a key in the addressed section with the rendering of `value`.
    ///
    /// A handle that does not resolve is a silent no-op; the section is not
    /// created. A key that did not exist before is placed after the
    /// section's in-file keys at the next save, in write order.
    pub fn write<T: IniValue>(&mut self, section: &SectionHandle, key: &str, value: T) {
        self.store.set_value(section, key, value.to_ini());
    }

    /// Add a new section occurrence named `name`.
    ///
    /// Always creates a new record, even when `name` already exists; the
    /// returned handle carries the correct occurrence index. Created
    /// sections serialize after all parsed ones, in creation order.
    pub fn create_section(&mut self, name: &str) -> SectionHandle {
        self.store.create_section(name)
    }

    /// Whether the handle resolves to a section record.
    #[must_use]
    pub fn section_exists(&self, section: &SectionHandle) -> bool {
        self.store.resolve(section).is_some()
    }

    /// Whether the addressed section exists and holds `key`.
    #[must_use]
    pub fn key_exists(&self, section: &SectionHandle, key: &str) -> bool {
        self.store
            .resolve(section)
            .is_some_and(|record| record.get(key).is_some())
    }

    /// Handles for every section occurrence, in insertion order.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionHandle> {
        self.store.sections()
    }

    /// Handles for the occurrences of `name`, in insertion order.
    #[must_use]
    pub fn occurrence_range(&self, name: &str) -> Vec<SectionHandle> {
        self.store.occurrence_range(name)
    }

    /// Number of section occurrences named `name`.
    #[must_use]
    pub fn occurrences_of(&self, name: &str) -> usize {
        self.store.occurrences_of(name)
    }

    /// Key names of the addressed section, in internal storage order.
    ///
    /// Empty when the handle does not resolve.
    #[must_use]
    pub fn keys(&self, section: &SectionHandle) -> Vec<String> {
        self.store.resolve(section).map_or_else(Vec::new, |record| {
            record.keys().map(|key| key.name().to_string()).collect()
        })
    }

    /// Source line of `key` in the addressed section.
    #[must_use]
    pub fn line_of(&self, section: &SectionHandle, key: &str) -> Option<usize> {
        self.store
            .resolve(section)?
            .get(key)
            .map(crate::store::KeyRecord::line)
    }
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.store, f)
    }
}
