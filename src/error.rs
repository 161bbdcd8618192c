//! Error types for INI loading, access, and persistence.
//!
//! The library returns the typed [`IniError`] everywhere; the CLI command
//! handlers convert it to [`anyhow::Error`] via the standard `?` operator.
//!
//! Parse failures are all-or-nothing: any of [`IniError::EmptyField`],
//! [`IniError::OrphanKey`], or [`IniError::DuplicateKey`] aborts the whole
//! load and carries the 1-based line number of the offending line. Accessor
//! lookups never produce these — unresolved handles and absent keys degrade
//! to defaults instead.

use thiserror::Error;

/// Everything that can go wrong opening, parsing, or saving an INI file.
#[derive(Error, Debug)]
pub enum IniError {
    /// The backing file could not be opened or read.
    #[error("cannot read INI file {path}: {source}")]
    Source {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The destination file could not be opened or written.
    #[error("cannot save INI file {path}: {source}")]
    Destination {
        /// Path of the file that could not be written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A key/value line whose trimmed key or value is empty.
    #[error("empty key or value in line {line}")]
    EmptyField {
        /// 1-based line number of the offending line.
        line: usize,
    },

    /// A key/value line that precedes any section header.
    #[error("key and value without section in line {line}")]
    OrphanKey {
        /// 1-based line number of the offending line.
        line: usize,
    },

    /// The same key appeared twice within one section occurrence.
    #[error("duplicate key '{key}' in line {line}")]
    DuplicateKey {
        /// 1-based line number of the offending line.
        line: usize,
        /// Name of the repeated key.
        key: String,
    },
}

impl IniError {
    /// The 1-based source line for parse failures, `None` for I/O failures.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::EmptyField { line } | Self::OrphanKey { line } | Self::DuplicateKey { line, .. } => {
                Some(*line)
            }
            Self::Source { .. } | Self::Destination { .. } => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn empty_field_display() {
        let e = IniError::EmptyField { line: 7 };
        assert_eq!(e.to_string(), "empty key or value in line 7");
    }

    #[test]
    fn orphan_key_display() {
        let e = IniError::OrphanKey { line: 1 };
        assert_eq!(e.to_string(), "key and value without section in line 1");
    }

    #[test]
    fn duplicate_key_display() {
        let e = IniError::DuplicateKey {
            line: 3,
            key: "timeout".to_string(),
        };
        assert_eq!(e.to_string(), "duplicate key 'timeout' in line 3");
    }

    #[test]
    fn source_display_names_path() {
        let e = IniError::Source {
            path: "/etc/app.ini".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("/etc/app.ini"));
        assert!(e.to_string().contains("cannot read"));
    }

    #[test]
    fn destination_has_source() {
        use std::error::Error as StdError;
        let e = IniError::Destination {
            path: "out.ini".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn line_accessor() {
        assert_eq!(IniError::EmptyField { line: 4 }.line(), Some(4));
        assert_eq!(
            IniError::DuplicateKey {
                line: 9,
                key: "k".to_string()
            }
            .line(),
            Some(9)
        );
        let io_err = IniError::Source {
            path: "a.ini".to_string(),
            source: io::Error::other("boom"),
        };
        assert_eq!(io_err.line(), None);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn error_is_send_sync() {
        assert_send_sync::<IniError>();
    }

    #[test]
    fn converts_to_anyhow() {
        let e = IniError::OrphanKey { line: 2 };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
