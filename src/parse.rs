//! Line classification and loading.
//!
//! Parsing is line-oriented and fail-fast: the classifier decides what a
//! single physical line is, and [`parse_str`] drives it over the whole
//! input, populating a [`Store`]. Any structural failure aborts the load
//! and reports the 1-based line number; there is no partial recovery.

use crate::error::IniError;
use crate::store::{KeyRecord, Store};

/// What one physical line of INI text means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `[name]` header. The name is the slice strictly between the first
    /// `[` and the last `]`, not trimmed.
    Section(&'a str),
    /// A `key = value` assignment, split on the first `=`, both halves
    /// trimmed of space characters.
    Pair {
        /// Trimmed key text (may be empty; the loader rejects that).
        key: &'a str,
        /// Trimmed value text (may be empty; the loader rejects that).
        value: &'a str,
    },
    /// No semantic content: blank lines and free text.
    Blank,
}

/// Classify one raw line.
///
/// The bracket test takes precedence over `=`, so `[a=b]` is a section
/// header named `a=b`. Trimming removes space characters only — tabs and
/// other whitespace are part of the token.
///
/// # Examples
///
/// ```
/// use multini::parse::{LineKind, classify};
///
/// assert_eq!(classify("[ net ]"), LineKind::Section(" net "));
/// assert_eq!(classify("host = 10.0.0.1"), LineKind::Pair { key: "host", value: "10.0.0.1" });
/// assert_eq!(classify("free text"), LineKind::Blank);
/// ```
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if let (Some(open), Some(close)) = (line.find('['), line.rfind(']')) {
        let name = line.get(open + 1..close).unwrap_or("");
        return LineKind::Section(name);
    }
    if let Some((key, value)) = line.split_once('=') {
        return LineKind::Pair {
            key: trim_spaces(key),
            value: trim_spaces(value),
        };
    }
    LineKind::Blank
}

/// Load INI content into a [`Store`].
///
/// Sections become records in file order (duplicate names allowed, each a
/// distinct occurrence); key/value lines attach to the most recent section.
/// The physical line counter covers every line, including blanks, so
/// record provenance matches the file exactly.
///
/// # Examples
///
/// ```
/// use multini::parse::parse_str;
///
/// let store = parse_str("[net]\nhost = localhost\n\n[net]\nhost = fallback\n").unwrap();
/// assert_eq!(store.occurrences_of("net"), 2);
/// ```
///
/// # Errors
///
/// Returns [`IniError::EmptyField`] when a trimmed key or value is empty,
/// [`IniError::OrphanKey`] when an assignment precedes any section header,
/// and [`IniError::DuplicateKey`] when a key repeats within one section
/// occurrence — each carrying the offending 1-based line number. The checks
/// run in that order.
pub fn parse_str(content: &str) -> Result<Store, IniError> {
    let mut store = Store::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        match classify(raw) {
            LineKind::Section(name) => {
                store.insert_section(name, line);
            }
            LineKind::Pair { key, value } => {
                if key.is_empty() || value.is_empty() {
                    return Err(IniError::EmptyField { line });
                }
                let Some(section) = store.last_section_mut() else {
                    return Err(IniError::OrphanKey { line });
                };
                if section.get(key).is_some() {
                    return Err(IniError::DuplicateKey {
                        line,
                        key: key.to_string(),
                    });
                }
                section.push_key(KeyRecord::new(key.to_string(), line, value.to_string()));
                store.observe_line(line);
            }
            LineKind::Blank => {}
        }
    }

    tracing::debug!(sections = store.len(), "parsed INI content");
    Ok(store)
}

/// Trim leading/trailing space characters (not general whitespace).
fn trim_spaces(text: &str) -> &str {
    text.trim_matches(' ')
}
