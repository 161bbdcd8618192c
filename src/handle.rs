//! Section handles: how callers address one occurrence of a section.

use serde::Serialize;

/// Address of one section occurrence within an INI file.
///
/// Section names are not unique, so a name alone is ambiguous; the
/// `occurrence` field is the 0-based rank of the target among all sections
/// sharing that name, in file order. The `line` field records where the
/// header was seen (1-based) and is provenance for diagnostics only — it
/// plays no part in lookup.
///
/// # Examples
///
/// ```
/// use multini::handle::SectionHandle;
///
/// let second_peer = SectionHandle::new("peer", 1);
/// assert_eq!(second_peer.name(), "peer");
/// assert_eq!(second_peer.occurrence(), 1);
/// assert_eq!(second_peer.line(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SectionHandle {
    name: String,
    occurrence: usize,
    line: usize,
}

impl SectionHandle {
    /// Handle for the `occurrence`-th section named `name`.
    ///
    /// The source line is unknown for caller-built handles and is left at 0.
    #[must_use]
    pub fn new(name: impl Into<String>, occurrence: usize) -> Self {
        Self {
            name: name.into(),
            occurrence,
            line: 0,
        }
    }

    /// Handle for the first section named `name`.
    #[must_use]
    pub fn first(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    /// Handle with known provenance, produced by the store.
    pub(crate) const fn with_line(name: String, occurrence: usize, line: usize) -> Self {
        Self {
            name,
            occurrence,
            line,
        }
    }

    /// Section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 0-based rank among sections sharing this name.
    #[must_use]
    pub const fn occurrence(&self) -> usize {
        self.occurrence
    }

    /// 1-based line of the section header, or 0 when unknown.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}
