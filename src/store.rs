//! The ordered multi-section store.
//!
//! An ordinary map cannot represent "the same section name appears N
//! times, each occurrence independently addressable" — so the store keeps
//! an explicit insertion-ordered `Vec` of section records plus a derived
//! name → record-indices map for occurrence lookup. Hash iteration order is
//! never relied on: persistence order comes from source lines at
//! serialization time (see [`crate::serialize`]).
//!
//! Lines are 1-based provenance, not identity. A synthetic line counter,
//! always one past the highest line seen, numbers everything created
//! programmatically so that new sections and keys serialize after parsed
//! ones, in creation order.

use std::collections::HashMap;

use crate::handle::SectionHandle;

/// One `key = value` entry inside a section occurrence.
#[derive(Debug, Clone)]
pub struct KeyRecord {
    name: String,
    line: usize,
    value: String,
}

impl KeyRecord {
    pub(crate) const fn new(name: String, line: usize, value: String) -> Self {
        Self { name, line, value }
    }

    /// Key name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based source line, or a synthetic line for keys added after load.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Raw textual payload.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One occurrence of a `[name]` section and its keys.
///
/// Key names are unique within a record (the loader rejects duplicates;
/// programmatic writes overwrite in place). Key storage order is
/// unspecified — ordering is only guaranteed at serialization time, by
/// source line.
#[derive(Debug, Clone)]
pub struct SectionRecord {
    name: String,
    line: usize,
    keys: Vec<KeyRecord>,
}

impl SectionRecord {
    /// Section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based line of the `[name]` header, or a synthetic line for
    /// sections created programmatically.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Look up a key by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&KeyRecord> {
        self.keys.iter().find(|k| k.name == key)
    }

    /// All key records, in internal storage order.
    pub fn keys(&self) -> impl Iterator<Item = &KeyRecord> {
        self.keys.iter()
    }

    pub(crate) fn push_key(&mut self, record: KeyRecord) {
        self.keys.push(record);
    }
}

/// Insertion-ordered collection of section records, indexable by
/// (name, occurrence).
#[derive(Debug, Clone)]
pub struct Store {
    records: Vec<SectionRecord>,
    by_name: HashMap<String, Vec<usize>>,
    next_line: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty store. Synthetic line numbering starts at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_name: HashMap::new(),
            next_line: 1,
        }
    }

    /// Insert a new section record parsed from `line`.
    ///
    /// Always inserts — a record with the same name is never merged. The
    /// returned handle's occurrence is the count of prior same-named
    /// records.
    pub fn insert_section(&mut self, name: &str, line: usize) -> SectionHandle {
        let idx = self.records.len();
        let slots = self.by_name.entry(name.to_string()).or_default();
        let occurrence = slots.len();
        slots.push(idx);
        self.records.push(SectionRecord {
            name: name.to_string(),
            line,
            keys: Vec::new(),
        });
        self.observe_line(line);
        SectionHandle::with_line(name.to_string(), occurrence, line)
    }

    /// Insert a new section record with a synthetic line, placing it after
    /// every parsed section at save time.
    pub fn create_section(&mut self, name: &str) -> SectionHandle {
        self.insert_section(name, self.next_line)
    }

    /// Locate the record a handle addresses.
    ///
    /// For `k` same-named records, occurrences `0..k` resolve and
    /// occurrence `k` is `None` — the boundary is strict.
    #[must_use]
    pub fn resolve(&self, handle: &SectionHandle) -> Option<&SectionRecord> {
        self.records.get(self.index_of(handle)?)
    }

    /// Number of records sharing `name`.
    #[must_use]
    pub fn occurrences_of(&self, name: &str) -> usize {
        self.by_name.get(name).map_or(0, Vec::len)
    }

    /// Handles for every record, in insertion order (not line order).
    #[must_use]
    pub fn sections(&self) -> Vec<SectionHandle> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        self.records
            .iter()
            .map(|rec| {
                let occurrence = seen.entry(rec.name.as_str()).or_insert(0);
                let current = *occurrence;
                *occurrence += 1;
                SectionHandle::with_line(rec.name.clone(), current, rec.line)
            })
            .collect()
    }

    /// Handles for the records named `name`, occurrences `0..count` in
    /// insertion order.
    #[must_use]
    pub fn occurrence_range(&self, name: &str) -> Vec<SectionHandle> {
        self.by_name.get(name).map_or_else(Vec::new, |slots| {
            slots
                .iter()
                .enumerate()
                .filter_map(|(occurrence, &idx)| {
                    let rec = self.records.get(idx)?;
                    Some(SectionHandle::with_line(
                        rec.name.clone(),
                        occurrence,
                        rec.line,
                    ))
                })
                .collect()
        })
    }

    /// Upsert a key in the record a handle addresses.
    ///
    /// An unresolved handle is a silent no-op. An existing key keeps its
    /// source line (its position in the file does not move); a new key gets
    /// the next synthetic line so it serializes after the section's in-file
    /// keys, in write order.
    pub fn set_value(&mut self, handle: &SectionHandle, key: &str, value: impl Into<String>) {
        let Some(idx) = self.index_of(handle) else {
            return;
        };
        let line = self.next_line;
        let Some(record) = self.records.get_mut(idx) else {
            return;
        };
        if let Some(existing) = record.keys.iter_mut().find(|k| k.name == key) {
            existing.value = value.into();
        } else {
            record.push_key(KeyRecord::new(key.to_string(), line, value.into()));
            self.next_line = line + 1;
        }
    }

    /// All section records, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &SectionRecord> {
        self.records.iter()
    }

    /// Number of section records (occurrences, not distinct names).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no sections at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Loader cursor: the most recently inserted record.
    pub(crate) fn last_section_mut(&mut self) -> Option<&mut SectionRecord> {
        self.records.last_mut()
    }

    pub(crate) fn observe_line(&mut self, line: usize) {
        self.next_line = self.next_line.max(line + 1);
    }

    fn index_of(&self, handle: &SectionHandle) -> Option<usize> {
        self.by_name
            .get(handle.name())?
            .get(handle.occurrence())
            .copied()
    }
}
