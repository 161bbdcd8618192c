//! Rendering a store back into INI text.
//!
//! Output order is derived from source lines, not storage order: sections
//! sort by header line ascending, keys within a section by their own line
//! ascending, both with a stable sort so synthetic records keep creation
//! order. Spacing is normalized to `key = value` and every section is
//! followed by one blank separator line.

use std::fmt;

use crate::store::{KeyRecord, SectionRecord, Store};

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut records: Vec<&SectionRecord> = self.records().collect();
        records.sort_by_key(|record| record.line());

        for record in records {
            writeln!(f, "[{}]", record.name())?;
            let mut keys: Vec<&KeyRecord> = record.keys().collect();
            keys.sort_by_key(|key| key.line());
            for key in keys {
                writeln!(f, "{} = {}", key.name(), key.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
