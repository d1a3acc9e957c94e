//! Header-keyed record mapping
//!
//! Line 0 is the header. Every later line becomes one record whose keys follow
//! header order. Short rows are padded with empty strings, long rows are cut
//! at the header width, and a repeated header keeps its first position while
//! the last value wins.

use crate::error::{EmptyInputError, ParseResult};
use serde_json::{Map, Value};

/// One data line keyed by the header row
pub type Record = Map<String, Value>;

/// Map tokenized lines into records
pub fn map_records(rows: &[Vec<String>]) -> ParseResult<Vec<Record>> {
    let (header, data) = rows.split_first().ok_or(EmptyInputError::NoLines)?;

    Ok(data.iter().map(|row| map_row(header, row)).collect())
}

fn map_row(header: &[String], row: &[String]) -> Record {
    let mut record = Record::new();
    for (index, key) in header.iter().enumerate() {
        let value = row.get(index).cloned().unwrap_or_default();
        record.insert(key.clone(), Value::String(value));
    }
    record
}

/// Shape of a mapped document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableShape {
    /// Number of records (data lines)
    pub record_count: usize,
    /// Number of header fields
    pub header_width: usize,
    /// Keys left after duplicate headers collapse
    pub distinct_keys: usize,
}

impl TableShape {
    pub fn of(rows: &[Vec<String>], records: &[Record]) -> Self {
        let header_width = rows.first().map_or(0, Vec::len);
        let distinct_keys = records
            .first()
            .map(Map::len)
            .unwrap_or_else(|| distinct_header_count(rows));

        Self {
            record_count: records.len(),
            header_width,
            distinct_keys,
        }
    }

    /// True when some header names repeat
    pub fn has_duplicate_headers(&self) -> bool {
        self.distinct_keys < self.header_width
    }
}

fn distinct_header_count(rows: &[Vec<String>]) -> usize {
    rows.first()
        .map(|header| {
            let mut seen = std::collections::HashSet::new();
            header.iter().filter(|key| seen.insert(key.as_str())).count()
        })
        .unwrap_or(0)
}
