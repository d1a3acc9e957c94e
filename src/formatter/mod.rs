//! JSON output formatting
//!
//! Escaping is left to `serde_json`; this module only chooses between the
//! compact and the 2-space indented writer.

use crate::conversion::mapper::Record;
use crate::error::{ConversionError, ConversionResult};

/// Writes mapped records as a JSON array of objects
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format(&self, records: &[Record]) -> ConversionResult<String> {
        let result = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        };

        result.map_err(ConversionError::serialization)
    }
}

/// Serialize records with the chosen layout
pub fn format_records(records: &[Record], pretty: bool) -> ConversionResult<String> {
    JsonFormatter::new(pretty).format(records)
}
