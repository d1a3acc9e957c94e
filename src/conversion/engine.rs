//! Core conversion engine for CSV to JSON transformation

use crate::conversion::config::{ConversionConfig, ConvertOptions};
use crate::conversion::limits;
use crate::conversion::mapper::{map_records, TableShape};
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::formatter::JsonFormatter;
use crate::parser::{parse_csv, unbalanced_quote_lines, CsvSource};
use std::time::Instant;
use tracing::{debug, warn};

/// Core conversion result
#[derive(Debug, Clone)]
pub struct JsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl JsonData {
    /// Create a new JSON data result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub shape: TableShape,
    pub processing_time_ms: u64,
    /// 1-based lines whose quotes never closed
    pub unbalanced_lines: Vec<usize>,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert CSV text to JSON
    pub fn convert(&self, csv_text: &str) -> ConversionResult<JsonData> {
        let start_time = Instant::now();

        limits::check_text_size(csv_text, &self.config)?;

        let rows = parse_csv(csv_text)?;
        let records = map_records(&rows)?;
        let shape = TableShape::of(&rows, &records);
        let content = JsonFormatter::new(self.config.pretty).format(&records)?;

        let unbalanced_lines = unbalanced_quote_lines(csv_text);
        if !unbalanced_lines.is_empty() {
            warn!(lines = ?unbalanced_lines, "unbalanced quotes; fields kept as scanned");
        }
        if shape.has_duplicate_headers() {
            warn!(
                header_width = shape.header_width,
                distinct_keys = shape.distinct_keys,
                "duplicate header names; later columns overwrite earlier ones"
            );
        }

        let metadata = ConversionMetadata {
            input_size: csv_text.len() as u64,
            output_size: content.len() as u64,
            shape,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            unbalanced_lines,
        };

        debug!(
            input_size = metadata.input_size,
            output_size = metadata.output_size,
            records = shape.record_count,
            columns = shape.header_width,
            pretty = self.config.pretty,
            "converted CSV to JSON"
        );

        Ok(JsonData::new(content, metadata))
    }

    /// Read a source into memory, enforcing the size limit before and after reading
    pub fn read_source(&self, source: &CsvSource) -> ConversionResult<String> {
        limits::check_source_size_before_read(source, &self.config)?;

        let content = source.read_content().map_err(|e| {
            let path = match source {
                CsvSource::File(path) | CsvSource::Directory(path) => Some(path.clone()),
                CsvSource::String(_) | CsvSource::Stdin => None,
            };
            ConversionError::conversion_with_source(
                ConversionErrorKind::io(e.to_string(), path),
                e.into(),
            )
        })?;

        limits::check_text_size(&content, &self.config)?;
        Ok(content)
    }

    /// Convert CSV from a source to JSON
    pub fn convert_from_source(&self, source: &CsvSource) -> ConversionResult<JsonData> {
        let content = self.read_source(source)?;
        self.convert(&content)
    }

    /// Convert CSV string to JSON
    pub fn convert_string(&self, csv_text: &str) -> ConversionResult<JsonData> {
        self.convert(csv_text)
    }
}

/// Convert CSV text with the given configuration
pub fn convert_csv_string(csv_text: &str, config: &ConversionConfig) -> ConversionResult<JsonData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_string(csv_text)
}

/// Convert CSV from source to JSON
pub fn convert_csv_from_source(
    source: &CsvSource,
    config: &ConversionConfig,
) -> ConversionResult<JsonData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_from_source(source)
}

/// Parse CSV text into JSON text.
///
/// Blank input gives [`crate::error::EmptyInputError`]; any other failure is
/// reported with the generic conversion message and no partial output.
pub fn convert(csv_text: &str, options: &ConvertOptions) -> ConversionResult<String> {
    let rows = parse_csv(csv_text)?;
    let records = map_records(&rows)?;
    JsonFormatter::new(options.prettify).format(&records)
}
