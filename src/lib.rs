//! CSV to JSON Converter
//!
//! Parses comma-separated text into header-keyed records and serializes them
//! as a JSON array of objects. Every value is a JSON string.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{convert, ConversionConfig, ConvertOptions, JsonData, Record};
pub use error::{ConversionError, ConversionErrorKind, EmptyInputError};
pub use formatter::JsonFormatter;
pub use parser::CsvSource;

/// Convert CSV text to pretty-printed JSON
pub fn convert_csv(csv_text: &str) -> Result<String, ConversionError> {
    convert(csv_text, &ConvertOptions::default())
}

/// Convert CSV text to JSON with custom configuration
pub fn convert_csv_with_config(
    csv_text: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = conversion::convert_csv_string(csv_text, config)?;
    Ok(result.content)
}
