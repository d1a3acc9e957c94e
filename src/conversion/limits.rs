use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::CsvSource;

fn too_large(size: u64, config: &ConversionConfig) -> ConversionError {
    ConversionError::conversion(ConversionErrorKind::InputTooLarge {
        size: size as usize,
        limit: config.memory_limit,
    })
}

/// Check the source size before attempting to read it.
/// This avoids loading very large files into memory if the user-configured
/// limit is smaller than the file.
pub fn check_source_size_before_read(
    source: &CsvSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    match source.source_type().estimated_size() {
        Some(size) if size > config.memory_limit as u64 => Err(too_large(size, config)),
        _ => Ok(()),
    }
}

/// Check text already in memory (stdin, inline strings) against the limit
pub fn check_text_size(text: &str, config: &ConversionConfig) -> ConversionResult<()> {
    let size = text.len() as u64;
    if size > config.memory_limit as u64 {
        return Err(too_large(size, config));
    }
    Ok(())
}
