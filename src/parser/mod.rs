//! CSV input sources and line parsing

pub mod directory;
pub mod filter;
pub mod tokenizer;

use crate::error::{EmptyInputError, ParseResult};
use std::io::Read;
use std::path::PathBuf;

pub use tokenizer::{tokenize_line, trim_field, LineTokenizer, ScanState};

/// Types of CSV input sources
#[derive(Debug, Clone, PartialEq)]
pub enum CsvSourceType {
    /// Raw CSV text
    String(String),
    /// Single CSV file path
    File(PathBuf),
    /// Directory containing CSV files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl CsvSourceType {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSourceType::String(_) => "string input".to_string(),
            CsvSourceType::File(path) => format!("file: {}", path.display()),
            CsvSourceType::Directory(path) => format!("directory: {}", path.display()),
            CsvSourceType::Stdin => "standard input".to_string(),
        }
    }

    /// Get the size of the source in bytes (if known before reading)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            CsvSourceType::String(s) => Some(s.len() as u64),
            CsvSourceType::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            CsvSourceType::Directory(_) | CsvSourceType::Stdin => None,
        }
    }
}

/// Source for conversion operations
#[derive(Debug, Clone)]
pub enum CsvSource {
    String(String),
    File(PathBuf),
    Directory(PathBuf),
    Stdin,
}

impl CsvSource {
    /// Get the source type
    pub fn source_type(&self) -> CsvSourceType {
        match self {
            CsvSource::String(s) => CsvSourceType::String(s.clone()),
            CsvSource::File(p) => CsvSourceType::File(p.clone()),
            CsvSource::Directory(p) => CsvSourceType::Directory(p.clone()),
            CsvSource::Stdin => CsvSourceType::Stdin,
        }
    }

    /// Read the raw CSV text
    pub fn read_content(&self) -> Result<String, std::io::Error> {
        match self {
            CsvSource::String(content) => Ok(content.clone()),
            CsvSource::File(path) => std::fs::read_to_string(path),
            CsvSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            CsvSource::Directory(_) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Cannot read directory as a single CSV document",
            )),
        }
    }
}

/// Split raw input into physical lines.
///
/// The whole input is trimmed first, then split on `\n` only. Blank input
/// still yields one empty line; callers check for blank input beforehand.
pub fn split_lines(raw: &str) -> Vec<&str> {
    trim_field(raw).split('\n').collect()
}

/// Tokenize every line of raw CSV text
pub fn parse_csv(raw: &str) -> ParseResult<Vec<Vec<String>>> {
    if trim_field(raw).is_empty() {
        return Err(EmptyInputError::BlankInput);
    }

    Ok(split_lines(raw).into_iter().map(tokenize_line).collect())
}

/// Line numbers (1-based) whose quotes are unbalanced
pub fn unbalanced_quote_lines(raw: &str) -> Vec<usize> {
    split_lines(raw)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| LineTokenizer::final_state(line) == ScanState::InQuotes)
        .map(|(index, _)| index + 1)
        .collect()
}
