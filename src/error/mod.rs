//! Error types and handling infrastructure for CSV to JSON conversion

use anyhow::Error;
use std::path::PathBuf;

/// Message shown for any failure past the empty-input checks
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to convert CSV. Please check your input format.";

/// Raised when there is nothing to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmptyInputError {
    /// The raw input is empty or whitespace-only
    #[error("Please enter CSV data")]
    BlankInput,

    /// Tokenization produced zero lines
    #[error("No data found in CSV")]
    NoLines,
}

/// Failure kinds past the empty-input checks
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("JSON serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("CSV input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    pub fn serialization(error: serde_json::Error) -> Self {
        Self::conversion_with_source(
            ConversionErrorKind::serialization(error.to_string()),
            error.into(),
        )
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// True for the blank-input and no-lines cases
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput(_))
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput(err) => err.to_string(),
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::Io { message, path } => match path {
                    Some(path) => format!("Cannot read {}: {}", path.display(), message),
                    None => format!("IO error: {}", message),
                },
                ConversionErrorKind::InputTooLarge { size, limit } => {
                    format!("CSV input too large: {} bytes (limit: {} bytes)", size, limit)
                }
                ConversionErrorKind::Configuration { message } => {
                    format!("Invalid configuration: {}", message)
                }
                ConversionErrorKind::Serialization { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            },
            Self::Other(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, EmptyInputError>;
