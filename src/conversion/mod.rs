//! CSV to JSON conversion module
//!
//! This module contains the record mapper, the conversion engine, its
//! configuration and statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod limits;
pub mod mapper;
pub mod stats;

pub use config::{ConversionConfig, ConvertOptions};

pub use engine::{convert, convert_csv_from_source, convert_csv_string, ConversionEngine, JsonData};
pub use mapper::{map_records, Record, TableShape};

pub use crate::error::ConversionResult;
