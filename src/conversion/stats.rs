//! Statistics for conversion operations

use crate::conversion::engine::ConversionMetadata;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics for one or more conversions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Input CSV size in bytes
    pub input_size_bytes: u64,
    /// Output JSON size in bytes
    pub output_size_bytes: u64,
    /// Records emitted across all conversions
    pub record_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
    /// Throughput (bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            record_count: 0,
            processing_time_ms: 0,
            file_count: 0,
            throughput_bytes_per_sec: 0.0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single conversion
    pub fn for_conversion(
        input_size: u64,
        output_size: u64,
        record_count: usize,
        processing_time: Duration,
    ) -> Self {
        let throughput_bytes_per_sec = if processing_time.as_secs_f64() > 0.0 {
            input_size as f64 / processing_time.as_secs_f64()
        } else {
            0.0
        } as f32;

        Self {
            input_size_bytes: input_size,
            output_size_bytes: output_size,
            record_count,
            processing_time_ms: processing_time.as_millis() as u64,
            file_count: 1,
            throughput_bytes_per_sec,
            collected_at: chrono::Utc::now(),
        }
    }

    pub fn from_metadata(metadata: &ConversionMetadata) -> Self {
        Self::for_conversion(
            metadata.input_size,
            metadata.output_size,
            metadata.shape.record_count,
            Duration::from_millis(metadata.processing_time_ms),
        )
    }

    /// Combine statistics from multiple operations
    pub fn combine(&mut self, other: &Self) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.record_count += other.record_count;
        self.file_count += other.file_count;
        self.processing_time_ms += other.processing_time_ms;

        self.throughput_bytes_per_sec = if self.processing_time_ms > 0 {
            self.input_size_bytes as f32 / (self.processing_time_ms as f32 / 1000.0)
        } else {
            0.0
        };

        self.collected_at = chrono::Utc::now();
    }

    /// Output size relative to input, as a percentage
    pub fn size_ratio_percent(&self) -> f32 {
        if self.input_size_bytes == 0 {
            return 0.0;
        }
        self.output_size_bytes as f32 / self.input_size_bytes as f32 * 100.0
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Processed {} files, {} records in {:.1}s - output {:.1}% of input size",
            self.file_count,
            self.record_count,
            self.processing_time_ms as f32 / 1000.0,
            self.size_ratio_percent()
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
