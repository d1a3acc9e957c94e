//! Configuration options for CSV to JSON conversion

/// Options accepted by [`crate::convert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// 2-space indented output when true, compact otherwise
    pub prettify: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { prettify: true }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Pretty-print output (vs compact)
    pub pretty: bool,
    /// Maximum input size in bytes
    pub memory_limit: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            memory_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration for batch processing
    pub fn batch_processing() -> Self {
        Self {
            pretty: false,
            memory_limit: 512 * 1024 * 1024, // 512MB
        }
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set memory limit
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_limit < 1024 {
            return Err("Memory limit must be at least 1KB".to_string());
        }

        Ok(())
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            prettify: self.pretty,
        }
    }
}

impl From<ConvertOptions> for ConversionConfig {
    fn from(options: ConvertOptions) -> Self {
        Self::default().with_pretty(options.prettify)
    }
}
