//! Command-line interface module

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};

pub mod path_mapping;

/// Sample document printed by `csvjson sample`
pub const SAMPLE_CSV: &str = "name,email,age,city
John Doe,john@example.com,30,New York
Jane Smith,jane@example.com,25,Los Angeles
Bob Johnson,bob@example.com,35,Chicago";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csvjson")]
#[command(about = "Convert CSV text to a JSON array of objects")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input CSV source (inline text, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output file or directory path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read CSV from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Emit compact JSON instead of 2-space indented output
    #[arg(long)]
    pub plain: bool,

    /// Maximum input size (e.g., 500KB, 10MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Only parse the CSV and report its shape, don't emit JSON
    #[arg(long)]
    pub validate_only: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a sample CSV document
    Sample {
        /// Print the sample converted to JSON instead
        #[arg(long)]
        convert: bool,
    },
}

/// Where the positional input points
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    Text(String),
    File(PathBuf),
    Directory(PathBuf),
}

impl InputKind {
    /// Resolve the positional input. Existing paths win; otherwise text
    /// holding a delimiter or line break is taken as inline CSV.
    pub fn resolve(input: &str) -> ConversionResult<Self> {
        let path = PathBuf::from(input);
        if path.is_file() {
            Ok(Self::File(path))
        } else if path.is_dir() {
            Ok(Self::Directory(path))
        } else if input.contains(',') || input.contains('\n') {
            Ok(Self::Text(input.to_string()))
        } else {
            Err(ConversionError::conversion(ConversionErrorKind::io(
                "Input path does not exist".to_string(),
                Some(path),
            )))
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let config = ConversionConfig::default()
            .with_pretty(!args.plain)
            .with_memory_limit(parse_memory_limit(&args.memory_limit)?);

        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if only validation is requested
    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }

    /// Default log filter for this invocation
    pub fn log_level(&self) -> &'static str {
        if self.args.verbose {
            "debug"
        } else if self.args.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        if self.args.stdin {
            "standard input".to_string()
        } else if let Some(input) = &self.args.input {
            format!("'{}'", input)
        } else {
            "no input specified".to_string()
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
pub fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<usize> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid = || {
        ConversionError::conversion(ConversionErrorKind::Configuration {
            message: format!("Invalid memory limit: {}", limit_str),
        })
    };

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        return size.trim().parse::<usize>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<usize>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        if let Ok(style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ConversionError::EmptyInput(_) => {
            eprintln!("\nTip: Run 'csvjson sample' to see the expected input layout");
        }
        ConversionError::Conversion {
            kind: ConversionErrorKind::InputTooLarge { .. },
            ..
        } => {
            eprintln!("\nTip: Use --memory-limit to increase the allowed input size");
        }
        _ => {}
    }

    eprintln!("\nTry 'csvjson --help' for usage information.");
}
