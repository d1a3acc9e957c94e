use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use csvjson::cli::path_mapping::map_input_to_output;
use csvjson::cli::{self, Args, CliConfig, CliUtils, Commands, InputKind, SAMPLE_CSV};
use csvjson::conversion::stats::ConversionStatistics;
use csvjson::conversion::{map_records, ConversionEngine, JsonData, TableShape};
use csvjson::error::ConversionError;
use csvjson::parser::directory::find_csv_files;
use csvjson::parser::{parse_csv, unbalanced_quote_lines, CsvSource};

fn main() -> ExitCode {
    let args = Args::parse();

    let cli = match CliConfig::from_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            cli::handle_error(&e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&cli);
    debug!(
        input = %cli.input_description(),
        output = %cli.output_description(),
        "starting"
    );

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ConversionError>() {
                Some(conversion_error) => cli::handle_error(conversion_error),
                None => CliUtils::show_error(&format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &CliConfig) {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &CliConfig) -> Result<()> {
    if let Some(Commands::Sample { convert }) = &cli.args.command {
        return handle_sample(*convert, cli);
    }

    if cli.is_validate_only() {
        handle_validation(cli)
    } else {
        handle_conversion(cli)
    }
}

fn handle_sample(convert: bool, cli: &CliConfig) -> Result<()> {
    if convert {
        let engine = ConversionEngine::new(cli.conversion_config.clone());
        let json = engine.convert(SAMPLE_CSV)?;
        println!("{}", json.content);
    } else {
        println!("{}", SAMPLE_CSV);
    }
    Ok(())
}

fn resolve_input(cli: &CliConfig) -> Result<InputKind> {
    if cli.args.stdin {
        return Ok(InputKind::Text(read_stdin()?));
    }

    let input = cli
        .args
        .input
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("No input provided. Use --stdin or provide an input path"))?;

    Ok(InputKind::resolve(input)?)
}

fn handle_validation(cli: &CliConfig) -> Result<()> {
    let engine = ConversionEngine::new(cli.conversion_config.clone());

    match resolve_input(cli)? {
        InputKind::Text(text) => {
            let text = engine.read_source(&CsvSource::String(text))?;
            validate_text(&text, "input", cli.is_quiet())
        }
        InputKind::File(path) => {
            let label = path.display().to_string();
            let text = engine.read_source(&CsvSource::File(path))?;
            validate_text(&text, &label, cli.is_quiet())
        }
        InputKind::Directory(dir) => validate_directory(&engine, &dir, cli),
    }
}

fn validate_text(text: &str, label: &str, quiet: bool) -> Result<()> {
    let rows = parse_csv(text).map_err(ConversionError::from)?;
    let records = map_records(&rows).map_err(ConversionError::from)?;
    let shape = TableShape::of(&rows, &records);

    for line in unbalanced_quote_lines(text) {
        CliUtils::show_warning(&format!("{}: unbalanced quotes on line {}", label, line), quiet);
    }
    if shape.has_duplicate_headers() {
        CliUtils::show_warning(
            &format!(
                "{}: {} header fields but only {} distinct keys",
                label, shape.header_width, shape.distinct_keys
            ),
            quiet,
        );
    }

    CliUtils::show_success(
        &format!(
            "Valid CSV ({}): {} records, {} columns",
            label, shape.record_count, shape.header_width
        ),
        quiet,
    );
    Ok(())
}

fn validate_directory(engine: &ConversionEngine, dir: &Path, cli: &CliConfig) -> Result<()> {
    let csv_files = find_csv_files(dir, cli.args.recursive)
        .with_context(|| format!("Failed finding CSV files in {}", dir.display()))?;

    let mut failures = 0usize;
    for csv_file in csv_files {
        let relative = csv_file.strip_prefix(dir).unwrap_or(&csv_file).display().to_string();
        let result = engine
            .read_source(&CsvSource::File(csv_file.clone()))
            .map_err(anyhow::Error::from)
            .and_then(|text| validate_text(&text, &relative, cli.is_quiet()));
        if let Err(e) = result {
            failures += 1;
            CliUtils::show_error(&format!("{}: {}", relative, describe(&e)));
        }
    }

    if failures > 0 {
        anyhow::bail!("{} file(s) failed validation", failures);
    }
    Ok(())
}

fn handle_conversion(cli: &CliConfig) -> Result<()> {
    let engine = ConversionEngine::new(cli.conversion_config.clone());

    match resolve_input(cli)? {
        InputKind::Text(text) => {
            let json = engine.convert(&text)?;
            emit(&json, cli)
        }
        InputKind::File(path) => {
            let json = engine.convert_from_source(&CsvSource::File(path))?;
            emit(&json, cli)
        }
        InputKind::Directory(dir) => convert_directory(&engine, &dir, cli),
    }
}

fn emit(json: &JsonData, cli: &CliConfig) -> Result<()> {
    if let Some(output_path) = &cli.args.output {
        write_output(output_path, &json.content)?;
        CliUtils::show_success(
            &format!(
                "Converted to: {} ({})",
                output_path.display(),
                CliUtils::format_file_size(json.metadata.output_size)
            ),
            cli.is_quiet(),
        );
    } else {
        println!("{}", json.content);
    }

    if cli.want_stats() {
        output_statistics(&ConversionStatistics::from_metadata(&json.metadata), cli.is_quiet());
    }

    Ok(())
}

fn convert_directory(engine: &ConversionEngine, input_dir: &Path, cli: &CliConfig) -> Result<()> {
    let output_dir = cli
        .args
        .output
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Output directory required for directory conversion"))?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let csv_files = find_csv_files(input_dir, cli.args.recursive)
        .with_context(|| format!("Failed finding CSV files in {}", input_dir.display()))?;

    if csv_files.is_empty() {
        CliUtils::show_warning(
            &format!("No CSV files found in {}", input_dir.display()),
            cli.is_quiet(),
        );
        return Ok(());
    }

    info!(count = csv_files.len(), dir = %input_dir.display(), "converting directory");

    let progress = (!cli.is_quiet()).then(|| CliUtils::create_progress_bar(csv_files.len() as u64));
    let mut totals = ConversionStatistics::new();
    let mut failures = 0usize;

    for csv_file in &csv_files {
        let relative = csv_file.strip_prefix(input_dir).unwrap_or(csv_file);
        let output_file = map_input_to_output(input_dir, csv_file, output_dir);

        let result = engine
            .convert_from_source(&CsvSource::File(csv_file.clone()))
            .map_err(anyhow::Error::from)
            .and_then(|json| write_output(&output_file, &json.content).map(|_| json));

        match result {
            Ok(json) => {
                totals.combine(&ConversionStatistics::from_metadata(&json.metadata));
                if let Some(pb) = &progress {
                    pb.set_message(relative.display().to_string());
                }
            }
            Err(e) => {
                failures += 1;
                warn!(file = %relative.display(), "conversion failed");
                let message = format!("{}: {}", relative.display(), describe(&e));
                match &progress {
                    Some(pb) => pb.suspend(|| CliUtils::show_error(&message)),
                    None => CliUtils::show_error(&message),
                }
                if !cli.continue_on_error() {
                    if let Some(pb) = &progress {
                        pb.abandon();
                    }
                    return Err(e.context(format!("Aborting at {}", relative.display())));
                }
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_with_message("done");
    }

    CliUtils::show_success(
        &format!(
            "{} of {} files converted into {}",
            csv_files.len() - failures,
            csv_files.len(),
            output_dir.display()
        ),
        cli.is_quiet(),
    );

    if cli.want_stats() {
        output_statistics(&totals, cli.is_quiet());
    }

    Ok(())
}

fn describe(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ConversionError>() {
        Some(conversion_error) => conversion_error.user_message(),
        None => format!("{:#}", error),
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let source = CsvSource::Stdin;
    source.read_content().context("Failed to read standard input")
}

fn output_statistics(stats: &ConversionStatistics, quiet: bool) {
    if quiet {
        return;
    }

    eprintln!("\nConversion Statistics:");
    eprintln!("Input size: {}", CliUtils::format_file_size(stats.input_size_bytes));
    eprintln!("Output size: {}", CliUtils::format_file_size(stats.output_size_bytes));
    eprintln!("Records: {}", stats.record_count);
    eprintln!(
        "Processing time: {}",
        CliUtils::format_duration(std::time::Duration::from_millis(stats.processing_time_ms))
    );
    eprintln!("{}", stats.summary());
}
